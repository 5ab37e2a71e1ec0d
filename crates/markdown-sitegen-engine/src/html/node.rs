use crate::error::RenderError;

use super::attributes::Attributes;

/// An HTML element in the output tree.
///
/// Fields are optional so that callers can build nodes incrementally; the
/// required ones are checked when the tree is rendered, not when it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A terminal element carrying literal text. `value` is required.
    ///
    /// With no `tag` the value is emitted as bare text.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Option<Attributes>,
    },
    /// A branching element owning an ordered list of children.
    ///
    /// `tag` and `children` are required; `children` may be empty.
    Parent {
        tag: Option<String>,
        children: Option<Vec<HtmlNode>>,
        attributes: Option<Attributes>,
    },
}

impl HtmlNode {
    /// Untagged leaf: renders as its value verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: None,
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: None,
        }
    }

    pub fn leaf_with_attributes(
        tag: impl Into<String>,
        value: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Some(attributes),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: None,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    /// Direct children of a parent node; empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Parent {
                children: Some(children),
                ..
            } => children,
            _ => &[],
        }
    }

    /// Serializes this node and its subtree depth-first.
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => {
                let value = value.as_deref().ok_or(RenderError::MissingValue)?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(out, tag, attributes.as_ref());
                        out.push_str(value);
                        close_tag(out, tag);
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                let tag = tag.as_deref().ok_or(RenderError::MissingTag)?;
                let children = children
                    .as_deref()
                    .ok_or_else(|| RenderError::MissingChildren {
                        tag: tag.to_string(),
                    })?;
                open_tag(out, tag, attributes.as_ref());
                for child in children {
                    child.render_into(out)?;
                }
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: Option<&Attributes>) {
    out.push('<');
    out.push_str(tag);
    if let Some(attrs) = attributes {
        attrs.write_html(out);
    }
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
