use crate::html::{Attributes, HtmlNode};

/// A typed inline fragment of block text.
///
/// A tokenized sequence covers its source exactly: concatenating the textual
/// content of every node, ignoring markers, reproduces the rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text outside any construct.
    Text(String),
    /// Text between `**` delimiters.
    Bold(String),
    /// Text between `_` delimiters.
    Italic(String),
    /// Text between backticks.
    Code(String),
    /// `![alt](src)`
    Image { alt: String, src: String },
    /// `[label](href)`
    Link { label: String, href: String },
}

impl InlineNode {
    pub fn text(s: impl Into<String>) -> Self {
        InlineNode::Text(s.into())
    }

    /// Converts the fragment into its HTML leaf.
    pub fn to_html_node(&self) -> HtmlNode {
        match self {
            InlineNode::Text(s) => HtmlNode::text(s.as_str()),
            InlineNode::Bold(s) => HtmlNode::leaf("b", s.as_str()),
            InlineNode::Italic(s) => HtmlNode::leaf("i", s.as_str()),
            InlineNode::Code(s) => HtmlNode::leaf("code", s.as_str()),
            InlineNode::Link { label, href } => HtmlNode::leaf_with_attributes(
                "a",
                label.as_str(),
                Attributes::new().with("href", href.as_str()),
            ),
            InlineNode::Image { alt, src } => HtmlNode::leaf_with_attributes(
                "img",
                "",
                Attributes::new()
                    .with("src", src.as_str())
                    .with("alt", alt.as_str()),
            ),
        }
    }
}

impl From<InlineNode> for HtmlNode {
    fn from(node: InlineNode) -> Self {
        node.to_html_node()
    }
}
