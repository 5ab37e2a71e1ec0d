use crate::error::ConvertError;

use super::{
    kinds::{Emphasis, Image, Link, Reference},
    types::InlineNode,
};

/// Tokenizes block text into a sequence of [`InlineNode`]s.
///
/// Passes run in a fixed order: images, links, then the [`Emphasis::PASSES`]
/// delimiters. Each pass only looks inside `Text` nodes left by the previous
/// one, so styles never nest.
///
/// # Errors
/// [`ConvertError::MalformedInline`] if any delimiter is left unclosed.
pub fn text_to_spans(text: &str) -> Result<Vec<InlineNode>, ConvertError> {
    let nodes = vec![InlineNode::text(text)];
    let nodes = split_nodes_image(nodes);
    let nodes = split_nodes_link(nodes);
    Emphasis::PASSES
        .into_iter()
        .try_fold(nodes, split_nodes_delimiter)
}

/// Splits every `Text` node on `![alt](src)` references.
pub fn split_nodes_image(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    split_nodes_references(nodes, Image::find, |r| InlineNode::Image {
        alt: r.text.to_string(),
        src: r.target.to_string(),
    })
}

/// Splits every `Text` node on `[label](href)` references.
pub fn split_nodes_link(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    split_nodes_references(nodes, Link::find, |r| InlineNode::Link {
        label: r.text.to_string(),
        href: r.target.to_string(),
    })
}

fn split_nodes_references(
    nodes: Vec<InlineNode>,
    find: fn(&str) -> Option<Reference<'_>>,
    make: fn(&Reference<'_>) -> InlineNode,
) -> Vec<InlineNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        let text = match node {
            InlineNode::Text(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut rest = text.as_str();
        while let Some(found) = find(rest) {
            let before = &rest[..found.range.start];
            if !before.is_empty() {
                out.push(InlineNode::text(before));
            }
            out.push(make(&found));
            rest = &rest[found.range.end..];
        }
        if !rest.is_empty() {
            out.push(InlineNode::text(rest));
        }
    }
    out
}

/// Splits every `Text` node on one emphasis delimiter.
///
/// Segments alternate plain/styled starting with plain; empty segments are
/// dropped. Non-text nodes pass through untouched.
///
/// # Errors
/// An even number of segments means an opening delimiter has no close.
pub fn split_nodes_delimiter(
    nodes: Vec<InlineNode>,
    emphasis: Emphasis,
) -> Result<Vec<InlineNode>, ConvertError> {
    let delimiter = emphasis.delimiter();
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        let text = match node {
            InlineNode::Text(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let sections: Vec<&str> = text.split(delimiter).collect();
        if sections.len() % 2 == 0 {
            return Err(ConvertError::MalformedInline {
                delimiter,
                text: text.clone(),
            });
        }
        for (i, section) in sections.into_iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(InlineNode::text(section));
            } else {
                out.push(emphasis.styled(section));
            }
        }
    }
    Ok(out)
}

/// Every `(alt, src)` pair in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    Image::find_all(text)
        .into_iter()
        .map(|r| (r.text.to_string(), r.target.to_string()))
        .collect()
}

/// Every `(label, href)` pair in `text`, excluding images.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    Link::find_all(text)
        .into_iter()
        .map(|r| (r.text.to_string(), r.target.to_string()))
        .collect()
}
