//! # Inline Parsing
//!
//! Pass-based inline tokenization of a block's text.
//!
//! ## Architecture
//!
//! Tokenizing starts from a single `Text` node. Each pass rewrites only the
//! `Text` nodes produced so far and leaves every other kind alone:
//!
//! 1. images `![alt](src)`
//! 2. links `[label](href)`
//! 3. delimiter passes `**`, `_`, `` ` ``
//!
//! Because finished nodes are never revisited, styles do not nest:
//! `**a _b_**` yields a single `Bold("a _b_")`.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum and its HTML conversion
//! - **`kinds`**: Inline types owning their syntax (`Image`, `Link`, `Emphasis`)
//! - **`parser`**: `text_to_spans()` and the individual `split_nodes_*` passes

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{
    extract_markdown_images, extract_markdown_links, split_nodes_delimiter, split_nodes_image,
    split_nodes_link, text_to_spans,
};
pub use types::InlineNode;

use crate::{error::ConvertError, html::HtmlNode};

/// Tokenizes `text` and converts each fragment into an HTML node.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    Ok(text_to_spans(text)?
        .into_iter()
        .map(HtmlNode::from)
        .collect())
}
