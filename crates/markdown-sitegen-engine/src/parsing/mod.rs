pub mod blocks;
pub mod inline;
pub mod title;

#[cfg(test)]
mod tests;

use crate::{error::ConvertError, html::HtmlNode};

use blocks::{block_to_html_node, markdown_to_blocks};

pub use title::extract_title;

/// Tag of the document root element.
pub const ROOT_TAG: &str = "div";

/// Converts a whole document into its HTML tree.
///
/// The root is always a `div` with exactly one child per block, in block
/// order. The first failing block aborts the conversion.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let blocks = markdown_to_blocks(markdown);
    log::debug!("segmented document into {} blocks", blocks.len());

    let children = blocks
        .into_iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::parent(ROOT_TAG, children))
}

/// Converts a markdown document into an HTML fragment string.
pub fn render(markdown: &str) -> Result<String, ConvertError> {
    Ok(markdown_to_html_node(markdown)?.render()?)
}
