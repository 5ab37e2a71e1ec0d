//! # markdown-sitegen-engine
//!
//! Converts a markdown document into an HTML element tree and serializes it.
//!
//! ```text
//! markdown → blocks → BlockType → InlineNode spans → HtmlNode tree → String
//! ```
//!
//! Conversion is a pure function of its input: no shared mutable state, so
//! independent documents can be converted from any number of threads.
//!
//! The supported dialect is deliberately small: headings, fenced code,
//! quotes, flat lists and paragraphs, with images, links, bold, italic and
//! inline code inside them. Styles do not nest and text is not escaped.

pub mod error;
pub mod html;
pub mod parsing;

pub use error::{ConvertError, RenderError};
pub use html::{Attributes, HtmlNode};
pub use parsing::{
    blocks::{BlockType, block_to_block_type, block_to_html_node, markdown_to_blocks},
    extract_title,
    inline::{InlineNode, text_to_spans},
    markdown_to_html_node, render,
};
