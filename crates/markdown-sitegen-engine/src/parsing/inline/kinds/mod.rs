//! # Inline Kinds
//!
//! Inline-specific types that own their syntax: patterns and delimiters live
//! here, never in parser code.
//!
//! ## Types
//!
//! - **`Image`**: `![alt](src)`
//! - **`Link`**: `[label](href)`, not preceded by `!`
//! - **`Emphasis`**: the delimiter passes `**` (bold), `_` (italic), `` ` `` (code)

pub mod emphasis;
pub mod image;
pub mod link;

pub use emphasis::Emphasis;
pub use image::Image;
pub use link::Link;

use std::ops::Range;

/// A bracketed reference (`[text](target)`) found in a text span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<'a> {
    /// Byte range of the whole construct, including any `!` prefix.
    pub range: Range<usize>,
    /// Bracketed text: link label or image alt text.
    pub text: &'a str,
    /// Parenthesised target: link href or image source.
    pub target: &'a str,
}

impl<'a> Reference<'a> {
    pub(crate) fn from_captures(caps: &regex::Captures<'a>) -> Option<Self> {
        let whole = caps.get(0)?;
        Some(Reference {
            range: whole.range(),
            text: caps.get(1)?.as_str(),
            target: caps.get(2)?.as_str(),
        })
    }
}
