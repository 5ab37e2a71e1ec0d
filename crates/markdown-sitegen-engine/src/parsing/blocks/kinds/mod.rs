//! # Block Kinds
//!
//! Block-specific types that own their markers. The classifier and the tree
//! builder call into these; neither hardcodes `#`, `>`, `- ` or a fence.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
