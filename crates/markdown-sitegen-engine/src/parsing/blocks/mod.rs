//! # Block Parsing
//!
//! Three steps, each a plain function over borrowed text:
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines into
//!    trimmed, non-empty blocks
//! 2. **Classification** (`classify`): each block gets exactly one `BlockType`
//!    from an ordered list of rules
//! 3. **Construction** (`builder`): each block becomes one `HtmlNode`,
//!    inline-parsing its text where the kind calls for it
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: Block types owning their markers (Heading, CodeFence, BlockQuote, lists)
//! - **`segment`**: `markdown_to_blocks`
//! - **`classify`**: `block_to_block_type`
//! - **`builder`**: `block_to_html_node`
//!
//! ## Key Invariants
//!
//! - Block order is document order, end to end
//! - Classification never fails; malformed quotes and lists become paragraphs
//! - Fenced code is a raw zone: its interior is never inline-parsed

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use builder::block_to_html_node;
pub use classify::block_to_block_type;
pub use segment::markdown_to_blocks;
pub use types::BlockType;
