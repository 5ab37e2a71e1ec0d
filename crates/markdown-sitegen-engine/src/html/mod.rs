//! # HTML Output Model
//!
//! The tree the converter builds and the serializer that turns it into a string.
//!
//! - **`node`**: `HtmlNode` (`Leaf` / `Parent`) with depth-first `render`
//! - **`attributes`**: `Attributes`, an insertion-ordered name/value mapping
//!
//! Text is never escaped: leaf values and attribute values are written verbatim.

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::HtmlNode;
