use std::sync::LazyLock;

use regex::Regex;

use super::Reference;

/// Image inline type: `![alt](src)`.
///
/// Neither the alt text nor the source may contain their own bracket kind.
pub struct Image;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(Image::PATTERN).expect("image pattern compiles"));

impl Image {
    pub const PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^\(\)]*)\)";

    /// Leftmost image reference in `text`.
    pub fn find(text: &str) -> Option<Reference<'_>> {
        IMAGE_RE
            .captures(text)
            .and_then(|caps| Reference::from_captures(&caps))
    }

    /// All image references in `text`, left to right.
    pub fn find_all(text: &str) -> Vec<Reference<'_>> {
        IMAGE_RE
            .captures_iter(text)
            .filter_map(|caps| Reference::from_captures(&caps))
            .collect()
    }
}
