use std::sync::LazyLock;

use regex::Regex;

use super::Reference;

/// Link inline type: `[label](href)`.
///
/// The `regex` crate has no look-behind, so the pattern also accepts an
/// optional leading `!` and image-shaped matches are discarded afterwards.
pub struct Link;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(Link::PATTERN).expect("link pattern compiles"));

impl Link {
    pub const PATTERN: &'static str = r"!?\[([^\[\]]*)\]\(([^\(\)]*)\)";
    pub const IMAGE_MARKER: char = '!';

    fn matches(text: &str) -> impl Iterator<Item = Reference<'_>> {
        LINK_RE
            .captures_iter(text)
            .filter_map(|caps| Reference::from_captures(&caps))
            .filter(|r| !text[r.range.clone()].starts_with(Self::IMAGE_MARKER))
    }

    /// Leftmost link reference in `text`.
    pub fn find(text: &str) -> Option<Reference<'_>> {
        Self::matches(text).next()
    }

    /// All link references in `text`, left to right.
    pub fn find_all(text: &str) -> Vec<Reference<'_>> {
        Self::matches(text).collect()
    }
}
