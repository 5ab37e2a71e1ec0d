/// ATX heading: one to six `#` followed by a space.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;
    /// Line prefix that marks a document title.
    pub const TITLE_PREFIX: &'static str = "# ";

    /// Heading level of `block`, if it opens with a valid marker.
    pub fn level(block: &str) -> Option<u8> {
        let hashes = block.bytes().take_while(|b| *b == Self::MARKER as u8).count();
        if hashes == 0 || hashes > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        if !block[hashes..].starts_with(' ') {
            return None;
        }
        u8::try_from(hashes).ok()
    }

    /// Text after the marker and its single following space.
    ///
    /// `None` when the marker is malformed or nothing follows it.
    pub fn content(block: &str, level: u8) -> Option<&str> {
        block
            .get(usize::from(level) + 1..)
            .filter(|rest| !rest.is_empty())
    }
}
