/// Blockquote block type with owned prefix.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips every leading `>` and the whitespace around the remaining text.
    ///
    /// Returns `None` if the line is not a quote line.
    pub fn strip_prefixes(line: &str) -> Option<&str> {
        if !Self::is_quote_line(line) {
            return None;
        }
        Some(line.trim_start_matches(Self::PREFIX).trim())
    }
}
