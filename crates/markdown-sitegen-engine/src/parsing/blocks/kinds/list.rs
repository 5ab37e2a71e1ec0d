/// Unordered list: every line starts with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_item(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    pub fn item_text(line: &str) -> &str {
        line.strip_prefix(Self::MARKER).unwrap_or(line)
    }
}

/// Ordered list: line `n` (1-based) starts with `{n}. `.
pub struct OrderedList;

impl OrderedList {
    pub const FIRST_MARKER: &'static str = "1. ";

    pub fn marker(number: usize) -> String {
        format!("{number}. ")
    }

    pub fn is_item(line: &str, number: usize) -> bool {
        line.starts_with(&Self::marker(number))
    }

    /// Strips the `{number}. ` marker, whatever the width of the numeral.
    pub fn item_text(line: &str, number: usize) -> &str {
        line.strip_prefix(&Self::marker(number)).unwrap_or(line)
    }
}
