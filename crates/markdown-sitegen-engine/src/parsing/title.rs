use crate::error::ConvertError;

use super::blocks::{kinds::Heading, segment::LINE_BREAK};

/// Returns the text of the first line starting with `# `, trimmed.
///
/// Scans raw lines rather than blocks, so the title may sit anywhere in the
/// document, including inside a multi-line block.
pub fn extract_title(markdown: &str) -> Result<String, ConvertError> {
    markdown
        .split(LINE_BREAK)
        .find_map(|line| line.strip_prefix(Heading::TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(ConvertError::MissingTitle)
}
