/// Separator between blocks: one blank line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Separator between lines inside a block. A `\r` before it stays in the line.
pub const LINE_BREAK: char = '\n';

/// Splits a document into trimmed, non-empty blocks in document order.
///
/// Runs of three or more line breaks leave empty sections behind, which are
/// dropped, so any number of blank lines acts as a single boundary.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
