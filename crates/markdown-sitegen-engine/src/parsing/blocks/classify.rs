use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    segment::LINE_BREAK,
    types::BlockType,
};

/// Classifies one trimmed block.
///
/// Rules are tried in order and the first match wins. Nothing here fails: a
/// block that opens like a quote or list but breaks the pattern on a later
/// line degrades to [`BlockType::Paragraph`].
pub fn block_to_block_type(block: &str) -> BlockType {
    if let Some(level) = Heading::level(block) {
        return BlockType::Heading(level);
    }
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }
    if block.starts_with(BlockQuote::PREFIX) {
        return if block.split(LINE_BREAK).all(BlockQuote::is_quote_line) {
            BlockType::Quote
        } else {
            BlockType::Paragraph
        };
    }
    if block.starts_with(UnorderedList::MARKER) {
        return if block.split(LINE_BREAK).all(UnorderedList::is_item) {
            BlockType::UnorderedList
        } else {
            BlockType::Paragraph
        };
    }
    if block.starts_with(OrderedList::FIRST_MARKER) {
        let numbered = block
            .split(LINE_BREAK)
            .enumerate()
            .all(|(i, line)| OrderedList::is_item(line, i + 1));
        return if numbered {
            BlockType::OrderedList
        } else {
            BlockType::Paragraph
        };
    }
    BlockType::Paragraph
}
