use crate::{
    error::ConvertError,
    html::HtmlNode,
    parsing::inline::text_to_children,
};

use super::{
    classify::block_to_block_type,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    segment::LINE_BREAK,
    types::BlockType,
};

/// Builds the single HTML node for one block.
pub fn block_to_html_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let block_type = block_to_block_type(block);
    log::trace!("block classified as {block_type:?}");
    match block_type {
        BlockType::Paragraph => paragraph_to_html_node(block),
        BlockType::Heading(level) => heading_to_html_node(block, level),
        BlockType::Code => code_to_html_node(block),
        BlockType::Quote => quote_to_html_node(block),
        BlockType::UnorderedList => unordered_list_to_html_node(block),
        BlockType::OrderedList => ordered_list_to_html_node(block),
    }
}

fn paragraph_to_html_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let paragraph = block.split(LINE_BREAK).collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent(
        BlockType::Paragraph.tag(),
        text_to_children(&paragraph)?,
    ))
}

fn heading_to_html_node(block: &str, level: u8) -> Result<HtmlNode, ConvertError> {
    let text = Heading::content(block, level).ok_or_else(|| ConvertError::InvalidHeading {
        block: block.to_string(),
    })?;
    Ok(HtmlNode::parent(
        BlockType::Heading(level).tag(),
        text_to_children(text)?,
    ))
}

fn code_to_html_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let text = CodeFence::interior(block).ok_or_else(|| ConvertError::InvalidCodeBlock {
        block: block.to_string(),
    })?;
    let code = HtmlNode::parent("code", vec![HtmlNode::text(text)]);
    Ok(HtmlNode::parent(BlockType::Code.tag(), vec![code]))
}

fn quote_to_html_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let lines = block
        .split(LINE_BREAK)
        .map(|line| {
            BlockQuote::strip_prefixes(line).ok_or_else(|| ConvertError::InvalidQuoteLine {
                line: line.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(
        BlockType::Quote.tag(),
        text_to_children(&lines.join(" "))?,
    ))
}

fn unordered_list_to_html_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let items = block
        .split(LINE_BREAK)
        .map(|line| list_item(UnorderedList::item_text(line)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(BlockType::UnorderedList.tag(), items))
}

fn ordered_list_to_html_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let items = block
        .split(LINE_BREAK)
        .enumerate()
        .map(|(i, line)| list_item(OrderedList::item_text(line, i + 1)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(BlockType::OrderedList.tag(), items))
}

fn list_item(text: &str) -> Result<HtmlNode, ConvertError> {
    Ok(HtmlNode::parent("li", text_to_children(text)?))
}
