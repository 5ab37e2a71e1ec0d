use crate::parsing::inline::types::InlineNode;

/// Delimiter-based inline styles.
///
/// Each variant owns its delimiter. The tokenizer runs one pass per variant in
/// [`Emphasis::PASSES`] order, so `**` is consumed before `_` and `` ` ``.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
    Code,
}

impl Emphasis {
    pub const PASSES: [Emphasis; 3] = [Emphasis::Bold, Emphasis::Italic, Emphasis::Code];

    pub const fn delimiter(self) -> &'static str {
        match self {
            Emphasis::Bold => "**",
            Emphasis::Italic => "_",
            Emphasis::Code => "`",
        }
    }

    /// Wraps the text between a pair of delimiters.
    pub fn styled(self, text: impl Into<String>) -> InlineNode {
        let text = text.into();
        match self {
            Emphasis::Bold => InlineNode::Bold(text),
            Emphasis::Italic => InlineNode::Italic(text),
            Emphasis::Code => InlineNode::Code(text),
        }
    }
}
