/// The structural kind of a block, decided once by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Default when no other rule matches.
    Paragraph,
    /// ATX heading with its level (1..=6).
    Heading(u8),
    /// Triple-backtick fenced code.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps.
    OrderedList,
}

impl BlockType {
    /// Tag of the outermost element the block renders to.
    pub fn tag(self) -> &'static str {
        match self {
            BlockType::Paragraph => "p",
            BlockType::Heading(1) => "h1",
            BlockType::Heading(2) => "h2",
            BlockType::Heading(3) => "h3",
            BlockType::Heading(4) => "h4",
            BlockType::Heading(5) => "h5",
            BlockType::Heading(_) => "h6",
            BlockType::Code => "pre",
            BlockType::Quote => "blockquote",
            BlockType::UnorderedList => "ul",
            BlockType::OrderedList => "ol",
        }
    }
}
