use thiserror::Error;

/// Failures raised while serializing an [`HtmlNode`](crate::html::HtmlNode) tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("invalid HTML: leaf node has no value")]
    MissingValue,
    #[error("invalid HTML: parent node has no tag")]
    MissingTag,
    #[error("invalid HTML: parent node <{tag}> has no children")]
    MissingChildren { tag: String },
}

/// Failures raised while converting a markdown document.
///
/// Every variant is fatal to the whole `render`/`extract_title` call; the
/// converter never produces partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("invalid markdown, `{delimiter}` section not closed in: {text:?}")]
    MalformedInline {
        delimiter: &'static str,
        text: String,
    },

    #[error("invalid heading: no text after marker in {block:?}")]
    InvalidHeading { block: String },

    #[error("invalid code block: {block:?}")]
    InvalidCodeBlock { block: String },

    #[error("invalid quote block, line does not start with `>`: {line:?}")]
    InvalidQuoteLine { line: String },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("no title found: document has no line starting with `# `")]
    MissingTitle,
}
