/// Fenced code block delimited by triple backticks.
///
/// The block must both start and end with the fence; the interior is a raw
/// zone that is never inline-parsed.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    pub fn is_fenced(block: &str) -> bool {
        block.starts_with(Self::FENCE) && block.ends_with(Self::FENCE)
    }

    /// Text between the fences.
    ///
    /// Drops the opening fence plus the one character after it (normally the
    /// line break, or the first character of an info string) and the closing
    /// fence. Blocks too short to hold both fences yield an empty interior.
    pub fn interior(block: &str) -> Option<&str> {
        if !Self::is_fenced(block) {
            return None;
        }
        let fence = Self::FENCE.len();
        if block.len() < fence * 2 {
            return Some("");
        }
        let mut chars = block[fence..block.len() - fence].chars();
        chars.next();
        Some(chars.as_str())
    }
}
