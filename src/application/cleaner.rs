//! Markdown code-artifact cleanup for exported text.
//!
//! Fenced code blocks are removed wholesale (the delimiters and the code
//! between them), while inline code spans are only unwrapped so short
//! code words survive in the prose. The asymmetry is intentional.

use once_cell::sync::Lazy;
use regex::Regex;

/// Paired fenced block, language tag and body included. Non-greedy so
/// consecutive blocks are removed one at a time.
static FENCED_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```\w*\n?.*?```").unwrap());

/// Stray fence delimiter left after paired removal, through the end of
/// its line.
static FENCE_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```\w*\n?").unwrap());

/// Inline code span with no backtick inside.
static INLINE_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Applies the cleaning transform: strip fenced code blocks, then unwrap
/// inline code spans.
#[must_use]
pub fn clean_markdown(text: &str) -> String {
    let without_blocks = FENCED_BLOCK_RE.replace_all(text, "");
    let without_fences = FENCE_LINE_RE.replace_all(&without_blocks, "");
    INLINE_CODE_RE.replace_all(&without_fences, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_span_unwrapped() {
        assert_eq!(
            clean_markdown("Hello world, `please` help"),
            "Hello world, please help"
        );
    }

    #[test]
    fn test_fenced_block_removed_with_content() {
        assert_eq!(
            clean_markdown("Sure, ```js\ncode\n``` here you go"),
            "Sure,  here you go"
        );
    }

    #[test]
    fn test_fenced_block_without_language_tag() {
        assert_eq!(clean_markdown("a ```\nx = 1\n``` b"), "a  b");
    }

    #[test]
    fn test_stray_fence_removed() {
        assert_eq!(clean_markdown("start ```python\ntrailing"), "start trailing");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(clean_markdown("no markdown here"), "no markdown here");
    }

    #[test]
    fn test_idempotent_on_cleaned_text() {
        let inputs = [
            "Hello world, `please` help",
            "Sure, ```js\ncode\n``` here you go",
            "mixed `a` and ```\nblock\n``` text",
            "plain",
        ];
        for input in inputs {
            let once = clean_markdown(input);
            assert_eq!(clean_markdown(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_consecutive_blocks_both_removed() {
        assert_eq!(
            clean_markdown("x ```a\n1\n``` y ```b\n2\n``` z"),
            "x  y  z"
        );
    }
}
