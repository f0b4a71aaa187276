//! Truncation detection and the repair prompt.
//!
//! A reply counts as truncated when its last character is not `.`, `!` or `?`.
//! The repair prompt carries the last [`REPAIR_CONTEXT_CHARS`] characters of
//! the reply as context. The cut is by character count and may land
//! mid-word.

use crate::prompts::HELPFUL_ASSISTANT_ROLE;
use crate::types::PromptSpec;

pub const TERMINAL_PUNCTUATION: [char; 3] = ['.', '!', '?'];
pub const REPAIR_CONTEXT_CHARS: usize = 50;
pub const REPAIR_MAX_TOKENS: u32 = 150;
pub const REPAIR_PROMPT_PREFIX: &str = "Complete the explanation with the remaining details: ";

/// Expects text that has already been trimmed. Empty text counts as truncated.
pub fn is_truncated(text: &str) -> bool {
    !text.ends_with(TERMINAL_PUNCTUATION)
}

/// Returns the last `max_chars` characters of `text`, or all of it when shorter.
pub fn tail(text: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }
    match text.char_indices().rev().nth(max_chars - 1) {
        Some((start, _)) => &text[start..],
        None => text,
    }
}

/// Follow-up prompt asking the provider to finish a truncated reply.
pub fn repair_prompt(text: &str) -> PromptSpec {
    let context = tail(text, REPAIR_CONTEXT_CHARS);
    PromptSpec::new(
        HELPFUL_ASSISTANT_ROLE,
        format!("{REPAIR_PROMPT_PREFIX}{context}"),
        REPAIR_MAX_TOKENS,
    )
}

pub fn join_repair(original: &str, continuation: &str) -> String {
    format!("{original} {continuation}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_punctuation_is_complete() {
        assert!(!is_truncated("That is all."));
        assert!(!is_truncated("Wow!"));
        assert!(!is_truncated("Is it?"));
    }

    #[test]
    fn test_missing_punctuation_is_truncated() {
        assert!(is_truncated("...and that is the conclusion"));
        assert!(is_truncated("A list:"));
        assert!(is_truncated("Quoted.\""));
        assert!(is_truncated("**Heading**"));
        assert!(is_truncated(""));
    }

    #[test]
    fn test_tail_of_long_text_is_last_fifty_chars() {
        let text = "a".repeat(30) + &"b".repeat(50);
        let context = tail(&text, REPAIR_CONTEXT_CHARS);
        assert_eq!(context, "b".repeat(50));
        assert_eq!(context.chars().count(), 50);
    }

    #[test]
    fn test_tail_of_short_text_is_whole_text() {
        assert_eq!(tail("short text", REPAIR_CONTEXT_CHARS), "short text");

        let exact = "x".repeat(50);
        assert_eq!(tail(&exact, REPAIR_CONTEXT_CHARS), exact);
    }

    #[test]
    fn test_tail_counts_characters_not_bytes() {
        let text = "é".repeat(60);
        let context = tail(&text, REPAIR_CONTEXT_CHARS);
        assert_eq!(context.chars().count(), 50);
        assert_eq!(context.len(), 100);
    }

    #[test]
    fn test_tail_may_cut_mid_word() {
        let text = "The mitochondria is the powerhouse of the cell and it produces energ";
        let context = tail(text, REPAIR_CONTEXT_CHARS);
        assert_eq!(context, "s the powerhouse of the cell and it produces energ");
    }

    #[test]
    fn test_tail_with_zero_budget_is_empty() {
        assert_eq!(tail("anything", 0), "");
    }

    #[test]
    fn test_repair_prompt_shape() {
        let text = "x".repeat(20) + "and that is the conclusion";
        let spec = repair_prompt(&text);

        assert_eq!(spec.system_role, HELPFUL_ASSISTANT_ROLE);
        assert_eq!(spec.max_tokens, 150);
        assert_eq!(spec.temperature, None);
        assert_eq!(
            spec.user_prompt,
            format!("Complete the explanation with the remaining details: {text}")
        );
    }

    #[test]
    fn test_join_uses_single_space() {
        assert_eq!(join_repair("It ends", "here."), "It ends here.");
    }
}
