//! Input scanning (keyword detection).
//!
//! Before any rule is tried the raw input is reduced to a `Statement`:
//!
//! - **Truncation**: only the text before the first `.` is considered.
//! - **Match text**: the truncated text with trailing `.`/`!` trimmed. Patterns
//!   run against this, with the user's original casing and punctuation.
//! - **Words**: the truncated text with ASCII punctuation removed, lowercased and
//!   split on whitespace. Words are only used to decide which rules are
//!   candidates; they never reach a pattern.
//!
//! Rule names and synonyms go through the same normalization when a script is
//! compiled (see `normalize_trigger`), so `"can't"` in a script matches the word
//! `cant` produced from the input "I can't".

/// A scanned user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Statement {
    /// Text patterns are matched against.
    pub text: String,
    /// Normalized words used for trigger detection.
    pub words: Vec<String>,
}

impl Statement {
    pub fn scan(input: &str) -> Self {
        let truncated = input.split('.').next().unwrap_or_default();
        let text = truncated.trim_end_matches(['.', '!']).to_string();
        let words = strip_punctuation(truncated).to_lowercase().split_whitespace().map(str::to_string).collect();

        tracing::trace!(text = %text, ?words, "scanned input");
        Statement { text, words }
    }

    /// True when `trigger` (a normalized word, or several separated by single
    /// spaces) occurs among the statement's words. Multi-word triggers must
    /// appear as a contiguous run.
    pub fn contains_trigger(&self, trigger: &str) -> bool {
        if !trigger.contains(' ') {
            return self.words.iter().any(|w| w == trigger);
        }
        let parts: Vec<&str> = trigger.split(' ').collect();
        self.words.windows(parts.len()).any(|window| window.iter().zip(&parts).all(|(w, p)| w == p))
    }
}

/// Normalize a rule name or synonym the way input words are normalized.
pub(crate) fn normalize_trigger(raw: &str) -> String {
    strip_punctuation(raw).to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_at_first_period() {
        let s = Statement::scan("I am sad. My dog died.");
        assert_eq!(s.text, "I am sad");
        assert_eq!(s.words, vec!["i", "am", "sad"]);
    }

    #[test]
    fn trims_trailing_exclamation_but_keeps_case() {
        let s = Statement::scan("Hello there!!");
        assert_eq!(s.text, "Hello there");
        assert_eq!(s.words, vec!["hello", "there"]);
    }

    #[test]
    fn words_drop_punctuation() {
        let s = Statement::scan("Why can't I, like, sleep?");
        assert_eq!(s.words, vec!["why", "cant", "i", "like", "sleep"]);
        assert_eq!(s.text, "Why can't I, like, sleep?");
    }

    #[test]
    fn leading_period_leaves_empty_statement() {
        let s = Statement::scan(".hidden");
        assert_eq!(s.text, "");
        assert!(s.words.is_empty());
    }

    #[test]
    fn multi_word_triggers_need_contiguous_words() {
        let s = Statement::scan("I often look back on it");
        assert!(s.contains_trigger("look back"));
        assert!(s.contains_trigger("often"));
        assert!(!s.contains_trigger("back look"));
        assert!(!s.contains_trigger("looking back"));
    }

    #[test]
    fn triggers_normalize_like_words() {
        assert_eq!(normalize_trigger("Can't"), "cant");
        assert_eq!(normalize_trigger("  it's   possible "), "its possible");
    }
}
