//! Parsing of free-text model replies.
//!
//! Every check asks the model for a short, templated answer.  The helpers
//! here are the only place that digs values out of those answers; callers
//! decide what a `None` means for them.

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// A yes/no answer read out of a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Yes,
    No,
}

impl Verdict {
    pub fn is_yes(self) -> bool {
        self == Verdict::Yes
    }
}

impl From<Verdict> for bool {
    fn from(v: Verdict) -> bool {
        v.is_yes()
    }
}

/// Read a yes/no verdict from a reply by case-insensitive substring search.
///
/// Returns `None` when the reply mentions neither `"true"` nor `"false"`, or
/// mentions both.
///
/// ```
/// use vocab_tutor::llm::reply::{parse_verdict, Verdict};
///
/// assert_eq!(parse_verdict("TRUE."), Some(Verdict::Yes));
/// assert_eq!(parse_verdict("The answer is false"), Some(Verdict::No));
/// assert_eq!(parse_verdict("maybe"), None);
/// ```
pub fn parse_verdict(reply: &str) -> Option<Verdict> {
    let lower = reply.to_lowercase();
    match (lower.contains("true"), lower.contains("false")) {
        (true, false) => Some(Verdict::Yes),
        (false, true) => Some(Verdict::No),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Templated replies
// ---------------------------------------------------------------------------

const WORD_TRIM: &[char] = &['.', ',', '\'', '"', '/', '!'];

/// Last whitespace-separated token of a reply, with punctuation removed.
///
/// Used on replies shaped like
/// `The translation of the word apple in Italian is mela.`
pub fn last_word(reply: &str) -> Option<String> {
    let word: String = reply
        .split_whitespace()
        .last()?
        .chars()
        .filter(|c| !WORD_TRIM.contains(c))
        .collect();
    (!word.is_empty()).then_some(word)
}

/// Text following the first colon on the reply's final line.
///
/// Used on replies shaped like
/// `the correct form of your sentence is: Io mangio una mela.`
/// A pair of wrapping double quotes around the result is removed.
pub fn text_after_colon(reply: &str) -> Option<String> {
    let last_line = reply.trim_end().lines().last()?;
    let (_, rest) = last_line.split_once(':')?;
    let rest = rest.trim();
    let rest = rest
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .unwrap_or(rest)
        .trim();
    (!rest.is_empty()).then(|| rest.to_string())
}

/// Keep only alphabetic characters (any script) of a user's answer.
pub fn letters_only(input: &str) -> String {
    input.chars().filter(|c| c.is_alphabetic()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ---- parse_verdict ---

    #[test]
    fn verdict_true_any_case() {
        assert_eq!(parse_verdict("true"), Some(Verdict::Yes));
        assert_eq!(parse_verdict("True"), Some(Verdict::Yes));
        assert_eq!(parse_verdict("Answer: TRUE"), Some(Verdict::Yes));
    }

    #[test]
    fn verdict_false_any_case() {
        assert_eq!(parse_verdict("false"), Some(Verdict::No));
        assert_eq!(parse_verdict("\"False\"."), Some(Verdict::No));
    }

    #[test]
    fn verdict_neither_is_none() {
        assert_eq!(parse_verdict("Yes, it is."), None);
        assert_eq!(parse_verdict(""), None);
    }

    #[test]
    fn verdict_both_is_none() {
        assert_eq!(parse_verdict("It could be true or false."), None);
    }

    #[test]
    fn verdict_into_bool() {
        assert!(bool::from(Verdict::Yes));
        assert!(!bool::from(Verdict::No));
    }

    // ---- last_word ---

    #[test]
    fn last_word_strips_punctuation() {
        let reply = "The translation of the word apple in Italian is 'mela'.";
        assert_eq!(last_word(reply).as_deref(), Some("mela"));
    }

    #[test]
    fn last_word_keeps_accents() {
        let reply = "The translation of the word coffee in Italian is caffè!";
        assert_eq!(last_word(reply).as_deref(), Some("caffè"));
    }

    #[test]
    fn last_word_of_punctuation_only_is_none() {
        assert_eq!(last_word("is ..."), None);
        assert_eq!(last_word("   "), None);
    }

    // ---- text_after_colon ---

    #[test]
    fn after_colon_single_line() {
        let reply = "the correct form of your sentence is: Io mangio una mela.";
        assert_eq!(
            text_after_colon(reply).as_deref(),
            Some("Io mangio una mela.")
        );
    }

    #[test]
    fn after_colon_unwraps_quotes() {
        let reply = "the correct form of your sentence is: \"Il cane corre.\"";
        assert_eq!(text_after_colon(reply).as_deref(), Some("Il cane corre."));
    }

    #[test]
    fn after_colon_uses_final_line() {
        let reply = "Note: small fix.\nthe correct form of your sentence is: Il gatto dorme.";
        assert_eq!(text_after_colon(reply).as_deref(), Some("Il gatto dorme."));
    }

    #[test]
    fn after_colon_missing_is_none() {
        assert_eq!(text_after_colon("Il gatto dorme."), None);
        assert_eq!(text_after_colon("Here it is:\nIl gatto dorme."), None);
        assert_eq!(text_after_colon("the correct form is:   "), None);
    }

    // ---- letters_only ---

    #[test]
    fn letters_only_drops_digits_spaces_and_punctuation() {
        assert_eq!(letters_only(" mela! 1"), "mela");
        assert_eq!(letters_only("perché?"), "perché");
    }
}
