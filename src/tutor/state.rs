//! Session state: which word is up, and the last corrected sentence.

/// Position in the word list plus the last sentence the model corrected.
///
/// The word list is non-empty and never changes after construction, so
/// `index < words.len()` always holds.
///
/// ```
/// use vocab_tutor::tutor::SessionState;
///
/// let mut state = SessionState::new(vec!["apple".into(), "run".into()]).unwrap();
/// assert_eq!(state.current_word(), "apple");
/// state.advance();
/// assert_eq!(state.current_word(), "run");
/// state.advance();
/// assert_eq!(state.current_word(), "apple");
/// ```
#[derive(Debug, Clone)]
pub struct SessionState {
    words: Vec<String>,
    index: usize,
    last_corrected: String,
}

impl SessionState {
    /// Returns `None` for an empty word list.
    pub fn new(words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            index: 0,
            last_corrected: String::new(),
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.index]
    }

    /// Move to the next word, wrapping to the start after the last one.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.words.len();
    }

    /// `None` until a correctness check has produced a sentence this turn.
    pub fn last_corrected(&self) -> Option<&str> {
        (!self.last_corrected.is_empty()).then_some(self.last_corrected.as_str())
    }

    pub fn set_last_corrected(&mut self, sentence: impl Into<String>) {
        self.last_corrected = sentence.into();
    }

    /// Forget the corrected sentence; it belongs to the previous word.
    pub fn clear_last_corrected(&mut self) {
        self.last_corrected.clear();
    }
}
