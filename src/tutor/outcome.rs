//! Classification of a finished turn.

/// Results of the sentence checks for one turn.
///
/// A check that did not run because an earlier one failed is `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckResults {
    pub word_present: bool,
    pub correct: bool,
    pub complete: bool,
    pub semantic: bool,
}

/// How a turn ended.  Exactly one applies to every turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The target word never appeared in the sentence.
    WordNotUsed,
    /// The sentence is not grammatical.
    SentenceWrong,
    /// Grammatical, but not an independent clause.
    CorrectButIncomplete,
    /// Grammatical and complete, but not something a native speaker would say.
    CompleteButNotSemantic,
    FullyCorrect,
}

impl TurnOutcome {
    /// Checks are considered in order; the first failure decides.
    ///
    /// ```
    /// use vocab_tutor::tutor::{CheckResults, TurnOutcome};
    ///
    /// let results = CheckResults {
    ///     word_present: true,
    ///     correct: true,
    ///     complete: false,
    ///     semantic: false,
    /// };
    /// assert_eq!(TurnOutcome::classify(&results), TurnOutcome::CorrectButIncomplete);
    /// ```
    pub fn classify(results: &CheckResults) -> Self {
        if !results.word_present {
            TurnOutcome::WordNotUsed
        } else if !results.correct {
            TurnOutcome::SentenceWrong
        } else if !results.complete {
            TurnOutcome::CorrectButIncomplete
        } else if !results.semantic {
            TurnOutcome::CompleteButNotSemantic
        } else {
            TurnOutcome::FullyCorrect
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            TurnOutcome::WordNotUsed => "word not used",
            TurnOutcome::SentenceWrong => "sentence wrong",
            TurnOutcome::CorrectButIncomplete => "correct but incomplete",
            TurnOutcome::CompleteButNotSemantic => "complete but not semantic",
            TurnOutcome::FullyCorrect => "fully correct",
        }
    }
}
