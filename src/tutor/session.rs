//! Session loop — drives one practice turn after another.
//!
//! # Turn flow
//!
//! ```text
//! AwaitWord        show word, read translation (blank → re-prompt)
//!   └─▶ translation check, sentence request
//! AwaitSentence    read sentence (too short → re-prompt)
//!   └─▶ CheckPresence     absent → re-prompt, at most `presence_retries` times
//!         └─▶ CheckCorrectness ─▶ CheckCompleteness ─▶ CheckSemantics
//!               (each runs only if the previous one passed)
//! Feedback         one message per TurnOutcome
//! NextWord         index = (index + 1) % len
//! ```
//!
//! A turn that fails (LLM exhausted, unreadable reply) is reported to the
//! user and the loop moves on.  The loop ends only when input is closed.

use thiserror::Error;

use crate::config::TutorConfig;
use crate::console::{Console, Tone};

use super::checks::{validate_sentence_length, CheckError, Checker};
use super::outcome::{CheckResults, TurnOutcome};
use super::state::SessionState;

const TRANSLATION_PROMPT: &str = "You: ";
const SENTENCE_PROMPT: &str = "You (sentence): ";
const EMPTY_TRANSLATION: &str = "Please provide a translation.";
const TURN_FAILED: &str = "Oops! Something went wrong on our end. \
Please try again later, or contact support if the issue persists.";

// ---------------------------------------------------------------------------
// SessionError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("the word list is empty")]
    EmptyWordList,

    #[error(transparent)]
    Check(#[from] CheckError),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One tutoring session over a fixed word list.
pub struct Session<K: Console> {
    state: SessionState,
    checker: Checker,
    console: K,
    min_sentence_words: usize,
    presence_retries: u32,
}

impl<K: Console> Session<K> {
    pub fn new(config: &TutorConfig, checker: Checker, console: K) -> Result<Self, SessionError> {
        let state = SessionState::new(config.words.clone()).ok_or(SessionError::EmptyWordList)?;
        Ok(Self {
            state,
            checker,
            console,
            min_sentence_words: config.min_sentence_words,
            presence_retries: config.presence_retries,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn console(&self) -> &K {
        &self.console
    }

    /// Greet the user, then play turns until input is closed.
    ///
    /// Only console I/O failures end the loop with an error.
    pub async fn run(&mut self) -> Result<(), SessionError> {
        self.greet()?;

        loop {
            match self.play_turn().await {
                Ok(Some(outcome)) => {
                    log::info!(
                        "turn for '{}' finished: {}",
                        self.state.current_word(),
                        outcome.label()
                    );
                }
                Ok(None) => {
                    log::info!("input closed; ending session");
                    return Ok(());
                }
                Err(SessionError::Check(err)) => {
                    log::error!("turn for '{}' aborted: {err}", self.state.current_word());
                    self.console.say(Tone::Tutor, TURN_FAILED)?;
                }
                Err(err) => return Err(err),
            }
            self.state.advance();
        }
    }

    fn greet(&mut self) -> Result<(), SessionError> {
        let prompts = self.checker.prompts();
        let lines = [
            "Hi there! Let's practice some vocabulary.".to_string(),
            format!("I will give you some words in {}.", prompts.native_language()),
            format!(
                "Your task is to translate these words into {}.",
                prompts.target_language()
            ),
            "Are you ready? Let's start!\n".to_string(),
        ];
        for line in &lines {
            self.console.say(Tone::Banner, line)?;
        }
        Ok(())
    }

    /// Play the turn for the current word.  Does not advance the index.
    ///
    /// `Ok(None)` means input was closed mid-turn.
    pub async fn play_turn(&mut self) -> Result<Option<TurnOutcome>, SessionError> {
        self.state.clear_last_corrected();
        let word = self.state.current_word().to_string();
        self.console.say(Tone::Word, &word)?;

        let Some(answer) = self.read_translation().await? else {
            return Ok(None);
        };
        let translation = self.checker.check_translation(&word, &answer).await?;
        self.console.say(Tone::Tutor, &translation.feedback)?;
        let target_word = translation.corrected_word;

        let request = self.checker.ask_for_sentence(&target_word).await?;
        self.console.say(Tone::Request, &request)?;

        let Some(mut sentence) = self.read_sentence().await? else {
            return Ok(None);
        };

        let word_present = self
            .checker
            .check_word_presence(&target_word, &sentence)
            .await?;
        let mut results = CheckResults {
            word_present,
            ..CheckResults::default()
        };
        let mut retries = 0;
        while !results.word_present && retries < self.presence_retries {
            self.console.say(
                Tone::Tutor,
                &format!(
                    "Oops! It looks like you forgot to include the word '{target_word}' \
in your sentence. Would you like to try again?"
                ),
            )?;
            let Some(next) = self.read_sentence().await? else {
                return Ok(None);
            };
            sentence = next;
            results.word_present = self
                .checker
                .check_word_presence(&target_word, &sentence)
                .await?;
            retries += 1;
        }

        if results.word_present {
            let (correct, corrected) = self.checker.check_correctness(&sentence).await?;
            results.correct = correct;
            sentence = corrected;
            self.state.set_last_corrected(sentence.clone());

            if results.correct {
                results.complete = self.checker.check_completeness(&sentence).await?;
            }
            if results.complete {
                results.semantic = self.checker.check_semantics(&sentence).await?;
            }
        }

        let outcome = TurnOutcome::classify(&results);
        self.give_feedback(outcome, &target_word, &sentence).await?;
        Ok(Some(outcome))
    }

    async fn give_feedback(
        &mut self,
        outcome: TurnOutcome,
        target_word: &str,
        sentence: &str,
    ) -> Result<(), SessionError> {
        match outcome {
            TurnOutcome::WordNotUsed => {
                self.console.say(
                    Tone::Tutor,
                    "It looks like you didn't include the given word in your sentence.",
                )?;
                let alternative = self.alternative(target_word).await?;
                self.console.say(
                    Tone::Tutor,
                    &format!("Here's how you might use the word in a sentence: {alternative}"),
                )?;
            }
            TurnOutcome::SentenceWrong => {
                self.console.say(
                    Tone::Tutor,
                    &format!(
                        "Almost there! Your sentence \"{sentence}\" needs a little tweaking \
for grammatical accuracy."
                    ),
                )?;
                let improved = self.checker.improved_sentence(sentence).await?;
                self.console.say(
                    Tone::Tutor,
                    &format!("A possible correct sentence could be: {improved}"),
                )?;
            }
            TurnOutcome::CorrectButIncomplete => {
                self.console.say(
                    Tone::Tutor,
                    &format!(
                        "You're on the right track! Your sentence \"{sentence}\" \
is almost complete."
                    ),
                )?;
                let alternative = self.alternative(target_word).await?;
                self.console.say(
                    Tone::Tutor,
                    &format!("Consider this more complete version: {alternative}"),
                )?;
            }
            TurnOutcome::CompleteButNotSemantic => {
                self.console.say(
                    Tone::Tutor,
                    &format!(
                        "You've got the grammar down, but your sentence \"{sentence}\" \
doesn't quite make sense. Let's refine it."
                    ),
                )?;
                let alternative = self.alternative(target_word).await?;
                self.console.say(
                    Tone::Tutor,
                    &format!("How about this meaningful version: {alternative}"),
                )?;
            }
            TurnOutcome::FullyCorrect => {
                self.console.say(
                    Tone::Tutor,
                    &format!("Great job! Your sentence \"{sentence}\" is spot-on"),
                )?;
            }
        }
        Ok(())
    }

    async fn alternative(&self, target_word: &str) -> Result<String, CheckError> {
        self.checker
            .alternative_sentence(target_word, self.state.last_corrected())
            .await
    }

    async fn read_translation(&mut self) -> Result<Option<String>, SessionError> {
        loop {
            let Some(line) = self.console.read_line(TRANSLATION_PROMPT).await? else {
                return Ok(None);
            };
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
            self.console.say(Tone::Hint, EMPTY_TRANSLATION)?;
        }
    }

    async fn read_sentence(&mut self) -> Result<Option<String>, SessionError> {
        loop {
            let Some(line) = self.console.read_line(SENTENCE_PROMPT).await? else {
                return Ok(None);
            };
            match validate_sentence_length(&line, self.min_sentence_words) {
                Ok(()) => return Ok(Some(line.trim().to_string())),
                Err(message) => self.console.say(Tone::Hint, &message)?,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
