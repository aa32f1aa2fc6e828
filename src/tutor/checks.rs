//! The tutoring checks.
//!
//! [`Checker`] sends one small prompt per check and turns the reply into a
//! value.  It holds no session state; the session decides the order the
//! checks run in.
//!
//! Every yes/no reply goes through [`parse_verdict`].  A reply that says
//! neither "true" nor "false" (or says both) fails the check with
//! [`CheckError::Ambiguous`].

use std::sync::Arc;

use rand::seq::IndexedRandom;
use thiserror::Error;

use crate::llm::reply::{last_word, letters_only, parse_verdict, text_after_colon};
use crate::llm::{ChatClient, ChatMessage, LlmError, PromptBuilder};

/// Praise shown when a translation is accepted.
pub const POSITIVE_FEEDBACK: [&str; 5] = [
    "Correct! Good job!",
    "Well done!",
    "You nailed it!",
    "That's right!",
    "Excellent translation!",
];

// ---------------------------------------------------------------------------
// CheckError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// A yes/no reply contained neither (or both) of "true" and "false".
    #[error("{check}: expected \"true\" or \"false\", got {reply:?}")]
    Ambiguous { check: &'static str, reply: String },

    /// A templated reply did not contain the expected value.
    #[error("{check}: could not read the answer from {reply:?}")]
    Unparseable { check: &'static str, reply: String },

    #[error("{check}: model returned an empty reply")]
    EmptyReply { check: &'static str },
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Result of [`Checker::check_translation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationCheck {
    pub correct: bool,
    /// The user's answer when correct, otherwise the model's translation.
    pub corrected_word: String,
    /// Text to show the user.
    pub feedback: String,
}

/// Reject sentences with fewer than `min_words` whitespace-separated tokens.
///
/// The error is the message to show; it depends only on `min_words`.
///
/// ```
/// use vocab_tutor::tutor::validate_sentence_length;
///
/// assert!(validate_sentence_length("Io mangio una mela", 4).is_ok());
/// assert!(validate_sentence_length("ciao", 4).is_err());
/// ```
pub fn validate_sentence_length(sentence: &str, min_words: usize) -> Result<(), String> {
    if sentence.split_whitespace().count() < min_words {
        return Err(format!(
            "Your sentence must be at least {min_words} words. Please try again."
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Checker
// ---------------------------------------------------------------------------

pub struct Checker {
    client: Arc<dyn ChatClient>,
    prompts: PromptBuilder,
}

impl Checker {
    pub fn new(client: Arc<dyn ChatClient>, prompts: PromptBuilder) -> Self {
        Self { client, prompts }
    }

    pub fn prompts(&self) -> &PromptBuilder {
        &self.prompts
    }

    async fn verdict(
        &self,
        check: &'static str,
        messages: &[ChatMessage],
    ) -> Result<bool, CheckError> {
        let reply = self.client.complete(messages).await?;
        log::debug!("{check}: {reply:?}");
        parse_verdict(&reply)
            .map(bool::from)
            .ok_or(CheckError::Ambiguous { check, reply })
    }

    async fn generate(
        &self,
        check: &'static str,
        messages: &[ChatMessage],
    ) -> Result<String, CheckError> {
        let reply = self.client.complete(messages).await?;
        let reply = reply.trim();
        if reply.is_empty() {
            return Err(CheckError::EmptyReply { check });
        }
        Ok(reply.to_string())
    }

    /// Is `answer` a correct translation of `word`?  When it is not, the
    /// model is asked for the right word.
    pub async fn check_translation(
        &self,
        word: &str,
        answer: &str,
    ) -> Result<TranslationCheck, CheckError> {
        let answer = letters_only(answer);
        let correct = self
            .verdict("translation", &self.prompts.translation_check(word, &answer))
            .await?;

        if correct {
            let feedback = POSITIVE_FEEDBACK
                .choose(&mut rand::rng())
                .unwrap_or(&POSITIVE_FEEDBACK[0]);
            return Ok(TranslationCheck {
                correct: true,
                corrected_word: answer,
                feedback: feedback.to_string(),
            });
        }

        let reply = self
            .generate("translation", &self.prompts.translation_request(word))
            .await?;
        let corrected_word = last_word(&reply).ok_or_else(|| CheckError::Unparseable {
            check: "translation",
            reply: reply.clone(),
        })?;

        Ok(TranslationCheck {
            correct: false,
            corrected_word,
            feedback: reply,
        })
    }

    /// The model's phrasing of "now use this word in a sentence".
    pub async fn ask_for_sentence(&self, word: &str) -> Result<String, CheckError> {
        self.generate("sentence request", &self.prompts.sentence_request(word))
            .await
    }

    pub async fn check_word_presence(
        &self,
        word: &str,
        sentence: &str,
    ) -> Result<bool, CheckError> {
        self.verdict("word presence", &self.prompts.word_presence(word, sentence))
            .await
    }

    /// Grammar verdict plus the corrected sentence.
    ///
    /// The correction is requested whatever the verdict; if the reply does
    /// not follow the template the user's sentence is returned unchanged.
    pub async fn check_correctness(&self, sentence: &str) -> Result<(bool, String), CheckError> {
        let correct = self
            .verdict("correctness", &self.prompts.correctness_check(sentence))
            .await?;

        let reply = self
            .client
            .complete(&self.prompts.correction_request(sentence))
            .await?;
        let corrected = text_after_colon(&reply).unwrap_or_else(|| {
            log::debug!("correction reply did not follow the template: {reply:?}");
            sentence.to_string()
        });

        Ok((correct, corrected))
    }

    pub async fn check_completeness(&self, sentence: &str) -> Result<bool, CheckError> {
        self.verdict("completeness", &self.prompts.completeness_check(sentence))
            .await
    }

    pub async fn check_semantics(&self, sentence: &str) -> Result<bool, CheckError> {
        self.verdict("semantics", &self.prompts.semantics_check(sentence))
            .await
    }

    /// An example sentence using `word`, based on `sentence` when known.
    pub async fn alternative_sentence(
        &self,
        word: &str,
        sentence: Option<&str>,
    ) -> Result<String, CheckError> {
        self.generate(
            "alternative sentence",
            &self.prompts.alternative_sentence(word, sentence),
        )
        .await
    }

    pub async fn improved_sentence(&self, sentence: &str) -> Result<String, CheckError> {
        self.generate("improved sentence", &self.prompts.improved_sentence(sentence))
            .await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutor::testing::ScriptedClient;

    fn checker(replies: &[&str]) -> (Checker, Arc<ScriptedClient>) {
        let client = Arc::new(ScriptedClient::new(replies));
        let checker = Checker::new(client.clone(), PromptBuilder::new("English", "Italian"));
        (checker, client)
    }

    // ---- validate_sentence_length ---

    #[test]
    fn short_sentences_get_the_same_message() {
        let a = validate_sentence_length("ciao", 4).unwrap_err();
        let b = validate_sentence_length("il cane corre", 4).unwrap_err();
        let c = validate_sentence_length("", 4).unwrap_err();
        assert_eq!(a, "Your sentence must be at least 4 words. Please try again.");
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn extra_spaces_do_not_count_as_words() {
        assert!(validate_sentence_length("il   cane    corre", 4).is_err());
        assert!(validate_sentence_length("  il cane corre veloce  ", 4).is_ok());
    }

    // ---- translation ---

    #[tokio::test]
    async fn accepted_translation_keeps_answer() {
        let (checker, client) = checker(&["True"]);
        let result = checker.check_translation("apple", " mela!").await.unwrap();

        assert!(result.correct);
        assert_eq!(result.corrected_word, "mela");
        assert!(POSITIVE_FEEDBACK.contains(&result.feedback.as_str()));
        assert_eq!(client.calls(), 1);
        assert!(client.request(0)[1].content.contains("\"mela\""));
    }

    #[tokio::test]
    async fn rejected_translation_takes_models_word() {
        let (checker, client) = checker(&[
            "false",
            "The translation of the word apple in Italian is 'mela'.",
        ]);
        let result = checker.check_translation("apple", "mele").await.unwrap();

        assert!(!result.correct);
        assert_eq!(result.corrected_word, "mela");
        assert_eq!(
            result.feedback,
            "The translation of the word apple in Italian is 'mela'."
        );
        assert_eq!(client.calls(), 2);
    }

    #[tokio::test]
    async fn translation_ambiguous_reply_fails() {
        let (checker, _) = checker(&["I think so"]);
        let err = checker.check_translation("apple", "mela").await.unwrap_err();
        assert!(matches!(err, CheckError::Ambiguous { check: "translation", .. }));
    }

    #[tokio::test]
    async fn translation_without_word_is_unparseable() {
        let (checker, _) = checker(&["false", "..."]);
        let err = checker.check_translation("apple", "pera").await.unwrap_err();
        assert!(matches!(err, CheckError::Unparseable { .. }));
    }

    // ---- yes/no checks ---

    #[tokio::test]
    async fn presence_follows_verdict() {
        let (checker, _) = checker(&["TRUE", "false", "no idea"]);
        assert!(checker.check_word_presence("mela", "Io mangio una mela").await.unwrap());
        assert!(!checker.check_word_presence("mela", "Io mangio una pera").await.unwrap());
        assert!(matches!(
            checker.check_word_presence("mela", "Io mangio").await,
            Err(CheckError::Ambiguous { .. })
        ));
    }

    #[tokio::test]
    async fn completeness_and_semantics_follow_verdict() {
        let (checker, client) = checker(&["true", "False."]);
        assert!(checker.check_completeness("Il cane corre nel parco").await.unwrap());
        assert!(!checker.check_semantics("Il parco corre nel cane").await.unwrap());
        assert_eq!(client.calls(), 2);
    }

    #[tokio::test]
    async fn llm_failure_propagates() {
        let (checker, _) = checker(&[]);
        let err = checker.check_semantics("Il cane corre").await.unwrap_err();
        assert!(matches!(err, CheckError::Llm(_)));
    }

    // ---- correctness ---

    #[tokio::test]
    async fn correctness_returns_corrected_sentence() {
        let (checker, client) = checker(&[
            "false",
            "the correct form of your sentence is: Io mangio una mela.",
        ]);
        let (correct, sentence) = checker.check_correctness("io mangia una mela").await.unwrap();

        assert!(!correct);
        assert_eq!(sentence, "Io mangio una mela.");
        assert_eq!(client.calls(), 2);
        assert!(client.request(1)[1].content.contains("Provide the correct sentence"));
    }

    #[tokio::test]
    async fn correctness_requests_correction_when_correct_too() {
        let (checker, client) = checker(&[
            "true",
            "the correct form of your sentence is: Io mangio una mela.",
        ]);
        let (correct, sentence) = checker.check_correctness("io mangio una mela").await.unwrap();

        assert!(correct);
        assert_eq!(sentence, "Io mangio una mela.");
        assert_eq!(client.calls(), 2);
    }

    #[tokio::test]
    async fn correctness_falls_back_to_user_sentence() {
        let (checker, _) = checker(&["true", "Looks good to me"]);
        let (correct, sentence) = checker.check_correctness("io mangio una mela").await.unwrap();

        assert!(correct);
        assert_eq!(sentence, "io mangio una mela");
    }

    #[tokio::test]
    async fn correctness_ambiguous_reply_fails_without_correction() {
        let (checker, client) = checker(&["hmm"]);
        let err = checker.check_correctness("io mangio una mela").await.unwrap_err();

        assert!(matches!(err, CheckError::Ambiguous { check: "correctness", .. }));
        assert_eq!(client.calls(), 1);
    }

    // ---- generation helpers ---

    #[tokio::test]
    async fn generation_helpers_trim_reply() {
        let (checker, _) = checker(&["  Ti piace la mela?  ", "\nIo mangio una mela.\n"]);
        assert_eq!(
            checker.alternative_sentence("mela", None).await.unwrap(),
            "Ti piace la mela?"
        );
        assert_eq!(
            checker.improved_sentence("io mangia mela").await.unwrap(),
            "Io mangio una mela."
        );
    }

    #[tokio::test]
    async fn blank_generation_is_an_error() {
        let (checker, _) = checker(&["   "]);
        let err = checker.ask_for_sentence("mela").await.unwrap_err();
        assert!(matches!(err, CheckError::EmptyReply { check: "sentence request" }));
    }
}
