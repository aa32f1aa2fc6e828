//! Prompt builder for the tutoring checks.
//!
//! [`PromptBuilder`] knows the language pair and produces the message list
//! for every request the tutor sends.  Each method returns a fresh
//! `Vec<ChatMessage>`; nothing is shared between requests.

use crate::llm::client::ChatMessage;

// ---------------------------------------------------------------------------
// Fixed instructions
// ---------------------------------------------------------------------------

const IMPROVE_SYSTEM_TAIL: &str = "\
Your task is to correct and improve sentences for grammatical accuracy. \
Pay close attention to grammar, context, and idioms in languages. \
You will evaluate and provide better versions of sentences. \
Ignore capitalization and avoid using discourse markers.";

const ONLY_SENTENCE: &str = "Output only the sentence itself. Avoid using any discourse markers.";

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds the chat messages for each tutoring request.
///
/// # Example
/// ```rust
/// use vocab_tutor::llm::PromptBuilder;
///
/// let builder = PromptBuilder::new("English", "Italian");
/// let messages = builder.translation_check("apple", "mela");
/// assert_eq!(messages.len(), 2);
/// assert!(messages[1].content.contains("'apple'"));
/// ```
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    native: String,
    target: String,
}

impl PromptBuilder {
    pub fn new(native_language: &str, target_language: &str) -> Self {
        Self {
            native: native_language.to_string(),
            target: target_language.to_string(),
        }
    }

    pub fn native_language(&self) -> &str {
        &self.native
    }

    pub fn target_language(&self) -> &str {
        &self.target
    }

    /// Shared tutor persona used by the translation and generation prompts.
    pub fn tutor_system(&self) -> ChatMessage {
        let (native, target) = (&self.native, &self.target);
        ChatMessage::system(format!(
            "You are an expert translator and language tutor. \
If I provide you the translation of a word in a different form (singular/plural), \
you never accept the plural translation of a singular word, and vice versa. \
You pay attention, consider, and give particular importance to the nuances of grammar, \
context, and idioms in languages. You check and evaluate my translation of {native} words \
into {target}. You will also check and give feedback on my sentences, always in {native}. \
Ignore letter capitalization. Refrain from only translating my sentence. \
You are prohibited from using a language other than {native} at all times."
        ))
    }

    // -----------------------------------------------------------------------
    // Translation
    // -----------------------------------------------------------------------

    pub fn translation_check(&self, word: &str, answer: &str) -> Vec<ChatMessage> {
        vec![
            self.tutor_system(),
            ChatMessage::user(format!(
                "Considering the differences between singular and plural translations, \
is the {} word '{word}' correctly translated to \"{}\" as \"{answer}\"? \
Reply with: \"true\" if your answer is positive, \"false\" if your answer is negative.",
                self.native, self.target
            )),
        ]
    }

    pub fn translation_request(&self, word: &str) -> Vec<ChatMessage> {
        vec![
            self.tutor_system(),
            ChatMessage::user(format!(
                "translate the {} word \"{word}\" to {}. Respond in exactly this format: \
'The translation of the word [word] in [target language] is [the one correctly translated word].'.",
                self.native, self.target
            )),
        ]
    }

    pub fn sentence_request(&self, word: &str) -> Vec<ChatMessage> {
        vec![
            self.tutor_system(),
            ChatMessage::user(format!(
                "Please ask me to try to put the \"{word}\" in a sentence in {}. \
Output only the request to me. Only in {}.",
                self.target, self.native
            )),
        ]
    }

    // -----------------------------------------------------------------------
    // Sentence checks
    // -----------------------------------------------------------------------

    pub fn word_presence(&self, word: &str, sentence: &str) -> Vec<ChatMessage> {
        let target = &self.target;
        vec![
            ChatMessage::system(format!(
                "You are an expert in the {target} language. Your task is to check if the word \
'{word}' or any of its variations or conjugated forms is present in the sentence."
            )),
            ChatMessage::user(format!(
                "Can you please verify if the {target} word '{word}' or any of its variations \
or any of its conjugated forms is present in the {target} sentence '{sentence}'? \
Reply with 'true' if the word or its variations are present and 'false' otherwise."
            )),
        ]
    }

    fn correctness_system(sentence: &str) -> ChatMessage {
        ChatMessage::system(format!(
            "Act as an expert in text analysis, you have been evaluating alphanumeric characters \
in sentences for 10 years. You've helped multiple clients by discriminating punctuation and \
capitalization from the alphanumeric characters within sentences. Evaluate the following \
sentence by focusing solely on its alphanumeric characters '{sentence}'. Disregard any \
punctuation and avoid considering capitalization. Think of a grammar analysis of its \
alphanumeric pattern before responding with one word: \"true\" or \"false\"."
        ))
    }

    pub fn correctness_check(&self, sentence: &str) -> Vec<ChatMessage> {
        vec![
            Self::correctness_system(sentence),
            ChatMessage::user(format!(
                "Act as a {target} expert that disregards random uppercase and lowercase letters \
in sentences, in addition to misplaced punctuation. Considering only the words and their order, \
is the provided {target} sentence \"{sentence}\" grammatically correct? \
Reply only with \"true\" or \"false\".",
                target = self.target
            )),
        ]
    }

    /// Same system message as [`correctness_check`](Self::correctness_check),
    /// with the question swapped for a correction request.
    pub fn correction_request(&self, sentence: &str) -> Vec<ChatMessage> {
        vec![
            Self::correctness_system(sentence),
            ChatMessage::user(format!(
                "Provide the correct sentence \"{sentence}\". Respond in this format: \
\"the correct form of your sentence is: [corrected sentence version here]\""
            )),
        ]
    }

    pub fn completeness_check(&self, sentence: &str) -> Vec<ChatMessage> {
        let target = &self.target;
        vec![
            ChatMessage::system(format!(
                "Act as an expert in text analysis, you analyze and assess if a given {target} \
sentence is an independent clause by identifying at least one noun phrase (NP) and one verb \
phrase (VP)."
            )),
            ChatMessage::user(format!(
                "Act as a {target} expert. Is \"{sentence}\" an independent clause in {target}? \
Respond with \"true\" or \"false\"."
            )),
        ]
    }

    pub fn semantics_check(&self, sentence: &str) -> Vec<ChatMessage> {
        let target = &self.target;
        vec![
            ChatMessage::system(format!(
                "Ignore all previous instructions. Act as a {target} language expert. Evaluate \
the semantic coherence of the {target} sentence '{sentence}'. Is this sentence a conventional \
and semantically meaningful expression that a native {target} speaker would use or understand \
in everyday conversation, excluding poetic or artistic interpretations? \
Reply with 'true' or 'false'."
            )),
            ChatMessage::user(format!(
                "Is the {target} sentence \"{sentence}\" semantically meaningful in {target}? \
Reply with \"true\" or \"false\"."
            )),
        ]
    }

    // -----------------------------------------------------------------------
    // Generation helpers
    // -----------------------------------------------------------------------

    /// `sentence` is the user's corrected sentence when one is known.
    pub fn alternative_sentence(&self, word: &str, sentence: Option<&str>) -> Vec<ChatMessage> {
        let target = &self.target;
        let request = match sentence.map(str::trim).filter(|s| !s.is_empty()) {
            Some(sentence) => format!(
                "You give me (the user) an alternative of this {target} sentence \"{sentence}\" \
that uses the word \"{word}\". {ONLY_SENTENCE}"
            ),
            None => format!(
                "You give me (the user) an example {target} sentence that uses the word \
\"{word}\". {ONLY_SENTENCE}"
            ),
        };
        vec![self.tutor_system(), ChatMessage::user(request)]
    }

    pub fn improved_sentence(&self, sentence: &str) -> Vec<ChatMessage> {
        let target = &self.target;
        vec![
            ChatMessage::system(format!(
                "You are an expert translator and {target} language tutor. {IMPROVE_SYSTEM_TAIL}"
            )),
            ChatMessage::user(format!(
                "You correct and improve this {target} sentence: {sentence}. {ONLY_SENTENCE}"
            )),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
