//! LLM access for the vocabulary tutor.
//!
//! This module provides:
//! * [`ChatClient`] — async trait implemented by every chat backend.
//! * [`ApiClient`] — OpenAI-compatible chat-completions client.
//! * [`RetryingClient`] — wraps any client with a flat retry policy.
//! * [`PromptBuilder`] — builds the message list for every tutoring request.
//! * [`reply`] — parsing of verdicts and templated answers.
//! * [`LlmError`] — error variants for LLM operations.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use vocab_tutor::config::AppConfig;
//! use vocab_tutor::llm::{ApiClient, ChatClient, PromptBuilder, RetryingClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let client = RetryingClient::from_config(ApiClient::from_config(&config.llm), &config.llm);
//!
//!     let prompts = PromptBuilder::new("English", "Italian");
//!     let reply = client
//!         .complete(&prompts.translation_check("apple", "mela"))
//!         .await
//!         .unwrap();
//!     println!("{reply}");
//! }
//! ```

pub mod client;
pub mod prompt;
pub mod reply;
pub mod retry;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{ApiClient, ChatClient, ChatMessage, LlmError, Role};
pub use prompt::PromptBuilder;
pub use reply::Verdict;
pub use retry::RetryingClient;
