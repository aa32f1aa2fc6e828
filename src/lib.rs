//! Interactive vocabulary tutor backed by an OpenAI-compatible chat API.
//!
//! The user translates words from a fixed list, writes a sentence with each
//! translated word, and gets feedback from a series of model-judged checks.

pub mod config;
pub mod console;
pub mod llm;
pub mod tutor;
