//! Configuration module for the vocabulary tutor.
//!
//! Provides `AppConfig` (top-level settings), the `LlmConfig` and
//! `TutorConfig` sub-configs, `AppPaths` for the platform config directory,
//! and TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, LlmConfig, TutorConfig};
