//! The tutoring dialogue.
//!
//! * [`Checker`] — the check functions, one prompt each.
//! * [`TurnOutcome`] / [`CheckResults`] — how a turn ended.
//! * [`SessionState`] — word list position and last corrected sentence.
//! * [`Session`] — the loop tying them to a [`Console`](crate::console::Console).

pub mod checks;
pub mod outcome;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use checks::{validate_sentence_length, CheckError, Checker, TranslationCheck};
pub use outcome::{CheckResults, TurnOutcome};
pub use session::{Session, SessionError};
pub use state::SessionState;
