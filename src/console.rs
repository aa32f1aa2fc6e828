//! Terminal I/O for the tutoring dialogue.
//!
//! The session talks to the user only through the [`Console`] trait so the
//! dialogue can be driven by scripted input in tests.  [`TerminalConsole`]
//! is the real implementation: stdin lines in, colored text out.

use std::io;

use async_trait::async_trait;
use console::{style, Term};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// How a line of output should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Welcome text shown once at start-up.
    Banner,
    /// The native-language word the user must translate.
    Word,
    /// The model's request to use the word in a sentence.
    Request,
    /// Feedback from the tutor.
    Tutor,
    /// Re-prompt after invalid input.
    Hint,
}

/// Line-oriented dialogue with the user.
#[async_trait]
pub trait Console: Send {
    /// Show `prompt` and read one line.  `Ok(None)` means input is closed.
    async fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn say(&mut self, tone: Tone, text: &str) -> io::Result<()>;
}

/// Render a line for the terminal.
fn render(tone: Tone, text: &str) -> String {
    match tone {
        Tone::Banner => style(text).red().to_string(),
        Tone::Word => format!("     {}", style(format!("'{text}'")).bold()),
        Tone::Request => style(format!("    {text}")).red().to_string(),
        Tone::Tutor => style(format!("Tutor: {text}")).red().to_string(),
        Tone::Hint => format!("Tutor: {text}"),
    }
}

// ---------------------------------------------------------------------------
// TerminalConsole
// ---------------------------------------------------------------------------

pub struct TerminalConsole {
    term: Term,
    lines: Lines<BufReader<Stdin>>,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for TerminalConsole {
    async fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.term.write_str(prompt)?;
        self.term.flush()?;
        self.lines.next_line().await
    }

    fn say(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        self.term.write_line(&render(tone, text))
    }
}
