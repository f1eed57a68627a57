//! Rendering-agnostic view of a session.
//!
//! Sessions project their state into a flat list of lines. The TUI draws these
//! and nothing else, so everything a visitor sees can be asserted on without a
//! terminal.

use crate::catalog::display_line;

/// One visual line of the terminal log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptLine {
    /// A prompt followed by a (possibly partially typed) command
    Command { text: String, cursor: bool },
    /// A line of command output
    Output(String),
    /// The live input prompt
    Prompt { input: String, cursor: bool },
}

impl TranscriptLine {
    /// Output line, with spacer placeholders rendered as empty lines.
    pub fn output(line: &str) -> Self {
        Self::Output(display_line(line).to_string())
    }
}

/// Ordered lines of a session, top to bottom.
pub type Transcript = Vec<TranscriptLine>;
