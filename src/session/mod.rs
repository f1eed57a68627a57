//! Session controllers
//!
//! A session decides which command is current, what has been revealed so far,
//! and (in the interactive variant) what the visitor has typed. Two variants
//! exist:
//!
//! - `interactive`: the intro types itself, then the visitor runs commands
//! - `scripted`: every catalog command types itself in order
//!
//! Both are driven through one reducer, [`Session::update`], fed with
//! [`SessionEvent`]s by the event loop. Neither reads the clock.

mod history;
mod input;
mod interactive;
mod scripted;
mod transcript;

pub use history::{History, HistoryEntry};
pub use input::InputLine;
pub use interactive::InteractiveSession;
pub use scripted::{ScriptPhase, ScriptedSession};
pub use transcript::{Transcript, TranscriptLine};

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::sequencer::TypingConfig;

/// Which session variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Intro types itself, then the visitor types commands
    #[default]
    Interactive,
    /// Every command types itself in catalog order
    Scripted,
}

/// Delays used by both session variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay between typed characters
    pub char_delay: Duration,
    /// Cursor settle delay after a scripted command finishes typing
    pub settle_delay: Duration,
    /// Cursor settle delay after the interactive intro finishes typing
    pub intro_settle_delay: Duration,
    /// Delay between revealed output lines (scripted)
    pub line_interval: Duration,
    /// Pause after the last output line before the next command (scripted)
    pub advance_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(70),
            settle_delay: Duration::from_millis(800),
            intro_settle_delay: Duration::from_millis(600),
            line_interval: Duration::from_millis(400),
            advance_delay: Duration::from_millis(600),
        }
    }
}

impl Timing {
    /// Sequencer pacing for scripted commands.
    pub fn typing(&self) -> TypingConfig {
        TypingConfig {
            char_delay: self.char_delay,
            settle_delay: self.settle_delay,
        }
    }

    /// Sequencer pacing for the interactive intro.
    pub fn intro_typing(&self) -> TypingConfig {
        TypingConfig {
            char_delay: self.char_delay,
            settle_delay: self.intro_settle_delay,
        }
    }
}

/// Everything that can happen to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Time passed; fire any due timers
    Tick(Instant),
    /// A printable character was typed
    Char(char),
    /// The last input character was erased
    Backspace,
    /// The visitor accepted the input line
    Submit,
}

/// State changes reported back by [`Session::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The interactive intro finished typing and the prompt is live
    IntroTyped,
    /// A scripted command finished typing
    CommandTyped(usize),
    /// A scripted output line became visible
    LineRevealed { index: usize, visible: usize },
    /// The scripted session moved on to the command at this index
    Advanced(usize),
    /// The scripted session showed its last command
    Finished,
    /// A non-blank input line was submitted
    Submitted { recognized: bool },
}

/// A running session of either variant.
#[derive(Debug, Clone)]
pub enum Session {
    Interactive(InteractiveSession),
    Scripted(ScriptedSession),
}

impl Session {
    pub fn new(mode: Mode, catalog: Catalog, timing: Timing) -> Self {
        match mode {
            Mode::Interactive => Self::Interactive(InteractiveSession::new(catalog, timing)),
            Mode::Scripted => Self::Scripted(ScriptedSession::new(catalog, timing)),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Interactive(_) => Mode::Interactive,
            Self::Scripted(_) => Mode::Scripted,
        }
    }

    /// Begin typing the first command at `now`.
    pub fn start(&mut self, now: Instant) {
        match self {
            Self::Interactive(session) => session.start(now),
            Self::Scripted(session) => session.start(now),
        }
    }

    /// Apply one event and report what changed.
    pub fn update(&mut self, event: SessionEvent) -> Vec<Transition> {
        let transitions = match self {
            Self::Interactive(session) => session.update(event),
            Self::Scripted(session) => session.update(event),
        };
        for transition in &transitions {
            debug!(?transition, "session transition");
        }
        transitions
    }

    /// Whether typed characters currently reach an input line.
    pub fn accepts_input(&self) -> bool {
        match self {
            Self::Interactive(session) => session.is_ready(),
            Self::Scripted(_) => false,
        }
    }

    pub fn transcript(&self) -> Transcript {
        match self {
            Self::Interactive(session) => session.transcript(),
            Self::Scripted(session) => session.transcript(),
        }
    }
}
