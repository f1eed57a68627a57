//! termfolio - a retro command-prompt portfolio
//!
//! A canned command catalog is played back in a fake terminal window: commands
//! type themselves out character by character, then their output appears.
//! In the interactive variant the visitor types commands at a live prompt.
//!
//! The animation core ([`sequencer`], [`session`]) is clock-free and driven by
//! explicit events, so it can be tested without a terminal. [`tui`] renders it.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod sequencer;
pub mod session;
pub mod timer;
pub mod tui;

pub use catalog::{Catalog, Command};
pub use config::Config;
pub use error::{CatalogError, ConfigError, UnrecognizedCommand};
pub use sequencer::{SequencerState, TypingConfig, TypingSequencer};
pub use session::{
    History, HistoryEntry, InteractiveSession, Mode, ScriptedSession, Session, SessionEvent,
    Timing, Transcript, TranscriptLine, Transition,
};
