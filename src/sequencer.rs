//! Typing sequencer
//!
//! Reveals a source text one character per `char_delay`, waits a settle delay,
//! hides the cursor and reports completion exactly once per activation.
//!
//! The sequencer owns at most one live timer. Starting a new activation
//! replaces it, so an old activation can never reveal characters into, or
//! complete on behalf of, a newer one.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::timer::{Interval, Timeout};

/// Pacing for one sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingConfig {
    /// Delay between two revealed characters
    pub char_delay: Duration,
    /// Pause after the last character before the cursor hides
    pub settle_delay: Duration,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(70),
            settle_delay: Duration::from_millis(800),
        }
    }
}

/// Observable state of the current activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencerState {
    /// Text being typed
    pub source: String,
    /// Number of characters (Unicode scalar values) shown so far
    pub revealed: usize,
    /// Whether the blinking cursor should be drawn after the text
    pub cursor_visible: bool,
    /// Set once the settle delay has elapsed
    pub completed: bool,
    /// Latch: completion has already been reported for this activation
    pub completion_signalled: bool,
}

impl SequencerState {
    fn fresh(source: String) -> Self {
        Self {
            source,
            revealed: 0,
            cursor_visible: true,
            completed: false,
            completion_signalled: false,
        }
    }

    /// Length of the source in characters.
    pub fn len(&self) -> usize {
        self.source.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// The revealed prefix of the source.
    pub fn visible_text(&self) -> &str {
        match self.source.char_indices().nth(self.revealed) {
            Some((byte_idx, _)) => &self.source[..byte_idx],
            None => &self.source,
        }
    }
}

/// Reported by [`TypingSequencer::tick`] when an activation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Which activation completed
    pub activation: u64,
    /// When the settle delay elapsed
    pub at: Instant,
}

/// The single live timer of a sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    /// Not started, or deactivated
    Idle,
    Revealing(Interval),
    Settling(Timeout),
    Done,
}

/// Drives the per-character reveal of one text at a time.
#[derive(Debug, Clone)]
pub struct TypingSequencer {
    config: TypingConfig,
    state: SequencerState,
    phase: Phase,
    activation: u64,
}

impl TypingSequencer {
    pub fn new(config: TypingConfig) -> Self {
        Self {
            config,
            state: SequencerState::fresh(String::new()),
            phase: Phase::Idle,
            activation: 0,
        }
    }

    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    /// Counter of the current activation (0 before the first one).
    pub fn activation(&self) -> u64 {
        self.activation
    }

    /// True while characters are being revealed or the settle delay runs.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Revealing(_) | Phase::Settling(_))
    }

    /// Start a new activation at `now`, discarding any previous progress.
    pub fn activate(&mut self, text: impl Into<String>, now: Instant) {
        self.activation += 1;
        self.state = SequencerState::fresh(text.into());
        self.phase = Phase::Revealing(Interval::starting_at(now, self.config.char_delay));
        debug!(
            activation = self.activation,
            chars = self.state.len(),
            "typing activation started"
        );
    }

    /// Activate only if `text` is not already the live or finished activation.
    ///
    /// Calling this on every frame is safe: repeated calls with the same text
    /// neither restart the reveal nor produce a second completion.
    pub fn ensure_active(&mut self, text: &str, now: Instant) {
        let same_text = self.state.source == text;
        if same_text && !matches!(self.phase, Phase::Idle) {
            return;
        }
        self.activate(text, now);
    }

    /// Withdraw the start signal. The live timer is dropped and no
    /// completion will be reported for this activation.
    pub fn deactivate(&mut self) {
        if self.is_active() {
            debug!(activation = self.activation, "typing activation cancelled");
        }
        self.phase = Phase::Idle;
    }

    /// Advance the animation to `now`.
    ///
    /// Processes every reveal that is due, in order. Returns a completion the
    /// one time the settle delay elapses for this activation.
    pub fn tick(&mut self, now: Instant) -> Option<Completion> {
        loop {
            match &mut self.phase {
                Phase::Idle | Phase::Done => return None,
                Phase::Revealing(interval) => {
                    let due = interval.poll(now)?;
                    if self.state.revealed < self.state.len() {
                        self.state.revealed += 1;
                        continue;
                    }
                    if self.state.completion_signalled {
                        self.phase = Phase::Done;
                        return None;
                    }
                    self.state.completion_signalled = true;
                    self.phase = Phase::Settling(Timeout::after(due, self.config.settle_delay));
                }
                Phase::Settling(timeout) => {
                    if !timeout.expired(now) {
                        return None;
                    }
                    let at = timeout.deadline();
                    self.state.cursor_visible = false;
                    self.state.completed = true;
                    self.phase = Phase::Done;
                    debug!(activation = self.activation, "typing activation completed");
                    return Some(Completion {
                        activation: self.activation,
                        at,
                    });
                }
            }
        }
    }
}

impl Default for TypingSequencer {
    fn default() -> Self {
        Self::new(TypingConfig::default())
    }
}
