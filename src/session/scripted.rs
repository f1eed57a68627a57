//! Scripted session: every catalog command plays itself in order.
//!
//! For each command: type the trigger, reveal output one line per
//! `line_interval`, wait `advance_delay`, move to the next command. After the
//! last command only a bare prompt remains.

use std::time::Instant;

use super::{SessionEvent, Timing, Transcript, TranscriptLine, Transition};
use crate::catalog::Catalog;
use crate::sequencer::TypingSequencer;
use crate::timer::{Interval, Timeout};

/// Where the current command is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptPhase {
    /// The trigger is being typed
    Typing,
    /// Output lines are appearing one per interval fire
    RevealingOutput(Interval),
    /// All output is visible; waiting before the next command
    Settling(Timeout),
    /// Every command has been shown
    Finished,
}

/// Session that plays the whole catalog without input.
#[derive(Debug, Clone)]
pub struct ScriptedSession {
    catalog: Catalog,
    timing: Timing,
    sequencer: TypingSequencer,
    current: usize,
    typed: Vec<bool>,
    visible_lines: Vec<usize>,
    phase: ScriptPhase,
}

impl ScriptedSession {
    pub fn new(catalog: Catalog, timing: Timing) -> Self {
        let len = catalog.len();
        Self {
            catalog,
            timing,
            sequencer: TypingSequencer::new(timing.typing()),
            current: 0,
            typed: vec![false; len],
            visible_lines: vec![0; len],
            phase: ScriptPhase::Typing,
        }
    }

    /// Start typing the first command.
    pub fn start(&mut self, now: Instant) {
        let first = self.catalog.intro().trigger.clone();
        self.sequencer.ensure_active(&first, now);
    }

    /// Index of the command currently playing (catalog length once finished).
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn phase(&self) -> &ScriptPhase {
        &self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, ScriptPhase::Finished)
    }

    pub fn is_typed(&self, index: usize) -> bool {
        self.typed.get(index).copied().unwrap_or(false)
    }

    /// Number of output lines of command `index` shown so far.
    pub fn visible_lines(&self, index: usize) -> usize {
        self.visible_lines.get(index).copied().unwrap_or(0)
    }

    /// Activation counter of the typing sequencer.
    pub fn typing_activations(&self) -> u64 {
        self.sequencer.activation()
    }

    pub fn update(&mut self, event: SessionEvent) -> Vec<Transition> {
        match event {
            SessionEvent::Tick(now) => self.tick(now),
            _ => Vec::new(),
        }
    }

    fn tick(&mut self, now: Instant) -> Vec<Transition> {
        let mut transitions = Vec::new();
        loop {
            match &mut self.phase {
                ScriptPhase::Finished => break,
                ScriptPhase::Typing => {
                    let Some(done) = self.sequencer.tick(now) else {
                        break;
                    };
                    self.typed[self.current] = true;
                    transitions.push(Transition::CommandTyped(self.current));
                    self.phase = self.output_phase(done.at);
                }
                ScriptPhase::RevealingOutput(interval) => {
                    let Some(due) = interval.poll(now) else {
                        break;
                    };
                    let total = self.output_len(self.current);
                    let visible = (self.visible_lines[self.current] + 1).min(total);
                    self.visible_lines[self.current] = visible;
                    transitions.push(Transition::LineRevealed {
                        index: self.current,
                        visible,
                    });
                    if visible >= total {
                        self.phase =
                            ScriptPhase::Settling(Timeout::after(due, self.timing.advance_delay));
                    }
                }
                ScriptPhase::Settling(timeout) => {
                    if !timeout.expired(now) {
                        break;
                    }
                    let at = timeout.deadline();
                    transitions.push(self.advance(at));
                }
            }
        }
        transitions
    }

    /// Phase entered once the current command finished typing at `at`.
    fn output_phase(&self, at: Instant) -> ScriptPhase {
        if self.output_len(self.current) == 0 {
            ScriptPhase::Settling(Timeout::after(at, self.timing.advance_delay))
        } else {
            ScriptPhase::RevealingOutput(Interval::starting_at(at, self.timing.line_interval))
        }
    }

    /// Move to the next command, or finish.
    fn advance(&mut self, at: Instant) -> Transition {
        self.current += 1;
        match self.catalog.get(self.current) {
            Some(next) => {
                let trigger = next.trigger.clone();
                self.sequencer.activate(trigger, at);
                self.phase = ScriptPhase::Typing;
                Transition::Advanced(self.current)
            }
            None => {
                self.phase = ScriptPhase::Finished;
                Transition::Finished
            }
        }
    }

    fn output_len(&self, index: usize) -> usize {
        self.catalog
            .get(index)
            .map(|command| command.output.len())
            .unwrap_or(0)
    }

    pub fn transcript(&self) -> Transcript {
        let mut lines = Vec::new();
        let shown = (self.current + 1).min(self.catalog.len());
        for (index, command) in self.catalog.iter().take(shown).enumerate() {
            if index == self.current && !self.typed[index] {
                let state = self.sequencer.state();
                lines.push(TranscriptLine::Command {
                    text: state.visible_text().to_string(),
                    cursor: state.cursor_visible,
                });
            } else {
                lines.push(TranscriptLine::Command {
                    text: command.trigger.clone(),
                    cursor: false,
                });
            }
            lines.extend(
                command
                    .output
                    .iter()
                    .take(self.visible_lines[index])
                    .map(|line| TranscriptLine::output(line)),
            );
        }
        if self.is_finished() {
            lines.push(TranscriptLine::Prompt {
                input: String::new(),
                cursor: true,
            });
        }
        lines
    }
}
