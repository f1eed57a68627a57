//! Interactive session: the intro types itself, then the visitor drives.

use std::time::Instant;

use tracing::{debug, info};

use super::{
    History, HistoryEntry, InputLine, SessionEvent, Timing, Transcript, TranscriptLine,
    Transition,
};
use crate::catalog::Catalog;
use crate::sequencer::TypingSequencer;

/// Session where the visitor types commands at a live prompt.
#[derive(Debug, Clone)]
pub struct InteractiveSession {
    catalog: Catalog,
    sequencer: TypingSequencer,
    ready: bool,
    history: History,
    input: InputLine,
}

impl InteractiveSession {
    pub fn new(catalog: Catalog, timing: Timing) -> Self {
        Self {
            catalog,
            sequencer: TypingSequencer::new(timing.intro_typing()),
            ready: false,
            history: History::new(),
            input: InputLine::new(),
        }
    }

    /// Start typing the intro command.
    pub fn start(&mut self, now: Instant) {
        let intro = self.catalog.intro().trigger.clone();
        self.sequencer.ensure_active(&intro, now);
    }

    /// True once the intro has finished typing.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    pub fn update(&mut self, event: SessionEvent) -> Vec<Transition> {
        match event {
            SessionEvent::Tick(now) => self.tick(now).into_iter().collect(),
            // Keystrokes before the prompt appears go nowhere.
            _ if !self.ready => Vec::new(),
            SessionEvent::Char(c) => {
                self.input.push(c);
                Vec::new()
            }
            SessionEvent::Backspace => {
                self.input.backspace();
                Vec::new()
            }
            SessionEvent::Submit => self.submit().into_iter().collect(),
        }
    }

    fn tick(&mut self, now: Instant) -> Option<Transition> {
        self.sequencer.tick(now)?;
        if self.ready {
            return None;
        }
        let intro = self.catalog.intro();
        self.history
            .push(HistoryEntry::new(intro.trigger.clone(), intro.output.clone()));
        self.ready = true;
        info!("Intro typed, prompt ready");
        Some(Transition::IntroTyped)
    }

    /// Resolve the input line against the catalog and log the result.
    ///
    /// Blank input is ignored and left in place.
    fn submit(&mut self) -> Option<Transition> {
        let command = self.input.submission()?.to_string();
        let (output, recognized) = match self.catalog.resolve(&command) {
            Ok(found) => (found.output.clone(), true),
            Err(unrecognized) => (vec![unrecognized.to_string()], false),
        };
        debug!(%command, recognized, "command submitted");
        self.history.push(HistoryEntry::new(command, output));
        self.input.clear();
        Some(Transition::Submitted { recognized })
    }

    pub fn transcript(&self) -> Transcript {
        let mut lines = Vec::new();
        if !self.ready {
            let state = self.sequencer.state();
            lines.push(TranscriptLine::Command {
                text: state.visible_text().to_string(),
                cursor: state.cursor_visible,
            });
        }
        for entry in &self.history {
            lines.push(TranscriptLine::Command {
                text: entry.command().to_string(),
                cursor: false,
            });
            lines.extend(entry.output().iter().map(|line| TranscriptLine::output(line)));
        }
        if self.ready {
            lines.push(TranscriptLine::Prompt {
                input: self.input.as_str().to_string(),
                cursor: true,
            });
        }
        lines
    }
}
