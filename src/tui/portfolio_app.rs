//! Portfolio TUI application
//!
//! Runs one session full-screen: feeds clock ticks and key presses into the
//! session reducer and draws the transcript after every step.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::Event;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use tracing::info;

use super::app::App;
use super::keyboard::{handle_key_event, KeyAction};
use super::status_footer::{footer_keys, render_footer};
use super::theme::Theme;
use super::ui::{cursor_blink_on, max_scroll_back, render_window, window_area, WindowView};
use crate::session::{Mode, Session, SessionEvent, Transition};

/// Frame period; short enough for a 70 ms typing cadence.
const FRAME_TICK: Duration = Duration::from_millis(16);

/// Window chrome text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub title: String,
    pub prompt: String,
}

/// Portfolio application state
pub struct PortfolioApp {
    /// Base app for terminal handling
    app: App,
    session: Session,
    chrome: Chrome,
    theme: Theme,
    /// Lines scrolled up from the newest line
    scroll_back: usize,
    started: Instant,
}

impl PortfolioApp {
    pub fn new(session: Session, chrome: Chrome, theme: Theme) -> Result<Self> {
        let app = App::new(FRAME_TICK)?;
        Ok(Self {
            app,
            session,
            chrome,
            theme,
            scroll_back: 0,
            started: Instant::now(),
        })
    }

    /// Play the session until the visitor quits.
    pub fn run(&mut self) -> Result<()> {
        self.started = Instant::now();
        self.session.start(self.started);
        info!(mode = ?self.session.mode(), "Session started");

        loop {
            self.step(SessionEvent::Tick(Instant::now()));
            self.draw()?;

            let Some(event) = self.app.next_event()? else {
                continue;
            };
            // Resize and focus events need no handling; the next draw adapts.
            let Event::Key(key) = event else {
                continue;
            };
            match handle_key_event(key, self.session.mode()) {
                KeyAction::Quit => break,
                KeyAction::Session(session_event) => self.step(session_event),
                KeyAction::ScrollUp(lines) => {
                    self.scroll_back = self.scroll_back.saturating_add(lines);
                }
                KeyAction::ScrollDown(lines) => {
                    self.scroll_back = self.scroll_back.saturating_sub(lines);
                }
                KeyAction::Ignore => {}
            }
        }

        info!("Session closed");
        Ok(())
    }

    fn step(&mut self, event: SessionEvent) {
        self.scroll_back = step_session(&mut self.session, self.scroll_back, event);
    }

    fn draw(&mut self) -> Result<()> {
        let transcript = self.session.transcript();
        let (_, height) = self.app.size()?;
        // Frame minus footer, borders and title bar.
        let body_height = height.saturating_sub(4);
        self.scroll_back = self
            .scroll_back
            .min(max_scroll_back(transcript.len(), body_height));

        let view = WindowView {
            title: &self.chrome.title,
            prompt: &self.chrome.prompt,
            transcript: &transcript,
            cursor_on: cursor_blink_on(self.started.elapsed()),
            scroll_back: self.scroll_back,
        };
        let mode = self.session.mode();
        let theme = &self.theme;

        self.app.draw(|frame| {
            let area = frame.area();
            Self::render(frame, area, &view, mode, theme);
        })
    }

    /// Draw the window and footer.
    /// Public for rendering tests.
    pub fn render(frame: &mut Frame, area: Rect, view: &WindowView, mode: Mode, theme: &Theme) {
        let [window, footer] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
        render_window(frame, window_area(window), view, theme);
        render_footer(frame, footer, footer_keys(mode), theme);
    }
}

/// Apply `event` and return the new scroll-back offset.
///
/// Visitor submissions and the end of the intro snap the log to the bottom.
/// Otherwise a scrolled-back view stays on the same lines while the log grows
/// underneath it.
fn step_session(session: &mut Session, scroll_back: usize, event: SessionEvent) -> usize {
    let before = (scroll_back > 0).then(|| session.transcript().len());
    let transitions = session.update(event);
    if transitions
        .iter()
        .any(|t| matches!(t, Transition::Submitted { .. } | Transition::IntroTyped))
    {
        return 0;
    }
    match before {
        Some(before) if !transitions.is_empty() => {
            let grown = session.transcript().len().saturating_sub(before);
            scroll_back + grown
        }
        _ => scroll_back,
    }
}
