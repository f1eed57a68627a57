//! Keyboard input handling for the portfolio window.
//!
//! Maps key presses to session events or window actions. Typing is only
//! routed to the session in the interactive variant, so `q` quits a scripted
//! session but is an ordinary letter at the prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::{Mode, SessionEvent};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed this event to the session
    Session(SessionEvent),
    /// Scroll the log toward older lines
    ScrollUp(usize),
    /// Scroll the log toward newer lines
    ScrollDown(usize),
    /// Leave the app
    Quit,
    /// Nothing to do
    Ignore,
}

/// Lines moved per PageUp/PageDown.
pub const PAGE_LINES: usize = 5;

/// Map a key event for the given session variant.
pub fn handle_key_event(key: KeyEvent, mode: Mode) -> KeyAction {
    // Key release/repeat events (reported on some platforms) are not input.
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    match key.code {
        // === Quit ===
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') if mode == Mode::Scripted => KeyAction::Quit,

        // === Scrolling ===
        KeyCode::PageUp => KeyAction::ScrollUp(PAGE_LINES),
        KeyCode::PageDown => KeyAction::ScrollDown(PAGE_LINES),

        // === Prompt editing ===
        _ if mode != Mode::Interactive => KeyAction::Ignore,
        KeyCode::Enter => KeyAction::Session(SessionEvent::Submit),
        KeyCode::Backspace => KeyAction::Session(SessionEvent::Backspace),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            KeyAction::Session(SessionEvent::Char(c))
        }

        _ => KeyAction::Ignore,
    }
}
