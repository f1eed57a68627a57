//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for TUI) and ANSI escape codes (for CLI).

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Command output text
    pub text_primary: Color,
    /// Dimmed text (footer hints)
    pub text_secondary: Color,
    /// Prompt color
    pub accent: Color,
    /// Command text after the prompt
    pub command: Color,
    /// Error text (CLI only)
    pub error: Color,
    /// Title bar text
    pub title_fg: Color,
    /// Title bar fill
    pub title_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::cmd()
    }
}

impl Theme {
    /// Names accepted by [`Theme::by_name`].
    pub const NAMES: [&'static str; 3] = ["cmd", "phosphor", "amber"];

    /// Windows command prompt: light gray on black, white title bar.
    pub fn cmd() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Gray,
            command: Color::White,
            error: Color::Red,
            title_fg: Color::Black,
            title_bg: Color::Gray,
        }
    }

    /// Green phosphor monitor.
    pub fn phosphor() -> Self {
        Self {
            text_primary: Color::Green,
            text_secondary: Color::DarkGray,
            accent: Color::LightGreen,
            command: Color::LightGreen,
            error: Color::Red,
            title_fg: Color::Black,
            title_bg: Color::Green,
        }
    }

    /// Amber monochrome monitor.
    pub fn amber() -> Self {
        Self {
            text_primary: Color::Yellow,
            text_secondary: Color::DarkGray,
            accent: Color::LightYellow,
            command: Color::LightYellow,
            error: Color::LightRed,
            title_fg: Color::Black,
            title_bg: Color::Yellow,
        }
    }

    /// Look up a theme by its config name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "cmd" => Some(Self::cmd()),
            "phosphor" => Some(Self::phosphor()),
            "amber" => Some(Self::amber()),
            _ => None,
        }
    }

    // Style helpers

    /// Style for command output.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the prompt.
    pub fn prompt_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for command text.
    pub fn command_style(&self) -> Style {
        Style::default().fg(self.command)
    }

    /// Style for the block cursor.
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.command)
            .add_modifier(Modifier::REVERSED)
    }

    /// Style for the title bar row.
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title_fg).bg(self.title_bg)
    }

    /// Style for the window frame.
    pub fn border_style(&self) -> Style {
        self.text_secondary_style()
    }

    // ANSI color helpers for CLI output

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the prompt color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Whether CLI output should carry color codes.
///
/// Disabled when `NO_COLOR` is set or stdout is not a terminal.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn paint(color: Color, text: &str) -> String {
    if colors_enabled() {
        wrap_ansi(color, text)
    } else {
        text.to_string()
    }
}

fn wrap_ansi(color: Color, text: &str) -> String {
    format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}
