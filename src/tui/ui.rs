//! UI rendering helpers for TUI
//!
//! Draws the command-prompt window: frame, title bar with window glyphs, and
//! the transcript body that follows the newest line.

use std::time::Duration;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;
use crate::session::TranscriptLine;

/// Half-period of the cursor blink.
pub const BLINK_PERIOD: Duration = Duration::from_millis(530);

/// Minimize, maximize and close. Decoration only.
pub const WINDOW_GLYPHS: &str = "_  □  ×";

/// What to draw inside the window.
#[derive(Debug, Clone, Copy)]
pub struct WindowView<'a> {
    pub title: &'a str,
    pub prompt: &'a str,
    pub transcript: &'a [TranscriptLine],
    /// Blink phase; cursors are only drawn while this is on
    pub cursor_on: bool,
    /// Lines scrolled up from the bottom
    pub scroll_back: usize,
}

/// Render the whole window into `area`.
pub fn render_window(frame: &mut Frame, area: Rect, view: &WindowView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    let title = Paragraph::new(title_bar_line(view.title, title_area.width, theme))
        .style(theme.title_style());
    frame.render_widget(title, title_area);

    let lines = transcript_lines(view.transcript, view.prompt, view.cursor_on, theme);
    let offset = scroll_offset(lines.len(), body_area.height, view.scroll_back);
    let body = Paragraph::new(lines)
        .style(theme.text_style())
        .scroll((offset, 0));
    frame.render_widget(body, body_area);
}

/// Title on the left, window glyphs flush right.
pub fn title_bar_line(title: &str, width: u16, theme: &Theme) -> Line<'static> {
    let title = format!(" {}", title);
    let glyphs = format!("{} ", WINDOW_GLYPHS);
    let pad = (width as usize).saturating_sub(title.width() + glyphs.width());
    Line::from(vec![
        Span::styled(title, theme.title_style()),
        Span::styled(" ".repeat(pad), theme.title_style()),
        Span::styled(glyphs, theme.title_style()),
    ])
}

/// Turn transcript lines into styled lines.
pub fn transcript_lines(
    transcript: &[TranscriptLine],
    prompt: &str,
    cursor_on: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    transcript
        .iter()
        .map(|line| match line {
            TranscriptLine::Command { text, cursor } => {
                prompt_line(prompt, text, *cursor && cursor_on, theme)
            }
            TranscriptLine::Prompt { input, cursor } => {
                prompt_line(prompt, input, *cursor && cursor_on, theme)
            }
            TranscriptLine::Output(text) => Line::styled(text.clone(), theme.text_style()),
        })
        .collect()
}

fn prompt_line(prompt: &str, text: &str, show_cursor: bool, theme: &Theme) -> Line<'static> {
    let mut spans = vec![
        Span::styled(prompt.to_string(), theme.prompt_style()),
        Span::styled(text.to_string(), theme.command_style()),
    ];
    if show_cursor {
        spans.push(Span::styled(" ", theme.cursor_style()));
    }
    Line::from(spans)
}

/// Largest useful scroll-back for `total` lines in a body `height` rows tall.
pub fn max_scroll_back(total: usize, height: u16) -> usize {
    total.saturating_sub(height as usize)
}

/// Vertical scroll that shows the newest lines, moved up by `scroll_back`.
pub fn scroll_offset(total: usize, height: u16, scroll_back: usize) -> u16 {
    let bottom = max_scroll_back(total, height);
    let offset = bottom - scroll_back.min(bottom);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Whether the blinking cursor is lit `elapsed` after the session started.
pub fn cursor_blink_on(elapsed: Duration) -> bool {
    (elapsed.as_millis() / BLINK_PERIOD.as_millis()) % 2 == 0
}

/// Area for the window: inset on roomy terminals, full size otherwise.
pub fn window_area(area: Rect) -> Rect {
    if area.width >= 60 && area.height >= 16 {
        centered_rect(94, 94, area)
    } else {
        area
    }
}

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}
