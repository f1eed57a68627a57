//! Footer rendering with keybinding hints.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Theme;
use crate::session::Mode;

/// Key hints shown under the window for each session variant.
pub fn footer_keys(mode: Mode) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Interactive => &[("Enter", "run"), ("PgUp/PgDn", "scroll"), ("Esc", "quit")],
        Mode::Scripted => &[("PgUp/PgDn", "scroll"), ("q", "quit")],
    }
}

/// Render a centered footer with keybinding hints.
///
/// Takes pairs of (key, description) and joins them with " | " separators.
///
/// Example: `&[("q", "quit"), ("Enter", "run")]` renders as `"q: quit | Enter: run"`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let spans: Vec<Span<'static>> = build_footer_spans(keys, theme);
    let footer = Paragraph::new(Line::from(spans))
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ".to_string(), theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.prompt_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}
