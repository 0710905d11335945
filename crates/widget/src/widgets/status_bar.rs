//! Footer showing the last host event and a help cue.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const HELP_CUE: &str = "? for help";

/// Renders the status bar: the last status message on the left and the help
/// cue on the right.
pub fn render_status_bar(status: Option<&str>, area: Rect, buf: &mut Buffer) {
    let cue_width = u16::try_from(HELP_CUE.len()).unwrap_or(u16::MAX);
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(cue_width)]).areas(area);

    if let Some(status) = status {
        Paragraph::new(Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(Color::Gray),
        )))
        .render(left, buf);
    }

    Paragraph::new(Line::from(Span::styled(
        HELP_CUE,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
    .render(right, buf);
}
