//! Help overlay listing the preview key bindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_rect;

const HELP_WIDTH: u16 = 36;
const HELP_HEIGHT: u16 = 16;

/// Key bindings shown in the overlay, grouped by section.
const BINDINGS: [(&str, &[(&str, &str)]); 2] = [
    ("Widget", &[
        ("↑ ↓", "Select todo"),
        ("Space", "Toggle done"),
        ("a", "Tap add button"),
        ("r", "Update broadcast"),
    ]),
    ("Host", &[
        ("s", "Toggle secure mode"),
        ("?", "Toggle help"),
        ("Esc", "Close help"),
        ("Ctrl+C", "Quit"),
    ]),
];

/// Renders the help overlay centered in `area`.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use ghostty_widget::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);
    Clear.render(popup, buf);

    let block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(help_lines()).block(block).render(popup, buf);
}

fn help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);

    let mut lines = vec![Line::from("")];
    for (section, keys) in BINDINGS {
        lines.push(Line::from(Span::styled(format!("  {section}"), header_style)));
        for (key, action) in keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<11}"), key_style),
                Span::styled(*action, text_style),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));
    lines
}
