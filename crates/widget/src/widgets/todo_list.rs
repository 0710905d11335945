//! The todo widget itself.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::surface::{RowView, WidgetView};

/// Label of the add button.
pub const ADD_BUTTON_LABEL: &str = "[ + Add todo ]";

/// A clickable part of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetHit {
    /// The todo row in the given slot.
    Row(usize),
    /// The add button.
    AddButton,
}

/// Splits the widget area into its frame, row list and button line.
fn widget_areas(area: Rect) -> (Block<'static>, Rect, Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    let [list, button] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    (block, list, button)
}

/// Renders a widget view.
///
/// The summary is the frame title. Rows show a checkbox and the todo title;
/// completed rows use their muted color and are struck through. An empty
/// list shows the empty-state message instead. The selected slot, if any,
/// is highlighted.
///
/// # Layout
///
/// ```text
/// ╭ 1 pending ─────────────╮
/// │☑ Buy milk              │
/// │☐ Call mom              │
/// │                        │
/// │     [ + Add todo ]     │
/// ╰────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ghostty_config::WidgetConfig;
/// use ghostty_protocol::TodoSnapshot;
/// use ghostty_widget::projection::project;
/// use ghostty_widget::surface::{Palette, WidgetView};
/// use ghostty_widget::widgets::render_todo_widget;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let config = WidgetConfig::default();
/// let projection = project(&TodoSnapshot::default(), config.capacity);
/// let view = WidgetView::build(&projection, &config, &Palette::default());
///
/// let area = Rect::new(0, 0, 30, 8);
/// let mut buf = Buffer::empty(area);
/// render_todo_widget(&view, None, area, &mut buf);
/// ```
pub fn render_todo_widget(view: &WidgetView, selected: Option<usize>, area: Rect, buf: &mut Buffer) {
    let (block, list, button) = widget_areas(area);
    let title = Span::styled(
        format!(" {} ", view.summary),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    block.title(title).render(area, buf);

    if let Some(message) = &view.empty_message {
        render_empty_message(message, list, buf);
    } else {
        for row in &view.rows {
            let Some(offset) = u16::try_from(row.slot).ok().filter(|&o| o < list.height) else {
                continue;
            };
            let line_area = Rect::new(list.x, list.y + offset, list.width, 1);
            render_row(row, selected == Some(row.slot), line_area, buf);
        }
    }

    Paragraph::new(Line::from(Span::styled(
        ADD_BUTTON_LABEL,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .render(button, buf);
}

fn render_row(row: &RowView, selected: bool, area: Rect, buf: &mut Buffer) {
    let mut text_style = Style::default().fg(row.color);
    if row.strikethrough {
        text_style = text_style.add_modifier(Modifier::CROSSED_OUT);
    }
    let title_width = usize::from(area.width).saturating_sub(2);
    let mut line = Line::from(vec![
        Span::styled(row.icon.symbol(), Style::default().fg(row.color)),
        Span::raw(" "),
        Span::styled(truncate_string(&row.title, title_width), text_style),
    ]);
    if selected {
        line = line.style(Style::default().add_modifier(Modifier::REVERSED));
    }
    Paragraph::new(line).render(area, buf);
}

fn render_empty_message(message: &str, list: Rect, buf: &mut Buffer) {
    if list.height == 0 {
        return;
    }
    let line_area = Rect::new(list.x, list.y + list.height / 2, list.width, 1);
    Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
    .alignment(Alignment::Center)
    .render(line_area, buf);
}

/// Finds what a click at `position` landed on, for a widget drawn in `area`.
///
/// Only visible rows are clickable.
#[must_use]
pub fn hit_test(view: &WidgetView, area: Rect, position: Position) -> Option<WidgetHit> {
    let (_, list, button) = widget_areas(area);
    if button.contains(position) {
        return Some(WidgetHit::AddButton);
    }
    if view.empty_message.is_some() || !list.contains(position) {
        return None;
    }
    let slot = usize::from(position.y - list.y);
    view.rows
        .iter()
        .any(|row| row.slot == slot)
        .then_some(WidgetHit::Row(slot))
}

/// Truncates a string to fit `max_width` terminal columns, ending in `...`
/// when cut.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return take_columns(s, max_width);
    }
    format!("{}...", take_columns(s, max_width - 3))
}

/// Longest prefix of `s` that fits in `columns`. A wide character that
/// would straddle the limit is left out.
fn take_columns(s: &str, columns: usize) -> String {
    let mut used = 0;
    s.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= columns
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::view_of;

    #[test]
    fn truncate_string_short() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello", 5), "Hello");
    }

    #[test]
    fn truncate_string_long() {
        assert_eq!(truncate_string("Hello, World!", 10), "Hello, ...");
    }

    #[test]
    fn truncate_string_tiny_width() {
        assert_eq!(truncate_string("Hello", 3), "Hel");
        assert_eq!(truncate_string("Hello", 0), "");
    }

    #[test]
    fn truncate_string_counts_wide_characters_as_two_columns() {
        // Eight columns wide, four characters.
        assert_eq!(truncate_string("牛奶牛奶", 8), "牛奶牛奶");
        assert_eq!(truncate_string("牛奶牛奶", 7), "牛奶...");
        assert_eq!(truncate_string("牛奶牛奶", 6), "牛...");
        assert_eq!(truncate_string("a牛奶", 2), "a");
    }

    #[test]
    fn wide_title_is_truncated_with_marker() {
        let view = view_of("买牛奶买牛奶买牛奶", "1", "0", "1");
        let area = Rect::new(0, 0, 16, 5);
        let mut buf = Buffer::empty(area);

        render_todo_widget(&view, None, area, &mut buf);

        // Inner width 14: icon and space leave 12 columns for the title.
        let row: String = (1..15).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.trim_end().ends_with("..."), "row was {row:?}");
        assert!(row.starts_with("☐ 买"), "row was {row:?}");
        assert_eq!(buf[(11, 1)].symbol(), ".");
    }

    #[test]
    fn completed_row_is_crossed_out() {
        let view = view_of("Buy milk|||Call mom", "1|||2", "1|||0", "1");
        let area = Rect::new(0, 0, 24, 6);
        let mut buf = Buffer::empty(area);

        render_todo_widget(&view, None, area, &mut buf);

        let done = &buf[(3, 1)];
        assert!(done.modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(done.fg, Color::Rgb(0x88, 0x88, 0x88));

        let pending = &buf[(3, 2)];
        assert!(!pending.modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(pending.fg, Color::Rgb(0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn selected_row_is_reversed() {
        let view = view_of("A|||B", "1|||2", "", "2");
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);

        render_todo_widget(&view, Some(1), area, &mut buf);

        assert!(!buf[(1, 1)].modifier.contains(Modifier::REVERSED));
        assert!(buf[(1, 2)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn rows_beyond_area_are_skipped() {
        let view = view_of("A|||B|||C|||D|||E", "1|||2|||3|||4|||5", "", "5");
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);

        // Two list rows fit; must not panic or overdraw the button.
        render_todo_widget(&view, None, area, &mut buf);
        assert_eq!(buf[(1, 3)].symbol(), " ");
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let view = view_of("A", "1", "", "1");
        for (w, h) in [(0, 0), (1, 1), (2, 2), (3, 3)] {
            let area = Rect::new(0, 0, w, h);
            let mut buf = Buffer::empty(area);
            render_todo_widget(&view, Some(0), area, &mut buf);
        }
    }

    #[test]
    fn hit_test_rows_and_button() {
        let view = view_of("A|||B", "1|||2", "", "2");
        let area = Rect::new(10, 5, 20, 8);

        assert_eq!(hit_test(&view, area, Position::new(12, 6)), Some(WidgetHit::Row(0)));
        assert_eq!(hit_test(&view, area, Position::new(25, 7)), Some(WidgetHit::Row(1)));
        assert_eq!(hit_test(&view, area, Position::new(12, 8)), None);
        assert_eq!(hit_test(&view, area, Position::new(15, 11)), Some(WidgetHit::AddButton));
        assert_eq!(hit_test(&view, area, Position::new(10, 5)), None);
        assert_eq!(hit_test(&view, area, Position::new(0, 0)), None);
    }

    #[test]
    fn hit_test_empty_widget_only_has_button() {
        let view = view_of("", "", "", "0");
        let area = Rect::new(0, 0, 20, 8);

        assert_eq!(hit_test(&view, area, Position::new(5, 3)), None);
        assert_eq!(hit_test(&view, area, Position::new(5, 6)), Some(WidgetHit::AddButton));
    }
}
