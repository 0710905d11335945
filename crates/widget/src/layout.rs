//! Layout measurements for the preview.

use ratatui::layout::Rect;

/// Height of the header line.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the rendered widget, borders included.
pub const WIDGET_WIDTH: u16 = 36;

/// Rows the widget uses besides its todo rows: two borders and the add
/// button.
pub const WIDGET_CHROME_HEIGHT: u16 = 3;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = WIDGET_WIDTH;

/// Returns the widget height for `capacity` todo rows.
///
/// # Examples
///
/// ```
/// use ghostty_widget::layout::widget_height;
///
/// assert_eq!(widget_height(5), 8);
/// ```
#[must_use]
pub fn widget_height(capacity: usize) -> u16 {
    u16::try_from(capacity)
        .unwrap_or(u16::MAX)
        .saturating_add(WIDGET_CHROME_HEIGHT)
}

/// Returns the minimum terminal height for a widget with `capacity` rows.
#[must_use]
pub fn min_height(capacity: usize) -> u16 {
    widget_height(capacity)
        .saturating_add(HEADER_HEIGHT)
        .saturating_add(STATUS_BAR_HEIGHT)
}

/// Centers a `width` by `height` rectangle in `area`, clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
