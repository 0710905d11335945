//! Shared helpers for rendering tests.

use ghostty_config::WidgetConfig;
use ghostty_protocol::{DEFAULT_DELIMITER, SnapshotFields};
use ratatui::buffer::Buffer;

use crate::projection::project_fields;
use crate::surface::{Palette, WidgetView};

/// Converts a buffer to text, one line per row, with trailing spaces
/// trimmed.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// Builds the default-config view of a raw snapshot.
#[must_use]
pub(crate) fn view_of(titles: &str, ids: &str, completed: &str, count: &str) -> WidgetView {
    let config = WidgetConfig::default();
    let fields = SnapshotFields {
        titles: titles.to_string(),
        ids: ids.to_string(),
        completed: completed.to_string(),
        pending_count: count.to_string(),
    };
    let projection = project_fields(&fields, DEFAULT_DELIMITER, config.capacity);
    WidgetView::build(&projection, &config, &Palette::default())
}
