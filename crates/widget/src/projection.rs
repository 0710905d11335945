//! Projection of a todo snapshot onto the widget's fixed row slots.
//!
//! The widget has a fixed number of rows. Each render starts from all rows
//! hidden and fills them in order from the snapshot, so nothing from a
//! previous render can survive into the next one. [`project`] is a pure
//! function: the same snapshot and capacity always produce the same
//! [`Projection`].
//!
//! # Rules
//!
//! - No titles at all: every slot hidden, the empty message shown.
//! - Otherwise the empty message is hidden and slot `i` shows item `i` for
//!   every `i < min(items, capacity)`. Titles without an identifier never
//!   become items, so they are skipped rather than rendered.
//! - Items beyond the capacity are dropped.
//! - The summary comes from the application's pending count, not from the
//!   completion flags. A zero or unparsable count reads "all done".
//!
//! # Examples
//!
//! ```
//! use ghostty_protocol::{SnapshotFields, TodoSnapshot};
//! use ghostty_widget::projection::{project, Summary};
//!
//! let fields = SnapshotFields {
//!     titles: "Buy milk|||Call mom".to_string(),
//!     ids: "1|||2".to_string(),
//!     completed: "1".to_string(),
//!     pending_count: "1".to_string(),
//! };
//! let projection = project(&TodoSnapshot::parse(&fields, "|||"), 5);
//!
//! assert_eq!(projection.visible_count(), 2);
//! assert!(projection.slots[0].completed);
//! assert!(!projection.slots[1].completed);
//! assert!(!projection.show_empty_message);
//! assert_eq!(projection.summary, Summary::Pending { count: "1".to_string() });
//! assert_eq!(projection.summary.to_string(), "1 pending");
//! ```

use std::fmt;

use ghostty_config::WidgetConfig;
use ghostty_protocol::{SnapshotFields, TodoSnapshot};

/// Render state of one widget row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SlotRenderState {
    /// Whether the row is shown.
    pub visible: bool,
    /// Row text; empty for hidden rows.
    pub title: String,
    /// Whether the row is drawn as done.
    pub completed: bool,
}

impl SlotRenderState {
    /// A visible row.
    #[must_use]
    pub fn shown(title: impl Into<String>, completed: bool) -> Self {
        Self {
            visible: true,
            title: title.into(),
            completed,
        }
    }

    /// Returns how the row should be styled.
    #[must_use]
    pub const fn style(&self) -> SlotStyle {
        if self.completed {
            SlotStyle::Completed
        } else {
            SlotStyle::Active
        }
    }
}

/// Visual treatment of a visible row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotStyle {
    /// Full-emphasis text, unchecked box.
    Active,
    /// Muted, struck-through text, checked box.
    Completed,
}

/// The widget's summary line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Summary {
    /// Nothing is pending (or the count was unreadable).
    AllDone,
    /// Some todos are pending.
    Pending {
        /// The pending count exactly as the application wrote it.
        count: String,
    },
}

impl Summary {
    /// Formats the summary with the configured labels.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghostty_config::WidgetConfig;
    /// use ghostty_widget::projection::Summary;
    ///
    /// let config = WidgetConfig {
    ///     all_done_label: "Nothing left".to_string(),
    ///     pending_suffix: " to go".to_string(),
    ///     ..Default::default()
    /// };
    ///
    /// assert_eq!(Summary::AllDone.label(&config), "Nothing left");
    /// let pending = Summary::Pending { count: "4".to_string() };
    /// assert_eq!(pending.label(&config), "4 to go");
    /// ```
    #[must_use]
    pub fn label(&self, config: &WidgetConfig) -> String {
        match self {
            Self::AllDone => config.all_done_label.clone(),
            Self::Pending { count } => config.pending_label(count),
        }
    }
}

/// Formats with the default labels. Use [`Summary::label`] for the
/// configured ones.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(&WidgetConfig::default()))
    }
}

/// Everything the widget needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Projection {
    /// One entry per row, `capacity` entries in total.
    pub slots: Vec<SlotRenderState>,
    /// The summary line.
    pub summary: Summary,
    /// Whether the "no todos" message replaces the rows.
    pub show_empty_message: bool,
}

impl Projection {
    /// Returns the number of visible rows.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.visible).count()
    }

    /// Returns the visible rows with their slot index.
    pub fn visible_slots(&self) -> impl Iterator<Item = (usize, &SlotRenderState)> {
        self.slots.iter().enumerate().filter(|(_, slot)| slot.visible)
    }
}

/// Projects a snapshot onto `capacity` row slots.
///
/// Never fails: missing or inconsistent data yields hidden rows, incomplete
/// rows, and the "all done" summary.
#[must_use]
pub fn project(snapshot: &TodoSnapshot, capacity: usize) -> Projection {
    let summary = if snapshot.pending().is_zero() {
        Summary::AllDone
    } else {
        Summary::Pending {
            count: snapshot.pending().text().to_string(),
        }
    };

    let mut slots = vec![SlotRenderState::default(); capacity];

    if snapshot.has_no_titles() {
        return Projection {
            slots,
            summary,
            show_empty_message: true,
        };
    }

    for (slot, item) in slots.iter_mut().zip(snapshot.items()) {
        *slot = SlotRenderState::shown(item.title.as_str(), item.completed);
    }

    Projection {
        slots,
        summary,
        show_empty_message: false,
    }
}

/// Parses raw snapshot fields and projects them in one step.
#[must_use]
pub fn project_fields(fields: &SnapshotFields, delimiter: &str, capacity: usize) -> Projection {
    project(&TodoSnapshot::parse(fields, delimiter), capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghostty_protocol::{DEFAULT_DELIMITER, PendingCount, TodoItem};

    fn fields(titles: &[&str], ids: &[&str], completed: &[&str], count: &str) -> SnapshotFields {
        SnapshotFields {
            titles: titles.join(DEFAULT_DELIMITER),
            ids: ids.join(DEFAULT_DELIMITER),
            completed: completed.join(DEFAULT_DELIMITER),
            pending_count: count.to_string(),
        }
    }

    fn run(titles: &[&str], ids: &[&str], completed: &[&str], count: &str) -> Projection {
        project_fields(&fields(titles, ids, completed, count), DEFAULT_DELIMITER, 5)
    }

    #[test]
    fn two_items_one_completed() {
        let projection = run(&["Buy milk", "Call mom"], &["1", "2"], &["1"], "1");

        assert_eq!(projection.slots.len(), 5);
        assert_eq!(projection.slots[0], SlotRenderState::shown("Buy milk", true));
        assert_eq!(projection.slots[1], SlotRenderState::shown("Call mom", false));
        for slot in &projection.slots[2..] {
            assert_eq!(slot, &SlotRenderState::default());
        }
        assert!(!projection.show_empty_message);
        assert_eq!(projection.summary.to_string(), "1 pending");
    }

    #[test]
    fn empty_titles_show_empty_message() {
        let projection = run(&[], &[], &[], "0");

        assert!(projection.show_empty_message);
        assert_eq!(projection.visible_count(), 0);
        assert_eq!(projection.slots.len(), 5);
        assert_eq!(projection.summary, Summary::AllDone);
    }

    #[test]
    fn empty_titles_ignore_other_fields() {
        let projection = run(&[], &["1", "2"], &["1", "1"], "2");

        assert!(projection.show_empty_message);
        assert_eq!(projection.visible_count(), 0);
        assert_eq!(projection.summary.to_string(), "2 pending");
    }

    #[test]
    fn truncates_to_capacity() {
        let projection = run(
            &["A", "B", "C", "D", "E", "F"],
            &["1", "2", "3", "4", "5", "6"],
            &[],
            "6",
        );

        let titles: Vec<&str> = projection
            .visible_slots()
            .map(|(_, slot)| slot.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(projection.slots.len(), 5);
    }

    #[test]
    fn titles_without_ids_are_skipped() {
        let projection = run(&["A", "B", "C"], &["1"], &[], "3");

        assert_eq!(projection.visible_count(), 1);
        assert_eq!(projection.slots[0].title, "A");
        assert!(!projection.slots[1].visible);
        assert!(!projection.show_empty_message);
    }

    #[test]
    fn titles_with_no_ids_at_all_hide_everything_without_empty_message() {
        let projection = run(&["A", "B"], &[], &[], "2");

        assert_eq!(projection.visible_count(), 0);
        assert!(!projection.show_empty_message);
    }

    #[test]
    fn short_completed_list_defaults_to_incomplete() {
        let projection = run(&["A", "B", "C"], &["1", "2", "3"], &["1", "1"], "1");

        assert!(projection.slots[0].completed);
        assert!(projection.slots[1].completed);
        assert!(!projection.slots[2].completed);
    }

    #[test]
    fn unparsable_count_reads_all_done() {
        let projection = run(&["A"], &["1"], &["0"], "lots");
        assert_eq!(projection.summary, Summary::AllDone);
        assert_eq!(projection.summary.to_string(), "All done!");
    }

    #[test]
    fn stale_count_is_not_reconciled() {
        let projection = run(&["A", "B"], &["1", "2"], &["1", "1"], "2");

        assert!(projection.slots.iter().take(2).all(|slot| slot.completed));
        assert_eq!(projection.summary.to_string(), "2 pending");
    }

    #[test]
    fn negative_count_still_reads_pending() {
        let projection = run(&["", "B"], &["1", "2"], &[], "-1");

        assert!(projection.slots[0].visible);
        assert_eq!(projection.slots[0].title, "");
        assert_eq!(projection.summary.to_string(), "-1 pending");
    }

    #[test]
    fn zero_capacity_has_no_slots() {
        let projection = project_fields(&fields(&["A"], &["1"], &[], "1"), DEFAULT_DELIMITER, 0);
        assert!(projection.slots.is_empty());
        assert!(!projection.show_empty_message);
    }

    #[test]
    fn structured_snapshot_projects_like_parsed_one() {
        let items = vec![
            TodoItem::new("1", "Buy milk").with_completed(true),
            TodoItem::new("2", "Call mom"),
        ];
        let direct = project(&TodoSnapshot::from_items(items, PendingCount::from(1)), 5);
        let parsed = run(&["Buy milk", "Call mom"], &["1", "2"], &["1", "0"], "1");

        assert_eq!(direct, parsed);
    }

    #[test]
    fn slot_style_follows_completion() {
        assert_eq!(SlotRenderState::shown("A", true).style(), SlotStyle::Completed);
        assert_eq!(SlotRenderState::shown("A", false).style(), SlotStyle::Active);
    }
}
