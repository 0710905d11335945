//! The render surface the widget draws onto.
//!
//! A [`Projection`] says which rows are visible and whether they are done;
//! a [`WidgetView`] adds the concrete presentation (colors, strikethrough,
//! check icons, label texts) taken from the [`WidgetConfig`]. Surfaces
//! implement [`RenderSurface`] and receive one view per widget instance.

use std::collections::BTreeMap;

use ghostty_config::WidgetConfig;
use ghostty_protocol::NavigationAction;
use ratatui::style::Color;

use crate::projection::{Projection, SlotStyle};

/// Identifier of an installed widget instance.
pub type WidgetId = i32;

/// Text colors for the two row styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color of incomplete rows.
    pub active: Color,
    /// Color of completed rows.
    pub completed: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            active: Color::Rgb(0xFF, 0xFF, 0xFF),
            completed: Color::Rgb(0x88, 0x88, 0x88),
        }
    }
}

impl Palette {
    /// Resolves the configured hex colors.
    ///
    /// # Errors
    ///
    /// Returns an error if either configured color is not `#RRGGBB`.
    pub fn from_config(config: &WidgetConfig) -> ghostty_config::Result<Self> {
        let (r, g, b) = config.active_rgb()?;
        let active = Color::Rgb(r, g, b);
        let (r, g, b) = config.completed_rgb()?;
        let completed = Color::Rgb(r, g, b);
        Ok(Self { active, completed })
    }

    /// Returns the text color for a row style.
    #[must_use]
    pub const fn color(&self, style: SlotStyle) -> Color {
        match style {
            SlotStyle::Active => self.active,
            SlotStyle::Completed => self.completed,
        }
    }
}

/// The checkbox drawn in front of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckIcon {
    /// Open box for pending todos.
    Unchecked,
    /// Ticked box for completed todos.
    Checked,
}

impl CheckIcon {
    /// Returns the glyph used by the terminal renderer.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Unchecked => "☐",
            Self::Checked => "☑",
        }
    }
}

impl From<SlotStyle> for CheckIcon {
    fn from(style: SlotStyle) -> Self {
        match style {
            SlotStyle::Active => Self::Unchecked,
            SlotStyle::Completed => Self::Checked,
        }
    }
}

/// Fully resolved presentation of one visible row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Slot index (row position).
    pub slot: usize,
    /// Row text.
    pub title: String,
    /// Text color.
    pub color: Color,
    /// Whether the text is struck through.
    pub strikethrough: bool,
    /// Checkbox in front of the text.
    pub icon: CheckIcon,
}

/// Fully resolved presentation of a widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    /// Visible rows, in slot order.
    pub rows: Vec<RowView>,
    /// Total number of slots, visible or not.
    pub capacity: usize,
    /// Summary text.
    pub summary: String,
    /// Empty-state text, when the todo list is empty.
    pub empty_message: Option<String>,
    /// What tapping the add button asks the application to do.
    pub add_action: NavigationAction,
}

impl WidgetView {
    /// Resolves a projection against the widget configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghostty_config::WidgetConfig;
    /// use ghostty_protocol::{SnapshotFields, TodoSnapshot};
    /// use ghostty_widget::projection::project;
    /// use ghostty_widget::surface::{CheckIcon, Palette, WidgetView};
    ///
    /// let fields = SnapshotFields {
    ///     titles: "Buy milk".to_string(),
    ///     ids: "1".to_string(),
    ///     completed: "1".to_string(),
    ///     pending_count: "0".to_string(),
    /// };
    /// let config = WidgetConfig::default();
    /// let projection = project(&TodoSnapshot::parse(&fields, "|||"), config.capacity);
    /// let view = WidgetView::build(&projection, &config, &Palette::default());
    ///
    /// assert_eq!(view.summary, "All done!");
    /// assert_eq!(view.rows.len(), 1);
    /// assert!(view.rows[0].strikethrough);
    /// assert_eq!(view.rows[0].icon, CheckIcon::Checked);
    /// assert!(view.empty_message.is_none());
    /// ```
    #[must_use]
    pub fn build(projection: &Projection, config: &WidgetConfig, palette: &Palette) -> Self {
        let rows = projection
            .visible_slots()
            .map(|(slot, state)| {
                let style = state.style();
                RowView {
                    slot,
                    title: state.title.clone(),
                    color: palette.color(style),
                    strikethrough: style == SlotStyle::Completed,
                    icon: CheckIcon::from(style),
                }
            })
            .collect();

        Self {
            rows,
            capacity: projection.slots.len(),
            summary: projection.summary.label(config),
            empty_message: projection
                .show_empty_message
                .then(|| config.empty_message.clone()),
            add_action: NavigationAction::OpenTodoEditor,
        }
    }
}

/// Something widget views can be applied to.
pub trait RenderSurface {
    /// Replaces whatever widget `id` currently shows with `view`.
    fn apply(&mut self, id: WidgetId, view: &WidgetView);
}

/// A surface that keeps the last view applied to each widget.
///
/// # Examples
///
/// ```
/// use ghostty_config::WidgetConfig;
/// use ghostty_protocol::TodoSnapshot;
/// use ghostty_widget::projection::project;
/// use ghostty_widget::surface::{Palette, RecordingSurface, RenderSurface, WidgetView};
///
/// let config = WidgetConfig::default();
/// let view = WidgetView::build(
///     &project(&TodoSnapshot::default(), config.capacity),
///     &config,
///     &Palette::default(),
/// );
///
/// let mut surface = RecordingSurface::default();
/// surface.apply(7, &view);
/// assert_eq!(surface.view(7), Some(&view));
/// assert_eq!(surface.applied(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    views: BTreeMap<WidgetId, WidgetView>,
    applied: usize,
}

impl RecordingSurface {
    /// Returns the last view applied to `id`.
    #[must_use]
    pub fn view(&self, id: WidgetId) -> Option<&WidgetView> {
        self.views.get(&id)
    }

    /// Returns the ids that have received a view.
    pub fn ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.views.keys().copied()
    }

    /// Returns the total number of `apply` calls.
    #[must_use]
    pub const fn applied(&self) -> usize {
        self.applied
    }
}

impl RenderSurface for RecordingSurface {
    fn apply(&mut self, id: WidgetId, view: &WidgetView) {
        self.views.insert(id, view.clone());
        self.applied += 1;
    }
}
