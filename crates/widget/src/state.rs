//! Preview state.
//!
//! Tracks which widget row is selected, whether the help overlay is up, and
//! the last event reported in the status bar. The widget content itself is
//! never cached here; it is re-projected from the store on every update.

/// Mutable state of the widget preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    /// Slot of the selected row, if any row is visible.
    pub selected: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Last status message.
    pub status: Option<String>,
}

impl PreviewState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the selection on one of `visible` rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghostty_widget::PreviewState;
    ///
    /// let mut state = PreviewState::new();
    /// state.clamp_selection(3);
    /// assert_eq!(state.selected, Some(0));
    ///
    /// state.selected = Some(2);
    /// state.clamp_selection(2);
    /// assert_eq!(state.selected, Some(1));
    ///
    /// state.clamp_selection(0);
    /// assert_eq!(state.selected, None);
    /// ```
    pub fn clamp_selection(&mut self, visible: usize) {
        self.selected = match (visible, self.selected) {
            (0, _) => None,
            (_, None) => Some(0),
            (n, Some(slot)) => Some(slot.min(n - 1)),
        };
    }

    /// Moves the selection up one row, stopping at the first.
    pub fn select_previous(&mut self) {
        if let Some(slot) = self.selected {
            self.selected = Some(slot.saturating_sub(1));
        }
    }

    /// Moves the selection down one row, stopping at the last of `visible`.
    pub fn select_next(&mut self, visible: usize) {
        if let Some(slot) = self.selected.filter(|slot| slot + 1 < visible) {
            self.selected = Some(slot + 1);
        }
    }

    /// Records a status message.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }
}
