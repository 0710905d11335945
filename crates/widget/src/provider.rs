//! Widget update flow.
//!
//! [`WidgetProvider`] reacts to update broadcasts: for each installed
//! widget instance it reads the snapshot from the preference store,
//! projects it, resolves the presentation and hands the result to a
//! [`RenderSurface`]. Every update re-reads the store; nothing is cached
//! between renders.

use ghostty_config::WidgetConfig;
use ghostty_protocol::{PreferenceStore, SnapshotFields, TodoSnapshot};

use crate::projection::{Projection, project};
use crate::surface::{Palette, RenderSurface, WidgetId, WidgetView};

/// Broadcasts a widget provider receives from the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetBroadcast {
    /// Widgets should refresh their content.
    Update,
    /// The first instance of the widget was placed.
    Enabled,
    /// The last instance of the widget was removed.
    Disabled,
}

/// Renders the todo widget from a preference store.
///
/// # Examples
///
/// ```
/// use ghostty_config::WidgetConfig;
/// use ghostty_protocol::dummy::dummy_store;
/// use ghostty_widget::provider::WidgetProvider;
/// use ghostty_widget::surface::RecordingSurface;
///
/// let provider = WidgetProvider::new(WidgetConfig::default(), dummy_store()).unwrap();
/// let mut surface = RecordingSurface::default();
///
/// provider.on_update(&[1, 2], &mut surface);
///
/// assert_eq!(surface.applied(), 2);
/// assert_eq!(surface.view(1).unwrap().rows.len(), 5);
/// assert_eq!(surface.view(1).unwrap().summary, "5 pending");
/// ```
#[derive(Debug, Clone)]
pub struct WidgetProvider<S> {
    config: WidgetConfig,
    palette: Palette,
    store: S,
}

impl<S: PreferenceStore> WidgetProvider<S> {
    /// Creates a provider reading from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured colors cannot be resolved.
    pub fn new(config: WidgetConfig, store: S) -> ghostty_config::Result<Self> {
        let palette = Palette::from_config(&config)?;
        Ok(Self {
            config,
            palette,
            store,
        })
    }

    /// Returns the widget configuration.
    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Returns the backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the backing store for modification.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Reads and parses the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> TodoSnapshot {
        TodoSnapshot::parse(&SnapshotFields::read_from(&self.store), &self.config.delimiter)
    }

    /// Projects the current snapshot.
    #[must_use]
    pub fn projection(&self) -> Projection {
        project(&self.snapshot(), self.config.capacity)
    }

    /// Builds the view every widget instance currently shows.
    #[must_use]
    pub fn view(&self) -> WidgetView {
        let snapshot = self.snapshot();
        let projection = project(&snapshot, self.config.capacity);
        let view = WidgetView::build(&projection, &self.config, &self.palette);
        tracing::debug!(
            titles = snapshot.title_count(),
            unpaired = snapshot.unpaired_titles(),
            visible = projection.visible_count(),
            empty = projection.show_empty_message,
            summary = %view.summary,
            "projected todo snapshot"
        );
        view
    }

    /// Renders widget `id` onto `surface`.
    pub fn update_widget(&self, id: WidgetId, surface: &mut impl RenderSurface) {
        let view = self.view();
        surface.apply(id, &view);
    }

    /// Renders every widget in `ids`.
    pub fn on_update(&self, ids: &[WidgetId], surface: &mut impl RenderSurface) {
        tracing::debug!(count = ids.len(), "updating widgets");
        for &id in ids {
            self.update_widget(id, surface);
        }
    }

    /// Handles a launcher broadcast.
    ///
    /// Only [`WidgetBroadcast::Update`] renders anything; it refreshes every
    /// installed instance.
    pub fn on_receive(
        &self,
        broadcast: WidgetBroadcast,
        installed: &[WidgetId],
        surface: &mut impl RenderSurface,
    ) {
        match broadcast {
            WidgetBroadcast::Update => self.on_update(installed, surface),
            WidgetBroadcast::Enabled | WidgetBroadcast::Disabled => {
                tracing::trace!(?broadcast, "ignoring widget broadcast");
            }
        }
    }
}
