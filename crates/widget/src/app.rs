//! The interactive widget preview.
//!
//! [`App`] plays both sides of the home screen: it renders the widget from
//! the preference store the way the launcher would, and it runs the native
//! host the widget launches into. Toggling a row rewrites the store, which
//! the next update broadcast picks up; tapping the add button sends the
//! editor intent through the host's navigation channel.

use ghostty_bridge::secure::{DISABLE_SECURE_MODE, ENABLE_SECURE_MODE};
use ghostty_bridge::{MemoryMediaStore, NativeHost, RecordingInvoker, SecureFlag, SecureWindow};
use ghostty_config::{Config, PreferencesFile};
use ghostty_protocol::{MemoryStore, Message, MethodCall, PreferenceStore, SnapshotFields, channels};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::event::{event_to_message, poll_event};
use crate::layout::{
    HEADER_HEIGHT, MIN_WIDTH, STATUS_BAR_HEIGHT, WIDGET_WIDTH, centered_rect, min_height,
    widget_height,
};
use crate::provider::{WidgetBroadcast, WidgetProvider};
use crate::state::PreviewState;
use crate::surface::{RecordingSurface, WidgetId, WidgetView};
use crate::terminal::AppTerminal;
use crate::widgets::{WidgetHit, hit_test, render_help_overlay, render_status_bar, render_todo_widget};

/// Widget id the preview renders as.
pub const PREVIEW_WIDGET_ID: WidgetId = 1;

/// A preference store the preview can reload and write back.
pub trait PreviewStore: PreferenceStore {
    /// Re-reads the store from its backing medium.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read.
    fn reload(&mut self) -> anyhow::Result<()>;

    /// Writes pending changes to the backing medium.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn persist(&self) -> anyhow::Result<()>;
}

impl PreviewStore for PreferencesFile {
    fn reload(&mut self) -> anyhow::Result<()> {
        Ok(PreferencesFile::reload(self)?)
    }

    fn persist(&self) -> anyhow::Result<()> {
        Ok(self.save()?)
    }
}

impl PreviewStore for MemoryStore {
    fn reload(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn persist(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// The widget preview application.
#[derive(Debug)]
pub struct App<S> {
    provider: WidgetProvider<S>,
    surface: RecordingSurface,
    host: NativeHost<SecureFlag, RecordingInvoker>,
    window: SecureFlag,
    state: PreviewState,
    should_quit: bool,
    /// Where the widget was last drawn, for click hit-testing.
    widget_area: Rect,
}

impl<S: PreviewStore> App<S> {
    /// Creates the preview over `store`.
    ///
    /// The host is launched and its channels configured immediately, and the
    /// widget receives its first update.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghostty_config::Config;
    /// use ghostty_protocol::dummy::dummy_store;
    /// use ghostty_widget::App;
    ///
    /// let app = App::new(&Config::default(), dummy_store()).unwrap();
    /// assert!(app.is_secure());
    /// assert_eq!(app.widget_view().unwrap().rows.len(), 5);
    /// ```
    pub fn new(config: &Config, store: S) -> anyhow::Result<Self> {
        config.validate()?;
        let provider = WidgetProvider::new(config.widget.clone(), store)?;

        let window = SecureFlag::default();
        let mut host = NativeHost::new(window.clone(), config.secure_mode_on_launch);
        host.on_create(None);
        host.configure_engine(RecordingInvoker::default(), MemoryMediaStore::default());

        let mut app = Self {
            provider,
            surface: RecordingSurface::default(),
            host,
            window,
            state: PreviewState::new(),
            should_quit: false,
            widget_area: Rect::default(),
        };
        app.refresh();
        Ok(app)
    }

    /// Returns the preview state.
    #[must_use]
    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    /// Returns the widget provider.
    #[must_use]
    pub fn provider(&self) -> &WidgetProvider<S> {
        &self.provider
    }

    /// Returns the native host.
    #[must_use]
    pub fn host(&self) -> &NativeHost<SecureFlag, RecordingInvoker> {
        &self.host
    }

    /// Returns the view the widget currently shows.
    #[must_use]
    pub fn widget_view(&self) -> Option<&WidgetView> {
        self.surface.view(PREVIEW_WIDGET_ID)
    }

    /// Returns `true` while the host window is capture-protected.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.window.is_secure()
    }

    /// Returns `true` once the preview should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a message.
    ///
    /// While the help overlay is open, any message other than `Quit` only
    /// closes it.
    pub fn update(&mut self, msg: Message) {
        if self.state.help_visible {
            match msg {
                Message::Quit => self.should_quit = true,
                _ => self.state.help_visible = false,
            }
            return;
        }

        match msg {
            Message::SelectPrevious => self.state.select_previous(),
            Message::SelectNext => {
                let visible = self.visible_rows();
                self.state.select_next(visible);
            }
            Message::ToggleSelected => self.toggle_selected(),
            Message::AddTodo => self.add_todo(),
            Message::Refresh => self.reload(),
            Message::ToggleSecureMode => self.toggle_secure_mode(),
            Message::ToggleHelp => self.state.help_visible = true,
            Message::Escape => {}
            Message::Quit => self.should_quit = true,
            Message::ClickAt { column, row } => self.click(Position::new(column, row)),
        }
    }

    /// Sends the widget an update broadcast.
    fn refresh(&mut self) {
        self.provider
            .on_receive(WidgetBroadcast::Update, &[PREVIEW_WIDGET_ID], &mut self.surface);
        let visible = self.visible_rows();
        self.state.clamp_selection(visible);
    }

    fn reload(&mut self) {
        match self.provider.store_mut().reload() {
            Ok(()) => self.state.set_status("widget updated"),
            Err(error) => {
                tracing::warn!(%error, "failed to reload widget preferences");
                self.state.set_status(format!("reload failed: {error}"));
            }
        }
        self.refresh();
    }

    fn visible_rows(&self) -> usize {
        self.widget_view().map_or(0, |view| view.rows.len())
    }

    /// Flips the completion of the selected todo and writes the snapshot
    /// back.
    ///
    /// Only the completion flag and the pending count change. Titles and ids
    /// stay as the application wrote them.
    fn toggle_selected(&mut self) {
        let Some(slot) = self.state.selected else {
            return;
        };
        let Some(mut item) = self.provider.snapshot().items().get(slot).cloned() else {
            return;
        };
        item.toggle();
        let status = format!(
            "{} {}",
            if item.completed { "done:" } else { "reopened:" },
            item.title
        );

        let delimiter = self.provider.config().delimiter.clone();
        let mut fields = SnapshotFields::read_from(self.provider.store());
        fields.set_completed(slot, item.completed, &delimiter);
        fields.write_to(self.provider.store_mut());
        match self.provider.store().persist() {
            Ok(()) => self.state.set_status(status),
            Err(error) => {
                tracing::warn!(%error, "failed to save widget preferences");
                self.state.set_status(format!("save failed: {error}"));
            }
        }
        self.refresh();
    }

    /// Launches the host with the add button's intent.
    fn add_todo(&mut self) {
        let Some(action) = self.widget_view().map(|view| view.add_action) else {
            return;
        };
        self.host.on_new_intent(Some(action.intent_action()));
        self.state.set_status(format!("navigate: {action}"));
    }

    fn toggle_secure_mode(&mut self) {
        let method = if self.is_secure() {
            DISABLE_SECURE_MODE
        } else {
            ENABLE_SECURE_MODE
        };
        let response = self
            .host
            .handle_call(channels::SECURE, &MethodCall::new(method));
        tracing::debug!(method, ?response, "toggled secure mode");
        self.state.set_status(method);
    }

    fn click(&mut self, position: Position) {
        let Some(view) = self.widget_view() else {
            return;
        };
        match hit_test(view, self.widget_area, position) {
            Some(WidgetHit::Row(slot)) => {
                self.state.selected = Some(slot);
                self.toggle_selected();
            }
            Some(WidgetHit::AddButton) => self.add_todo(),
            None => {}
        }
    }

    /// Renders the preview.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let capacity = self.provider.config().capacity;

        if area.width < MIN_WIDTH || area.height < min_height(capacity) {
            let message = Paragraph::new(format!(
                "Terminal too small\nneed {MIN_WIDTH}x{}",
                min_height(capacity)
            ))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
            frame.render_widget(message, area);
            return;
        }

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        self.render_header(frame, header);

        self.widget_area = centered_rect(WIDGET_WIDTH, widget_height(capacity), body);
        if let Some(view) = self.surface.view(PREVIEW_WIDGET_ID) {
            render_todo_widget(view, self.state.selected, self.widget_area, frame.buffer_mut());
        }

        render_status_bar(self.state.status.as_deref(), footer, frame.buffer_mut());

        if self.state.help_visible {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let [title_area, secure_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(12)]).areas(area);

        let title = Paragraph::new(Line::from(Span::styled(
            " ghostty widget",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);

        let (label, color) = if self.is_secure() {
            ("secure on ", Color::Green)
        } else {
            ("secure off ", Color::Red)
        };
        let secure = Paragraph::new(Span::styled(label, Style::default().fg(color)))
            .alignment(Alignment::Right);
        frame.render_widget(secure, secure_area);
    }

    /// Runs the preview until quit.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or polling the terminal fails.
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        tracing::info!("widget preview started");
        while !self.should_quit {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(msg) = poll_event()?.as_ref().and_then(event_to_message) {
                tracing::trace!(?msg, "preview message");
                self.update(msg);
            }

            tokio::task::yield_now().await;
        }
        tracing::info!("widget preview stopped");
        Ok(())
    }
}
