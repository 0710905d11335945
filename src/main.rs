//! ghostty - terminal preview of the home-screen todo widget.
//!
//! Renders the widget from the shared preference file and hosts the native
//! bridge it launches into.

use ghostty_config::persistence::user_data_dir;
use ghostty_config::{Config, PreferencesFile};
use ghostty_protocol::dummy::seed_store;
use ghostty_widget::{App, logging, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_path = logging::init_logging(&user_data_dir()?.join("logs"))?;
    tracing::info!(log = %log_path.display(), "starting ghostty");

    let config = Config::load().await?;

    let mut prefs = PreferencesFile::open_configured(&config.preferences)?;
    if prefs.is_empty() {
        tracing::info!(path = %prefs.path().display(), "seeding empty preferences with sample todos");
        seed_store(&mut prefs);
        prefs.save()?;
    }

    let mut app = App::new(&config, prefs)?;

    terminal::install_panic_hook();
    let mut session = terminal::TerminalSession::start()?;

    let result = app.run(session.terminal_mut()).await;

    // Restore even if the run loop failed
    session.finish()?;

    result
}
