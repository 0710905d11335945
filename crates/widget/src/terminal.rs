//! Terminal session management.
//!
//! [`TerminalSession`] puts the terminal in raw mode on the alternate screen
//! with mouse capture, and puts it back when finished or dropped. A panic
//! hook does the same when the preview panics.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the preview.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// An active full-screen terminal session.
///
/// Dropping the session restores the terminal on a best-effort basis; call
/// [`finish`](Self::finish) to observe restore errors.
pub struct TerminalSession {
    terminal: AppTerminal,
    restored: bool,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if any terminal operation fails. Raw mode is undone
    /// if a later step fails.
    pub fn start() -> Result<Self, TerminalError> {
        enable_raw_mode().map_err(TerminalError::Setup)?;
        let terminal = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
        match terminal {
            Ok(terminal) => Ok(Self {
                terminal,
                restored: false,
            }),
            Err(e) => {
                let _ = leave_screen();
                Err(TerminalError::Setup(e))
            }
        }
    }

    /// Returns the terminal to draw on.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }

    /// Restores the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if any terminal operation fails.
    pub fn finish(mut self) -> Result<(), TerminalError> {
        self.restore()
    }

    fn restore(&mut self) -> Result<(), TerminalError> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        leave_screen().map_err(TerminalError::Restore)?;
        self.terminal.show_cursor().map_err(TerminalError::Restore)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

fn leave_screen() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)
}

/// Installs a panic hook that restores the terminal, then runs the
/// previously installed hook.
///
/// Call once, before starting a [`TerminalSession`].
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = leave_screen();
        original_hook(panic_info);
    }));
}
