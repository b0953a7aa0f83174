//! Terminal setup and teardown.
//!
//! The form needs raw mode, the alternate screen and mouse capture (clicks
//! drive the calendar popup). [`TerminalSession`] restores all three when
//! dropped, and [`install_panic_hook`] does the same when the app panics.

use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::warn;

/// The terminal type used by the application.
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

/// Switches the terminal into TUI mode.
///
/// Enables raw mode, enters the alternate screen and captures the mouse.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Undoes [`setup_terminal`] and shows the cursor again.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

/// A terminal in TUI mode that is restored when dropped.
///
/// # Examples
///
/// ```no_run
/// use creditsearch_tui::terminal::TerminalSession;
///
/// # fn main() -> Result<(), creditsearch_tui::terminal::TerminalError> {
/// let mut session = TerminalSession::start()?;
/// session.clear().ok();
/// session.finish()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TerminalSession {
    terminal: Option<AppTerminal>,
}

impl TerminalSession {
    /// Sets up the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot enter TUI mode.
    pub fn start() -> Result<Self, TerminalError> {
        Ok(Self {
            terminal: Some(setup_terminal()?),
        })
    }

    /// Restores the terminal, reporting failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be restored.
    pub fn finish(mut self) -> Result<(), TerminalError> {
        match self.terminal.take() {
            Some(mut terminal) => restore_terminal(&mut terminal),
            None => Ok(()),
        }
    }
}

impl Deref for TerminalSession {
    type Target = AppTerminal;

    fn deref(&self) -> &AppTerminal {
        self.terminal
            .as_ref()
            .unwrap_or_else(|| unreachable!("terminal is only taken when the session ends"))
    }
}

impl DerefMut for TerminalSession {
    fn deref_mut(&mut self) -> &mut AppTerminal {
        self.terminal
            .as_mut()
            .unwrap_or_else(|| unreachable!("terminal is only taken when the session ends"))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Some(mut terminal) = self.terminal.take()
            && let Err(e) = restore_terminal(&mut terminal)
        {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// Installs a panic hook that restores the terminal first.
///
/// The previous hook still runs afterwards, so the panic message is
/// printed on the main screen. Call this once, before [`setup_terminal`].
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best effort; the terminal may already be restored.
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
