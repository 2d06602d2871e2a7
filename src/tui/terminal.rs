//! Terminal lifecycle guard.

use std::io::{self, IsTerminal, Stdout, Write};
use std::ops::{Deref, DerefMut};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{Result, SterlingError};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal for the lifetime of the dashboard.
///
/// Raw mode and the alternate screen are entered on construction and undone
/// when the guard drops, so quitting, a propagated error, and a panic unwind
/// all leave the user's shell usable.
pub struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    /// Enters raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns [`SterlingError::Terminal`] when stdout is not a TTY or a
    /// control sequence fails; partial setup is undone before returning.
    pub fn enter() -> Result<Self> {
        let mut stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(SterlingError::Terminal(io::Error::other(
                "the dashboard needs an interactive terminal (TTY)",
            )));
        }

        enable_raw_mode()?;
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = undo_screen(&mut io::stdout());
                let _ = disable_raw_mode();
                Err(err.into())
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = undo_screen(self.terminal.backend_mut());
    }
}

impl Deref for TerminalGuard {
    type Target = Tui;

    fn deref(&self) -> &Tui {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

/// Emits the sequences that leave the alternate screen and re-show the
/// cursor.
fn undo_screen<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, LeaveAlternateScreen, Show)
}
