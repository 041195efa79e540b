//! Terminal state restoration.
//!
//! Invariants:
//! - Created after raw mode and the alternate screen are enabled.
//! - Lives for the whole session; `Drop` must not panic.

use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Restores the terminal on drop, including on panic unwinds.
pub struct TerminalGuard {
    no_mouse: bool,
}

impl TerminalGuard {
    pub fn new(no_mouse: bool) -> Self {
        Self { no_mouse }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.no_mouse {
            let _ = execute!(stdout, LeaveAlternateScreen);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        }
    }
}
