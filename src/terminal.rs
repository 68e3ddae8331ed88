//! Raw-mode terminal setup for the reader.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type ReaderTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode on the alternate screen and returns the drawing surface.
///
/// A panic while the reader is open puts the terminal back first.
pub fn init() -> io::Result<ReaderTerminal> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        previous(info);
    }));

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

/// Leaves raw mode and the alternate screen.
///
/// Both steps always run; the first failure is returned.
pub fn restore() -> io::Result<()> {
    let steps: [&dyn Fn() -> io::Result<()>; 2] = [&disable_raw_mode, &leave_alternate_screen];
    run_all(steps)
}

fn leave_alternate_screen() -> io::Result<()> {
    io::stdout().execute(LeaveAlternateScreen).map(|_| ())
}

fn run_all<const N: usize>(steps: [&dyn Fn() -> io::Result<()>; N]) -> io::Result<()> {
    steps
        .iter()
        .map(|step| step())
        .fold(Ok(()), |first, outcome| first.and(outcome))
}
