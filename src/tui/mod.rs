//! Terminal integration (crossterm + ratatui).
//!
//! Kept apart from `ui` so the toolkit builds and tests without a terminal.

pub mod crossterm;
pub mod screen;

use crate::ui::backend::terminal::TerminalBackend;
use crate::ui::core::event::Event;
use crate::ui::window::{Window, WindowResult};
use crate::ui::worker::{InputPoller, Queue, WindowMsg, DEFAULT_POLL};
use self::crossterm::CrosstermEvents;
use self::screen::Screen;
use std::io;
use std::time::Duration;

const SIGNAL_GRACE: Duration = Duration::from_secs(2);

/// Runs `window` on the process terminal.
///
/// Sets the terminal up, feeds the queue from crossterm and from
/// SIGINT/SIGTERM, and restores the terminal before returning.
pub fn run<M: Send + 'static>(window: &mut Window<M>, queue: &Queue<M>) -> io::Result<WindowResult> {
    let screen = Screen::enter()?;

    #[cfg(unix)]
    {
        let tx = queue.sender();
        screen::watch_signals(screen.restore_handle(), SIGNAL_GRACE, move |_| {
            let _ = tx.send(WindowMsg::Input(Event::Interrupt));
        })?;
    }

    let mut poller = InputPoller::spawn(CrosstermEvents, queue.sender(), DEFAULT_POLL)?;
    let mut backend = TerminalBackend::new(io::stdout())?;
    let result = window.run(&mut backend, queue);

    poller.stop();
    drop(backend);
    screen.restore_handle().restore()?;
    result
}
