//! Full-screen session on the process terminal.
//!
//! Entering switches to raw mode and the alternate screen and hides the
//! cursor. Leaving undoes all of it exactly once, whether the run returns,
//! fails or is cut short by a signal.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Terminal mode switches, split out so sessions can be tested without a tty.
pub trait ScreenOps: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy)]
pub struct CrosstermScreen {
    pub mouse: bool,
}

impl Default for CrosstermScreen {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl ScreenOps for CrosstermScreen {
    fn enter(&self) -> io::Result<()> {
        use crossterm::{cursor, event::EnableMouseCapture, execute, terminal};

        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        let entered = execute!(out, terminal::EnterAlternateScreen, cursor::Hide).and_then(|_| {
            if self.mouse {
                execute!(out, EnableMouseCapture)?;
            }
            Ok(())
        });
        if entered.is_err() {
            let _ = terminal::disable_raw_mode();
        }
        entered
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::{cursor, event::DisableMouseCapture, execute, terminal};

        let mut out = io::stdout();
        let mut steps = Vec::with_capacity(3);
        if self.mouse {
            steps.push(execute!(out, DisableMouseCapture));
        }
        steps.push(execute!(out, terminal::LeaveAlternateScreen, cursor::Show));
        steps.push(terminal::disable_raw_mode());
        // All steps run; the first error wins.
        steps.into_iter().collect()
    }
}

/// Cloneable handle that ends the session. Only the first call reaches the
/// terminal.
#[derive(Clone)]
pub struct Restore {
    done: Arc<AtomicBool>,
    ops: Arc<dyn ScreenOps>,
}

impl Restore {
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        tracing::debug!("leaving full-screen session");
        self.ops.leave()
    }

    pub fn is_restored(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }
}

/// Owns the session; dropping it restores the terminal.
pub struct Screen {
    restore: Restore,
}

impl Screen {
    pub fn enter() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermScreen::default()))
    }

    /// Nothing is restored when `ops.enter` fails.
    pub fn with_ops(ops: Arc<dyn ScreenOps>) -> io::Result<Self> {
        ops.enter()?;
        Ok(Self {
            restore: Restore {
                done: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restore_handle(&self) -> Restore {
        self.restore.clone()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if let Err(e) = self.restore.restore() {
            tracing::warn!(error = %e, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Interrupt,
    Terminate,
}

impl Signal {
    #[cfg(unix)]
    fn from_raw(raw: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};
        match raw {
            SIGINT => Some(Signal::Interrupt),
            SIGTERM => Some(Signal::Terminate),
            _ => None,
        }
    }

    /// Shell convention: 128 plus the signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            Signal::Interrupt => 130,
            Signal::Terminate => 143,
        }
    }
}

/// Watches SIGINT and SIGTERM on a background thread.
///
/// `notify` gets the first chance to stop the run. If the process is still
/// alive `grace` later, the terminal is restored and the process exits with
/// [`Signal::exit_code`].
#[cfg(unix)]
pub fn watch_signals<F>(
    restore: Restore,
    grace: std::time::Duration,
    notify: F,
) -> io::Result<std::thread::JoinHandle<()>>
where
    F: Fn(Signal) + Send + 'static,
{
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("cellui-signals".to_string())
        .spawn(move || {
            let Some(signal) = signals.forever().find_map(Signal::from_raw) else {
                return;
            };
            tracing::info!(?signal, "termination signal");
            notify(signal);

            std::thread::sleep(grace);
            let _ = restore.restore();
            std::process::exit(signal.exit_code());
        })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/screen.rs"]
mod tests;
