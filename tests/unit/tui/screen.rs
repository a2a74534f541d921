use super::*;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<&'static str>>,
    fail_enter: bool,
    fail_leave: bool,
}

impl Recorder {
    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl ScreenOps for Recorder {
    fn enter(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        if self.fail_enter {
            return Err(io::Error::new(io::ErrorKind::Other, "not a terminal"));
        }
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        if self.fail_leave {
            return Err(io::Error::new(io::ErrorKind::Other, "no tty"));
        }
        Ok(())
    }
}

#[test]
fn dropping_the_screen_leaves_the_session() {
    let ops = Arc::new(Recorder::default());
    {
        let _screen = Screen::with_ops(ops.clone()).unwrap();
        assert_eq!(ops.calls(), ["enter"]);
    }
    assert_eq!(ops.calls(), ["enter", "leave"]);
}

#[test]
fn restore_reaches_the_terminal_once() {
    let ops = Arc::new(Recorder::default());
    let screen = Screen::with_ops(ops.clone()).unwrap();
    let handle = screen.restore_handle();
    let other = handle.clone();

    assert!(!handle.is_restored());
    handle.restore().unwrap();
    other.restore().unwrap();
    drop(screen);

    assert!(other.is_restored());
    assert_eq!(ops.calls(), ["enter", "leave"]);
}

#[test]
fn restore_error_is_reported_to_the_first_caller_only() {
    let ops = Arc::new(Recorder {
        fail_leave: true,
        ..Recorder::default()
    });
    let screen = Screen::with_ops(ops.clone()).unwrap();
    let handle = screen.restore_handle();

    assert!(handle.restore().is_err());
    assert!(handle.restore().is_ok());
    drop(screen);
    assert_eq!(ops.calls(), ["enter", "leave"]);
}

#[test]
fn failed_enter_never_leaves() {
    let ops = Arc::new(Recorder {
        fail_enter: true,
        ..Recorder::default()
    });
    assert!(Screen::with_ops(ops.clone()).is_err());
    assert_eq!(ops.calls(), ["enter"]);
}

#[test]
fn exit_codes_follow_shell_convention() {
    assert_eq!(Signal::Interrupt.exit_code(), 130);
    assert_eq!(Signal::Terminate.exit_code(), 143);
}

#[cfg(unix)]
#[test]
fn raw_signal_numbers_map_to_signals() {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
    assert_eq!(Signal::from_raw(SIGINT), Some(Signal::Interrupt));
    assert_eq!(Signal::from_raw(SIGTERM), Some(Signal::Terminate));
    assert_eq!(Signal::from_raw(SIGHUP), None);
}
