use super::*;
use crossterm::event::{
    KeyCode as CtKeyCode, KeyEvent as CtKeyEvent, KeyEventKind, KeyEventState,
    KeyModifiers as CtModifiers, MouseButton as CtButton, MouseEvent as CtMouseEvent,
    MouseEventKind as CtMouseKind,
};

fn ct_key(code: CtKeyCode, modifiers: CtModifiers, kind: KeyEventKind) -> crossterm::event::Event {
    crossterm::event::Event::Key(CtKeyEvent {
        code,
        modifiers,
        kind,
        state: KeyEventState::NONE,
    })
}

fn ct_mouse(kind: CtMouseKind, column: u16, row: u16) -> crossterm::event::Event {
    crossterm::event::Event::Mouse(CtMouseEvent {
        kind,
        column,
        row,
        modifiers: CtModifiers::NONE,
    })
}

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = CtKeyEvent::new(CtKeyCode::Null, CtModifiers::NONE);
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn presses_and_repeats_pass_releases_do_not() {
    let press = ct_key(CtKeyCode::Char('c'), CtModifiers::CONTROL, KeyEventKind::Press);
    assert_eq!(into_event(press), Some(Event::Key(KeyEvent::ctrl('c'))));

    let repeat = ct_key(CtKeyCode::Left, CtModifiers::NONE, KeyEventKind::Repeat);
    assert_eq!(
        into_event(repeat),
        Some(Event::Key(KeyEvent::plain(KeyCode::Left)))
    );

    let release = ct_key(CtKeyCode::Char('a'), CtModifiers::NONE, KeyEventKind::Release);
    assert_eq!(into_event(release), None);
}

#[test]
fn unmapped_keys_become_unknown() {
    let caps = ct_key(CtKeyCode::CapsLock, CtModifiers::NONE, KeyEventKind::Press);
    assert_eq!(
        into_event(caps),
        Some(Event::Key(KeyEvent::plain(KeyCode::Unknown)))
    );
}

#[test]
fn mouse_presses_and_wheel_translate() {
    let down = ct_mouse(CtMouseKind::Down(CtButton::Left), 4, 7);
    assert_eq!(
        into_event(down),
        Some(Event::Mouse(MouseEvent::new(
            MouseEventKind::Down(MouseButton::Left),
            4,
            7
        )))
    );

    let wheel = ct_mouse(CtMouseKind::ScrollDown, 0, 1);
    assert_eq!(
        into_event(wheel),
        Some(Event::Mouse(MouseEvent::new(MouseEventKind::ScrollDown, 0, 1)))
    );

    let sideways = ct_mouse(CtMouseKind::ScrollLeft, 0, 1);
    assert_eq!(into_event(sideways), None);
}

#[test]
fn resize_passes_focus_and_paste_are_dropped() {
    assert_eq!(
        into_event(crossterm::event::Event::Resize(100, 30)),
        Some(Event::Resize(100, 30))
    );
    assert_eq!(into_event(crossterm::event::Event::FocusGained), None);
    assert_eq!(into_event(crossterm::event::Event::Paste("x".into())), None);
}
