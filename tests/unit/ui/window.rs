use super::*;
use crate::ui::backend::test::TestBackend;
use crate::ui::core::event::{MouseEvent, MouseEventKind};
use crate::ui::widgets::{Button, CheckBox, EditBox, Layout};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const SCREEN: Size = Size::new(20, 11);

struct Form {
    window: Window<u8>,
    edit: WidgetId,
    check: WidgetId,
    button: WidgetId,
    typed: Rc<RefCell<String>>,
    checked: Rc<Cell<bool>>,
    submitted: Rc<Cell<u32>>,
}

/// EditBox (8x3), CheckBox (3x1) and Button (2x3) stacked: 8x7 in total.
fn form() -> Form {
    let typed = Rc::new(RefCell::new(String::new()));
    let checked = Rc::new(Cell::new(false));
    let submitted = Rc::new(Cell::new(0));

    let sink = Rc::clone(&typed);
    let edit = EditBox::new(8).on_change(move |s| *sink.borrow_mut() = s.to_string());
    let sink = Rc::clone(&checked);
    let check = CheckBox::new().on_toggle(move |v| sink.set(v));
    let sink = Rc::clone(&submitted);
    let button = Button::new("ok").on_submit(move || sink.set(sink.get() + 1));
    let (edit_id, check_id, button_id) = (edit.id(), check.id(), button.id());

    let root = Layout::vertical().child(edit).child(check).child(button);
    Form {
        window: Window::new(root),
        edit: edit_id,
        check: check_id,
        button: button_id,
        typed,
        checked,
        submitted,
    }
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::plain(code))
}

fn press(x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent::new(
        MouseEventKind::Down(MouseButton::Left),
        x,
        y,
    ))
}

#[test]
fn focus_starts_on_first_focusable_and_tab_cycles() {
    let mut f = form();
    assert_eq!(f.window.focus(), Some(f.edit));

    assert_eq!(f.window.handle_event(key(KeyCode::Tab), SCREEN), Flow::Repaint);
    assert_eq!(f.window.focus(), Some(f.check));
    f.window.handle_event(key(KeyCode::Tab), SCREEN);
    assert_eq!(f.window.focus(), Some(f.button));
    f.window.handle_event(key(KeyCode::Tab), SCREEN);
    assert_eq!(f.window.focus(), Some(f.edit));
}

#[test]
fn keys_go_to_the_focused_element() {
    let mut f = form();
    f.window.handle_event(key(KeyCode::Char('h')), SCREEN);
    f.window.handle_event(key(KeyCode::Char('i')), SCREEN);
    assert_eq!(*f.typed.borrow(), "hi");

    f.window.handle_event(key(KeyCode::Tab), SCREEN);
    f.window.handle_event(key(KeyCode::Char(' ')), SCREEN);
    assert!(f.checked.get());

    f.window.handle_event(key(KeyCode::Tab), SCREEN);
    f.window.handle_event(key(KeyCode::Enter), SCREEN);
    assert_eq!(f.submitted.get(), 1);
    assert_eq!(*f.typed.borrow(), "hi");
}

#[test]
fn quit_keys_interrupt_and_errors_end_the_loop() {
    let mut f = form();
    assert_eq!(
        f.window.handle_event(key(KeyCode::Esc), SCREEN),
        Flow::Exit(WindowResult::exit())
    );
    assert_eq!(
        f.window.handle_event(Event::Key(KeyEvent::ctrl('c')), SCREEN),
        Flow::Exit(WindowResult::exit())
    );
    assert_eq!(
        f.window.handle_event(Event::Interrupt, SCREEN),
        Flow::Exit(WindowResult::exit())
    );

    let Flow::Exit(result) = f.window.handle_event(Event::Error("tty gone".into()), SCREEN) else {
        panic!("error event must end the loop");
    };
    assert_eq!(result.state, WindowState::Error);
    assert_eq!(result.message.as_deref(), Some("tty gone"));
}

#[test]
fn custom_keymap_replaces_defaults() {
    let mut f = form();
    let keymap = Keymap {
        quit: vec![KeyEvent::plain(KeyCode::Char('q'))],
        next_focus: vec![KeyEvent::plain(KeyCode::Down)],
    };
    let mut window = std::mem::replace(&mut f.window, Window::new(CheckBox::new())).keymap(keymap);

    assert_eq!(window.handle_event(key(KeyCode::Esc), SCREEN), Flow::Repaint);
    window.handle_event(key(KeyCode::Down), SCREEN);
    assert_eq!(window.focus(), Some(f.check));
    assert_eq!(
        window.handle_event(key(KeyCode::Char('q')), SCREEN),
        Flow::Exit(WindowResult::exit())
    );
}

#[test]
fn resize_repaints_and_pointer_motion_is_ignored() {
    let mut f = form();
    assert_eq!(f.window.handle_event(Event::Resize(40, 20), SCREEN), Flow::Repaint);
    let moved = Event::Mouse(MouseEvent::new(MouseEventKind::Moved, 1, 1));
    assert_eq!(f.window.handle_event(moved, SCREEN), Flow::Idle);
}

#[test]
fn centered_click_is_normalized_to_root_frame() {
    let mut f = form().window_placement(Placement::Centered);
    assert_eq!(f.window.origin(SCREEN), Pos::new(6, 2));

    // checkbox glyph sits at root (1, 3)
    assert_eq!(f.window.handle_event(press(7, 5), SCREEN), Flow::Repaint);
    assert!(f.checked.get());
    assert_eq!(f.window.focus(), Some(f.check));

    // button block spans root rows 4..7
    f.window.handle_event(press(6, 7), SCREEN);
    assert_eq!(f.submitted.get(), 1);
    assert_eq!(f.window.focus(), Some(f.button));
}

#[test]
fn press_outside_any_element_clears_focus() {
    let mut f = form();
    f.window.handle_event(press(15, 0), SCREEN);
    assert_eq!(f.window.focus(), None);

    assert_eq!(f.window.handle_event(key(KeyCode::Char('x')), SCREEN), Flow::Idle);
    f.window.handle_event(key(KeyCode::Tab), SCREEN);
    assert_eq!(f.window.focus(), Some(f.edit));
}

#[test]
fn wheel_is_routed_without_moving_focus() {
    let mut f = form();
    let wheel = Event::Mouse(MouseEvent::new(MouseEventKind::ScrollDown, 1, 3));
    assert_eq!(f.window.handle_event(wheel, SCREEN), Flow::Repaint);
    assert_eq!(f.window.focus(), Some(f.edit));
    assert!(!f.checked.get());
}

#[test]
fn single_focusable_root_takes_tab_focus() {
    let edit = EditBox::new(4);
    let id = edit.id();
    let mut window: Window = Window::new(edit);
    window.set_focus(None);
    window.handle_event(key(KeyCode::Tab), SCREEN);
    assert_eq!(window.focus(), Some(id));
}

#[test]
fn message_handler_decides_when_to_stop() {
    let seen = Rc::new(Cell::new(0u8));
    let sink = Rc::clone(&seen);
    let mut window = form().window.on_message(move |n: u8| {
        sink.set(n);
        (n == 2).then(WindowResult::back)
    });

    assert_eq!(window.handle_msg(WindowMsg::Message(1), SCREEN), Flow::Repaint);
    assert_eq!(seen.get(), 1);
    assert_eq!(
        window.handle_msg(WindowMsg::Message(2), SCREEN),
        Flow::Exit(WindowResult::back())
    );
}

#[test]
fn run_paints_each_repaint_and_returns_the_result() {
    let mut f = form();
    let queue: Queue<u8> = Queue::new();
    let tx = queue.sender();
    tx.send(WindowMsg::Input(key(KeyCode::Char('a')))).expect("send");
    assert!(queue.repaint().request());
    assert!(!queue.repaint().request());
    tx.send(WindowMsg::Input(key(KeyCode::Esc))).expect("send");

    let mut backend = TestBackend::new(20, 11);
    let result = f.window.run(&mut backend, &queue).expect("run");

    assert_eq!(result, WindowResult::exit());
    // first frame, after the key, after the repaint
    assert_eq!(backend.flushes(), 3);
    assert!(!queue.repaint().is_pending());
    assert_eq!(*f.typed.borrow(), "a");
    assert!(backend.buffer().row(1).contains('a'));
}

#[test]
fn run_ends_with_message_result() {
    let mut window = form()
        .window
        .on_message(|n: u8| Some(WindowResult::error(format!("code {n}"))));
    let queue = Queue::new();
    queue.post(9);

    let mut backend = TestBackend::new(20, 11);
    let result = window.run(&mut backend, &queue).expect("run");
    assert_eq!(result.state, WindowState::Error);
    assert_eq!(result.message.as_deref(), Some("code 9"));
    assert_eq!(backend.flushes(), 1);
}

impl Form {
    fn window_placement(mut self, placement: Placement) -> Self {
        let window = std::mem::replace(&mut self.window, Window::new(CheckBox::new()));
        self.window = window.placement(placement);
        self
    }
}
