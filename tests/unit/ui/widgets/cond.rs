use super::*;
use crate::ui::backend::test::render;
use crate::ui::core::element::{first_focus, Element};
use crate::ui::core::event::{KeyCode, KeyEvent};
use crate::ui::widgets::{Button, CheckBox, Layout, Text};
use std::cell::Cell;
use std::rc::Rc;

fn flag(v: bool) -> (Rc<Cell<bool>>, impl Fn() -> bool + 'static) {
    let shared = Rc::new(Cell::new(v));
    let probe = Rc::clone(&shared);
    (shared, move || probe.get())
}

#[test]
fn false_predicate_hides_everything() {
    let (_, cond) = flag(false);
    let cb = CheckBox::new();
    let cb_id = cb.id();
    let mut wrapped = If::new(cond, cb);

    assert_eq!(wrapped.size(), Size::ZERO);
    assert!(wrapped.focus_chain().is_empty());
    assert_eq!(wrapped.focus_clicked(Click::primary(1, 0)), None);
    assert!(wrapped.focusable_by_id(cb_id).is_none());
    assert_eq!(render(&wrapped, 3, 1, None).row(0), "   ");
}

#[test]
fn true_predicate_behaves_like_the_child() {
    let (_, cond) = flag(true);
    let cb = CheckBox::new();
    let cb_id = cb.id();
    let bare = CheckBox::new();
    let mut wrapped = If::new(cond, cb);

    assert_eq!(wrapped.size(), bare.size());
    assert_eq!(wrapped.focus_chain(), vec![cb_id]);
    assert_eq!(first_focus(&wrapped), Some(cb_id));
    assert_eq!(
        render(&wrapped, 3, 1, Some(cb_id)),
        render(&bare, 3, 1, Some(bare.id()))
    );

    assert_eq!(wrapped.focus_clicked(Click::primary(1, 0)), Some(cb_id));
    let f = wrapped.focusable_by_id(cb_id).unwrap();
    f.handle(&KeyEvent::plain(KeyCode::Char(' ')));
}

#[test]
fn predicate_is_reevaluated_on_every_call() {
    let (shown, cond) = flag(false);
    let wrapped = If::new(cond, Text::new("hi"));
    assert_eq!(wrapped.size(), Size::ZERO);
    shown.set(true);
    assert_eq!(wrapped.size(), Size::new(2, 1));
    shown.set(false);
    assert_eq!(wrapped.size(), Size::ZERO);
}

#[test]
fn container_child_is_delegated_recursively() {
    let (_, cond) = flag(true);
    let a = Button::new("a");
    let b = Button::new("b");
    let (ia, ib) = (a.id(), b.id());
    let mut wrapped = If::new(cond, Layout::horizontal().child(a).child(b));

    assert_eq!(wrapped.focus_chain(), vec![ia, ib]);
    assert_eq!(wrapped.next_focusable(Some(ia)), Some(ib));
    assert_eq!(wrapped.focus_clicked(Click::primary(1, 1)), Some(ib));
}

#[test]
fn func_builds_fresh_element_each_call() {
    let n = Rc::new(Cell::new(1usize));
    let source = Rc::clone(&n);
    let f = Func::new(move || Box::new(Text::new("*".repeat(source.get()))) as BoxedElement);

    assert_eq!(f.size(), Size::new(1, 1));
    n.set(4);
    assert_eq!(f.size(), Size::new(4, 1));
    assert_eq!(render(&f, 5, 1, None).row(0), "**** ");
    assert!(f.focusable().is_none());
    assert!(f.container().is_none());
}
