use super::*;
use crate::ui::backend::test::render;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn natural_width_plus_padding() {
    let t = Text::new("hello").padding([1, 2]);
    assert_eq!(t.size(), Size::new(9, 3));

    let wide = Text::new("你好");
    assert_eq!(wide.size(), Size::new(4, 1));
}

#[test]
fn fixed_width_clips_and_aligns() {
    let left = Text::new("abcdefgh").width(4);
    assert_eq!(left.size(), Size::new(4, 1));
    assert_eq!(render(&left, 6, 1, None).row(0), "abcd  ");

    let right = Text::new("ab").width(6).align(Align::Right);
    assert_eq!(render(&right, 6, 1, None).row(0), "    ab");

    let center = Text::new("ab").width(6).align(Align::Center);
    assert_eq!(render(&center, 6, 1, None).row(0), "  ab  ");
}

#[test]
fn padding_offsets_text_and_fills_background() {
    use crate::ui::core::style::Color;

    let style = Style::new(Color::WHITE, Color::BLUE);
    let t = Text::new("x").padding([1, 1]).style(style);
    let buf = render(&t, 3, 3, None);
    assert_eq!(buf.text(), "\n x\n");
    assert_eq!(buf.cell(0, 0).unwrap().style, style);
    assert_eq!(buf.cell(2, 2).unwrap().style, style);
}

#[test]
fn dynamic_text_is_evaluated_each_call() {
    let n = Rc::new(Cell::new(0));
    let source = Rc::clone(&n);
    let t = Text::dynamic(move || "#".repeat(source.get()));

    assert_eq!(t.size(), Size::new(0, 1));
    n.set(3);
    assert_eq!(t.size(), Size::new(3, 1));
    assert_eq!(render(&t, 4, 1, None).row(0), "### ");
}

#[test]
fn text_is_not_focusable() {
    let t = Text::new("x");
    assert!(t.focusable().is_none());
    assert!(t.container().is_none());
}
