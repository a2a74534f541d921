use super::*;
use crate::ui::core::geom::Rect;
use crate::ui::core::style::Color;

fn replay_into(width: u16, height: u16, painter: &Painter) -> TestBackend {
    let mut backend = TestBackend::new(width, height);
    backend.draw(painter.cmds());
    backend
}

#[test]
fn text_clips_wide_glyphs_that_do_not_fit() {
    let mut p = Painter::new();
    p.text(Pos::new(0, 0), "👍", Style::default());
    let backend = replay_into(1, 1, &p);
    assert_eq!(backend.buffer().cell(0, 0).unwrap().symbol, " ");
}

#[test]
fn text_renders_wide_glyphs_when_they_fit() {
    let mut p = Painter::new();
    p.text(Pos::new(0, 0), "👍", Style::default());
    let backend = replay_into(2, 1, &p);
    assert_eq!(backend.buffer().cell(0, 0).unwrap().symbol, "👍");
    assert_eq!(backend.buffer().cell(1, 0).unwrap().symbol, " ");
}

#[test]
fn text_respects_explicit_clip_and_negative_origin() {
    let mut p = Painter::new();
    p.text_clipped(
        Pos::new(0, 0),
        "abcdef",
        Style::default(),
        Rect::new(0, 0, 3, 1),
    );
    p.text(Pos::new(-2, 1), "xyz", Style::default());
    let backend = replay_into(6, 2, &p);
    assert_eq!(backend.buffer().row(0), "abc   ");
    assert_eq!(backend.buffer().row(1), "z     ");
}

#[test]
fn fill_rect_clips_to_backend_area() {
    let style = Style::default().bg(Color::BLUE);
    let mut p = Painter::new();
    p.text(Pos::new(0, 0), "A", Style::default());
    p.fill_rect(Rect::new(-3, -3, 10, 10), style);
    let backend = replay_into(2, 2, &p);
    let cell = backend.buffer().cell(0, 0).unwrap();
    assert_eq!(cell.symbol, " ");
    assert_eq!(cell.style, style);
    assert_eq!(backend.buffer().cell(1, 1).unwrap().style, style);
}

#[test]
fn lines_write_characters() {
    let mut p = Painter::new();
    p.hline(Pos::new(0, 0), 3, '-', Style::default());
    p.vline(Pos::new(0, 0), 3, '|', Style::default());
    let backend = replay_into(3, 3, &p);
    assert_eq!(backend.buffer().text(), "|--\n|\n|");
}

#[test]
fn clear_resets_symbols_and_applies_style() {
    let mut backend = TestBackend::new(2, 1);
    backend.set_cell(0, 0, "x", Style::default());
    backend.set_cell(9, 9, "y", Style::default());
    let style = Style::new(Color::WHITE, Color::BLACK);
    backend.clear(style);
    assert_eq!(backend.buffer().row(0), "  ");
    assert_eq!(backend.buffer().cell(1, 0).unwrap().style, style);
    backend.flush().unwrap();
    assert_eq!(backend.flushes(), 1);
}

#[test]
fn scripted_events_drain_then_fail() {
    let mut events = ScriptedEvents::new([Event::Resize(1, 1)]).fail_when_drained();
    let timeout = Duration::from_millis(1);
    assert_eq!(events.poll_event(timeout).unwrap(), Some(Event::Resize(1, 1)));
    assert!(events.poll_event(timeout).is_err());

    let mut quiet = ScriptedEvents::default();
    assert_eq!(quiet.poll_event(timeout).unwrap(), None);
}
