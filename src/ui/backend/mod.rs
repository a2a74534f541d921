//! Rendering backends.
//!
//! Widgets only ever produce [`PaintCmd`]s. A backend exposes a cell grid and
//! the default [`Backend::draw`] replays commands onto it, so the rest of the
//! crate never mentions `ratatui` types.

use crate::ui::core::event::Event;
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::Style;
use std::io;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub trait Backend {
    fn size(&self) -> Size;

    /// Blanks every cell with `style`.
    fn clear(&mut self, style: Style);

    /// Writes one grapheme. Coordinates outside [`Backend::size`] are ignored.
    fn set_cell(&mut self, x: u16, y: u16, symbol: &str, style: Style);

    fn flush(&mut self) -> io::Result<()>;

    fn draw(&mut self, cmds: &[PaintCmd]) {
        replay(self, cmds);
    }
}

pub trait EventSource {
    /// Waits at most `timeout` for the next event.
    fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Replays `cmds` through [`Backend::set_cell`], clipped to the backend area.
pub fn replay<B: Backend + ?Sized>(backend: &mut B, cmds: &[PaintCmd]) {
    let size = backend.size();
    let area = Rect::new(0, 0, size.w, size.h);
    for cmd in cmds {
        match cmd {
            PaintCmd::Cell { pos, ch, style } => {
                let mut tmp = [0u8; 4];
                put(backend, area, *pos, ch.encode_utf8(&mut tmp), *style);
            }
            PaintCmd::FillRect { rect, style } => fill(backend, rect.intersect(area), " ", *style),
            PaintCmd::HLine { pos, len, ch, style } => {
                let mut tmp = [0u8; 4];
                let line = Rect::new(pos.x, pos.y, *len, 1).intersect(area);
                fill(backend, line, ch.encode_utf8(&mut tmp), *style);
            }
            PaintCmd::VLine { pos, len, ch, style } => {
                let mut tmp = [0u8; 4];
                let line = Rect::new(pos.x, pos.y, 1, *len).intersect(area);
                fill(backend, line, ch.encode_utf8(&mut tmp), *style);
            }
            PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            } => {
                let clip = clip.map_or(area, |c| c.intersect(area));
                draw_text(backend, *pos, text, *style, clip);
            }
        }
    }
}

fn put<B: Backend + ?Sized>(backend: &mut B, clip: Rect, pos: Pos, symbol: &str, style: Style) {
    if !clip.contains(pos) {
        return;
    }
    let (Ok(x), Ok(y)) = (u16::try_from(pos.x), u16::try_from(pos.y)) else {
        return;
    };
    backend.set_cell(x, y, symbol, style);
}

fn fill<B: Backend + ?Sized>(backend: &mut B, rect: Rect, symbol: &str, style: Style) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            put(backend, rect, Pos::new(x, y), symbol, style);
        }
    }
}

fn draw_text<B: Backend + ?Sized>(backend: &mut B, pos: Pos, text: &str, style: Style, clip: Rect) {
    if clip.is_empty() || pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = i32::try_from(UnicodeWidthStr::width(g)).unwrap_or(0);
        if w == 0 {
            continue;
        }
        if x >= clip.right() {
            break;
        }
        // Do not partially render wide glyphs.
        if w > 1 && x + w - 1 >= clip.right() {
            break;
        }
        if x >= clip.x {
            put(backend, clip, Pos::new(x, pos.y), g, style);
            for dx in 1..w {
                put(backend, clip, Pos::new(x + dx, pos.y), " ", style);
            }
        }
        x += w;
    }
}

#[cfg(feature = "tui")]
pub mod terminal;
