use super::box_model::{Border, Sides};
use super::geom::{Pos, Rect};
use super::style::Style;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    Cell {
        pos: Pos,
        ch: char,
        style: Style,
    },
    FillRect {
        rect: Rect,
        style: Style,
    },
    HLine {
        pos: Pos,
        len: u16,
        ch: char,
        style: Style,
    },
    VLine {
        pos: Pos,
        len: u16,
        ch: char,
        style: Style,
    },
    Text {
        pos: Pos,
        text: String,
        style: Style,
        clip: Option<Rect>,
    },
}

/// Records draw calls for a frame; a backend replays them.
#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn push(&mut self, cmd: PaintCmd) {
        self.cmds.push(cmd);
    }

    pub fn cell(&mut self, pos: Pos, ch: char, style: Style) {
        self.cmds.push(PaintCmd::Cell { pos, ch, style });
    }

    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        if rect.is_empty() {
            return;
        }
        self.cmds.push(PaintCmd::FillRect { rect, style });
    }

    pub fn hline(&mut self, pos: Pos, len: u16, ch: char, style: Style) {
        if len == 0 {
            return;
        }
        self.cmds.push(PaintCmd::HLine { pos, len, ch, style });
    }

    pub fn vline(&mut self, pos: Pos, len: u16, ch: char, style: Style) {
        if len == 0 {
            return;
        }
        self.cmds.push(PaintCmd::VLine { pos, len, ch, style });
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style) {
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            style,
            clip: None,
        });
    }

    pub fn text_clipped(&mut self, pos: Pos, text: impl Into<String>, style: Style, clip: Rect) {
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            style,
            clip: Some(clip),
        });
    }

    /// Draws `border` around the outer edge of `rect`.
    ///
    /// Edges span the whole side; a corner glyph replaces the edge glyph only
    /// where both adjacent sides are present.
    pub fn border(&mut self, rect: Rect, border: &Border) {
        let Some(g) = border.kind.glyphs() else {
            return;
        };
        if rect.is_empty() {
            return;
        }
        let style = border.style;
        let last_x = rect.right() - 1;
        let last_y = rect.bottom() - 1;
        let up = border.has(Sides::UP);
        let right = border.has(Sides::RIGHT);
        let down = border.has(Sides::DOWN);
        let left = border.has(Sides::LEFT);

        if up {
            self.hline(Pos::new(rect.x, rect.y), rect.w, g.horizontal, style);
        }
        if down {
            self.hline(Pos::new(rect.x, last_y), rect.w, g.horizontal, style);
        }
        if left {
            self.vline(Pos::new(rect.x, rect.y), rect.h, g.vertical, style);
        }
        if right {
            self.vline(Pos::new(last_x, rect.y), rect.h, g.vertical, style);
        }

        if up && left {
            self.cell(Pos::new(rect.x, rect.y), g.top_left, style);
        }
        if up && right {
            self.cell(Pos::new(last_x, rect.y), g.top_right, style);
        }
        if down && left {
            self.cell(Pos::new(rect.x, last_y), g.bottom_left, style);
        }
        if down && right {
            self.cell(Pos::new(last_x, last_y), g.bottom_right, style);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
