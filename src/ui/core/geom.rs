/// A cell position in widget space.
///
/// Signed so that offsets can run past the screen edge (a centered root wider
/// than the terminal, a click left of a container's content box); backends
/// clip anything outside their area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The same point expressed relative to `origin`.
    pub const fn relative_to(self, origin: Pos) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub w: u16,
    pub h: u16,
}

impl Size {
    pub const ZERO: Self = Self { w: 0, h: 0 };

    pub const fn new(w: u16, h: u16) -> Self {
        Self { w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Grow by `dw` columns and `dh` rows, saturating at `u16::MAX`.
    pub fn grow(self, dw: u16, dh: u16) -> Self {
        Self {
            w: self.w.saturating_add(dw),
            h: self.h.saturating_add(dh),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub const fn from_parts(pos: Pos, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            w: size.w,
            h: size.h,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(&self) -> i32 {
        self.x + i32::from(self.w)
    }

    pub fn bottom(&self) -> i32 {
        self.y + i32::from(self.h)
    }

    pub fn contains(&self, p: Pos) -> bool {
        if self.is_empty() {
            return false;
        }
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn intersect(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        let w = u16::try_from((x2 - x1).max(0)).unwrap_or(u16::MAX);
        let h = u16::try_from((y2 - y1).max(0)).unwrap_or(u16::MAX);
        Rect::new(x1, y1, w, h)
    }

    /// Offset that centers a box of `inner` size inside this rect.
    /// Negative when `inner` is larger than the rect.
    pub fn centered_origin(&self, inner: Size) -> Pos {
        let dx = (i32::from(self.w) - i32::from(inner.w)) / 2;
        let dy = (i32::from(self.h) - i32::from(inner.h)) / 2;
        Pos::new(self.x + dx, self.y + dy)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;
