//! Box-model primitives: padding shorthand, per-side borders and alignment.

use super::style::Style;
use std::ops::{BitOr, BitOrAssign};

/// Resolved edge widths, in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Insets {
    pub const ZERO: Self = Self::all(0);

    pub const fn all(v: u16) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub const fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    pub const fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }

    pub const fn plus(self, other: Insets) -> Self {
        Self {
            top: self.top.saturating_add(other.top),
            right: self.right.saturating_add(other.right),
            bottom: self.bottom.saturating_add(other.bottom),
            left: self.left.saturating_add(other.left),
        }
    }
}

/// CSS-style padding shorthand.
///
/// - `[a]`: all edges `a`
/// - `[v, h]`: top/bottom `v`, left/right `h`
/// - `[t, h, b]`: top `t`, left/right `h`, bottom `b`
/// - `[t, r, b, l]`: clockwise from the top
///
/// An empty sequence is no padding; values past the fourth are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding(Insets);

impl Padding {
    pub const NONE: Self = Self(Insets::ZERO);

    pub fn new(values: &[u16]) -> Self {
        let insets = match *values {
            [] => Insets::ZERO,
            [a] => Insets::all(a),
            [v, h] => Insets {
                top: v,
                right: h,
                bottom: v,
                left: h,
            },
            [t, h, b] => Insets {
                top: t,
                right: h,
                bottom: b,
                left: h,
            },
            [t, r, b, l, ..] => Insets {
                top: t,
                right: r,
                bottom: b,
                left: l,
            },
        };
        Self(insets)
    }

    pub fn insets(&self) -> Insets {
        self.0
    }

    pub fn top(&self) -> u16 {
        self.0.top
    }

    pub fn right(&self) -> u16 {
        self.0.right
    }

    pub fn bottom(&self) -> u16 {
        self.0.bottom
    }

    pub fn left(&self) -> u16 {
        self.0.left
    }
}

impl<const N: usize> From<[u16; N]> for Padding {
    fn from(values: [u16; N]) -> Self {
        Self::new(&values)
    }
}

impl From<&[u16]> for Padding {
    fn from(values: &[u16]) -> Self {
        Self::new(values)
    }
}

/// Set of box sides, combinable with `|`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Sides(u8);

impl Sides {
    pub const NONE: Self = Self(0);
    pub const UP: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const DOWN: Self = Self(1 << 2);
    pub const LEFT: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Sides {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Sides {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderKind {
    #[default]
    None,
    Thin,
    Thick,
    Double,
}

/// Glyphs for one border kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderKind {
    pub fn glyphs(self) -> Option<BorderGlyphs> {
        let [horizontal, vertical, top_left, top_right, bottom_left, bottom_right] = match self {
            BorderKind::None => return None,
            BorderKind::Thin => ['─', '│', '┌', '┐', '└', '┘'],
            BorderKind::Thick => ['━', '┃', '┏', '┓', '┗', '┛'],
            BorderKind::Double => ['═', '║', '╔', '╗', '╚', '╝'],
        };
        Some(BorderGlyphs {
            horizontal,
            vertical,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Border {
    pub kind: BorderKind,
    pub sides: Sides,
    pub style: Style,
}

impl Border {
    pub const NONE: Self = Self {
        kind: BorderKind::None,
        sides: Sides::NONE,
        style: Style {
            fg: None,
            bg: None,
            mods: super::style::Mod::NONE,
        },
    };

    /// A border of `kind` on all four sides.
    pub fn new(kind: BorderKind) -> Self {
        Self {
            kind,
            sides: Sides::ALL,
            style: Style::default(),
        }
    }

    pub fn sides(mut self, sides: Sides) -> Self {
        self.sides = sides;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn has(&self, side: Sides) -> bool {
        self.kind != BorderKind::None && self.sides.contains(side)
    }

    /// One cell per drawn side.
    pub fn insets(&self) -> Insets {
        let edge = |side| u16::from(self.has(side));
        Insets {
            top: edge(Sides::UP),
            right: edge(Sides::RIGHT),
            bottom: edge(Sides::DOWN),
            left: edge(Sides::LEFT),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Leading offset for content of width `used` inside `avail` columns.
    pub fn offset(self, avail: u16, used: u16) -> u16 {
        let free = avail.saturating_sub(used);
        match self {
            Align::Left => 0,
            Align::Center => free / 2,
            Align::Right => free,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/box_model.rs"]
mod tests;
