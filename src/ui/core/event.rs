//! Backend-neutral input events.

use super::geom::Pos;
use std::ops::{BitOr, BitOrAssign};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// The event source failed; ends the window with an error result.
    Error(String),
    /// A termination signal arrived.
    Interrupt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CONTROL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);
    pub const SUPER: Self = Self(1 << 3);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for KeyModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    /// A printable character typed without control/alt/super.
    pub fn text_char(&self) -> Option<char> {
        let KeyCode::Char(ch) = self.code else {
            return None;
        };
        let chorded = self.modifiers.contains(KeyModifiers::CONTROL)
            || self.modifiers.contains(KeyModifiers::ALT)
            || self.modifiers.contains(KeyModifiers::SUPER);
        (!chorded && !ch.is_control()).then_some(ch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    Drag(MouseButton),
    Moved,
    ScrollUp,
    ScrollDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub column: u16,
    pub row: u16,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, column: u16, row: u16) -> Self {
        Self { kind, column, row }
    }

    /// The pointer action widgets react to; releases, drags and moves map to `None`.
    pub fn action(&self) -> Option<PointerAction> {
        match self.kind {
            MouseEventKind::Down(button) => Some(PointerAction::Press(button)),
            MouseEventKind::ScrollUp => Some(PointerAction::WheelUp),
            MouseEventKind::ScrollDown => Some(PointerAction::WheelDown),
            MouseEventKind::Up(_) | MouseEventKind::Drag(_) | MouseEventKind::Moved => None,
        }
    }

    /// The event as a click in screen coordinates.
    pub fn click(&self) -> Option<Click> {
        let action = self.action()?;
        Some(Click {
            pos: Pos::new(i32::from(self.column), i32::from(self.row)),
            action,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Press(MouseButton),
    WheelUp,
    WheelDown,
}

/// A pointer event in some element's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub pos: Pos,
    pub action: PointerAction,
}

impl Click {
    /// A primary-button press at `(x, y)`.
    pub fn primary(x: i32, y: i32) -> Self {
        Self {
            pos: Pos::new(x, y),
            action: PointerAction::Press(MouseButton::Left),
        }
    }

    pub fn wheel_up(x: i32, y: i32) -> Self {
        Self {
            pos: Pos::new(x, y),
            action: PointerAction::WheelUp,
        }
    }

    pub fn wheel_down(x: i32, y: i32) -> Self {
        Self {
            pos: Pos::new(x, y),
            action: PointerAction::WheelDown,
        }
    }

    pub fn is_primary(&self) -> bool {
        self.action == PointerAction::Press(MouseButton::Left)
    }

    /// The same click re-expressed relative to `origin`.
    pub fn relative_to(self, origin: Pos) -> Self {
        Self {
            pos: self.pos.relative_to(origin),
            action: self.action,
        }
    }

    pub fn shifted(self, dx: i32, dy: i32) -> Self {
        Self {
            pos: self.pos.offset(-dx, -dy),
            action: self.action,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/event.rs"]
mod tests;
