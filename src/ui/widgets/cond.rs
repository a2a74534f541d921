//! Structural wrappers: a conditional child and a lazily built element.

use crate::ui::core::element::{
    chain_of, find_focusable, route_click, BoxedElement, Container, Element, Expandable,
    Focusable,
};
use crate::ui::core::event::Click;
use crate::ui::core::geom::{Pos, Size};
use crate::ui::core::id::WidgetId;
use crate::ui::core::painter::Painter;

/// Shows `child` only while `cond` returns true.
///
/// The predicate is re-evaluated on every call. While it is false the
/// wrapper has no size, no focus chain and swallows clicks.
pub struct If {
    cond: Box<dyn Fn() -> bool>,
    child: BoxedElement,
}

impl If {
    pub fn new(cond: impl Fn() -> bool + 'static, child: impl Element + 'static) -> Self {
        Self {
            cond: Box::new(cond),
            child: Box::new(child),
        }
    }

    pub fn is_shown(&self) -> bool {
        (self.cond)()
    }
}

impl Element for If {
    fn size(&self) -> Size {
        if self.is_shown() {
            self.child.size()
        } else {
            Size::ZERO
        }
    }

    fn draw(&self, painter: &mut Painter, at: Pos, focus: Option<WidgetId>) {
        if self.is_shown() {
            self.child.draw(painter, at, focus);
        }
    }

    fn expandable(&self) -> Option<&dyn Expandable> {
        if self.is_shown() {
            self.child.expandable()
        } else {
            None
        }
    }

    fn container(&self) -> Option<&dyn Container> {
        Some(self)
    }

    fn container_mut(&mut self) -> Option<&mut dyn Container> {
        Some(self)
    }
}

impl Container for If {
    fn focus_chain(&self) -> Vec<WidgetId> {
        if self.is_shown() {
            chain_of(self.child.as_ref())
        } else {
            Vec::new()
        }
    }

    fn focus_clicked(&mut self, click: Click) -> Option<WidgetId> {
        if !self.is_shown() {
            return None;
        }
        route_click(self.child.as_mut(), click)
    }

    fn focusable_by_id(&mut self, id: WidgetId) -> Option<&mut dyn Focusable> {
        if !self.is_shown() {
            return None;
        }
        find_focusable(self.child.as_mut(), id)
    }
}

/// Builds a fresh element on every size and draw call. Not interactive.
pub struct Func {
    build: Box<dyn Fn() -> BoxedElement>,
}

impl Func {
    pub fn new(build: impl Fn() -> BoxedElement + 'static) -> Self {
        Self {
            build: Box::new(build),
        }
    }
}

impl Element for Func {
    fn size(&self) -> Size {
        (self.build)().size()
    }

    fn draw(&self, painter: &mut Painter, at: Pos, focus: Option<WidgetId>) {
        (self.build)().draw(painter, at, focus);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/cond.rs"]
mod tests;
