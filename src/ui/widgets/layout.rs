//! Row and column containers.
//!
//! Children are laid out back to back along the main axis, all starting at
//! the same cross-axis offset. The box is the content extent (raised to the
//! configured minimums) plus padding plus one cell per drawn border side.

use crate::ui::core::box_model::{Border, Insets, Padding};
use crate::ui::core::element::{
    chain_of, find_focusable, route_click, BoxedElement, Container, Element, Focusable,
};
use crate::ui::core::event::Click;
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::WidgetId;
use crate::ui::core::painter::Painter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn main(self, s: Size) -> u16 {
        match self {
            Axis::Horizontal => s.w,
            Axis::Vertical => s.h,
        }
    }

    fn cross(self, s: Size) -> u16 {
        match self {
            Axis::Horizontal => s.h,
            Axis::Vertical => s.w,
        }
    }

    fn size(self, main: u16, cross: u16) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// (main, cross) coordinates of `p`.
    fn split(self, p: Pos) -> (i32, i32) {
        match self {
            Axis::Horizontal => (p.x, p.y),
            Axis::Vertical => (p.y, p.x),
        }
    }

    fn pos(self, main: i32, cross: i32) -> Pos {
        match self {
            Axis::Horizontal => Pos::new(main, cross),
            Axis::Vertical => Pos::new(cross, main),
        }
    }
}

pub struct Layout {
    axis: Axis,
    children: Vec<BoxedElement>,
    padding: Padding,
    border: Border,
    min_width: u16,
    min_height: u16,
}

impl Layout {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            children: Vec::new(),
            padding: Padding::NONE,
            border: Border::NONE,
            min_width: 0,
            min_height: 0,
        }
    }

    /// Children left to right.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Children top to bottom.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn child(mut self, el: impl Element + 'static) -> Self {
        self.children.push(Box::new(el));
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn min_width(mut self, w: u16) -> Self {
        self.min_width = w;
        self
    }

    pub fn min_height(mut self, h: u16) -> Self {
        self.min_height = h;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn push(&mut self, el: BoxedElement) {
        self.children.push(el);
    }

    pub fn set_children(&mut self, children: Vec<BoxedElement>) {
        self.children = children;
    }

    pub fn children(&self) -> &[BoxedElement] {
        &self.children
    }

    pub fn insets(&self) -> Insets {
        self.padding.insets().plus(self.border.insets())
    }

    fn content_size(&self) -> Size {
        let mut main = 0u16;
        let mut cross = 0u16;
        for child in &self.children {
            let s = child.size();
            main = main.saturating_add(self.axis.main(s));
            cross = cross.max(self.axis.cross(s));
        }
        let min = Size::new(self.min_width, self.min_height);
        let main = main.max(self.axis.main(min));
        let cross = cross.max(self.axis.cross(min));
        self.axis.size(main, cross)
    }
}

impl Element for Layout {
    fn size(&self) -> Size {
        let insets = self.insets();
        self.content_size()
            .grow(insets.horizontal(), insets.vertical())
    }

    fn draw(&self, painter: &mut Painter, at: Pos, focus: Option<WidgetId>) {
        painter.border(Rect::from_parts(at, self.size()), &self.border);

        let insets = self.insets();
        let start = at.offset(i32::from(insets.left), i32::from(insets.top));
        let mut offset = 0i32;
        for child in &self.children {
            let origin = self.axis.pos(offset, 0);
            child.draw(painter, start.offset(origin.x, origin.y), focus);
            offset += i32::from(self.axis.main(child.size()));
        }
    }

    fn container(&self) -> Option<&dyn Container> {
        Some(self)
    }

    fn container_mut(&mut self) -> Option<&mut dyn Container> {
        Some(self)
    }
}

impl Container for Layout {
    fn focus_chain(&self) -> Vec<WidgetId> {
        self.children
            .iter()
            .flat_map(|child| chain_of(child.as_ref()))
            .collect()
    }

    fn focus_clicked(&mut self, click: Click) -> Option<WidgetId> {
        let insets = self.insets();
        let click = click.shifted(i32::from(insets.left), i32::from(insets.top));
        let (along, across) = self.axis.split(click.pos);

        let mut offset = 0i32;
        for child in &mut self.children {
            let s = child.size();
            let main = i32::from(self.axis.main(s));
            let cross = i32::from(self.axis.cross(s));
            if along >= offset && along < offset + main && across >= 0 && across < cross {
                let shift = self.axis.pos(offset, 0);
                return route_click(child.as_mut(), click.shifted(shift.x, shift.y));
            }
            offset += main;
        }
        None
    }

    fn focusable_by_id(&mut self, id: WidgetId) -> Option<&mut dyn Focusable> {
        for child in &mut self.children {
            if let Some(f) = find_focusable(child.as_mut(), id) {
                return Some(f);
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/layout.rs"]
mod tests;
