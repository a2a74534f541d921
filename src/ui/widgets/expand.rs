use crate::ui::core::element::{BoxedElement, Element, Expandable};
use crate::ui::core::geom::{Pos, Size};
use crate::ui::core::id::WidgetId;
use crate::ui::core::painter::Painter;

/// A list row with a compact form and a detailed form shown while selected.
pub struct Expand {
    collapsed: BoxedElement,
    expanded: BoxedElement,
}

impl Expand {
    pub fn new(collapsed: impl Element + 'static, expanded: impl Element + 'static) -> Self {
        Self {
            collapsed: Box::new(collapsed),
            expanded: Box::new(expanded),
        }
    }
}

impl Element for Expand {
    fn size(&self) -> Size {
        self.collapsed.size()
    }

    fn draw(&self, painter: &mut Painter, at: Pos, focus: Option<WidgetId>) {
        self.collapsed.draw(painter, at, focus);
    }

    fn expandable(&self) -> Option<&dyn Expandable> {
        Some(self)
    }
}

impl Expandable for Expand {
    fn expand_size(&self) -> Size {
        self.expanded.size()
    }

    fn expand_draw(&self, painter: &mut Painter, at: Pos, focus: Option<WidgetId>) {
        self.expanded.draw(painter, at, focus);
    }
}
