use super::palette;
use crate::ui::core::box_model::Padding;
use crate::ui::core::element::{Clickable, Element, Focusable};
use crate::ui::core::event::{Click, KeyCode, KeyEvent};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::WidgetId;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Style;
use crate::ui::core::text_window::display_width;

/// A three-row shaded block with a centered label row.
///
/// Only the horizontal padding applies; the block is always three rows tall.
pub struct Button {
    id: WidgetId,
    label: String,
    padding: Padding,
    on_submit: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: WidgetId::next(),
            label: label.into(),
            padding: Padding::NONE,
            on_submit: None,
        }
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn on_submit(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_submit = Some(Box::new(f));
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    fn submit(&mut self) {
        if let Some(f) = self.on_submit.as_mut() {
            f();
        }
    }
}

impl Element for Button {
    fn size(&self) -> Size {
        let w = self
            .padding
            .left()
            .saturating_add(display_width(&self.label))
            .saturating_add(self.padding.right());
        Size::new(w, 3)
    }

    fn draw(&self, painter: &mut Painter, at: Pos, focus: Option<WidgetId>) {
        let (mut block, mut label) = (palette::BACKGROUND, palette::TEXT);
        if focus == Some(self.id) {
            std::mem::swap(&mut block, &mut label);
        }
        let w = self.size().w;
        let shade = Style::default().fg(block);

        painter.hline(at, w, '▄', shade);
        painter.fill_rect(Rect::new(at.x, at.y + 1, w, 1), Style::new(label, block));
        painter.text(
            at.offset(i32::from(self.padding.left()), 1),
            self.label.as_str(),
            Style::new(label, block),
        );
        painter.hline(at.offset(0, 2), w, '▀', shade);
    }

    fn focusable(&self) -> Option<&dyn Focusable> {
        Some(self)
    }

    fn focusable_mut(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }

    fn clickable_mut(&mut self) -> Option<&mut dyn Clickable> {
        Some(self)
    }
}

impl Focusable for Button {
    fn focus_id(&self) -> WidgetId {
        self.id
    }

    fn handle(&mut self, key: &KeyEvent) {
        if key.code == KeyCode::Enter {
            self.submit();
        }
    }
}

impl Clickable for Button {
    fn handle_click(&mut self, click: Click) {
        let hit = Rect::from_parts(Pos::default(), self.size());
        if click.is_primary() && hit.contains(click.pos) {
            self.submit();
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/button.rs"]
mod tests;
