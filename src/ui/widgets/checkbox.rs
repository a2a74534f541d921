use super::palette;
use crate::ui::core::box_model::Padding;
use crate::ui::core::element::{Clickable, Element, Focusable};
use crate::ui::core::event::{Click, KeyCode, KeyEvent};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::WidgetId;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Mod, Style};

pub struct CheckBox {
    id: WidgetId,
    checked: bool,
    mark: char,
    padding: Padding,
    on_submit: Option<Box<dyn FnMut()>>,
    on_toggle: Option<Box<dyn FnMut(bool)>>,
}

impl Default for CheckBox {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckBox {
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            checked: false,
            mark: 'x',
            padding: Padding::NONE,
            on_submit: None,
            on_toggle: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn mark(mut self, mark: char) -> Self {
        self.mark = mark;
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn on_submit(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_submit = Some(Box::new(f));
        self
    }

    /// Called with the new state after every toggle.
    pub fn on_toggle(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_toggle = Some(Box::new(f));
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
        if let Some(f) = self.on_toggle.as_mut() {
            f(self.checked);
        }
    }

    fn glyph_rect(&self) -> Rect {
        Rect::new(
            i32::from(self.padding.left()),
            i32::from(self.padding.top()),
            3,
            1,
        )
    }
}

impl Element for CheckBox {
    fn size(&self) -> Size {
        let insets = self.padding.insets();
        Size::new(3, 1).grow(insets.horizontal(), insets.vertical())
    }

    fn draw(&self, painter: &mut Painter, at: Pos, focus: Option<WidgetId>) {
        let frame = if focus == Some(self.id) {
            palette::TEXT
        } else {
            palette::MUTED
        };
        let edge = Style::default().fg(frame).add_mod(Mod::BOLD);
        let mark = if self.checked { self.mark } else { ' ' };
        let glyph = self.glyph_rect();
        let origin = at.offset(glyph.x, glyph.y);

        painter.cell(origin, '▐', edge);
        painter.cell(origin.offset(1, 0), mark, Style::new(palette::ACCENT, frame));
        painter.cell(origin.offset(2, 0), '▌', edge);
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

impl Focusable for CheckBox {
    fn focus_id(&self) -> WidgetId {
        self.id
    }

    fn handle(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Char(' ') => self.toggle(),
            KeyCode::Enter => {
                if let Some(f) = self.on_submit.as_mut() {
                    f();
                }
            }
            _ => {}
        }
    }
}

impl Clickable for CheckBox {
    fn handle_click(&mut self, click: Click) {
        if click.is_primary() && self.glyph_rect().contains(click.pos) {
            self.toggle();
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/checkbox.rs"]
mod tests;
