//! Single-line text entry with a horizontal scroll window.
//!
//! The buffer is indexed by `char`; each char takes one column. The window
//! invariant `window <= cursor <= len` and `cursor - window < width` holds
//! after every operation.

use super::palette;
use crate::ui::core::box_model::Padding;
use crate::ui::core::element::{Clickable, Element, Focusable};
use crate::ui::core::event::{Click, KeyCode, KeyEvent, KeyModifiers};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::WidgetId;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Style;

pub struct EditBox {
    id: WidgetId,
    width: u16,
    placeholder: String,
    mask: Option<char>,
    padding: Padding,
    on_submit: Option<Box<dyn FnMut()>>,
    on_change: Option<Box<dyn FnMut(&str)>>,

    text: Vec<char>,
    cursor: usize,
    window: usize,
}

impl EditBox {
    /// An empty box showing `width` columns of text (at least one).
    pub fn new(width: u16) -> Self {
        Self {
            id: WidgetId::next(),
            width: width.max(1),
            placeholder: String::new(),
            mask: None,
            padding: Padding::NONE,
            on_submit: None,
            on_change: None,
            text: Vec::new(),
            cursor: 0,
            window: 0,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Shows `*` for every character.
    pub fn hidden(self) -> Self {
        self.mask('*')
    }

    pub fn mask(mut self, mask: char) -> Self {
        self.mask = Some(mask);
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

    /// Called with the full contents after every edit.
    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// Replaces the contents and moves the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().collect();
        self.cursor = self.text.len();
        self.clamp_window();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn visible_width(&self) -> usize {
        usize::from(self.width)
    }

    pub fn insert(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += 1;
        if self.cursor - self.window + 1 > self.visible_width() {
            self.window += 1;
        }
        self.clamp_window();
        self.changed();
    }

    pub fn backspace(&mut self) {
        let edited = self.cursor > 0;
        if edited {
            self.cursor -= 1;
            self.text.remove(self.cursor);
        }
        self.retreat_after_removal();
        if edited {
            self.changed();
        }
    }

    pub fn delete(&mut self) {
        let edited = self.cursor < self.text.len();
        if edited {
            self.text.remove(self.cursor);
        }
        self.retreat_after_removal();
        if edited {
            self.changed();
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        if self.cursor < self.window + 1 && self.window > 0 {
            self.window -= 1;
        }
        self.clamp_window();
    }

    pub fn cursor_right(&mut self) {
        let len = self.text.len();
        if self.cursor + 2 > self.window + self.visible_width() && self.cursor < len {
            self.window += 1;
        }
        if self.cursor < len {
            self.cursor += 1;
        }
        self.clamp_window();
    }

    fn retreat_after_removal(&mut self) {
        let offset = self.cursor.saturating_sub(self.window);
        if offset < 2 && self.window > 0 && offset + 1 < self.visible_width() {
            self.window -= 1;
        }
        self.clamp_window();
    }

    fn clamp_window(&mut self) {
        self.cursor = self.cursor.min(self.text.len());
        self.window = self.window.min(self.cursor);
        let width = self.visible_width();
        if self.cursor - self.window >= width {
            self.window = self.cursor + 1 - width;
        }
    }

    fn changed(&mut self) {
        if self.on_change.is_none() {
            return;
        }
        let text = self.text();
        if let Some(f) = self.on_change.as_mut() {
            f(&text);
        }
    }
}

impl Element for EditBox {
    fn size(&self) -> Size {
        let w = self
            .padding
            .left()
            .saturating_add(self.width)
            .saturating_add(self.padding.right());
        Size::new(w, 3)
    }

    fn draw(&self, painter: &mut Painter, at: Pos, focus: Option<WidgetId>) {
        let focused = focus == Some(self.id);
        let outer = self.size().w;
        let shade = Style::default().fg(palette::BACKGROUND);
        let field = Style::default().bg(palette::BACKGROUND);
        let cursor_style = Style::new(palette::BACKGROUND, palette::TEXT);

        painter.hline(at, outer, '▄', shade);
        painter.fill_rect(Rect::new(at.x, at.y + 1, outer, 1), field);
        painter.hline(at.offset(0, 2), outer, '▀', shade);

        let row = at.offset(i32::from(self.padding.left()), 1);
        let width = self.visible_width();
        let len = self.text.len();

        if len == 0 && !focused {
            painter.text_clipped(
                row,
                self.placeholder.as_str(),
                field,
                Rect::new(row.x, row.y, self.width, 1),
            );
        }

        let max = if self.cursor == len { width - 1 } else { width };
        let start = self.window;
        let stop = (start + max).min(len);
        let cell_at = |i: usize| row.offset(i32::try_from(i).unwrap_or(i32::MAX), 0);

        for (i, ch) in self.text[start..stop].iter().enumerate() {
            let ch = self.mask.unwrap_or(*ch);
            let style = if focused && start + i == self.cursor {
                cursor_style
            } else {
                field
            };
            painter.cell(cell_at(i), ch, style);
        }
        if focused && self.cursor == stop {
            painter.cell(cell_at(stop - start), ' ', cursor_style);
        }

        if self.window > 0 {
            painter.cell(row, '…', field);
        }
        let cursor_on_last = focused && self.cursor - self.window == width - 1;
        if self.window + width < len && !cursor_on_last {
            painter.cell(cell_at(width - 1), '…', field);
        }
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

impl Focusable for EditBox {
    fn focus_id(&self) -> WidgetId {
        self.id
    }

    fn handle(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Left => self.cursor_left(),
            KeyCode::Right => self.cursor_right(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => self.delete(),
            KeyCode::Enter => {
                if let Some(f) = self.on_submit.as_mut() {
                    f();
                }
            }
            _ => {
                if let Some(ch) = key.text_char() {
                    self.insert(ch);
                }
            }
        }
    }
}

impl Clickable for EditBox {
    fn handle_click(&mut self, click: Click) {
        if !click.is_primary() {
            return;
        }
        let width = self.visible_width();
        let rel = i64::from(click.pos.x) - i64::from(self.padding.left());
        let col = usize::try_from(rel.max(0)).unwrap_or(0).min(width - 1);
        let index = self.window + col;

        if col == 0 {
            self.window = self.window.saturating_sub(1);
        } else if col == width - 1 && self.window + width < self.text.len() {
            self.window += 1;
        }
        self.cursor = index.min(self.text.len());
        self.clamp_window();
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/edit_box.rs"]
mod tests;
