use crate::ui::core::box_model::{Align, Padding};
use crate::ui::core::element::Element;
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::WidgetId;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Style;
use crate::ui::core::text_window::{clip_to_width, display_width};

enum Content {
    Static(String),
    Dynamic(Box<dyn Fn() -> String>),
}

/// A single line of text. Never focusable.
pub struct Text {
    content: Content,
    width: u16,
    align: Align,
    padding: Padding,
    style: Style,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_content(Content::Static(text.into()))
    }

    /// Text produced by `f` on every size and draw call.
    pub fn dynamic(f: impl Fn() -> String + 'static) -> Self {
        Self::with_content(Content::Dynamic(Box::new(f)))
    }

    fn with_content(content: Content) -> Self {
        Self {
            content,
            width: 0,
            align: Align::Left,
            padding: Padding::NONE,
            style: Style::default(),
        }
    }

    /// Fixed column width; 0 keeps the natural width of the text.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Static(text.into());
    }

    pub fn text(&self) -> String {
        match &self.content {
            Content::Static(s) => s.clone(),
            Content::Dynamic(f) => f(),
        }
    }

    fn inner_width(&self, text: &str) -> u16 {
        if self.width == 0 {
            display_width(text)
        } else {
            self.width
        }
    }
}

impl Element for Text {
    fn size(&self) -> Size {
        let insets = self.padding.insets();
        Size::new(self.inner_width(&self.text()), 1).grow(insets.horizontal(), insets.vertical())
    }

    fn draw(&self, painter: &mut Painter, at: Pos, _focus: Option<WidgetId>) {
        let text = self.text();
        let inner = self.inner_width(&text);
        let insets = self.padding.insets();
        let size = Size::new(inner, 1).grow(insets.horizontal(), insets.vertical());
        painter.fill_rect(Rect::from_parts(at, size), self.style);

        let shown = clip_to_width(&text, inner);
        let offset = self.align.offset(inner, display_width(shown));
        let origin = at.offset(
            i32::from(insets.left) + i32::from(offset),
            i32::from(insets.top),
        );
        painter.text(origin, shown, self.style);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/text.rs"]
mod tests;
