//! Scrollable lists with a selection and a visible window.
//!
//! [`List`] owns its rows; [`DynamicList`] asks a count accessor and a pure
//! builder for rows on every draw and interaction and never stores them.
//! After every operation `window <= selected < window + visible_count()`.

use crate::ui::core::box_model::Padding;
use crate::ui::core::element::{
    first_focus, forward_key, route_click, BoxedElement, Clickable, Element, Focusable,
};
use crate::ui::core::event::{Click, KeyCode, KeyEvent, PointerAction};
use crate::ui::core::geom::{Pos, Size};
use crate::ui::core::id::WidgetId;
use crate::ui::core::painter::Painter;
use std::ops::{Deref, DerefMut, Range};

pub enum ItemRef<'a> {
    Stored(&'a (dyn Element + 'static)),
    Built(BoxedElement),
}

impl Deref for ItemRef<'_> {
    type Target = dyn Element;

    fn deref(&self) -> &Self::Target {
        match self {
            ItemRef::Stored(el) => *el,
            ItemRef::Built(el) => el.as_ref(),
        }
    }
}

pub enum ItemMut<'a> {
    Stored(&'a mut (dyn Element + 'static)),
    Built(BoxedElement),
}

impl Deref for ItemMut<'_> {
    type Target = dyn Element;

    fn deref(&self) -> &Self::Target {
        match self {
            ItemMut::Stored(el) => &**el,
            ItemMut::Built(el) => el.as_ref(),
        }
    }
}

impl DerefMut for ItemMut<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            ItemMut::Stored(el) => &mut **el,
            ItemMut::Built(el) => el.as_mut(),
        }
    }
}

/// Where a list gets its rows from.
pub trait ItemSource {
    fn count(&self) -> usize;

    fn item(&self, idx: usize) -> Option<ItemRef<'_>>;

    fn item_mut(&mut self, idx: usize) -> Option<ItemMut<'_>>;

    /// Rows that contribute to the list's width.
    fn width_range(&self, window: usize, visible: usize) -> Range<usize>;
}

/// Rows owned by the list.
#[derive(Default)]
pub struct Stored(Vec<BoxedElement>);

impl ItemSource for Stored {
    fn count(&self) -> usize {
        self.0.len()
    }

    fn item(&self, idx: usize) -> Option<ItemRef<'_>> {
        self.0.get(idx).map(|el| ItemRef::Stored(el.as_ref()))
    }

    fn item_mut(&mut self, idx: usize) -> Option<ItemMut<'_>> {
        self.0.get_mut(idx).map(|el| ItemMut::Stored(el.as_mut()))
    }

    fn width_range(&self, _window: usize, _visible: usize) -> Range<usize> {
        0..self.0.len()
    }
}

/// Rows produced on demand by a pure, idempotent builder.
pub struct Built {
    count: Box<dyn Fn() -> usize>,
    build: Box<dyn Fn(usize) -> BoxedElement>,
}

impl ItemSource for Built {
    fn count(&self) -> usize {
        (self.count)()
    }

    fn item(&self, idx: usize) -> Option<ItemRef<'_>> {
        (idx < self.count()).then(|| ItemRef::Built((self.build)(idx)))
    }

    fn item_mut(&mut self, idx: usize) -> Option<ItemMut<'_>> {
        (idx < self.count()).then(|| ItemMut::Built((self.build)(idx)))
    }

    fn width_range(&self, window: usize, visible: usize) -> Range<usize> {
        window..window.saturating_add(visible).min(self.count())
    }
}

pub type List = ListView<Stored>;
pub type DynamicList = ListView<Built>;

pub struct ListView<S> {
    id: WidgetId,
    source: S,
    height: u16,
    padding: Padding,
    selected: usize,
    window: usize,
    on_change: Option<Box<dyn FnMut(usize)>>,
}

impl ListView<Stored> {
    /// An empty list showing `height` rows.
    pub fn new(height: u16) -> Self {
        Self::with_source(Stored::default(), height)
    }

    pub fn item(mut self, el: impl Element + 'static) -> Self {
        self.source.0.push(Box::new(el));
        self
    }

    pub fn push(&mut self, el: BoxedElement) {
        self.source.0.push(el);
    }
}

impl ListView<Built> {
    pub fn new(
        count: impl Fn() -> usize + 'static,
        build: impl Fn(usize) -> BoxedElement + 'static,
        height: u16,
    ) -> Self {
        let source = Built {
            count: Box::new(count),
            build: Box::new(build),
        };
        Self::with_source(source, height)
    }
}

impl<S: ItemSource> ListView<S> {
    fn with_source(source: S, height: u16) -> Self {
        Self {
            id: WidgetId::next(),
            source,
            height,
            padding: Padding::NONE,
            selected: 0,
            window: 0,
            on_change: None,
        }
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Called with the new index whenever the selection changes.
    pub fn on_change(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.source.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Moves the selection to `idx` (clamped) and scrolls it into view.
    pub fn select(&mut self, idx: usize) {
        let prev = self.selected;
        self.selected = idx.min(self.len().saturating_sub(1));
        self.ensure_visible();
        self.notify(prev);
    }

    /// Rows drawn from the window: every row that fits, and always the first.
    pub fn visible_count(&self) -> usize {
        let count = self.source.count();
        let height = u32::from(self.height);
        let mut used = 0u32;
        let mut visible = 0usize;
        for idx in self.window..count {
            let h = u32::from(self.extent(idx).h);
            if visible > 0 && used + h > height {
                break;
            }
            used += h;
            visible += 1;
        }
        visible
    }

    pub fn scroll_down(&mut self) {
        let prev = self.selected;
        self.ensure_visible();
        let count = self.source.count();
        if self.selected + 1 >= count {
            self.notify(prev);
            return;
        }
        self.selected += 1;

        // Walk back from one past the selection until the rows no longer fit
        // the viewport; the window starts just below that point.
        let start = (self.selected + 1).min(count - 1);
        let height = u32::from(self.height);
        let mut used = 0u32;
        for idx in (0..=start).rev() {
            used += u32::from(self.extent(idx).h);
            if used > height {
                self.window = idx + 1;
                break;
            }
            if idx == self.window {
                break;
            }
        }
        self.ensure_visible();
        self.notify(prev);
    }

    pub fn scroll_up(&mut self) {
        let prev = self.selected;
        self.ensure_visible();
        if self.selected == 0 {
            self.notify(prev);
            return;
        }
        self.selected -= 1;
        if self.selected == self.window && self.selected != 0 {
            self.window -= 1;
        }
        self.ensure_visible();
        self.notify(prev);
    }

    /// Pulls selection and window back in range after the row count changed
    /// underneath the list.
    fn resync(&mut self) {
        let prev = self.selected;
        self.ensure_visible();
        self.notify(prev);
    }

    fn ensure_visible(&mut self) {
        let count = self.source.count();
        if count == 0 {
            self.selected = 0;
            self.window = 0;
            return;
        }
        self.selected = self.selected.min(count - 1);
        self.window = self.window.min(self.selected);
        while self.window < self.selected && self.selected >= self.window + self.visible_count() {
            self.window += 1;
        }
    }

    fn notify(&mut self, prev: usize) {
        if prev == self.selected {
            return;
        }
        let selected = self.selected;
        if let Some(f) = self.on_change.as_mut() {
            f(selected);
        }
    }

    /// Size of row `idx`, using the expanded size for the selected row.
    fn extent(&self, idx: usize) -> Size {
        let Some(el) = self.source.item(idx) else {
            return Size::ZERO;
        };
        match el.expandable() {
            Some(ex) if idx == self.selected => ex.expand_size(),
            _ => el.size(),
        }
    }

    fn content_origin(&self) -> Pos {
        Pos::new(
            i32::from(self.padding.left()),
            i32::from(self.padding.top()),
        )
    }
}

impl<S: ItemSource> Element for ListView<S> {
    fn size(&self) -> Size {
        let range = self.source.width_range(self.window, self.visible_count());
        let widest = range.map(|idx| self.extent(idx).w).max().unwrap_or(0);
        let insets = self.padding.insets();
        Size::new(widest, self.height).grow(insets.horizontal(), insets.vertical())
    }

    fn draw(&self, painter: &mut Painter, at: Pos, _focus: Option<WidgetId>) {
        let origin = self.content_origin();
        let mut y = at.y + origin.y;
        let x = at.x + origin.x;
        for idx in self.window..self.window + self.visible_count() {
            let Some(el) = self.source.item(idx) else {
                break;
            };
            let pos = Pos::new(x, y);
            if idx == self.selected {
                let focus = first_focus(&*el);
                match el.expandable() {
                    Some(ex) => ex.expand_draw(painter, pos, focus),
                    None => el.draw(painter, pos, focus),
                }
            } else {
                el.draw(painter, pos, None);
            }
            y += i32::from(self.extent(idx).h);
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

impl<S: ItemSource> Focusable for ListView<S> {
    fn focus_id(&self) -> WidgetId {
        self.id
    }

    fn handle(&mut self, key: &KeyEvent) {
        self.resync();
        match key.code {
            KeyCode::Up => self.scroll_up(),
            KeyCode::Down => self.scroll_down(),
            _ => {
                let selected = self.selected;
                if let Some(mut el) = self.source.item_mut(selected) {
                    forward_key(&mut *el, key);
                }
            }
        }
    }
}

impl<S: ItemSource> Clickable for ListView<S> {
    fn handle_click(&mut self, click: Click) {
        self.resync();
        match click.action {
            PointerAction::WheelUp => {
                self.scroll_up();
                return;
            }
            PointerAction::WheelDown => {
                self.scroll_down();
                return;
            }
            PointerAction::Press(_) if !click.is_primary() => return,
            PointerAction::Press(_) => {}
        }

        let origin = self.content_origin();
        let click = click.shifted(origin.x, origin.y);
        let mut top = 0i32;
        for idx in self.window..self.window + self.visible_count() {
            let s = self.extent(idx);
            let (w, h) = (i32::from(s.w), i32::from(s.h));
            let p = click.pos;
            if p.x >= 0 && p.x < w && p.y >= top && p.y < top + h {
                if let Some(mut el) = self.source.item_mut(idx) {
                    route_click(&mut *el, click.shifted(0, top));
                }
                self.select_clicked(idx);
                return;
            }
            top += h;
        }
    }
}

impl<S: ItemSource> ListView<S> {
    fn select_clicked(&mut self, idx: usize) {
        let prev = self.selected;
        self.selected = idx;

        let visible = self.visible_count();
        let count = self.source.count();
        if idx == self.window && self.window > 0 {
            self.window -= 1;
        } else if idx + 2 > self.window + visible && self.window + visible < count {
            self.window += 1;
        }
        self.ensure_visible();
        self.notify(prev);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/list.rs"]
mod tests;
