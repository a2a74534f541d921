//! The element contract and its optional capabilities.
//!
//! Every element sizes and draws itself. Anything else it can do is exposed
//! through the accessor methods on [`Element`], which default to `None`; a
//! container asks a child for a capability instead of testing its type.

use super::event::{Click, KeyEvent};
use super::geom::{Pos, Size};
use super::id::WidgetId;
use super::painter::Painter;

pub type BoxedElement = Box<dyn Element>;

pub trait Element {
    fn size(&self) -> Size;

    /// Draws at `at` (the element's top-left cell). `focus` is the focused
    /// element of the whole tree.
    fn draw(&self, painter: &mut Painter, at: Pos, focus: Option<WidgetId>);

    fn focusable(&self) -> Option<&dyn Focusable> {
        None
    }

    fn focusable_mut(&mut self) -> Option<&mut dyn Focusable> {
        None
    }

    fn clickable_mut(&mut self) -> Option<&mut dyn Clickable> {
        None
    }

    fn expandable(&self) -> Option<&dyn Expandable> {
        None
    }

    fn container(&self) -> Option<&dyn Container> {
        None
    }

    fn container_mut(&mut self) -> Option<&mut dyn Container> {
        None
    }
}

pub trait Focusable {
    fn focus_id(&self) -> WidgetId;

    fn handle(&mut self, key: &KeyEvent);
}

pub trait Clickable {
    /// `click` is in the element's local coordinates.
    fn handle_click(&mut self, click: Click);
}

/// Alternate presentation used while the element is a list's selected row.
pub trait Expandable {
    fn expand_size(&self) -> Size;

    fn expand_draw(&self, painter: &mut Painter, at: Pos, focus: Option<WidgetId>);
}

pub trait Container {
    /// Depth-first, declaration-order list of focusable descendants.
    fn focus_chain(&self) -> Vec<WidgetId>;

    fn next_focusable(&self, current: Option<WidgetId>) -> Option<WidgetId> {
        next_in_chain(&self.focus_chain(), current)
    }

    /// Routes a click in this container's local coordinates and returns the
    /// element that should take focus.
    fn focus_clicked(&mut self, click: Click) -> Option<WidgetId>;

    fn focusable_by_id(&mut self, id: WidgetId) -> Option<&mut dyn Focusable>;
}

/// The entry after `current`, wrapping; the first entry when `current` is
/// unset or not in the chain.
pub fn next_in_chain(chain: &[WidgetId], current: Option<WidgetId>) -> Option<WidgetId> {
    let first = *chain.first()?;
    let Some(current) = current else {
        return Some(first);
    };
    let next = chain
        .iter()
        .position(|id| *id == current)
        .and_then(|idx| chain.get(idx + 1).copied());
    Some(next.unwrap_or(first))
}

/// The element's own contribution to a focus chain.
pub fn chain_of(el: &dyn Element) -> Vec<WidgetId> {
    if let Some(container) = el.container() {
        return container.focus_chain();
    }
    el.focusable()
        .map(|f| vec![f.focus_id()])
        .unwrap_or_default()
}

/// The element itself if focusable, else its first focusable descendant.
pub fn first_focus(el: &dyn Element) -> Option<WidgetId> {
    if let Some(container) = el.container() {
        return container.next_focusable(None);
    }
    el.focusable().map(|f| f.focus_id())
}

pub fn find_focusable(el: &mut dyn Element, id: WidgetId) -> Option<&mut dyn Focusable> {
    if el.focusable().is_some_and(|f| f.focus_id() == id) {
        return el.focusable_mut();
    }
    el.container_mut()?.focusable_by_id(id)
}

/// Delivers `click` (local to `el`) and returns the element to focus.
///
/// Containers route further down; anything else gets its click handler
/// called and yields its own id when focusable.
pub fn route_click(el: &mut dyn Element, click: Click) -> Option<WidgetId> {
    if let Some(container) = el.container_mut() {
        return container.focus_clicked(click);
    }
    if let Some(clickable) = el.clickable_mut() {
        clickable.handle_click(click);
    }
    el.focusable().map(|f| f.focus_id())
}

/// Sends `key` to the element, or to its first focusable descendant.
pub fn forward_key(el: &mut dyn Element, key: &KeyEvent) {
    let Some(target) = first_focus(el) else {
        return;
    };
    if let Some(f) = find_focusable(el, target) {
        f.handle(key);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/element.rs"]
mod tests;
