//! The event loop.
//!
//! A [`Window`] owns the root element and the current focus. [`Window::run`]
//! drains a [`Queue`] on the calling thread: input is routed into the tree,
//! repaints redraw it, application messages go to the message handler. The
//! loop ends with a [`WindowResult`].

use crate::ui::backend::Backend;
use crate::ui::core::element::{find_focusable, first_focus, route_click, BoxedElement, Element};
use crate::ui::core::event::{Event, KeyCode, KeyEvent, MouseButton, PointerAction};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::id::WidgetId;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Style;
use crate::ui::worker::{Queue, WindowMsg};
use serde::{Deserialize, Serialize};
use std::io;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    #[default]
    TopLeft,
    Centered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowState {
    Error,
    Exit,
    Back,
    Continue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowResult {
    pub state: WindowState,
    pub message: Option<String>,
}

impl WindowResult {
    pub fn new(state: WindowState) -> Self {
        Self {
            state,
            message: None,
        }
    }

    pub fn exit() -> Self {
        Self::new(WindowState::Exit)
    }

    pub fn back() -> Self {
        Self::new(WindowState::Back)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(WindowState::Error).with_message(message)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Window-level key bindings, checked before anything reaches the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keymap {
    pub quit: Vec<KeyEvent>,
    pub next_focus: Vec<KeyEvent>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            quit: vec![KeyEvent::plain(KeyCode::Esc), KeyEvent::ctrl('c')],
            next_focus: vec![KeyEvent::plain(KeyCode::Tab)],
        }
    }
}

impl Keymap {
    fn is_quit(&self, key: &KeyEvent) -> bool {
        self.quit.contains(key)
    }

    fn is_next_focus(&self, key: &KeyEvent) -> bool {
        self.next_focus.contains(key)
    }
}

/// What the loop does after one message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Idle,
    Repaint,
    Exit(WindowResult),
}

type MessageHandler<M> = Box<dyn FnMut(M) -> Option<WindowResult>>;

pub struct Window<M = ()> {
    root: BoxedElement,
    focus: Option<WidgetId>,
    placement: Placement,
    keymap: Keymap,
    background: Style,
    on_message: Option<MessageHandler<M>>,
}

impl<M> Window<M> {
    /// Focus starts on the root's first focusable element.
    pub fn new(root: impl Element + 'static) -> Self {
        let root: BoxedElement = Box::new(root);
        let focus = first_focus(root.as_ref());
        Self {
            root,
            focus,
            placement: Placement::TopLeft,
            keymap: Keymap::default(),
            background: Style::default(),
            on_message: None,
        }
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn background(mut self, style: Style) -> Self {
        self.background = style;
        self
    }

    /// Handles application messages; returning a result ends the loop.
    pub fn on_message(mut self, f: impl FnMut(M) -> Option<WindowResult> + 'static) -> Self {
        self.on_message = Some(Box::new(f));
        self
    }

    pub fn focus(&self) -> Option<WidgetId> {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Option<WidgetId>) {
        self.focus = focus;
    }

    pub fn root(&self) -> &dyn Element {
        self.root.as_ref()
    }

    /// Top-left cell of the root on a screen of `screen` size.
    pub fn origin(&self, screen: Size) -> Pos {
        match self.placement {
            Placement::TopLeft => Pos::new(0, 0),
            Placement::Centered => {
                Rect::new(0, 0, screen.w, screen.h).centered_origin(self.root.size())
            }
        }
    }

    pub fn handle_event(&mut self, ev: Event, screen: Size) -> Flow {
        match ev {
            Event::Key(key) => self.handle_key(&key),
            Event::Mouse(mouse) => {
                let Some(click) = mouse.click() else {
                    return Flow::Idle;
                };
                let click = click.relative_to(self.origin(screen));
                let target = route_click(self.root.as_mut(), click);
                if click.action == PointerAction::Press(MouseButton::Left) {
                    self.change_focus(target);
                }
                Flow::Repaint
            }
            Event::Resize(..) => Flow::Repaint,
            Event::Error(msg) => {
                tracing::error!(error = %msg, "input failed");
                Flow::Exit(WindowResult::error(msg))
            }
            Event::Interrupt => {
                tracing::info!("interrupted");
                Flow::Exit(WindowResult::exit())
            }
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Flow {
        if self.keymap.is_quit(key) {
            return Flow::Exit(WindowResult::exit());
        }
        if self.keymap.is_next_focus(key) {
            let next = match self.root.container() {
                Some(container) => container.next_focusable(self.focus),
                None => first_focus(self.root.as_ref()),
            };
            self.change_focus(next);
            return Flow::Repaint;
        }
        let Some(id) = self.focus else {
            return Flow::Idle;
        };
        if let Some(target) = find_focusable(self.root.as_mut(), id) {
            target.handle(key);
        }
        Flow::Repaint
    }

    fn change_focus(&mut self, focus: Option<WidgetId>) {
        if focus != self.focus {
            tracing::debug!(from = ?self.focus, to = ?focus, "focus changed");
        }
        self.focus = focus;
    }

    pub fn handle_msg(&mut self, msg: WindowMsg<M>, screen: Size) -> Flow {
        match msg {
            WindowMsg::Input(ev) => self.handle_event(ev, screen),
            WindowMsg::Repaint => Flow::Repaint,
            WindowMsg::Message(m) => {
                let Some(handler) = self.on_message.as_mut() else {
                    return Flow::Repaint;
                };
                match handler(m) {
                    Some(result) => Flow::Exit(result),
                    None => Flow::Repaint,
                }
            }
        }
    }

    /// Clears the backend, draws the tree and flushes.
    pub fn paint<B: Backend + ?Sized>(&self, backend: &mut B) -> io::Result<()> {
        let origin = self.origin(backend.size());
        let mut painter = Painter::new();
        self.root.draw(&mut painter, origin, self.focus);
        backend.clear(self.background);
        backend.draw(painter.cmds());
        backend.flush()
    }

    /// Paints once, then runs until an event or message ends the loop.
    pub fn run<B: Backend + ?Sized>(
        &mut self,
        backend: &mut B,
        queue: &Queue<M>,
    ) -> io::Result<WindowResult> {
        tracing::info!(placement = ?self.placement, "window started");
        let repaint = queue.repaint();
        self.paint(backend)?;

        let result = loop {
            let Ok(msg) = queue.receiver().recv() else {
                break WindowResult::exit();
            };
            if matches!(msg, WindowMsg::Repaint) {
                repaint.clear();
            }
            match self.handle_msg(msg, backend.size()) {
                Flow::Idle => {}
                Flow::Repaint => self.paint(backend)?,
                Flow::Exit(result) => break result,
            }
        };
        tracing::info!(state = ?result.state, "window stopped");
        Ok(result)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/window.rs"]
mod tests;
