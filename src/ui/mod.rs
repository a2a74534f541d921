//! Widget toolkit.
//!
//! `core` holds the element contract and the drawing primitives, `widgets`
//! the stock elements, `backend` the cell grids they are replayed onto, and
//! `window`/`worker` the event loop and the threads that feed it.

pub mod backend;
pub mod core;
pub mod widgets;
pub mod window;
pub mod worker;

pub use window::{Flow, Keymap, Placement, Window, WindowResult, WindowState};
pub use worker::{InputPoller, Queue, RepaintSignal, TaskRunner, WindowMsg};
