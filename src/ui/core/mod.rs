pub mod box_model;
pub mod element;
pub mod event;
pub mod geom;
pub mod id;
pub mod painter;
pub mod style;
pub mod text_window;
