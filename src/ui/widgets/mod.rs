//! Stock elements.

pub mod button;
pub mod checkbox;
pub mod cond;
pub mod edit_box;
pub mod expand;
pub mod layout;
pub mod list;
pub mod loading;
pub mod text;

pub use button::Button;
pub use checkbox::CheckBox;
pub use cond::{Func, If};
pub use edit_box::EditBox;
pub use expand::Expand;
pub use layout::{Axis, Layout};
pub use list::{DynamicList, List};
pub use loading::Loading;
pub use text::Text;

/// Default widget colors.
pub mod palette {
    use crate::ui::core::style::{Color, Mod, Style};

    pub const BACKGROUND: Color = Color::BLACK;
    pub const TEXT: Color = Color::WHITE;
    pub const ACCENT: Color = Color::RED;
    pub const MUTED: Color = Color::DARK_GRAY;

    pub fn border() -> Style {
        Style::default().fg(MUTED).add_mod(Mod::BOLD)
    }
}
