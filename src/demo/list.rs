//! Two bordered word lists side by side.

use cellui::settings::Settings;
use cellui::ui::core::box_model::{Border, BorderKind};
use cellui::ui::core::element::BoxedElement;
use cellui::ui::widgets::{palette, DynamicList, Layout, Text};
use cellui::ui::{Queue, Window, WindowResult};
use std::io;

const WORDS: [&str; 17] = [
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "gecko", "hotel", "igloo", "juliet",
    "kilo", "lama", "mike", "navi", "oscar", "oreo", "parrot",
];

pub const LIST_HEIGHT: u16 = 10;

pub fn run(settings: &Settings) -> io::Result<WindowResult> {
    let queue: Queue<()> = Queue::new();
    let mut window = list_window()
        .placement(settings.placement)
        .keymap(settings.keymap());
    cellui::tui::run(&mut window, &queue)
}

fn word_list() -> Layout {
    let list = DynamicList::new(
        || WORDS.len(),
        |i| Box::new(Text::new(WORDS[i])) as BoxedElement,
        LIST_HEIGHT,
    );
    Layout::vertical()
        .child(list)
        .padding([1, 2])
        .border(Border::new(BorderKind::Thin).style(palette::border()))
}

pub fn list_window() -> Window {
    Window::new(Layout::horizontal().child(word_list()).child(word_list()))
}

#[cfg(test)]
#[path = "../../tests/unit/demo/list.rs"]
mod tests;
