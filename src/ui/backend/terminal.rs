//! ratatui/crossterm backend.
//!
//! Cells are staged in a ratatui `Buffer` and handed to the terminal on
//! `flush`, which lets ratatui diff against the previous frame.

use crate::ui::backend::Backend;
use crate::ui::core::geom::Size;
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Terminal;
use std::io;

pub struct TerminalBackend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    staged: Buffer,
}

impl TerminalBackend {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        let (w, h) = crossterm::terminal::size()?;
        Ok(Self {
            terminal,
            staged: Buffer::empty(RRect::new(0, 0, w, h)),
        })
    }
}

impl Backend for TerminalBackend {
    fn size(&self) -> Size {
        Size::new(self.staged.area.width, self.staged.area.height)
    }

    fn clear(&mut self, style: Style) {
        if let Ok((w, h)) = crossterm::terminal::size() {
            let area = RRect::new(0, 0, w, h);
            if area != self.staged.area {
                self.staged.resize(area);
            }
        }
        let style = to_ratatui_style(style);
        for cell in self.staged.content.iter_mut() {
            cell.reset();
            cell.set_style(style);
        }
    }

    fn set_cell(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        if let Some(cell) = self.staged.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_style(to_ratatui_style(style));
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let staged = &self.staged;
        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(StagedFrame { staged }, area);
        })?;
        Ok(())
    }
}

struct StagedFrame<'a> {
    staged: &'a Buffer,
}

impl Widget for StagedFrame<'_> {
    fn render(self, area: RRect, buf: &mut Buffer) {
        let area = area.intersection(self.staged.area);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let (Some(src), Some(dst)) = (self.staged.cell((x, y)), buf.cell_mut((x, y)))
                else {
                    continue;
                };
                *dst = src.clone();
            }
        }
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out.add_modifier(to_ratatui_mods(s.mods))
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    let mut out = RModifier::empty();
    if m.contains(Mod::BOLD) {
        out |= RModifier::BOLD;
    }
    if m.contains(Mod::DIM) {
        out |= RModifier::DIM;
    }
    if m.contains(Mod::ITALIC) {
        out |= RModifier::ITALIC;
    }
    if m.contains(Mod::UNDERLINE) {
        out |= RModifier::UNDERLINED;
    }
    if m.contains(Mod::REVERSE) {
        out |= RModifier::REVERSED;
    }
    out
}
