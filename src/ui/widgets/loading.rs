use super::palette;
use crate::ui::core::box_model::Padding;
use crate::ui::core::element::Element;
use crate::ui::core::geom::{Pos, Size};
use crate::ui::core::id::WidgetId;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Style;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub const FRAMES: [&str; 5] = ["██  ", "▐█▌ ", " ██ ", " ▐█▌", "  ██"];

pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// Frame shown `elapsed` after the epoch: counts 0,1,2,3,4,4,3,2,1,0 and
/// repeats, advancing once per `tick`.
pub fn frame_index(elapsed: Duration, tick: Duration) -> usize {
    let tick = tick.as_nanos().max(1);
    let n = (elapsed.as_nanos() / tick % 10) as i64;
    let folded = n + (n / 5) * (((n % 5) * -2) - 1);
    usize::try_from(folded).unwrap_or(0)
}

/// A bouncing four-column spinner driven by the wall clock.
pub struct Loading {
    padding: Padding,
    tick: Duration,
    style: Style,
}

impl Default for Loading {
    fn default() -> Self {
        Self::new()
    }
}

impl Loading {
    pub fn new() -> Self {
        Self {
            padding: Padding::NONE,
            tick: DEFAULT_TICK,
            style: Style::default().fg(palette::TEXT),
        }
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn frame_at(&self, elapsed: Duration) -> &'static str {
        FRAMES[frame_index(elapsed, self.tick)]
    }

    fn draw_frame(&self, painter: &mut Painter, at: Pos, frame: &str) {
        let origin = at.offset(
            i32::from(self.padding.left()),
            i32::from(self.padding.top()),
        );
        painter.text(origin, frame, self.style);
    }
}

impl Element for Loading {
    fn size(&self) -> Size {
        let insets = self.padding.insets();
        Size::new(4, 1).grow(insets.horizontal(), insets.vertical())
    }

    fn draw(&self, painter: &mut Painter, at: Pos, _focus: Option<WidgetId>) {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        self.draw_frame(painter, at, self.frame_at(elapsed));
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/loading.rs"]
mod tests;
