use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use shade_scale::{SHADE_COUNT, ShadeRamp};

/// Renders the ten shades of a ramp as equal-width cells.
///
/// Each cell is painted with its shade and labeled with the shade
/// index, using whichever ramp endpoint reads better against it.
#[derive(Debug)]
pub struct ShadeBar {
    ramp: ShadeRamp,
}

impl ShadeBar {
    pub fn new(ramp: ShadeRamp) -> Self {
        Self { ramp }
    }
}

impl Widget for ShadeBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width / SHADE_COUNT as u16;
        if width == 0 || area.height == 0 {
            return;
        }
        for (i, shade) in self.ramp.shades().enumerate() {
            let cell = Rect::new(area.x + i as u16 * width, area.y, width, area.height);
            buf.set_style(
                cell,
                Style::new()
                    .bg(shade.into())
                    .fg(self.ramp.label_color(i).into()),
            );
            buf.set_string(
                cell.x + cell.width / 2,
                cell.y,
                i.to_string(),
                Style::default(),
            );
        }
    }
}
