use highlights_feed::TeamStat;
use highlights_feed::stats::{bar_cells, format_value};
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::widgets::Widget;

pub const STAT_BAR_HEIGHT: u16 = 2;
const BAR_CHAR: &str = "█";

/// Two-row comparison: `home  label  away` over a split bar.
pub struct StatBar<'a> {
    pub stat: &'a TeamStat,
    pub home_style: Style,
    pub away_style: Style,
}

impl<'a> StatBar<'a> {
    pub fn new(stat: &'a TeamStat) -> Self {
        Self {
            stat,
            home_style: Style::default().fg(Color::Green),
            away_style: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Widget for StatBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let unit = self.stat.unit_suffix();
        let home = format!("{}{unit}", format_value(self.stat.home));
        let away = format!("{}{unit}", format_value(self.stat.away));
        let text_style = Style::default().fg(Color::White);
        let label_style = Style::default().fg(Color::Gray);

        buf.set_stringn(area.x, area.y, &home, area.width as usize, text_style);
        let away_len = away.chars().count() as u16;
        if away_len < area.width {
            buf.set_string(area.right() - away_len, area.y, &away, text_style);
        }
        let label_len = self.stat.label.chars().count() as u16;
        if label_len + 2 <= area.width {
            let x = area.x + (area.width - label_len) / 2;
            buf.set_string(x, area.y, &self.stat.label, label_style);
        }

        if area.height < STAT_BAR_HEIGHT {
            return;
        }
        let split = self.stat.split();
        let home_cells = bar_cells(f64::from(split.home), area.width);
        let bar_y = area.y + 1;
        for offset in 0..area.width {
            let style = if offset < home_cells {
                self.home_style
            } else {
                self.away_style
            };
            buf.set_string(area.x + offset, bar_y, BAR_CHAR, style);
        }
    }
}
