use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::Widget;

const LOGO: [&str; 3] = ["╭───╮", "│ H │", "╰───╯"];
const TITLE: &str = "HIGHLIGHTS";
const TAGLINE: &str = "vertical clips · live scores · match stats";

/// Intro screen: logo tile, title and tagline, centered.
pub struct Splash {
    pub pulse_on: bool,
}

impl Widget for Splash {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if area.height < 5 || area.width < TAGLINE.chars().count() as u16 {
            render_centered(
                Line::from(Span::styled(TITLE, title_style())),
                area,
                area.y + area.height / 2,
                buf,
            );
            return;
        }

        let content_height = LOGO.len() as u16 + 3;
        let top = area.y + area.height.saturating_sub(content_height) / 2;
        let logo_style = if self.pulse_on {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Rgb(0, 140, 60))
        };
        for (i, row) in LOGO.iter().enumerate() {
            render_centered(Line::from(Span::styled(*row, logo_style)), area, top + i as u16, buf);
        }

        let title_y = top + LOGO.len() as u16 + 1;
        render_centered(Line::from(Span::styled(TITLE, title_style())), area, title_y, buf);
        render_centered(
            Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
            area,
            title_y + 1,
            buf,
        );
    }
}

fn title_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

fn render_centered(line: Line, area: Rect, y: u16, buf: &mut Buffer) {
    if y >= area.bottom() {
        return;
    }
    let width = line.width() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    buf.set_line(x, y, &line, area.width);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(area: Rect) -> Vec<String> {
        let mut buf = Buffer::empty(area);
        Splash { pulse_on: true }.render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_full_splash_has_logo_and_title() {
        let rows = rows(Rect::new(0, 0, 60, 12));
        assert!(rows.iter().any(|r| r.contains("│ H │")));
        assert!(rows.iter().any(|r| r.contains(TITLE)));
        assert!(rows.iter().any(|r| r.contains("live scores")));
    }

    #[test]
    fn test_tiny_area_shows_title_only() {
        let rows = rows(Rect::new(0, 0, 20, 3));
        assert!(rows[1].contains(TITLE));
        assert!(!rows.iter().any(|r| r.contains('│')));
    }
}
