use crate::state::app_state::SpoilerGate;
use highlights_feed::{FeedRecord, Side};
use tui::buffer::Buffer;
use tui::layout::{Alignment, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

const POSSESSION_MARK: &str = "◆";

/// Status row plus `away score - score home`, masked by the spoiler gate.
pub struct ScoreCard<'a> {
    pub feed: &'a FeedRecord,
    pub spoilers: &'a SpoilerGate,
    pub pulse_on: bool,
}

impl ScoreCard<'_> {
    fn status_line(&self) -> Line<'static> {
        let dot_style = if !self.feed.status.is_live() {
            Style::default().fg(Color::DarkGray)
        } else if self.pulse_on {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Rgb(90, 20, 20))
        };
        let mut period = self.feed.period.clone();
        if !self.feed.clock.is_empty() {
            period.push(' ');
            period.push_str(&self.feed.clock);
        }
        Line::from(vec![
            Span::styled("● ", dot_style),
            Span::styled(
                self.feed.status.label(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", self.feed.league), Style::default().fg(Color::Gray)),
            Span::styled(format!("  {period}"), Style::default().fg(Color::Gray)),
        ])
    }

    fn score_line(&self) -> Line<'static> {
        let team_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let score_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);
        let possession = |side: Side| {
            if self.feed.possession == side {
                Span::styled(POSSESSION_MARK, Style::default().fg(Color::Yellow))
            } else {
                Span::raw(" ")
            }
        };

        Line::from(vec![
            possession(Side::Away),
            Span::raw(" "),
            Span::styled(self.feed.team(Side::Away).to_string(), team_style),
            Span::raw("  "),
            Span::styled(self.spoilers.score_text(self.feed.score.away), score_style),
            Span::styled("  -  ", dim),
            Span::styled(self.spoilers.score_text(self.feed.score.home), score_style),
            Span::raw("  "),
            Span::styled(self.feed.team(Side::Home).to_string(), team_style),
            Span::raw(" "),
            possession(Side::Home),
        ])
    }
}

impl Widget for ScoreCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![self.status_line(), self.score_line()];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
