use log::error;
use std::time::Duration;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::App;
use crate::components::performers::performer_rows;
use crate::components::score_card::ScoreCard;
use crate::components::splash::Splash;
use crate::components::stat_bar::{STAT_BAR_HEIGHT, StatBar};
use crate::state::app_state::StatsTab;
use crate::ui::layout::{LayoutAreas, OverlayAreas};
use highlights_feed::{FeedRecord, Side};

const ACCENT: Color = Color::Green;

static HELP_LINES: &[(&str, &str)] = &[
    ("space / p", "play / pause"),
    ("m", "mute / unmute"),
    ("h", "hide / show scores"),
    ("s", "stats panel"),
    ("1 2 3 / tab", "game / players / teams"),
    ("e", "expand team stats"),
    ("← → / j k", "switch clip"),
    ("f", "full screen"),
    ("\"", "logs"),
    ("q", "quit"),
];

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        if app.state.show_intro {
            draw_intro(f, f.area(), app);
            return;
        }

        layout.update(f.area(), app.settings.full_screen);

        if !app.settings.full_screen {
            draw_top_bar(f, layout.top_bar, app);
            draw_selector(f, layout.selector, app);
        }

        draw_viewport(f, layout.viewport, app);

        let overlays = OverlayAreas::new(layout.viewport);
        f.render_widget(
            ScoreCard {
                feed: app.state.selector.feed(),
                spoilers: &app.state.spoilers,
                pulse_on: app.state.animation.pulse_on(),
            },
            overlays.score_card,
        );
        draw_controls(f, overlays.controls, app);
        if app.state.panels.show_stats {
            draw_stats_panel(f, overlays.stats_panel, app);
        }

        if app.state.show_logs {
            draw_logs(f, f.area());
        }
        if app.state.show_help {
            draw_help(f, f.area());
        }
    });

    if let Err(e) = result {
        error!("draw failed: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_intro(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [_top_pad, splash_area, prompt_area, _bottom_pad] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);
    f.render_widget(
        Splash {
            pulse_on: app.state.animation.pulse_on(),
        },
        splash_area,
    );
    f.render_widget(
        Paragraph::new("Press Enter to start")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        prompt_area,
    );
}

fn draw_top_bar(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [logo, status, spoiler] = Layout::horizontal([
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(10),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(Span::styled(
            " H ",
            Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        logo,
    );

    let status_line = match app.state.last_error.as_deref() {
        Some(err) => Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))),
        None => Line::from(Span::styled(
            "?: help",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(status_line).alignment(Alignment::Center), status);

    f.render_widget(
        Paragraph::new(format!("[ {} ]", app.state.spoilers.button_label()))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::White)),
        spoiler,
    );
}

fn draw_viewport(f: &mut Frame, area: Rect, app: &App) {
    let selector = &app.state.selector;
    let title = selector
        .selected_video()
        .map(|v| format!(" {} ", v.label))
        .unwrap_or_default();
    let block = default_border(Color::Gray).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let playback = &app.state.playback;
    let (glyph, state) = if playback.playing {
        ("▶", "PLAYING")
    } else {
        ("❚❚", "PAUSED")
    };
    let sound = if playback.muted { "muted" } else { "sound on" };
    let source: String = selector
        .selected_source()
        .chars()
        .take(inner.width.saturating_sub(2) as usize)
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            glyph,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(state, Style::default().fg(Color::White)),
            Span::raw("  "),
            Span::styled(
                format_clock(app.state.media.position),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(Span::styled(sound, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(Span::styled(source, Style::default().fg(Color::DarkGray))),
    ];

    let content_height = lines.len() as u16;
    let [_, content, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(content_height),
        Constraint::Fill(1),
    ])
    .areas(inner);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);
}

fn draw_controls(f: &mut Frame, area: Rect, app: &App) {
    if area.height < 3 || area.width < 3 {
        return;
    }
    let playback = &app.state.playback;
    let buttons = [
        (if playback.playing { "❚❚" } else { "▶" }, false),
        (if playback.muted { "MUTE" } else { "SND" }, !playback.muted),
        ("STAT", app.state.panels.show_stats),
    ];
    let rows = Layout::vertical([Constraint::Length(3); 3]).split(area);

    for ((label, active), row) in buttons.into_iter().zip(rows.iter()) {
        let color = if active { ACCENT } else { Color::DarkGray };
        let button = default_border(color);
        let inner = button.inner(*row);
        f.render_widget(Clear, *row);
        f.render_widget(button, *row);
        f.render_widget(
            Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White)),
            inner,
        );
    }
}

fn draw_stats_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::DarkGray).title(" Stats ");
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    if inner.height < 3 || inner.width < 10 {
        return;
    }

    let [tabs_area, body] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(inner);

    let panels = &app.state.panels;
    let titles: Vec<Line> = StatsTab::ALL.iter().map(|t| Line::from(t.label())).collect();
    let tabs = Tabs::new(titles)
        .select(panels.tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED))
        .divider("·");
    f.render_widget(tabs, tabs_area);

    let feed = app.state.selector.feed();
    match panels.tab {
        StatsTab::Game => draw_game_tab(f, body, app, feed),
        StatsTab::Players => draw_players_tab(f, body, feed),
        StatsTab::Teams => draw_teams_tab(f, body, app, feed),
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
}

/// `label ........ value` padded to `width`.
fn spaced(label: &str, value: &str, width: u16) -> String {
    let used = label.chars().count() + value.chars().count();
    let gap = (width as usize).saturating_sub(used).max(1);
    format!("{label}{}{value}", " ".repeat(gap))
}

fn draw_game_tab(f: &mut Frame, area: Rect, app: &App, feed: &FeedRecord) {
    let mut lines = vec![heading("Key Moments")];
    if feed.key_moments.is_empty() {
        lines.push(Line::from(Span::styled(
            "No key moments",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for moment in &feed.key_moments {
        let side_color = match moment.team {
            Side::Home => ACCENT,
            Side::Away => Color::Gray,
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<8}", moment.time), Style::default().fg(Color::Gray)),
            Span::styled("● ", Style::default().fg(side_color)),
            Span::styled(moment.player.clone(), Style::default().fg(Color::White)),
            Span::styled(
                format!("  {}", moment.kind.label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("Match Stats"));
    let panels = &app.state.panels;
    let visible = panels.team_stats(&feed.team_stats);
    for stat in visible {
        lines.push(Line::from(Span::styled(
            spaced(&stat.label, &stat.display_pair(), area.width),
            Style::default().fg(Color::White),
        )));
    }
    if visible.len() < feed.team_stats.len() {
        lines.push(Line::from(Span::styled(
            format!("e: show all {}", feed.team_stats.len()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_players_tab(f: &mut Frame, area: Rect, feed: &FeedRecord) {
    let mut lines = vec![heading("Top Performers")];
    let rows = performer_rows(&feed.performers);
    if rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "No player data",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for row in rows {
        lines.push(Line::from(Span::styled(
            spaced(&row.name, &row.summary, area.width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(row.team, Style::default().fg(Color::Gray))));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_teams_tab(f: &mut Frame, area: Rect, app: &App, feed: &FeedRecord) {
    if area.height < 2 {
        return;
    }
    let [header, bars] = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);
    f.render_widget(
        Paragraph::new(Span::styled(
            spaced(&feed.matchup.home, &feed.matchup.away, header.width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        header,
    );

    let stats = app.state.panels.team_stats(&feed.team_stats);
    let row_height = STAT_BAR_HEIGHT + 1;
    for (i, stat) in stats.iter().enumerate() {
        let y = bars.y + i as u16 * row_height;
        if y + STAT_BAR_HEIGHT > bars.bottom() {
            break;
        }
        f.render_widget(
            StatBar::new(stat),
            Rect::new(bars.x, y, bars.width, STAT_BAR_HEIGHT),
        );
    }
}

fn draw_selector(f: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let selector = &app.state.selector;
    let mut spans = Vec::new();
    for (idx, video) in selector.videos().iter().enumerate() {
        let style = if idx == selector.selected_index() {
            Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!(" {} ", video.label), style));
    }

    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        inner,
    );
}

fn draw_help(f: &mut Frame, area: Rect) {
    let width = 44.min(area.width);
    let height = (HELP_LINES.len() as u16 + 4).min(area.height);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    let block = default_border(Color::White).title(" Help (Esc to close) ");
    let inner = block.inner(popup);
    f.render_widget(Clear, popup);
    f.render_widget(block, popup);

    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{key:>12}  "), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let [_, bottom] =
        Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area);
    f.render_widget(Clear, bottom);
    f.render_widget(
        TuiLoggerWidget::default()
            .block(default_border(Color::DarkGray).title(" Logs "))
            .style_error(Style::default().fg(Color::Red))
            .style_warn(Style::default().fg(Color::Yellow))
            .style_info(Style::default().fg(Color::White)),
        bottom,
    );
}

fn format_clock(position: Duration) -> String {
    let secs = position.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::ZERO), "00:00");
        assert_eq!(format_clock(Duration::from_millis(83_400)), "01:23");
    }

    #[test]
    fn test_spaced_pads_to_width() {
        assert_eq!(spaced("Shots", "12 - 8", 16), "Shots     12 - 8");
        assert_eq!(spaced("Pass Accuracy", "88% - 84%", 10), "Pass Accuracy 88% - 84%");
    }
}
