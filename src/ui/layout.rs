use tui::layout::{Constraint, Flex, Layout, Rect, Size};

pub const TOP_BAR_HEIGHT: u16 = 3;
pub const SELECTOR_HEIGHT: u16 = 3;
pub const SCORE_CARD_HEIGHT: u16 = 4;
pub const CONTROLS_WIDTH: u16 = 9;
pub const CONTROLS_HEIGHT: u16 = 9;
pub const STATS_PANEL_WIDTH: u16 = 38;

/// Pre-computed layout areas for the main draw loop.
pub struct LayoutAreas {
    pub top_bar: Rect,
    /// Portrait 9:16 frame the clip plays in, centered on screen.
    pub viewport: Rect,
    pub selector: Rect,
}

impl LayoutAreas {
    pub fn new(size: Size) -> Self {
        let rect = Rect::new(0, 0, size.width, size.height);
        Self::from_rect(rect, false)
    }

    pub fn update(&mut self, area: Rect, full_screen: bool) {
        *self = Self::from_rect(area, full_screen);
    }

    fn from_rect(area: Rect, full_screen: bool) -> Self {
        if full_screen {
            return LayoutAreas {
                top_bar: Rect::ZERO,
                viewport: portrait(area),
                selector: Rect::ZERO,
            };
        }

        let [top_bar, middle, selector] = Layout::vertical([
            Constraint::Length(TOP_BAR_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(SELECTOR_HEIGHT),
        ])
        .areas(area);

        LayoutAreas {
            top_bar,
            viewport: portrait(middle),
            selector,
        }
    }
}

/// Overlay positions inside the viewport.
pub struct OverlayAreas {
    pub score_card: Rect,
    pub controls: Rect,
    pub stats_panel: Rect,
}

impl OverlayAreas {
    pub fn new(viewport: Rect) -> Self {
        let inner = viewport.inner(tui::layout::Margin::new(1, 1));

        let [score_card, _] =
            Layout::vertical([Constraint::Length(SCORE_CARD_HEIGHT), Constraint::Fill(1)])
                .areas(inner);

        let [_, controls_column] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(CONTROLS_WIDTH)])
                .areas(inner);
        let [_, controls] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(CONTROLS_HEIGHT)])
                .areas(controls_column);

        let below_card = Rect {
            y: inner.y + score_card.height.min(inner.height),
            height: inner.height.saturating_sub(score_card.height),
            ..inner
        };
        let [stats_column] = Layout::horizontal([Constraint::Length(STATS_PANEL_WIDTH)])
            .flex(Flex::End)
            .areas(below_card);

        OverlayAreas {
            score_card,
            controls,
            stats_panel: stats_column,
        }
    }
}

/// Largest 9:16 frame that fits `area`, centered horizontally.
///
/// Terminal cells are roughly twice as tall as wide, so a 9:16 picture is
/// `height * 9 / 8` cells across.
pub fn portrait(area: Rect) -> Rect {
    let width = (u32::from(area.height) * 9 / 8).min(u32::from(area.width)) as u16;
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
