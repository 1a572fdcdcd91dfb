use crate::state::app_settings::DEFAULT_COMPACT_STATS;
use crate::state::playback::PlaybackController;
use crate::state::selector::FeedSelector;
use highlights_feed::TeamStat;
use std::time::Duration;

/// Shown in place of a score while spoilers are hidden.
pub const SPOILER_GLYPH: &str = "—";

// ---------------------------------------------------------------------------
// Pulse animation for the live dot
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AnimationState {
    /// Monotonic tick counter, bumped every animation tick.
    pub tick: u64,
}

impl AnimationState {
    pub fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// On for six ticks, off for six (about one second per cycle at 80ms).
    pub fn pulse_on(&self) -> bool {
        (self.tick / 6) % 2 == 0
    }
}

// ---------------------------------------------------------------------------
// Spoiler gate
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SpoilerGate {
    pub hidden: bool,
}

impl SpoilerGate {
    pub fn toggle(&mut self) {
        self.hidden = !self.hidden;
    }

    pub fn score_text(&self, score: u16) -> String {
        if self.hidden {
            SPOILER_GLYPH.to_string()
        } else {
            score.to_string()
        }
    }

    /// Label of the top-bar button: what pressing it will do.
    pub fn button_label(&self) -> &'static str {
        if self.hidden { "Show" } else { "Hide" }
    }
}

// ---------------------------------------------------------------------------
// Stats panel
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum StatsTab {
    #[default]
    Game,
    Players,
    Teams,
}

impl StatsTab {
    pub const ALL: [StatsTab; 3] = [StatsTab::Game, StatsTab::Players, StatsTab::Teams];

    pub fn label(&self) -> &'static str {
        match self {
            StatsTab::Game => "Game",
            StatsTab::Players => "Players",
            StatsTab::Teams => "Teams",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            StatsTab::Game => 0,
            StatsTab::Players => 1,
            StatsTab::Teams => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            StatsTab::Game => StatsTab::Players,
            StatsTab::Players => StatsTab::Teams,
            StatsTab::Teams => StatsTab::Game,
        }
    }
}

#[derive(Debug)]
pub struct PanelState {
    pub show_stats: bool,
    pub tab: StatsTab,
    pub expanded: bool,
    /// Team-stat rows shown while collapsed.
    pub compact_rows: usize,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            show_stats: false,
            tab: StatsTab::default(),
            expanded: false,
            compact_rows: DEFAULT_COMPACT_STATS,
        }
    }
}

impl PanelState {
    pub fn toggle_stats(&mut self) {
        self.show_stats = !self.show_stats;
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn set_tab(&mut self, tab: StatsTab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    /// First `compact_rows` stats while collapsed, all of them when expanded.
    pub fn team_stats<'a>(&self, stats: &'a [TeamStat]) -> &'a [TeamStat] {
        if self.expanded {
            stats
        } else {
            &stats[..stats.len().min(self.compact_rows)]
        }
    }
}

// ---------------------------------------------------------------------------
// Last playhead report from the media worker
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy)]
pub struct MediaStatus {
    pub position: Duration,
    /// What the player is actually doing; may disagree with `playing`.
    pub engaged: bool,
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

pub struct AppState {
    pub show_intro: bool,
    pub show_help: bool,
    pub show_logs: bool,
    pub last_error: Option<String>,
    pub selector: FeedSelector,
    pub playback: PlaybackController,
    pub spoilers: SpoilerGate,
    pub panels: PanelState,
    pub media: MediaStatus,
    pub animation: AnimationState,
}

impl AppState {
    pub fn new(selector: FeedSelector, playback: PlaybackController) -> Self {
        Self {
            show_intro: true,
            show_help: false,
            show_logs: false,
            last_error: None,
            selector,
            playback,
            spoilers: SpoilerGate::default(),
            panels: PanelState::default(),
            media: MediaStatus::default(),
            animation: AnimationState::default(),
        }
    }
}
