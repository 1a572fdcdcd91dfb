pub mod mock;
pub mod provider;
pub mod stats;

pub use provider::{FeedError, FeedProvider, FeedResult, FeedTable};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain types: one feed record per match, shared immutably once built
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedRecord {
    pub league: String,
    pub matchup: Matchup,
    pub score: ScorePair,
    pub period: String,
    #[serde(default)]
    pub clock: String,
    #[serde(default)]
    pub status: MatchStatus,
    pub possession: Side,
    #[serde(default)]
    pub key_moments: Vec<KeyMoment>,
    pub performers: Performers,
    #[serde(default)]
    pub team_stats: Vec<TeamStat>,
}

impl FeedRecord {
    /// Sport is implied by the performer shape, never stored separately.
    pub fn sport(&self) -> Sport {
        self.performers.sport()
    }

    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.matchup.home,
            Side::Away => &self.matchup.away,
        }
    }

    pub fn score_of(&self, side: Side) -> u16 {
        match side {
            Side::Home => self.score.home,
            Side::Away => self.score.away,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub home: String,
    pub away: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePair {
    pub home: u16,
    pub away: u16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    #[default]
    #[serde(rename = "LIVE")]
    Live,
    #[serde(rename = "HT")]
    HalfTime,
    #[serde(rename = "FT")]
    FullTime,
    #[serde(rename = "Final")]
    Final,
}

impl MatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Live => "LIVE",
            MatchStatus::HalfTime => "HT",
            MatchStatus::FullTime => "FT",
            MatchStatus::Final => "Final",
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, MatchStatus::Live | MatchStatus::HalfTime)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    #[default]
    Football,
    Basketball,
}

impl Sport {
    /// Lookup key used by providers to find the feed for this sport.
    pub fn key(&self) -> &'static str {
        match self {
            Sport::Football => "football",
            Sport::Basketball => "basketball",
        }
    }

    pub fn from_key(key: &str) -> Option<Sport> {
        match key {
            "football" => Some(Sport::Football),
            "basketball" => Some(Sport::Basketball),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Key moments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMoment {
    pub time: String,
    pub kind: MomentKind,
    pub player: String,
    pub team: Side,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MomentKind {
    Goal,
    Dunk,
    #[serde(rename = "3pt")]
    ThreePointer,
    #[default]
    #[serde(other)]
    Other,
}

impl MomentKind {
    pub fn label(&self) -> &'static str {
        match self {
            MomentKind::Goal => "Goal",
            MomentKind::Dunk => "Dunk",
            MomentKind::ThreePointer => "3PT",
            MomentKind::Other => "Play",
        }
    }
}

// ---------------------------------------------------------------------------
// Top performers: each sport carries its own stat line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sport", content = "players", rename_all = "lowercase")]
pub enum Performers {
    Football(Vec<FootballPerformer>),
    Basketball(Vec<BasketballPerformer>),
}

impl Performers {
    pub fn sport(&self) -> Sport {
        match self {
            Performers::Football(_) => Sport::Football,
            Performers::Basketball(_) => Sport::Basketball,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Performers::Football(p) => p.len(),
            Performers::Basketball(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FootballPerformer {
    pub name: String,
    pub team: String,
    pub rating: f32,
    #[serde(default)]
    pub goals: u16,
    #[serde(default)]
    pub assists: u16,
    #[serde(default)]
    pub xg: f32,
    #[serde(default)]
    pub shots: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasketballPerformer {
    pub name: String,
    pub team: String,
    #[serde(default)]
    pub points: u16,
    #[serde(default)]
    pub rebounds: u16,
    #[serde(default)]
    pub assists: u16,
}

// ---------------------------------------------------------------------------
// Team stat comparisons
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStat {
    pub label: String,
    pub home: f64,
    pub away: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl TeamStat {
    pub fn new(label: &str, home: f64, away: f64) -> Self {
        Self {
            label: label.to_string(),
            home,
            away,
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn unit_suffix(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }

    /// `"58% - 42%"`, or `"12 - 8"` when the stat has no unit.
    pub fn display_pair(&self) -> String {
        let unit = self.unit_suffix();
        format!(
            "{}{unit} - {}{unit}",
            stats::format_value(self.home),
            stats::format_value(self.away)
        )
    }

    pub fn split(&self) -> stats::StatSplit {
        stats::split_percent(self.home, self.away)
    }
}

// ---------------------------------------------------------------------------
// Video descriptors: only used to pick which feed applies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDescriptor {
    pub id: String,
    pub label: String,
    pub src: String,
    /// Feed lookup key. Kept as written so a sport this crate has no
    /// performer shape for still loads and falls back to the default feed.
    pub sport: String,
}

impl VideoDescriptor {
    pub fn new(id: &str, label: &str, src: &str, sport: Sport) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            src: src.to_string(),
            sport: sport.key().to_string(),
        }
    }

    pub fn sport(&self) -> Option<Sport> {
        Sport::from_key(&self.sport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pair_without_unit_has_empty_suffix() {
        let stat = TeamStat::new("Shots", 12.0, 8.0);
        assert_eq!(stat.display_pair(), "12 - 8");
    }

    #[test]
    fn test_display_pair_with_unit() {
        let stat = TeamStat::new("Possession", 58.0, 42.0).with_unit("%");
        assert_eq!(stat.display_pair(), "58% - 42%");
    }

    #[test]
    fn test_display_pair_keeps_fractions() {
        let stat = TeamStat::new("xG", 1.8, 1.2);
        assert_eq!(stat.display_pair(), "1.8 - 1.2");
    }

    #[test]
    fn test_sport_follows_performer_variant() {
        let p = Performers::Basketball(vec![BasketballPerformer::default()]);
        assert_eq!(p.sport(), Sport::Basketball);
        assert_eq!(p.sport().key(), "basketball");
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn test_video_with_unknown_sport_still_parses() {
        let video: VideoDescriptor = serde_json::from_str(
            r#"{"id":"nhl","label":"Oilers vs Flames","src":"https://cdn.example/nhl.mp4","sport":"hockey"}"#,
        )
        .unwrap();
        assert_eq!(video.sport, "hockey");
        assert_eq!(video.sport(), None);

        let known = VideoDescriptor::new("fb", "Arsenal vs Chelsea", "https://x/fb.mp4", Sport::Football);
        assert_eq!(known.sport, "football");
        assert_eq!(known.sport(), Some(Sport::Football));
    }

    #[test]
    fn test_unknown_moment_kind_parses_as_other() {
        let m: KeyMoment = serde_json::from_str(
            r#"{"time":"12'","kind":"penalty","player":"Saka","team":"home"}"#,
        )
        .unwrap();
        assert_eq!(m.kind, MomentKind::Other);
        assert_eq!(m.team, Side::Home);
    }

    #[test]
    fn test_status_defaults_to_live_when_missing() {
        let json = r#"{
            "league": "NBA",
            "matchup": {"home": "Lakers", "away": "Warriors"},
            "score": {"home": 10, "away": 9},
            "period": "Q1",
            "possession": "away",
            "performers": {"sport": "basketball", "players": []}
        }"#;
        let feed: FeedRecord = serde_json::from_str(json).unwrap();
        assert_eq!(feed.status, MatchStatus::Live);
        assert_eq!(feed.status.label(), "LIVE");
        assert_eq!(feed.sport(), Sport::Basketball);
        assert!(feed.team_stats.is_empty());
        assert_eq!(feed.team(Side::Away), "Warriors");
        assert_eq!(feed.score_of(Side::Home), 10);
    }
}
