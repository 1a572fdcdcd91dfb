use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_COMPACT_STATS: usize = 3;
const DEFAULT_MUTE_ARG: &str = "--mute=yes";

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    /// Catalog JSON replacing the bundled mock feeds.
    pub feeds_path: Option<PathBuf>,
    /// External player command line; the simulated player is used when unset.
    pub player_command: Option<String>,
    pub player_mute_arg: String,
    pub compact_stats: usize,
    pub start_muted: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            log_level: None,
            feeds_path: None,
            player_command: None,
            player_mute_arg: DEFAULT_MUTE_ARG.to_string(),
            compact_stats: DEFAULT_COMPACT_STATS,
            start_muted: true,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            full_screen: false,
            log_level: non_empty("HLTUI_LOG").and_then(|v| LevelFilter::from_str(v.trim()).ok()),
            feeds_path: non_empty("HLTUI_FEEDS_JSON").map(PathBuf::from),
            player_command: non_empty("HLTUI_PLAYER"),
            player_mute_arg: non_empty("HLTUI_PLAYER_MUTE_ARG")
                .unwrap_or(defaults.player_mute_arg),
            compact_stats: non_empty("HLTUI_COMPACT_STATS")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.compact_stats),
            start_muted: non_empty("HLTUI_START_UNMUTED").is_none_or(|v| v.trim() != "1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> AppSettings {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppSettings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        let s = settings(&[]);
        assert!(s.start_muted);
        assert_eq!(s.compact_stats, DEFAULT_COMPACT_STATS);
        assert_eq!(s.player_mute_arg, "--mute=yes");
        assert!(s.player_command.is_none());
        assert!(s.feeds_path.is_none());
        assert!(s.log_level.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let s = settings(&[
            ("HLTUI_LOG", "debug"),
            ("HLTUI_FEEDS_JSON", "/tmp/feeds.json"),
            ("HLTUI_PLAYER", "mpv --loop"),
            ("HLTUI_COMPACT_STATS", "5"),
            ("HLTUI_START_UNMUTED", "1"),
        ]);
        assert_eq!(s.log_level, Some(LevelFilter::Debug));
        assert_eq!(s.feeds_path, Some(PathBuf::from("/tmp/feeds.json")));
        assert_eq!(s.player_command.as_deref(), Some("mpv --loop"));
        assert_eq!(s.compact_stats, 5);
        assert!(!s.start_muted);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let s = settings(&[
            ("HLTUI_LOG", "loud"),
            ("HLTUI_COMPACT_STATS", "0"),
            ("HLTUI_PLAYER", "   "),
        ]);
        assert!(s.log_level.is_none());
        assert_eq!(s.compact_stats, DEFAULT_COMPACT_STATS);
        assert!(s.player_command.is_none());
    }
}
