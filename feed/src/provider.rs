use crate::{FeedRecord, Sport, VideoDescriptor, mock};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

pub type FeedResult<T> = Result<T, FeedError>;

#[derive(Debug)]
pub enum FeedError {
    Io(std::io::Error, String),
    Parse(serde_json::Error, String),
    MissingDefault(String),
    NoVideos(String),
    SportMismatch { key: String, found: Sport },
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Io(e, path) => write!(f, "could not read {path}: {e}"),
            FeedError::Parse(e, path) => write!(f, "invalid feed catalog at {path}: {e}"),
            FeedError::MissingDefault(key) => {
                write!(f, "default feed '{key}' is not in the catalog")
            }
            FeedError::NoVideos(source) => write!(f, "no videos listed in {source}"),
            FeedError::SportMismatch { key, found } => {
                write!(f, "feed '{key}' holds {} data", found.key())
            }
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Io(e, _) => Some(e),
            FeedError::Parse(e, _) => Some(e),
            _ => None,
        }
    }
}

/// Source of feed records. The built-in table is static; a live source only
/// has to hand back records of the same shape.
pub trait FeedProvider: Send + Sync {
    fn get_feed(&self, key: &str) -> Option<Arc<FeedRecord>>;

    /// Record used whenever a lookup misses.
    fn default_feed(&self) -> Arc<FeedRecord>;

    fn videos(&self) -> &[VideoDescriptor];

    /// Feed for a video, keyed by its sport tag, falling back to the default.
    fn feed_for(&self, video: &VideoDescriptor) -> Arc<FeedRecord> {
        self.get_feed(&video.sport)
            .unwrap_or_else(|| self.default_feed())
    }
}

/// On-disk shape of a feed catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedCatalog {
    pub default: String,
    pub feeds: HashMap<String, FeedRecord>,
    pub videos: Vec<VideoDescriptor>,
}

/// In-memory feed table, built once at startup.
#[derive(Debug, Clone)]
pub struct FeedTable {
    feeds: HashMap<String, Arc<FeedRecord>>,
    default_key: String,
    videos: Vec<VideoDescriptor>,
}

impl FeedTable {
    /// Build a table, checking that the default key resolves, that a feed
    /// stored under a sport's key holds that sport, and that there is at
    /// least one video to select.
    pub fn new(
        feeds: HashMap<String, FeedRecord>,
        default_key: &str,
        videos: Vec<VideoDescriptor>,
    ) -> FeedResult<Self> {
        if !feeds.contains_key(default_key) {
            return Err(FeedError::MissingDefault(default_key.to_string()));
        }
        if videos.is_empty() {
            return Err(FeedError::NoVideos("feed table".to_string()));
        }
        for (key, feed) in &feeds {
            if let Some(sport) = Sport::from_key(key)
                && sport != feed.sport()
            {
                return Err(FeedError::SportMismatch {
                    key: key.clone(),
                    found: feed.sport(),
                });
            }
        }
        Ok(Self {
            feeds: feeds
                .into_iter()
                .map(|(key, feed)| (key, Arc::new(feed)))
                .collect(),
            default_key: default_key.to_string(),
            videos,
        })
    }

    /// The bundled football and basketball mocks, defaulting to football.
    pub fn builtin() -> Self {
        let feeds = [
            (Sport::Football, mock::football_feed()),
            (Sport::Basketball, mock::basketball_feed()),
        ]
        .into_iter()
        .map(|(sport, feed)| (sport.key().to_string(), Arc::new(feed)))
        .collect();
        Self {
            feeds,
            default_key: Sport::Football.key().to_string(),
            videos: mock::sample_videos(),
        }
    }

    pub fn from_catalog(catalog: FeedCatalog) -> FeedResult<Self> {
        Self::new(catalog.feeds, &catalog.default, catalog.videos)
    }

    pub fn from_json_str(json: &str, origin: &str) -> FeedResult<Self> {
        let catalog: FeedCatalog =
            serde_json::from_str(json).map_err(|e| FeedError::Parse(e, origin.to_string()))?;
        if catalog.videos.is_empty() {
            return Err(FeedError::NoVideos(origin.to_string()));
        }
        Self::from_catalog(catalog)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> FeedResult<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| FeedError::Io(e, origin.clone()))?;
        Self::from_json_str(&content, &origin)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.feeds.keys().map(String::as_str)
    }
}

impl FeedProvider for FeedTable {
    fn get_feed(&self, key: &str) -> Option<Arc<FeedRecord>> {
        self.feeds.get(key).cloned()
    }

    fn default_feed(&self) -> Arc<FeedRecord> {
        // Presence of the default key is checked in `FeedTable::new`.
        self.feeds
            .get(&self.default_key)
            .cloned()
            .unwrap_or_else(|| Arc::new(mock::football_feed()))
    }

    fn videos(&self) -> &[VideoDescriptor] {
        &self.videos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_json(default: &str) -> String {
        let catalog = FeedCatalog {
            default: default.to_string(),
            feeds: HashMap::from([("basketball".to_string(), mock::basketball_feed())]),
            videos: vec![VideoDescriptor::new(
                "bb",
                "Lakers vs Warriors",
                "https://example.com/bb.mp4",
                Sport::Basketball,
            )],
        };
        serde_json::to_string(&catalog).unwrap()
    }

    #[test]
    fn test_builtin_resolves_every_video() {
        let table = FeedTable::builtin();
        assert_eq!(table.videos().len(), 2);
        for video in table.videos() {
            let feed = table.get_feed(&video.sport).expect("mock entry");
            assert_eq!(Some(feed.sport()), video.sport());
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        let table = FeedTable::builtin();
        assert!(table.get_feed("curling").is_none());
        let default = table.default_feed();
        assert_eq!(default.league, "Premier League");
    }

    #[test]
    fn test_feed_for_missing_sport_uses_default() {
        let json = catalog_json("basketball");
        let table = FeedTable::from_json_str(&json, "inline").unwrap();
        let football_video = VideoDescriptor::new(
            "fb",
            "Arsenal vs Chelsea",
            "https://example.com/fb.mp4",
            Sport::Football,
        );
        let feed = table.feed_for(&football_video);
        assert_eq!(feed.league, "NBA");
    }

    #[test]
    fn test_catalog_with_unknown_default_is_rejected() {
        let json = catalog_json("hockey");
        let err = FeedTable::from_json_str(&json, "inline").unwrap_err();
        assert!(matches!(err, FeedError::MissingDefault(ref k) if k == "hockey"));
        assert_eq!(err.to_string(), "default feed 'hockey' is not in the catalog");
    }

    #[test]
    fn test_catalog_video_with_unknown_sport_uses_default() {
        let mut catalog = FeedCatalog {
            default: "football".to_string(),
            feeds: HashMap::from([
                ("football".to_string(), mock::football_feed()),
                ("basketball".to_string(), mock::basketball_feed()),
            ]),
            videos: mock::sample_videos(),
        };
        catalog.videos[1].sport = "hockey".to_string();
        let json = serde_json::to_string(&catalog).unwrap();

        let table = FeedTable::from_json_str(&json, "feeds.json").unwrap();
        assert_eq!(table.videos()[1].sport, "hockey");
        let feed = table.feed_for(&table.videos()[1]);
        assert_eq!(feed.league, "Premier League");
    }

    #[test]
    fn test_feed_under_wrong_sport_key_is_rejected() {
        let feeds = HashMap::from([("football".to_string(), mock::basketball_feed())]);
        let err = FeedTable::new(feeds, "football", mock::sample_videos()).unwrap_err();
        assert!(matches!(
            err,
            FeedError::SportMismatch { ref key, found: Sport::Basketball } if key == "football"
        ));
        assert_eq!(err.to_string(), "feed 'football' holds basketball data");
    }

    #[test]
    fn test_feed_under_non_sport_key_is_accepted() {
        let feeds = HashMap::from([("derby".to_string(), mock::football_feed())]);
        let table = FeedTable::new(feeds, "derby", mock::sample_videos()).unwrap();
        assert_eq!(table.feed_for(&table.videos()[1]).league, "Premier League");
    }

    #[test]
    fn test_catalog_parse_error_names_origin() {
        let err = FeedTable::from_json_str("{not json", "feeds.json").unwrap_err();
        assert!(matches!(err, FeedError::Parse(_, _)));
        assert!(err.to_string().starts_with("invalid feed catalog at feeds.json"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FeedTable::from_json_file("/nonexistent/hltui/feeds.json").unwrap_err();
        assert!(matches!(err, FeedError::Io(_, _)));
    }

    #[test]
    fn test_catalog_without_videos_is_rejected() {
        let json = r#"{"default":"x","feeds":{},"videos":[]}"#;
        let err = FeedTable::from_json_str(json, "empty.json").unwrap_err();
        assert!(matches!(err, FeedError::NoVideos(ref s) if s == "empty.json"));
    }

    #[test]
    fn test_records_are_shared_not_copied() {
        let table = FeedTable::builtin();
        let a = table.get_feed("football").unwrap();
        let b = table.get_feed("football").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
