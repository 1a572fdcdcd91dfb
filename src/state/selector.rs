use highlights_feed::{FeedProvider, FeedRecord, VideoDescriptor};
use log::{debug, warn};
use std::sync::Arc;

/// Which clip is on screen, and the feed record that goes with it.
pub struct FeedSelector {
    provider: Arc<dyn FeedProvider>,
    selected: usize,
    feed: Arc<FeedRecord>,
}

impl FeedSelector {
    pub fn new(provider: Arc<dyn FeedProvider>) -> Self {
        let feed = provider
            .videos()
            .first()
            .map(|video| resolve(provider.as_ref(), video))
            .unwrap_or_else(|| provider.default_feed());
        Self {
            provider,
            selected: 0,
            feed,
        }
    }

    pub fn videos(&self) -> &[VideoDescriptor] {
        self.provider.videos()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_video(&self) -> Option<&VideoDescriptor> {
        self.videos().get(self.selected)
    }

    pub fn selected_source(&self) -> &str {
        self.selected_video().map(|v| v.src.as_str()).unwrap_or("")
    }

    pub fn feed(&self) -> &FeedRecord {
        &self.feed
    }

    /// Switch to video `index`. Returns false when nothing changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index == self.selected {
            return false;
        }
        let Some(video) = self.provider.videos().get(index) else {
            return false;
        };
        debug!("selected {} ({})", video.label, video.id);
        self.feed = resolve(self.provider.as_ref(), video);
        self.selected = index;
        true
    }

    pub fn select_next(&mut self) -> bool {
        let count = self.videos().len();
        if count == 0 {
            return false;
        }
        self.select((self.selected + 1) % count)
    }

    pub fn select_prev(&mut self) -> bool {
        let count = self.videos().len();
        if count == 0 {
            return false;
        }
        self.select((self.selected + count - 1) % count)
    }
}

fn resolve(provider: &dyn FeedProvider, video: &VideoDescriptor) -> Arc<FeedRecord> {
    let feed = provider.feed_for(video);
    if video.sport() != Some(feed.sport()) {
        warn!(
            "no feed for sport '{}' ({}), using default",
            video.sport, video.id
        );
    }
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use highlights_feed::{FeedTable, Sport, mock};
    use std::collections::HashMap;

    fn builtin() -> FeedSelector {
        FeedSelector::new(Arc::new(FeedTable::builtin()))
    }

    #[test]
    fn test_starts_on_first_video() {
        let selector = builtin();
        assert_eq!(selector.selected_index(), 0);
        assert_eq!(selector.feed().league, "Premier League");
        assert!(selector.selected_source().ends_with("1080p.mp4"));
    }

    #[test]
    fn test_select_swaps_feed() {
        let mut selector = builtin();
        assert!(selector.select(1));
        let feed = selector.feed();
        assert_eq!(feed.league, "NBA");
        assert_eq!(feed.matchup.home, "Lakers");
        assert_eq!(feed.score.home, 118);
        assert_eq!(feed.sport(), Sport::Basketball);
        assert_eq!(selector.selected_video().map(|v| v.id.as_str()), Some("basketball"));
    }

    #[test]
    fn test_reselect_and_out_of_range_are_noops() {
        let mut selector = builtin();
        assert!(!selector.select(0));
        assert!(!selector.select(9));
        assert_eq!(selector.selected_index(), 0);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut selector = builtin();
        assert!(selector.select_prev());
        assert_eq!(selector.selected_index(), 1);
        assert!(selector.select_next());
        assert_eq!(selector.selected_index(), 0);
    }

    #[test]
    fn test_missing_sport_falls_back_to_default() {
        let videos = vec![
            VideoDescriptor::new(
                "nba",
                "Lakers vs Warriors",
                "https://cdn.example/nba.mp4",
                Sport::Basketball,
            ),
            VideoDescriptor::new(
                "epl",
                "Arsenal vs Chelsea",
                "https://cdn.example/epl.mp4",
                Sport::Football,
            ),
        ];
        let feeds = HashMap::from([("basketball".to_string(), mock::basketball_feed())]);
        let table = FeedTable::new(feeds, "basketball", videos).unwrap();
        let mut selector = FeedSelector::new(Arc::new(table));

        assert!(selector.select(1));
        assert_eq!(selector.feed().league, "NBA");
    }

    #[test]
    fn test_unknown_sport_tag_falls_back_to_default() {
        let mut videos = mock::sample_videos();
        videos[1].sport = "hockey".to_string();
        let feeds = HashMap::from([
            ("football".to_string(), mock::football_feed()),
            ("basketball".to_string(), mock::basketball_feed()),
        ]);
        let table = FeedTable::new(feeds, "football", videos).unwrap();
        let mut selector = FeedSelector::new(Arc::new(table));

        assert!(selector.select(1));
        assert_eq!(selector.selected_video().map(|v| v.sport.as_str()), Some("hockey"));
        assert_eq!(selector.feed().sport(), Sport::Football);
        assert_eq!(selector.feed().league, "Premier League");
    }
}
