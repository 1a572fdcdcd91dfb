use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, StatsTab};
use crate::state::messages::{MediaCommand, MediaEvent};
use crate::state::playback::PlaybackController;
use crate::state::selector::FeedSelector;
use highlights_feed::FeedProvider;
use std::sync::Arc;
use tokio::sync::watch;

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(
        settings: AppSettings,
        provider: Arc<dyn FeedProvider>,
        media_commands: watch::Sender<MediaCommand>,
    ) -> Self {
        let selector = FeedSelector::new(provider);
        let playback = PlaybackController::new(media_commands, settings.start_muted);

        let mut app = Self {
            state: AppState::new(selector, playback),
            settings,
        };
        app.state.panels.compact_rows = app.settings.compact_stats;

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        // Autoplay the first clip.
        app.apply_playback();
        app
    }

    // -----------------------------------------------------------------------
    // Playback controls
    // -----------------------------------------------------------------------

    pub fn toggle_playing(&mut self) {
        let source = self.state.selector.selected_source().to_string();
        self.state.playback.toggle_playing(&source);
    }

    pub fn toggle_muted(&mut self) {
        let source = self.state.selector.selected_source().to_string();
        self.state.playback.toggle_muted(&source);
    }

    fn apply_playback(&self) {
        self.state
            .playback
            .apply(self.state.selector.selected_source());
    }

    pub fn on_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::Position { position, engaged } => {
                self.state.media.position = position;
                self.state.media.engaged = engaged;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Feed selection: spoiler and panel state carry over
    // -----------------------------------------------------------------------

    pub fn select_video(&mut self, index: usize) {
        if self.state.selector.select(index) {
            self.on_selection_changed();
        }
    }

    pub fn next_video(&mut self) {
        if self.state.selector.select_next() {
            self.on_selection_changed();
        }
    }

    pub fn prev_video(&mut self) {
        if self.state.selector.select_prev() {
            self.on_selection_changed();
        }
    }

    fn on_selection_changed(&mut self) {
        self.state.media = Default::default();
        self.apply_playback();
    }

    // -----------------------------------------------------------------------
    // Overlays
    // -----------------------------------------------------------------------

    pub fn toggle_spoilers(&mut self) {
        self.state.spoilers.toggle();
    }

    pub fn toggle_stats(&mut self) {
        self.state.panels.toggle_stats();
    }

    pub fn toggle_expanded(&mut self) {
        self.state.panels.toggle_expanded();
    }

    /// Picking a tab also opens the panel.
    pub fn show_tab(&mut self, tab: StatsTab) {
        self.state.panels.set_tab(tab);
        self.state.panels.show_stats = true;
    }

    pub fn next_tab(&mut self) {
        self.state.panels.next_tab();
    }

    pub fn show_help(&mut self) {
        self.state.show_help = true;
    }

    pub fn exit_help(&mut self) {
        self.state.show_help = false;
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    pub fn dismiss_intro(&mut self) {
        self.state.show_intro = false;
    }

    pub fn advance_animation(&mut self) {
        self.state.animation.advance();
    }

    pub fn on_error(&mut self, message: String) {
        self.state.last_error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use highlights_feed::{FeedTable, Performers, Sport};
    use std::time::Duration;

    fn app() -> (App, watch::Receiver<MediaCommand>) {
        let (tx, rx) = watch::channel(MediaCommand::default());
        let app = App::new(AppSettings::default(), Arc::new(FeedTable::builtin()), tx);
        (app, rx)
    }

    #[test]
    fn test_new_publishes_autoplay_for_first_clip() {
        let (app, rx) = app();
        let command = rx.borrow().clone();
        assert_eq!(command.source, app.state.selector.selected_source());
        assert!(command.playing);
        assert!(command.muted);
    }

    #[test]
    fn test_switch_keeps_spoiler_and_panel_state() {
        let (mut app, _rx) = app();
        app.toggle_spoilers();
        app.toggle_stats();
        app.show_tab(StatsTab::Players);
        app.toggle_expanded();

        app.next_video();

        assert_eq!(app.state.selector.feed().league, "NBA");
        assert!(app.state.spoilers.hidden);
        assert!(app.state.panels.show_stats);
        assert!(app.state.panels.expanded);
        assert_eq!(app.state.panels.tab, StatsTab::Players);
    }

    #[test]
    fn test_switch_swaps_performer_fields_by_sport() {
        let (mut app, _rx) = app();
        assert!(matches!(
            app.state.selector.feed().performers,
            Performers::Football(_)
        ));
        let panel_open = app.state.panels.show_stats;

        app.select_video(1);

        let feed = app.state.selector.feed();
        assert_eq!(feed.sport(), Sport::Basketball);
        let Performers::Basketball(players) = &feed.performers else {
            panic!("expected basketball performers");
        };
        assert_eq!(players[0].points, 32);
        assert_eq!(app.state.panels.show_stats, panel_open);
    }

    #[test]
    fn test_switch_republishes_playback_with_same_flags() {
        let (mut app, mut rx) = app();
        app.toggle_muted();
        app.toggle_playing();
        rx.borrow_and_update();

        app.next_video();

        assert!(rx.has_changed().unwrap());
        let command = rx.borrow_and_update().clone();
        assert_eq!(command.source, app.state.selector.selected_source());
        assert!(command.source.contains("basketball"));
        assert!(!command.playing);
        assert!(!command.muted);
    }

    #[test]
    fn test_reselecting_current_video_publishes_nothing() {
        let (mut app, mut rx) = app();
        rx.borrow_and_update();
        app.select_video(0);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_spoiler_toggle_leaves_playback_alone() {
        let (mut app, mut rx) = app();
        rx.borrow_and_update();
        app.toggle_spoilers();
        assert!(!rx.has_changed().unwrap());
        assert!(app.state.playback.playing);
        assert_eq!(app.state.selector.selected_index(), 0);
    }

    #[test]
    fn test_media_event_updates_status_and_switch_resets_it() {
        let (mut app, _rx) = app();
        app.on_media_event(MediaEvent::Position {
            position: Duration::from_secs(7),
            engaged: true,
        });
        assert_eq!(app.state.media.position, Duration::from_secs(7));
        assert!(app.state.media.engaged);

        app.next_video();
        assert_eq!(app.state.media.position, Duration::ZERO);
        assert!(!app.state.media.engaged);
    }

    #[test]
    fn test_compact_rows_come_from_settings() {
        let (tx, _rx) = watch::channel(MediaCommand::default());
        let settings = AppSettings {
            compact_stats: 5,
            start_muted: false,
            ..AppSettings::default()
        };
        let app = App::new(settings, Arc::new(FeedTable::builtin()), tx);
        assert_eq!(app.state.panels.compact_rows, 5);
        assert!(!app.state.playback.muted);
    }
}
