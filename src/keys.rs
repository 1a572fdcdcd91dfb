use crate::app::App;
use crate::state::app_state::StatsTab;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Outcome of a key press for the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

pub async fn handle_key_bindings(key_event: KeyEvent, app: &Arc<Mutex<App>>) -> KeyOutcome {
    let mut guard = app.lock().await;
    apply_key(&mut guard, key_event)
}

pub fn apply_key(app: &mut App, key_event: KeyEvent) -> KeyOutcome {
    if is_quit(key_event) {
        return KeyOutcome::Quit;
    }

    if app.state.show_intro {
        if key_event.code == KeyCode::Enter {
            app.dismiss_intro();
        }
        return KeyOutcome::Continue;
    }

    if app.state.show_help {
        if matches!(key_event.code, KeyCode::Esc | Char('?')) {
            app.exit_help();
        }
        return KeyOutcome::Continue;
    }

    match key_event.code {
        // Playback
        Char(' ') | Char('p') => app.toggle_playing(),
        Char('m') => app.toggle_muted(),

        // Overlays
        Char('h') => app.toggle_spoilers(),
        Char('s') => app.toggle_stats(),
        Char('e') => app.toggle_expanded(),
        KeyCode::Tab => app.next_tab(),
        Char('1') => app.show_tab(StatsTab::Game),
        Char('2') => app.show_tab(StatsTab::Players),
        Char('3') => app.show_tab(StatsTab::Teams),
        KeyCode::Esc => {
            if app.state.panels.show_stats {
                app.toggle_stats();
            }
        }

        // Match selector
        Char('l') | Char('j') | KeyCode::Right | KeyCode::Down => app.next_video(),
        Char('k') | KeyCode::Left | KeyCode::Up => app.prev_video(),

        // Global
        Char('?') => app.show_help(),
        Char('f') => app.toggle_full_screen(),
        Char('"') => app.toggle_show_logs(),

        _ => {}
    }

    KeyOutcome::Continue
}

fn is_quit(key_event: KeyEvent) -> bool {
    matches!(
        (key_event.code, key_event.modifiers),
        (Char('q'), _) | (Char('c'), KeyModifiers::CONTROL)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_settings::AppSettings;
    use crate::state::messages::MediaCommand;
    use highlights_feed::FeedTable;
    use tokio::sync::watch;

    fn app() -> App {
        let (tx, _rx) = watch::channel(MediaCommand::default());
        let mut app = App::new(AppSettings::default(), Arc::new(FeedTable::builtin()), tx);
        app.dismiss_intro();
        app
    }

    fn press(app: &mut App, code: KeyCode) -> KeyOutcome {
        apply_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_intro_only_leaves_on_enter() {
        let (tx, _rx) = watch::channel(MediaCommand::default());
        let mut app = App::new(AppSettings::default(), Arc::new(FeedTable::builtin()), tx);
        press(&mut app, Char('s'));
        assert!(app.state.show_intro);
        assert!(!app.state.panels.show_stats);
        press(&mut app, KeyCode::Enter);
        assert!(!app.state.show_intro);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(press(&mut app, Char('q')), KeyOutcome::Quit);
        assert_eq!(
            apply_key(&mut app, KeyEvent::new(Char('c'), KeyModifiers::CONTROL)),
            KeyOutcome::Quit
        );
        assert_eq!(press(&mut app, Char('c')), KeyOutcome::Continue);
    }

    #[test]
    fn test_toggles() {
        let mut app = app();
        press(&mut app, Char(' '));
        assert!(!app.state.playback.playing);
        press(&mut app, Char('m'));
        assert!(!app.state.playback.muted);
        press(&mut app, Char('h'));
        assert!(app.state.spoilers.hidden);
        press(&mut app, Char('s'));
        assert!(app.state.panels.show_stats);
        press(&mut app, KeyCode::Esc);
        assert!(!app.state.panels.show_stats);
    }

    #[test]
    fn test_tab_keys_open_panel() {
        let mut app = app();
        press(&mut app, Char('3'));
        assert!(app.state.panels.show_stats);
        assert_eq!(app.state.panels.tab, StatsTab::Teams);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state.panels.tab, StatsTab::Game);
    }

    #[test]
    fn test_arrows_switch_video() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.selector.selected_index(), 1);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state.selector.selected_index(), 0);
    }

    #[test]
    fn test_help_swallows_keys_until_closed() {
        let mut app = app();
        press(&mut app, Char('?'));
        assert!(app.state.show_help);
        press(&mut app, Char('s'));
        assert!(!app.state.panels.show_stats);
        press(&mut app, KeyCode::Esc);
        assert!(!app.state.show_help);
    }
}
