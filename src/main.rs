mod app;
mod components;
mod draw;
mod keys;
mod state;
mod ui;

use crate::app::App;
use crate::keys::KeyOutcome;
use crate::state::app_settings::AppSettings;
use crate::state::media::{ExternalPlayer, MediaHandle, MediaWorker, SimulatedMedia};
use crate::state::messages::{MediaCommand, MediaEvent, UiEvent};
use crossterm::event::{self as crossterm_event, Event};
use crossterm::{cursor, execute, terminal};
use highlights_feed::{FeedProvider, FeedTable};
use log::{error, info};
use std::io::Stdout;
use std::sync::Arc;
use std::{io, panic};
use tokio::sync::{Mutex, mpsc, watch};
use tokio::time::Duration;
use tui::{Terminal, backend::CrosstermBackend};

const ANIMATION_INTERVAL: Duration = Duration::from_millis(80);
const INPUT_POLL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args() {
        return Ok(());
    }

    better_panic::install();

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    setup_panic_hook();
    setup_terminal()?;

    tui_logger::init_logger(log::LevelFilter::Error)?;
    tui_logger::set_default_level(log::LevelFilter::Error);

    let settings = AppSettings::load();
    let (provider, load_error) = load_provider(&settings);

    let (media_cmd_tx, media_cmd_rx) = watch::channel(MediaCommand::default());
    let (media_evt_tx, media_evt_rx) = mpsc::channel::<MediaEvent>(100);
    let (ui_event_tx, ui_event_rx) = mpsc::channel::<UiEvent>(100);

    let handle: Box<dyn MediaHandle> = match settings.player_command.as_deref() {
        Some(command) => {
            info!("using external player: {command}");
            Box::new(ExternalPlayer::new(command, &settings.player_mute_arg))
        }
        None => Box::new(SimulatedMedia::new()),
    };

    let mut app = App::new(settings, provider, media_cmd_tx);
    if let Some(message) = load_error {
        app.on_error(message);
    }
    let app = Arc::new(Mutex::new(app));

    // Input handler thread
    let input_handler = tokio::spawn(input_handler_task(ui_event_tx.clone()));

    // Media thread
    let media_worker = MediaWorker::new(handle, media_cmd_rx, media_evt_tx);
    let media_task = tokio::spawn(media_worker.run());

    // Animation tick thread, ~12.5 FPS
    let anim_tx = ui_event_tx.clone();
    let animation_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(ANIMATION_INTERVAL);
        loop {
            interval.tick().await;
            if anim_tx.send(UiEvent::AnimationTick).await.is_err() {
                break;
            }
        }
    });

    let _ = ui_event_tx.send(UiEvent::AppStarted).await;

    main_ui_loop(terminal, app.clone(), ui_event_rx, media_evt_rx).await;

    input_handler.abort();
    animation_task.abort();
    // Dropping the app closes the command channel so the worker stops the player.
    drop(app);
    if tokio::time::timeout(Duration::from_millis(500), media_task)
        .await
        .is_err()
    {
        error!("media worker did not stop in time");
    }

    cleanup_terminal();
    Ok(())
}

/// Catalog from `HLTUI_FEEDS_JSON` when set, the bundled feeds otherwise
/// or when the catalog cannot be used.
fn load_provider(settings: &AppSettings) -> (Arc<dyn FeedProvider>, Option<String>) {
    let Some(path) = settings.feeds_path.as_ref() else {
        return (Arc::new(FeedTable::builtin()), None);
    };

    match FeedTable::from_json_file(path) {
        Ok(table) => {
            info!("loaded {} feeds from {}", table.keys().count(), path.display());
            (Arc::new(table), None)
        }
        Err(e) => {
            error!("Failed to load feeds: {e}");
            (
                Arc::new(FeedTable::builtin()),
                Some(format!("{e}; using bundled feeds")),
            )
        }
    }
}

fn handle_cli_args() -> bool {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return false;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            true
        }
        "-V" | "--version" => {
            println!("hltui {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "hltui - vertical sports highlights in the terminal

Usage:
  hltui
  hltui --help
  hltui --version

Environment:
  HLTUI_FEEDS_JSON       Path to a feed catalog JSON (default: bundled mock feeds)
  HLTUI_PLAYER           External player command, e.g. \"mpv --really-quiet\"
  HLTUI_PLAYER_MUTE_ARG  Argument passed to the player when muted (default --mute=yes)
  HLTUI_COMPACT_STATS    Team stat rows shown before expanding (default 3)
  HLTUI_START_UNMUTED    Set to 1 to start with sound on
  HLTUI_LOG              Log level: error, warn, info, debug, trace"
}

async fn main_ui_loop(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    app: Arc<Mutex<App>>,
    mut ui_events: mpsc::Receiver<UiEvent>,
    mut media_events: mpsc::Receiver<MediaEvent>,
) {
    loop {
        tokio::select! {
            Some(ui_event) = ui_events.recv() => {
                match handle_ui_event(ui_event, &app).await {
                    KeyOutcome::Quit => break,
                    KeyOutcome::Continue => {
                        let mut app_guard = app.lock().await;
                        draw::draw(&mut terminal, &mut app_guard);
                    }
                }
            }

            Some(media_event) = media_events.recv() => {
                let mut app_guard = app.lock().await;
                app_guard.on_media_event(media_event);
                draw::draw(&mut terminal, &mut app_guard);
            }

            else => break,
        }
    }
}

async fn handle_ui_event(ui_event: UiEvent, app: &Arc<Mutex<App>>) -> KeyOutcome {
    match ui_event {
        UiEvent::AppStarted | UiEvent::Resize => KeyOutcome::Continue,
        UiEvent::KeyPressed(key_event) => keys::handle_key_bindings(key_event, app).await,
        UiEvent::AnimationTick => {
            let mut guard = app.lock().await;
            guard.advance_animation();
            KeyOutcome::Continue
        }
    }
}

async fn input_handler_task(ui_events: mpsc::Sender<UiEvent>) {
    loop {
        match crossterm_event::poll(INPUT_POLL) {
            Ok(true) => {}
            Ok(false) => {
                tokio::task::yield_now().await;
                continue;
            }
            Err(e) => {
                error!("Failed to poll terminal events: {e}");
                tokio::time::sleep(INPUT_POLL).await;
                continue;
            }
        }

        if let Ok(event) = crossterm_event::read() {
            let ui_event = match event {
                Event::Key(key_event) => Some(UiEvent::KeyPressed(key_event)),
                Event::Resize(_, _) => Some(UiEvent::Resize),
                _ => None,
            };

            if let Some(ui_event) = ui_event
                && ui_events.send(ui_event).await.is_err()
            {
                break;
            }
        }
    }
}

fn setup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;
    execute!(stdout, terminal::EnterAlternateScreen)?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    terminal::enable_raw_mode()
}

pub fn cleanup_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::MoveTo(0, 0));
    let _ = execute!(stdout, terminal::Clear(terminal::ClearType::All));
    let _ = execute!(stdout, terminal::LeaveAlternateScreen);
    let _ = execute!(stdout, cursor::Show);
    let _ = terminal::disable_raw_mode();
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
