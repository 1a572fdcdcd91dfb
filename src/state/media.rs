use crate::state::messages::{MediaCommand, MediaEvent};
use log::{debug, error, warn};
use std::fmt;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::{Child, Command};
use tokio::sync::{mpsc, watch};

/// How often the playhead advances and gets reported to the UI.
pub const REPORT_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub enum MediaError {
    NoSource,
    UnsupportedSource(String),
    Launch(std::io::Error, String),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::NoSource => write!(f, "no source loaded"),
            MediaError::UnsupportedSource(src) => write!(f, "unsupported source: {src}"),
            MediaError::Launch(e, cmd) => write!(f, "could not launch `{cmd}`: {e}"),
        }
    }
}

/// Whatever actually plays the clip. Play may be refused; pause and mute
/// always succeed.
pub trait MediaHandle: Send {
    fn load(&mut self, source: &str);
    fn set_muted(&mut self, muted: bool);
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    /// Called every `REPORT_INTERVAL` so the handle can move its playhead.
    fn advance(&mut self, _elapsed: Duration) {}
    fn position(&self) -> Duration;
    fn is_engaged(&self) -> bool;
}

pub fn is_playable_source(source: &str) -> bool {
    let source = source.trim();
    source.starts_with("http://")
        || source.starts_with("https://")
        || source.starts_with("file://")
        || source.starts_with('/')
}

// ---------------------------------------------------------------------------
// Simulated player: a playhead with nothing behind it
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SimulatedMedia {
    source: String,
    engaged: bool,
    position: Duration,
}

impl SimulatedMedia {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MediaHandle for SimulatedMedia {
    fn load(&mut self, source: &str) {
        self.source = source.to_string();
        self.position = Duration::ZERO;
        self.engaged = false;
    }

    // Nothing is audible.
    fn set_muted(&mut self, _muted: bool) {}

    fn play(&mut self) -> Result<(), MediaError> {
        if self.source.trim().is_empty() {
            self.engaged = false;
            return Err(MediaError::NoSource);
        }
        if !is_playable_source(&self.source) {
            self.engaged = false;
            return Err(MediaError::UnsupportedSource(self.source.clone()));
        }
        self.engaged = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.engaged = false;
    }

    fn advance(&mut self, elapsed: Duration) {
        if self.engaged {
            self.position += elapsed;
        }
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn is_engaged(&self) -> bool {
        self.engaged
    }
}

// ---------------------------------------------------------------------------
// External player: runs a command line such as `mpv --loop` per clip
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ExternalPlayer {
    command: String,
    mute_arg: String,
    source: String,
    muted: bool,
    child: Option<Child>,
    started_at: Option<Instant>,
    position: Duration,
}

impl ExternalPlayer {
    pub fn new(command: &str, mute_arg: &str) -> Self {
        Self {
            command: command.trim().to_string(),
            mute_arg: mute_arg.trim().to_string(),
            source: String::new(),
            muted: true,
            child: None,
            started_at: None,
            position: Duration::ZERO,
        }
    }

    /// Program, arguments, optional mute flag, then the source.
    fn command_line(&self) -> Vec<String> {
        let mut parts: Vec<String> = self.command.split_whitespace().map(String::from).collect();
        if self.muted && !self.mute_arg.is_empty() {
            parts.push(self.mute_arg.clone());
        }
        parts.push(self.source.clone());
        parts
    }

    fn stop(&mut self) {
        if let Some(started) = self.started_at.take() {
            self.position = started.elapsed();
        }
        // The runtime reaps the killed child in the background.
        if let Some(mut child) = self.child.take()
            && let Err(e) = child.start_kill()
        {
            debug!("player already gone: {e}");
        }
    }
}

impl MediaHandle for ExternalPlayer {
    fn load(&mut self, source: &str) {
        self.stop();
        self.source = source.to_string();
        self.position = Duration::ZERO;
    }

    fn set_muted(&mut self, muted: bool) {
        if self.muted == muted {
            return;
        }
        self.muted = muted;
        // The new flag is picked up by the relaunch on the next play.
        self.stop();
    }

    fn play(&mut self) -> Result<(), MediaError> {
        if self.child.is_some() {
            return Ok(());
        }
        if self.source.trim().is_empty() {
            return Err(MediaError::NoSource);
        }
        let parts = self.command_line();
        let Some((program, args)) = parts.split_first() else {
            return Err(MediaError::Launch(
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
                self.command.clone(),
            ));
        };
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| MediaError::Launch(e, self.command.clone()))?;
        debug!("launched player pid {:?} for {}", child.id(), self.source);
        self.child = Some(child);
        self.started_at = Some(Instant::now());
        self.position = Duration::ZERO;
        Ok(())
    }

    fn pause(&mut self) {
        self.stop();
    }

    fn advance(&mut self, _elapsed: Duration) {
        let Some(child) = self.child.as_mut() else {
            return;
        };
        match child.try_wait() {
            Ok(Some(status)) => {
                debug!("player exited with {status}");
                self.child = None;
                if let Some(started) = self.started_at.take() {
                    self.position = started.elapsed();
                }
            }
            Ok(None) => {}
            Err(e) => warn!("could not poll player process: {e}"),
        }
    }

    fn position(&self) -> Duration {
        self.started_at
            .map(|started| started.elapsed())
            .unwrap_or(self.position)
    }

    fn is_engaged(&self) -> bool {
        self.child.is_some()
    }
}

impl Drop for ExternalPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

// ---------------------------------------------------------------------------
// Worker: owns the handle and applies the latest command
// ---------------------------------------------------------------------------

pub struct MediaWorker {
    handle: Box<dyn MediaHandle>,
    commands: watch::Receiver<MediaCommand>,
    events: mpsc::Sender<MediaEvent>,
    applied: Option<MediaCommand>,
    last_report: Option<MediaEvent>,
}

impl MediaWorker {
    pub fn new(
        handle: Box<dyn MediaHandle>,
        commands: watch::Receiver<MediaCommand>,
        events: mpsc::Sender<MediaEvent>,
    ) -> Self {
        Self {
            handle,
            commands,
            events,
            applied: None,
            last_report: None,
        }
    }

    pub async fn run(mut self) {
        let initial = self.commands.borrow_and_update().clone();
        self.apply(initial);

        let mut ticker = tokio::time::interval(REPORT_INTERVAL);
        loop {
            tokio::select! {
                changed = self.commands.changed() => {
                    if changed.is_err() {
                        debug!("media command channel closed");
                        break;
                    }
                    let command = self.commands.borrow_and_update().clone();
                    self.apply(command);
                }
                _ = ticker.tick() => {
                    self.handle.advance(REPORT_INTERVAL);
                }
            }

            if let Some(event) = self.pending_report()
                && let Err(e) = self.events.send(event).await
            {
                error!("Failed to send media event: {e}");
                break;
            }
        }

        self.handle.pause();
    }

    /// Load if the source changed, set mute, then request play or pause.
    /// A refused play is dropped; the requested flag stays authoritative.
    pub fn apply(&mut self, command: MediaCommand) {
        let source_changed = self
            .applied
            .as_ref()
            .is_none_or(|prev| prev.source != command.source);
        if source_changed {
            debug!("loading {}", command.source);
            self.handle.load(&command.source);
        }

        self.handle.set_muted(command.muted);

        if command.playing {
            if let Err(e) = self.handle.play() {
                debug!("play request dropped: {e}");
            }
        } else {
            self.handle.pause();
        }

        self.applied = Some(command);
    }

    fn pending_report(&mut self) -> Option<MediaEvent> {
        let event = MediaEvent::Position {
            position: self.handle.position(),
            engaged: self.handle.is_engaged(),
        };
        if self.last_report.as_ref() == Some(&event) {
            return None;
        }
        self.last_report = Some(event.clone());
        Some(event)
    }
}
