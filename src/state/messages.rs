use crossterm::event::KeyEvent;
use std::time::Duration;

/// Desired media state. Published on a watch channel; the newest value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaCommand {
    pub source: String,
    pub playing: bool,
    pub muted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    /// Playhead report. `engaged` is what the handle is really doing, which
    /// can lag behind the requested `playing` flag.
    Position { position: Duration, engaged: bool },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
    AnimationTick,
}
