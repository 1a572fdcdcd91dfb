use crate::state::messages::MediaCommand;
use log::debug;
use tokio::sync::watch;

/// Requested play/mute state. Publishing is fire-and-forget: the media
/// worker picks up whatever the newest command is.
#[derive(Debug)]
pub struct PlaybackController {
    pub playing: bool,
    pub muted: bool,
    commands: watch::Sender<MediaCommand>,
}

impl PlaybackController {
    pub fn new(commands: watch::Sender<MediaCommand>, muted: bool) -> Self {
        Self {
            playing: true,
            muted,
            commands,
        }
    }

    pub fn toggle_playing(&mut self, source: &str) {
        self.playing = !self.playing;
        self.apply(source);
    }

    pub fn toggle_muted(&mut self, source: &str) {
        self.muted = !self.muted;
        self.apply(source);
    }

    /// Publish the current flags for `source`. Never blocks and never fails;
    /// with no worker listening the command is simply dropped.
    pub fn apply(&self, source: &str) {
        let command = MediaCommand {
            source: source.to_string(),
            playing: self.playing,
            muted: self.muted,
        };
        debug!(
            "media -> playing={} muted={} {}",
            command.playing, command.muted, command.source
        );
        self.commands.send_replace(command);
    }
}
