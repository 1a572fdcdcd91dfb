pub mod app_settings;
pub mod app_state;
pub mod media;
pub mod messages;
pub mod playback;
pub mod selector;
