use super::types::{LoadProgress, MediaError, Metadata, PlaybackState, ReadyState};

/// Handle to the engine's live media element.
///
/// Commands are fire-and-forget: the engine reports the resulting state
/// change back through the usual notifications.
pub trait MediaElement {
    fn play(&self);
    fn pause(&self);
    fn seek(&self, time: f64);
    fn set_volume(&self, volume: f64);
    fn set_muted(&self, muted: bool);
}

/// UI-side receiver of forwarded media state changes
pub trait MediaObserver {
    fn on_playback_state_change(&mut self, _state: PlaybackState) {}
    fn on_ready_state_change(&mut self, _state: ReadyState) {}
    fn on_metadata_change(&mut self, _metadata: &Metadata) {}
    fn on_load_progress(&mut self, _progress: &LoadProgress) {}
    fn on_volume_change(&mut self, _volume: f64, _muted: bool) {}
    fn on_time_change(&mut self, _time: f64) {}
    fn on_playback_rate_change(&mut self, _rate: f64) {}
    fn on_fullscreen_change(&mut self, _fullscreen: bool) {}
    fn on_error(&mut self, _error: MediaError) {}
}
