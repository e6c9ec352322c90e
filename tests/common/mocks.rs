use std::cell::RefCell;
use std::rc::Rc;
use vrbrowser_media::media::{
    LoadProgress, MediaElement, MediaError, MediaObserver, Metadata, PlaybackState, ReadyState,
};

/// Command issued to the fake engine element
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Play,
    Pause,
    Seek(f64),
    SetVolume(f64),
    SetMuted(bool),
}

/// Engine element that only records the commands it receives
#[derive(Debug, Default, Clone)]
pub struct FakeElement {
    pub commands: Rc<RefCell<Vec<EngineCommand>>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<EngineCommand> {
        self.commands.borrow().clone()
    }
}

impl MediaElement for FakeElement {
    fn play(&self) {
        self.commands.borrow_mut().push(EngineCommand::Play);
    }

    fn pause(&self) {
        self.commands.borrow_mut().push(EngineCommand::Pause);
    }

    fn seek(&self, time: f64) {
        self.commands.borrow_mut().push(EngineCommand::Seek(time));
    }

    fn set_volume(&self, volume: f64) {
        self.commands.borrow_mut().push(EngineCommand::SetVolume(volume));
    }

    fn set_muted(&self, muted: bool) {
        self.commands.borrow_mut().push(EngineCommand::SetMuted(muted));
    }
}

/// Observer callback as received by the UI side
#[derive(Debug, Clone, PartialEq)]
pub enum Observed {
    PlaybackState(PlaybackState),
    ReadyState(ReadyState),
    Metadata(Metadata),
    LoadProgress(LoadProgress),
    Volume(f64, bool),
    Time(f64),
    Rate(f64),
    Fullscreen(bool),
    Error(MediaError),
}

#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub calls: Vec<Observed>,
}

impl MediaObserver for RecordingObserver {
    fn on_playback_state_change(&mut self, state: PlaybackState) {
        self.calls.push(Observed::PlaybackState(state));
    }

    fn on_ready_state_change(&mut self, state: ReadyState) {
        self.calls.push(Observed::ReadyState(state));
    }

    fn on_metadata_change(&mut self, metadata: &Metadata) {
        self.calls.push(Observed::Metadata(metadata.clone()));
    }

    fn on_load_progress(&mut self, progress: &LoadProgress) {
        self.calls.push(Observed::LoadProgress(progress.clone()));
    }

    fn on_volume_change(&mut self, volume: f64, muted: bool) {
        self.calls.push(Observed::Volume(volume, muted));
    }

    fn on_time_change(&mut self, time: f64) {
        self.calls.push(Observed::Time(time));
    }

    fn on_playback_rate_change(&mut self, rate: f64) {
        self.calls.push(Observed::Rate(rate));
    }

    fn on_fullscreen_change(&mut self, fullscreen: bool) {
        self.calls.push(Observed::Fullscreen(fullscreen));
    }

    fn on_error(&mut self, error: MediaError) {
        self.calls.push(Observed::Error(error));
    }
}
