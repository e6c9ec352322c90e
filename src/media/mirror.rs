use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

use super::traits::{MediaElement, MediaObserver};
use super::types::{LoadProgress, MediaError, MediaEvent, Metadata, PlaybackState, ReadyState};

pub type SharedMedia = Rc<RefCell<Media>>;
pub type SharedObserver = Rc<RefCell<dyn MediaObserver>>;

/// Mirror of one engine media element.
///
/// Caches the last reported value of every attribute so a UI attached later
/// can pull the current state, and forwards each notification to at most one
/// observer. The observer is held weakly; the UI owns it.
pub struct Media {
    element: Box<dyn MediaElement>,
    duration: f64,
    is_fullscreen: bool,
    current_time: f64,
    metadata: Option<Metadata>,
    playback_rate: f64,
    ready_state: ReadyState,
    playback_state: PlaybackState,
    volume: f64,
    is_muted: bool,
    is_unloaded: bool,
    observer: Option<Weak<RefCell<dyn MediaObserver>>>,
}

impl fmt::Debug for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Media")
            .field("duration", &self.duration)
            .field("current_time", &self.current_time)
            .field("playback_state", &self.playback_state)
            .field("is_unloaded", &self.is_unloaded)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl Media {
    pub fn new(element: Box<dyn MediaElement>) -> Self {
        Self {
            element,
            duration: -1.0,
            is_fullscreen: false,
            current_time: 0.0,
            metadata: None,
            playback_rate: 1.0,
            ready_state: ReadyState::default(),
            playback_state: PlaybackState::default(),
            volume: 1.0,
            is_muted: false,
            is_unloaded: false,
            observer: None,
        }
    }

    pub fn shared(element: Box<dyn MediaElement>) -> SharedMedia {
        Rc::new(RefCell::new(Self::new(element)))
    }

    /// Replace the current observer. Cached state is not replayed.
    pub fn attach(&mut self, observer: &SharedObserver) {
        if self.is_unloaded {
            debug!("Ignoring observer attach on unloaded media");
            return;
        }
        self.observer = Some(Rc::downgrade(observer));
    }

    pub fn detach(&mut self) {
        self.observer = None;
    }

    pub fn has_observer(&self) -> bool {
        self.observer
            .as_ref()
            .is_some_and(|observer| observer.strong_count() > 0)
    }

    /// Mark the media as gone. Terminal and idempotent.
    pub fn unload(&mut self) {
        if !self.is_unloaded {
            debug!("Unloading media");
        }
        self.is_unloaded = true;
        self.observer = None;
    }

    fn dispatch(&self, forward: impl FnOnce(&mut dyn MediaObserver)) {
        if let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) {
            forward(&mut *observer.borrow_mut());
        }
    }

    // Engine notifications

    pub fn notify_playback_state(&mut self, state: PlaybackState) {
        if self.is_unloaded {
            return;
        }
        trace!("Playback state change: {:?}", state);
        self.playback_state = state;
        self.dispatch(|observer| observer.on_playback_state_change(state));
    }

    pub fn notify_ready_state(&mut self, state: ReadyState) {
        if self.is_unloaded {
            return;
        }
        trace!("Ready state change: {:?}", state);
        self.ready_state = state;
        self.dispatch(|observer| observer.on_ready_state_change(state));
    }

    pub fn notify_metadata(&mut self, metadata: Metadata) {
        if self.is_unloaded {
            return;
        }
        trace!(
            "Metadata change: source={} {}x{} duration={} seekable={} video={} audio={}",
            metadata.current_source,
            metadata.width,
            metadata.height,
            metadata.duration,
            metadata.is_seekable,
            metadata.video_track_count,
            metadata.audio_track_count
        );
        self.duration = metadata.duration;
        let metadata = self.metadata.insert(metadata);
        if let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) {
            observer.borrow_mut().on_metadata_change(metadata);
        }
    }

    pub fn notify_load_progress(&mut self, progress: LoadProgress) {
        if self.is_unloaded {
            return;
        }
        trace!(
            "Load progress: {}/{} bytes, {} buffered ranges",
            progress.loaded_bytes,
            progress.total_bytes,
            progress.buffered.len()
        );
        self.dispatch(|observer| observer.on_load_progress(&progress));
    }

    pub fn notify_volume(&mut self, volume: f64, muted: bool) {
        if self.is_unloaded {
            return;
        }
        trace!("Volume change: {} muted={}", volume, muted);
        self.volume = volume;
        self.is_muted = muted;
        self.dispatch(|observer| observer.on_volume_change(volume, muted));
    }

    pub fn notify_time(&mut self, time: f64) {
        if self.is_unloaded {
            return;
        }
        trace!("Time update: {}", time);
        self.current_time = time;
        self.dispatch(|observer| observer.on_time_change(time));
    }

    pub fn notify_playback_rate(&mut self, rate: f64) {
        if self.is_unloaded {
            return;
        }
        trace!("Playback rate change: {}", rate);
        self.playback_rate = rate;
        self.dispatch(|observer| observer.on_playback_rate_change(rate));
    }

    pub fn notify_fullscreen(&mut self, fullscreen: bool) {
        if self.is_unloaded {
            return;
        }
        trace!("Fullscreen change: {}", fullscreen);
        self.is_fullscreen = fullscreen;
        self.dispatch(|observer| observer.on_fullscreen_change(fullscreen));
    }

    pub fn notify_error(&mut self, error: MediaError) {
        if self.is_unloaded {
            return;
        }
        trace!("Media error: {:?} (code {})", error, error.code());
        self.dispatch(|observer| observer.on_error(error));
    }

    /// Route a marshalled engine event to its notification
    pub fn apply(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::PlaybackStateChange(state) => self.notify_playback_state(state),
            MediaEvent::ReadyStateChange(state) => self.notify_ready_state(state),
            MediaEvent::MetadataChange(metadata) => self.notify_metadata(metadata),
            MediaEvent::LoadProgress(progress) => self.notify_load_progress(progress),
            MediaEvent::VolumeChange { volume, muted } => self.notify_volume(volume, muted),
            MediaEvent::TimeChange(time) => self.notify_time(time),
            MediaEvent::PlaybackRateChange(rate) => self.notify_playback_rate(rate),
            MediaEvent::FullscreenChange(fullscreen) => self.notify_fullscreen(fullscreen),
            MediaEvent::Error(error) => self.notify_error(error),
        }
    }

    // Commands to the engine

    pub fn play(&self) {
        if self.command_allowed("play") {
            self.element.play();
        }
    }

    pub fn pause(&self) {
        if self.command_allowed("pause") {
            self.element.pause();
        }
    }

    pub fn seek(&self, time: f64) {
        if self.command_allowed("seek") {
            self.element.seek(time);
        }
    }

    pub fn set_volume(&self, volume: f64) {
        if self.command_allowed("set_volume") {
            self.element.set_volume(volume);
        }
    }

    pub fn set_muted(&self, muted: bool) {
        if self.command_allowed("set_muted") {
            self.element.set_muted(muted);
        }
    }

    fn command_allowed(&self, command: &str) -> bool {
        if self.is_unloaded {
            debug!("Dropping {} command for unloaded media", command);
        }
        !self.is_unloaded
    }

    // Cached state

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn playback_rate(&self) -> f64 {
        self.playback_rate
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.playback_state
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    pub fn is_unloaded(&self) -> bool {
        self.is_unloaded
    }

    pub fn width(&self) -> i64 {
        self.metadata.as_ref().map_or(0, |metadata| metadata.width)
    }

    pub fn height(&self) -> i64 {
        self.metadata.as_ref().map_or(0, |metadata| metadata.height)
    }
}
