use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

use super::seek_bar::SeekBar;
use super::volume_control::VolumeControl;
use crate::config::MediaControlsConfig;
use crate::media::{
    LoadProgress, MediaError, MediaObserver, Metadata, PlaybackState, SharedMedia, SharedObserver,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayIcon {
    Play,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Volume,
    Muted,
}

/// Transport controls for the media currently in focus.
///
/// Observes one media mirror at a time and issues user commands back to it.
#[derive(Debug)]
pub struct MediaControls {
    media: Option<SharedMedia>,
    seek_bar: SeekBar,
    volume_control: VolumeControl,
    play_icon: PlayIcon,
    volume_icon: VolumeIcon,
    volume_button_enabled: bool,
    visible: bool,
    seek_backward_secs: f64,
    seek_forward_secs: f64,
}

impl MediaControls {
    pub fn new(config: &MediaControlsConfig) -> Self {
        Self {
            media: None,
            seek_bar: SeekBar::new(config.seek_bar_max),
            volume_control: VolumeControl::default(),
            play_icon: PlayIcon::Play,
            volume_icon: VolumeIcon::Volume,
            volume_button_enabled: true,
            visible: true,
            seek_backward_secs: config.seek_backward_secs,
            seek_forward_secs: config.seek_forward_secs,
        }
    }

    pub fn shared(config: &MediaControlsConfig) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(config)))
    }

    /// Switch the controls to `media`.
    ///
    /// Stops observing the previous media, renders the cached state of the new
    /// one and then observes it.
    pub fn set_media(this: &Rc<RefCell<Self>>, media: Option<SharedMedia>) {
        let mut controls = this.borrow_mut();
        let unchanged = match (&controls.media, &media) {
            (Some(current), Some(new)) => Rc::ptr_eq(current, new),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return;
        }

        if let Some(previous) = controls.media.take() {
            previous.borrow_mut().detach();
        }
        let Some(media) = media else {
            debug!("Media controls cleared");
            return;
        };

        {
            let current = media.borrow();
            if let Some(metadata) = current.metadata() {
                controls.on_metadata_change(metadata);
            }
            controls.on_volume_change(current.volume(), current.is_muted());
            controls.on_time_change(current.current_time());
            controls.on_ready_state_change(current.ready_state());
            controls.on_playback_state_change(current.playback_state());
        }
        controls.media = Some(media.clone());
        drop(controls);

        let observer: SharedObserver = this.clone();
        media.borrow_mut().attach(&observer);
        debug!("Media controls attached to new media");
    }

    fn media_for(&self, action: &str) -> Option<&SharedMedia> {
        if self.media.is_none() {
            debug!("No media for {} action", action);
        }
        self.media.as_ref()
    }

    pub fn toggle_play(&self) {
        let Some(media) = self.media_for("play") else {
            return;
        };
        let media = media.borrow();
        if media.playback_state() == PlaybackState::Playing {
            media.pause();
        } else {
            media.play();
        }
    }

    pub fn seek_backward(&self) {
        let Some(media) = self.media_for("seek backward") else {
            return;
        };
        let media = media.borrow();
        media.seek((media.current_time() - self.seek_backward_secs).max(0.0));
    }

    pub fn seek_forward(&self) {
        let Some(media) = self.media_for("seek forward") else {
            return;
        };
        let media = media.borrow();
        let mut target = media.current_time() + self.seek_forward_secs;
        if let Some(metadata) = media.metadata()
            && metadata.duration > 0.0
        {
            target = target.min(metadata.duration);
        }
        media.seek(target);
    }

    pub fn toggle_mute(&mut self) {
        let Some(media) = self.media.clone() else {
            debug!("No media for mute action");
            return;
        };
        let media = media.borrow();
        if media.is_muted() {
            media.set_muted(false);
        } else {
            media.set_muted(true);
            self.volume_control.set_volume(0.0);
        }
    }

    /// Volume slider moved by the user
    pub fn set_volume(&self, volume: f64) {
        let Some(media) = self.media_for("volume") else {
            return;
        };
        let media = media.borrow();
        media.set_volume(volume);
        if media.is_muted() {
            media.set_muted(false);
        }
    }

    /// Seek bar moved by the user
    pub fn user_seek(&mut self, progress: i32) {
        let Some(target) = self.seek_bar.on_progress_changed(progress, true) else {
            return;
        };
        if let Some(media) = self.media_for("seek") {
            media.borrow().seek(target);
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn media(&self) -> Option<&SharedMedia> {
        self.media.as_ref()
    }

    pub fn seek_bar(&self) -> &SeekBar {
        &self.seek_bar
    }

    pub fn seek_bar_mut(&mut self) -> &mut SeekBar {
        &mut self.seek_bar
    }

    pub fn volume_control(&self) -> &VolumeControl {
        &self.volume_control
    }

    pub fn play_icon(&self) -> PlayIcon {
        self.play_icon
    }

    pub fn volume_icon(&self) -> VolumeIcon {
        self.volume_icon
    }

    pub fn is_volume_button_enabled(&self) -> bool {
        self.volume_button_enabled
    }
}

impl MediaObserver for MediaControls {
    fn on_playback_state_change(&mut self, state: PlaybackState) {
        self.play_icon = if state == PlaybackState::Playing {
            PlayIcon::Pause
        } else {
            PlayIcon::Play
        };
    }

    fn on_metadata_change(&mut self, metadata: &Metadata) {
        self.seek_bar.set_duration(metadata.duration);
        if metadata.audio_track_count == 0 {
            self.volume_icon = VolumeIcon::Muted;
            self.volume_button_enabled = false;
        } else {
            self.volume_button_enabled = true;
        }
        self.seek_bar.set_seekable(metadata.is_seekable);
    }

    fn on_load_progress(&mut self, progress: &LoadProgress) {
        if let Some(end) = progress.buffered_end() {
            self.seek_bar.set_buffered(end);
        }
    }

    fn on_volume_change(&mut self, volume: f64, muted: bool) {
        if !self.volume_button_enabled {
            return;
        }
        self.volume_icon = if muted {
            VolumeIcon::Muted
        } else {
            VolumeIcon::Volume
        };
        self.volume_control.set_volume(volume);
        self.volume_control.set_muted(muted);
    }

    fn on_time_change(&mut self, time: f64) {
        self.seek_bar.set_current_time(time);
    }

    fn on_fullscreen_change(&mut self, fullscreen: bool) {
        if !fullscreen {
            self.hide();
        }
    }

    fn on_error(&mut self, error: MediaError) {
        warn!("Media error {:?} (code {})", error, error.code());
    }
}
