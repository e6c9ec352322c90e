use tracing::trace;

use crate::utils::{format_time, progress_ratio};

pub const LIVE_LABEL: &str = "LIVE";

/// Interaction state of the seek control, derived from its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekBarMode {
    /// Duration not known yet
    Disabled,
    Enabled,
    /// Stream is not seekable
    Live,
    /// User is dragging the thumb
    Dragging,
}

/// Transport seek bar: elapsed/duration labels, playback progress and
/// buffered (secondary) progress on an integer scale `0..=max`.
#[derive(Debug, Clone)]
pub struct SeekBar {
    max: i32,
    progress: i32,
    secondary_progress: i32,
    left_label: String,
    right_label: String,
    right_label_visible: bool,
    thumb_visible: bool,
    enabled: bool,
    duration: f64,
    current_time: f64,
    buffered: f64,
    touching: bool,
    seekable: bool,
}

impl Default for SeekBar {
    fn default() -> Self {
        Self::new(100)
    }
}

impl SeekBar {
    pub fn new(max: i32) -> Self {
        let max = max.max(1);
        Self {
            max,
            progress: max,
            secondary_progress: 0,
            left_label: format_time(0.0),
            right_label: format_time(0.0),
            right_label_visible: true,
            thumb_visible: true,
            enabled: false,
            duration: 0.0,
            current_time: 0.0,
            buffered: 0.0,
            touching: false,
            seekable: true,
        }
    }

    pub fn set_current_time(&mut self, time: f64) {
        self.current_time = time;
        if self.seekable {
            self.left_label = format_time(time);
            self.update_progress();
        }
    }

    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
        self.right_label = format_time(duration);
        if self.duration > 0.0 && self.seekable {
            self.update_progress();
            self.update_buffered_progress();
        }
        self.enabled = self.seekable && self.duration > 0.0;
    }

    pub fn set_seekable(&mut self, seekable: bool) {
        if self.seekable == seekable {
            return;
        }
        trace!("Seek bar seekable: {}", seekable);
        self.seekable = seekable;
        if seekable {
            self.left_label = format_time(self.current_time);
            if self.duration > 0.0 {
                self.update_progress();
                self.update_buffered_progress();
            }
        } else {
            self.left_label = LIVE_LABEL.to_string();
            self.progress = self.max;
        }

        self.right_label_visible = seekable;
        self.thumb_visible = seekable;
        self.enabled = seekable && self.duration > 0.0;
    }

    pub fn set_buffered(&mut self, buffered: f64) {
        self.buffered = buffered;
        if self.seekable {
            self.update_buffered_progress();
        }
    }

    /// User put a finger on the thumb
    pub fn start_tracking_touch(&mut self) {
        if self.enabled {
            self.touching = true;
        }
    }

    pub fn stop_tracking_touch(&mut self) {
        self.touching = false;
    }

    /// Progress moved on the control. For user moves, returns the time the
    /// media should seek to.
    pub fn on_progress_changed(&mut self, progress: i32, from_user: bool) -> Option<f64> {
        if !from_user || !self.enabled || self.duration <= 0.0 {
            return None;
        }
        self.progress = progress.clamp(0, self.max);
        Some(self.duration * f64::from(self.progress) / f64::from(self.max))
    }

    fn update_progress(&mut self) {
        if self.touching {
            return;
        }
        if let Some(ratio) = progress_ratio(self.current_time, self.duration) {
            self.progress = self.scaled(ratio);
        }
    }

    fn update_buffered_progress(&mut self) {
        self.secondary_progress = match progress_ratio(self.buffered, self.duration) {
            Some(ratio) => self.scaled(ratio),
            None => 0,
        };
    }

    /// Map a ratio onto `0..=max`
    fn scaled(&self, ratio: f64) -> i32 {
        ((ratio * f64::from(self.max)) as i32).clamp(0, self.max)
    }

    pub fn mode(&self) -> SeekBarMode {
        if !self.seekable {
            SeekBarMode::Live
        } else if self.touching {
            SeekBarMode::Dragging
        } else if self.enabled {
            SeekBarMode::Enabled
        } else {
            SeekBarMode::Disabled
        }
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn progress(&self) -> i32 {
        self.progress
    }

    /// Displayed progress as a fraction of the bar
    pub fn progress_fraction(&self) -> f64 {
        f64::from(self.progress) / f64::from(self.max)
    }

    pub fn secondary_progress(&self) -> i32 {
        self.secondary_progress
    }

    pub fn left_label(&self) -> &str {
        &self.left_label
    }

    pub fn right_label(&self) -> &str {
        &self.right_label
    }

    pub fn is_right_label_visible(&self) -> bool {
        self.right_label_visible
    }

    pub fn is_thumb_visible(&self) -> bool {
        self.thumb_visible
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_seekable(&self) -> bool {
        self.seekable
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn buffered(&self) -> f64 {
        self.buffered
    }
}
