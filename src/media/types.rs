//! Value types reported by the engine's media element.
//!
//! Numeric codes match the engine's `MediaElement` constants.

/// Playback state of a media element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    Play,
    Playing,
    #[default]
    Pause,
    Ended,
    Seeking,
    Seeked,
    Stalled,
    Suspend,
    Waiting,
    Abort,
    Emptied,
    Unknown(i32),
}

impl PlaybackState {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Play,
            1 => Self::Playing,
            2 => Self::Pause,
            3 => Self::Ended,
            4 => Self::Seeking,
            5 => Self::Seeked,
            6 => Self::Stalled,
            7 => Self::Suspend,
            8 => Self::Waiting,
            9 => Self::Abort,
            10 => Self::Emptied,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Play => 0,
            Self::Playing => 1,
            Self::Pause => 2,
            Self::Ended => 3,
            Self::Seeking => 4,
            Self::Seeked => 5,
            Self::Stalled => 6,
            Self::Suspend => 7,
            Self::Waiting => 8,
            Self::Abort => 9,
            Self::Emptied => 10,
            Self::Unknown(code) => *code,
        }
    }
}

/// How much of the media the element has available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    #[default]
    HaveNothing,
    HaveMetadata,
    HaveCurrentData,
    HaveFutureData,
    HaveEnoughData,
    Unknown(i32),
}

impl ReadyState {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::HaveNothing,
            1 => Self::HaveMetadata,
            2 => Self::HaveCurrentData,
            3 => Self::HaveFutureData,
            4 => Self::HaveEnoughData,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::HaveNothing => 0,
            Self::HaveMetadata => 1,
            Self::HaveCurrentData => 2,
            Self::HaveFutureData => 3,
            Self::HaveEnoughData => 4,
            Self::Unknown(code) => *code,
        }
    }
}

/// Error reported by the media element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaError {
    NetworkNoSource,
    Aborted,
    Network,
    Decode,
    SrcNotSupported,
    Unknown(i32),
}

impl MediaError {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::NetworkNoSource,
            1 => Self::Aborted,
            2 => Self::Network,
            3 => Self::Decode,
            4 => Self::SrcNotSupported,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::NetworkNoSource => 0,
            Self::Aborted => 1,
            Self::Network => 2,
            Self::Decode => 3,
            Self::SrcNotSupported => 4,
            Self::Unknown(code) => *code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    pub current_source: String,
    pub width: i64,
    pub height: i64,
    /// Seconds; not positive while unknown
    pub duration: f64,
    pub is_seekable: bool,
    pub video_track_count: u32,
    pub audio_track_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadProgress {
    pub loaded_bytes: i64,
    /// -1 when the total size is unknown
    pub total_bytes: i64,
    pub buffered: Vec<TimeRange>,
}

impl LoadProgress {
    /// End of the furthest buffered range, if any range was reported
    pub fn buffered_end(&self) -> Option<f64> {
        self.buffered.last().map(|range| range.end)
    }
}

/// One engine callback in value form, so it can cross threads
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    PlaybackStateChange(PlaybackState),
    ReadyStateChange(ReadyState),
    MetadataChange(Metadata),
    LoadProgress(LoadProgress),
    VolumeChange { volume: f64, muted: bool },
    TimeChange(f64),
    PlaybackRateChange(f64),
    FullscreenChange(bool),
    Error(MediaError),
}
