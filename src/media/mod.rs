pub mod mirror;
pub mod pump;
pub mod traits;
pub mod types;

pub use mirror::{Media, SharedMedia, SharedObserver};
pub use pump::{MediaEventPump, MediaEventSender, media_event_channel};
pub use traits::{MediaElement, MediaObserver};
pub use types::{
    LoadProgress, MediaError, MediaEvent, Metadata, PlaybackState, ReadyState, TimeRange,
};
