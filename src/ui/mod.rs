pub mod media_controls;
pub mod seek_bar;
pub mod volume_control;

pub use media_controls::{MediaControls, PlayIcon, VolumeIcon};
pub use seek_bar::{LIVE_LABEL, SeekBar, SeekBarMode};
pub use volume_control::VolumeControl;
