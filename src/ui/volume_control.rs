/// Volume slider state
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeControl {
    volume: f64,
    muted: bool,
}

impl Default for VolumeControl {
    fn default() -> Self {
        Self {
            volume: 1.0,
            muted: false,
        }
    }
}

impl VolumeControl {
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}
