//! Pool geometry and wave parameters
//!
//! Immutable after construction; shared by the wave field and the surfer.
//! Coordinates: x is lateral (centered on 0), z is longitudinal from the
//! near end (z = 0) to the far end (z = `length`). The wave crest sits at
//! the far end and the water flows toward z = 0.

use serde::{Deserialize, Serialize};

/// Wave pool configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Lateral extent (m)
    pub width: f32,
    /// Longitudinal extent (m)
    pub length: f32,
    /// Wave length (m), must be > 0
    pub wave_length: f32,
    /// Wave amplitude (m)
    pub wave_amplitude: f32,
    /// Wall height (m)
    pub wall_height: f32,
    /// Wall thickness (m)
    pub wall_thickness: f32,
    /// Elevation drop from the near end to the far end (m), 0 = flat floor
    #[serde(default)]
    pub tilt_height: f32,
    /// Speed of the water flowing toward the near end (m/s)
    #[serde(default = "default_wave_speed")]
    pub wave_speed: f32,
}

fn default_wave_speed() -> f32 {
    PoolConfig::DEFAULT_WAVE_SPEED
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            length: 100.0,
            wave_length: 75.0,
            wave_amplitude: 9.0,
            wall_height: 10.0,
            wall_thickness: 1.0,
            tilt_height: 3.0,
            wave_speed: Self::DEFAULT_WAVE_SPEED,
        }
    }
}

impl PoolConfig {
    pub const DEFAULT_WAVE_SPEED: f32 = 10.0;

    /// Untilted pool with the smaller wave
    pub fn flat() -> Self {
        Self {
            wave_amplitude: 8.0,
            tilt_height: 0.0,
            ..Self::default()
        }
    }

    /// Wave number k = 2π / wave_length
    #[inline]
    pub fn wave_number(&self) -> f32 {
        std::f32::consts::TAU / self.wave_length
    }

    /// Constant floor tilt angle, atan2(-tilt_height, length)
    #[inline]
    pub fn tilt_angle(&self) -> f32 {
        (-self.tilt_height).atan2(self.length)
    }

    /// Notional water velocity along z (negative: toward the near end)
    #[inline]
    pub fn water_speed(&self) -> f32 {
        -self.wave_speed
    }

    /// Start of the foam zone; everything at or below this z is whitewater
    #[inline]
    pub fn foam_line(&self) -> f32 {
        self.length - self.wave_length
    }

    /// Geometry invariants: positive length and wave length, non-negative tilt
    pub fn is_valid(&self) -> bool {
        self.length > 0.0
            && self.wave_length > 0.0
            && self.width > 0.0
            && self.tilt_height >= 0.0
            && self.wave_amplitude.is_finite()
    }
}
