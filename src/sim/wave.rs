//! Analytic wave profile
//!
//! The water surface is a cosine along z, phase-locked so the crest sits at
//! the far end of the pool, plus an optional linear ramp from the tilted
//! floor:
//!
//! ```text
//! y(z)    = A·cos(k·(L - z)) - H·z/L
//! grad(z) = -A·k·sin(k·(L - z)) + H/L      (rise per metre toward z = 0)
//! slope   = atan(grad)
//! ```
//!
//! The gradient is taken along the water flow (toward the near end), so a
//! negative slope means the face rises ahead of a board riding toward the
//! crest.

use serde::{Deserialize, Serialize};

use crate::pool::PoolConfig;

/// Stateless height/slope field derived from a pool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveField {
    amplitude: f32,
    wave_number: f32,
    length: f32,
    tilt_height: f32,
}

impl WaveField {
    pub fn new(pool: &PoolConfig) -> Self {
        Self {
            amplitude: pool.wave_amplitude,
            wave_number: pool.wave_number(),
            length: pool.length,
            tilt_height: pool.tilt_height,
        }
    }

    /// Floor ramp contribution: 0 at z = 0, -tilt_height at z = length
    #[inline]
    pub fn tilt(&self, z: f32) -> f32 {
        -(self.tilt_height * (z / self.length))
    }

    /// Constant gradient added by the tilted floor
    #[inline]
    pub fn tilt_gradient(&self) -> f32 {
        self.tilt_height / self.length
    }

    /// Surface height at z
    pub fn height(&self, z: f32) -> f32 {
        self.amplitude * (self.wave_number * (self.length - z)).cos() + self.tilt(z)
    }

    /// Surface gradient at z (see module docs for the sign)
    pub fn gradient(&self, z: f32) -> f32 {
        let wave = -self.amplitude * self.wave_number * (self.wave_number * (self.length - z)).sin();
        wave + self.tilt_gradient()
    }

    /// Local slope angle (radians)
    #[inline]
    pub fn slope(&self, z: f32) -> f32 {
        self.gradient(z).atan()
    }
}
