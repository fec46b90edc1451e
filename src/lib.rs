//! Wave Pool Surfer - surfboard physics for a standing-wave pool
//!
//! Core modules:
//! - `pool`: Pool geometry and wave parameters
//! - `tuning`: Board/rider constants and force toggles
//! - `sim`: Wave field, force model, surfer state and game-loop driver
//! - `web`: JS binding for the browser host (wasm32 only)

pub mod pool;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use pool::PoolConfig;
pub use tuning::{ForceSet, ModelVariant, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 12;
    /// Frame time cap (tab backgrounding produces huge deltas)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Gravitational acceleration (signed, y up)
    pub const GRAVITY: f32 = -9.8;
    /// Salt water density (kg/m³)
    pub const WATER_DENSITY: f32 = 1025.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to TAU
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// Heading in degrees, normalized to [-180, 180) for display
#[inline]
pub fn heading_degrees(theta: f32) -> f32 {
    normalize_angle(theta).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle_wraps() {
        // 3π lands on the ±π seam; either side is the same heading
        assert!((normalize_angle(3.0 * PI).abs() - PI).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0 - 2.0 * PI) + PI / 2.0).abs() < 1e-5);
        assert!((normalize_angle(0.25) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_angle_huge_input_terminates() {
        for angle in [1.0e8_f32, -3.0e9, 1.0e30, f32::MAX, -f32::MAX] {
            let wrapped = normalize_angle(angle);
            assert!((-PI..PI).contains(&wrapped), "{angle} -> {wrapped}");
        }
        assert!((heading_degrees(2.0e9)).abs() <= 180.0);
    }

    #[test]
    fn test_heading_degrees() {
        assert!((heading_degrees(PI / 2.0) - 90.0).abs() < 1e-3);
        assert!((heading_degrees(-PI / 2.0 + 4.0 * PI) + 90.0).abs() < 1e-3);
        assert_eq!(heading_degrees(f32::NAN), 0.0);
    }
}
