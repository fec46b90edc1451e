//! HUD snapshot of the ride
//!
//! Plain numbers only; formatting is left to the host.

use serde::{Deserialize, Serialize};

use super::surfer::Surfer;
use crate::heading_degrees;

/// Force magnitudes (N)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ForceMagnitudes {
    pub gravity: f32,
    pub water: f32,
    pub drag: f32,
    pub lift: f32,
    pub centripetal: f32,
    /// Magnitude of the enabled terms' sum
    pub net: f32,
}

/// One frame of readouts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Telemetry {
    /// Board speed (m/s)
    pub speed: f32,
    /// Water flow speed along z (m/s)
    pub water_speed: f32,
    /// Heading in degrees, [-180, 180)
    pub heading_deg: f32,
    pub x: f32,
    pub z: f32,
    pub stance: String,
    /// Slope from the last advance, degrees
    pub wave_slope_deg: f32,
    pub forces: ForceMagnitudes,
}

impl Telemetry {
    pub fn capture(surfer: &Surfer) -> Self {
        let breakdown = surfer.forces();
        let net = breakdown.net(&surfer.tuning().forces);

        Self {
            speed: surfer.speed(),
            water_speed: surfer.water_speed(),
            heading_deg: heading_degrees(surfer.heading),
            x: surfer.pos.x,
            z: surfer.pos.y,
            stance: surfer.stance_name().to_string(),
            wave_slope_deg: surfer.wave_slope().to_degrees(),
            forces: ForceMagnitudes {
                gravity: breakdown.gravity.length(),
                water: breakdown.water.length(),
                drag: breakdown.drag.length(),
                lift: breakdown.lift.length(),
                centripetal: breakdown.centripetal.length(),
                net: net.length(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::PoolConfig;

    #[test]
    fn test_capture_at_start() {
        let surfer = Surfer::new(PoolConfig::default());
        let t = Telemetry::capture(&surfer);

        assert_eq!(t.speed, 0.0);
        assert_eq!(t.water_speed, -10.0);
        assert!((t.heading_deg.abs() - 180.0).abs() < 1e-3);
        assert_eq!((t.x, t.z), (0.0, 43.75));
        assert_eq!(t.stance, "Neutral");
        assert!((t.forces.drag - 40.0).abs() < 1e-2);
        assert_eq!(t.forces.centripetal, 0.0);
    }

    #[test]
    fn test_capture_does_not_mutate() {
        let mut surfer = Surfer::new(PoolConfig::default());
        surfer.advance(0.05, 0.5, 1);
        let before = surfer.clone();
        let _ = Telemetry::capture(&surfer);
        assert_eq!(before.pos, surfer.pos);
        assert_eq!(before.vel, surfer.vel);
        assert_eq!(before.wave_slope(), surfer.wave_slope());
    }

    #[test]
    fn test_serializes_for_host() {
        let surfer = Surfer::new(PoolConfig::default());
        let json = serde_json::to_value(Telemetry::capture(&surfer)).unwrap();
        assert_eq!(json["stance"], "Neutral");
        assert!(json["forces"]["gravity"].as_f64().is_some());
    }
}
