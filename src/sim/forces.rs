//! Force model for a board on the wave face
//!
//! All forces are planar vectors (`Vec2`, `.x` lateral, `.y` along z).
//! Height is never simulated; the wave field only supplies the slope.
//!
//! - **Gravity**: weight projected onto the local slope and the floor tilt
//! - **Water**: propulsion from flow past the board, ∝ (relative speed)²
//! - **Drag**: opposes relative flow, anisotropic in heading
//! - **Lift**: dynamic-pressure lift along the board's forward axis
//! - **Centripetal**: inward correction while turning
//!
//! Each function is pure. Terms that divide by a speed return zero when the
//! speed is zero.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use crate::tuning::{ForceSet, Tuning};

/// Speeds at or below this are treated as zero when normalizing
const MIN_SPEED: f32 = 1e-6;

/// Board velocity relative to the water flow
#[inline]
pub fn relative_velocity(vel: Vec2, water_speed: f32) -> Vec2 {
    Vec2::new(vel.x, vel.y - water_speed)
}

/// Weight pulling the board down the face.
///
/// Lateral share follows sin(heading); the longitudinal share is the slope
/// plus floor tilt, scaled by how aligned the board is with z.
pub fn gravity(tuning: &Tuning, heading: f32, slope: f32, tilt_angle: f32) -> Vec2 {
    let weight = tuning.weight();
    Vec2::new(
        weight * heading.sin(),
        weight * (slope.sin() + tilt_angle.sin()) * heading.cos(),
    )
}

/// Propulsion from the flow.
///
/// Zero inside the dead-band. Pushes back hardest when the board is across
/// the flow and sideways hardest at 45°.
pub fn water(tuning: &Tuning, heading: f32, vel: Vec2, water_speed: f32) -> Vec2 {
    let relative = vel.y - water_speed;
    if relative.abs() < tuning.water_dead_band {
        return Vec2::ZERO;
    }

    let base = tuning.water_force_coeff * relative * relative;
    Vec2::new(base * (2.0 * heading).sin(), -base * heading.sin().abs())
}

/// Hydrodynamic drag, F = -(C_long·|cos θ| + C_lat·|sin θ|)·|v_rel|²·v̂_rel
pub fn drag(tuning: &Tuning, heading: f32, vel: Vec2, water_speed: f32, drag_multiplier: f32) -> Vec2 {
    let rel = relative_velocity(vel, water_speed);
    let speed = rel.length();
    if speed <= MIN_SPEED {
        return Vec2::ZERO;
    }

    let c_long = tuning.c_long * drag_multiplier;
    let coeff = c_long * heading.cos().abs() + tuning.c_lat * heading.sin().abs();
    let magnitude = coeff * speed * speed;

    -(rel / speed) * magnitude
}

/// Lift, F = ½·ρ·v²·A·C_L along (cos θ, sin θ)
pub fn lift(tuning: &Tuning, heading: f32, vel: Vec2, water_speed: f32) -> Vec2 {
    let speed_sq = relative_velocity(vel, water_speed).length_squared();
    let magnitude =
        0.5 * tuning.water_density * speed_sq * tuning.board_area() * tuning.board_lift_coefficient;
    Vec2::from_angle(heading) * magnitude
}

/// Inward correction while turning.
///
/// r = v / ω, a = v² / r. Scaled by the damping constant and the signed
/// turn input, then laid along heading -90° for positive input and +90°
/// for negative. The two sign flips cancel, so the force always lies along
/// heading -90°, scaled by |turn input|.
pub fn centripetal(tuning: &Tuning, heading: f32, vel: Vec2, turn_input: f32, turn_rate: f32) -> Vec2 {
    if turn_input == 0.0 || turn_rate == 0.0 {
        return Vec2::ZERO;
    }

    let speed = vel.length();
    if speed <= MIN_SPEED {
        return Vec2::ZERO;
    }

    let turn_radius = speed / turn_rate.abs();
    let centripetal_acc = speed * speed / turn_radius;
    let magnitude = tuning.centripetal_damping * turn_input * centripetal_acc * tuning.mass;

    let angle = if turn_input > 0.0 {
        heading - FRAC_PI_2
    } else {
        heading + FRAC_PI_2
    };

    log::trace!("centripetal force: {magnitude:.1} N");

    Vec2::from_angle(angle) * magnitude
}

/// Every force term for one instant, whether or not it is summed
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ForceBreakdown {
    pub gravity: Vec2,
    pub water: Vec2,
    pub drag: Vec2,
    pub lift: Vec2,
    pub centripetal: Vec2,
}

impl ForceBreakdown {
    /// Sum of the enabled terms
    pub fn net(&self, set: &ForceSet) -> Vec2 {
        let mut net = Vec2::ZERO;
        if set.gravity {
            net += self.gravity;
        }
        if set.water {
            net += self.water;
        }
        if set.drag {
            net += self.drag;
        }
        if set.lift {
            net += self.lift;
        }
        if set.centripetal {
            net += self.centripetal;
        }
        net
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const WATER_SPEED: f32 = -10.0;

    fn tuning() -> Tuning {
        Tuning::default()
    }

    /// Only water and drag
    fn hydrodynamic() -> ForceSet {
        ForceSet {
            gravity: false,
            water: true,
            drag: true,
            lift: false,
            centripetal: false,
        }
    }

    #[test]
    fn test_gravity_on_flat_water_facing_crest() {
        // Heading π points along z, no slope: nothing pulls the board
        let f = gravity(&tuning(), PI, 0.0, 0.0);
        assert!(f.length() < 1e-3);
    }

    #[test]
    fn test_gravity_follows_slope() {
        let t = tuning();
        let slope = 0.3;
        let f = gravity(&t, PI, slope, 0.0);
        // weight (-686) · sin(0.3) · cos(π) > 0
        assert!((f.y - 686.0 * slope.sin()).abs() < 1e-2);

        // Perpendicular to z the slope does not project
        let f = gravity(&t, PI / 2.0, slope, 0.0);
        assert!(f.y.abs() < 1e-2);
        assert!((f.x - (-686.0)).abs() < 1e-2);
    }

    #[test]
    fn test_water_dead_band() {
        let t = tuning();
        let f = water(&t, PI / 4.0, Vec2::new(0.0, WATER_SPEED + 0.05), WATER_SPEED);
        assert_eq!(f, Vec2::ZERO);
    }

    #[test]
    fn test_water_components() {
        let t = tuning();
        let vel = Vec2::ZERO; // relative 10 m/s → base 300 N
        let f = water(&t, PI / 4.0, vel, WATER_SPEED);
        assert!((f.x - 300.0).abs() < 1e-2);
        assert!((f.y - (-300.0 * (PI / 4.0).sin())).abs() < 1e-2);

        // Across the flow: all push-back, no sideways component
        let f = water(&t, PI / 2.0, vel, WATER_SPEED);
        assert!(f.x.abs() < 1e-3);
        assert!((f.y + 300.0).abs() < 1e-2);

        // Aligned with the flow: nothing
        assert!(water(&t, 0.0, vel, WATER_SPEED).length() < 1e-3);
    }

    #[test]
    fn test_drag_opposes_relative_velocity() {
        let t = tuning();
        let vel = Vec2::new(3.0, 2.0);
        let rel = relative_velocity(vel, WATER_SPEED);
        let f = drag(&t, 0.7, vel, WATER_SPEED, 1.0);
        assert!(f.dot(rel) < 0.0);
        assert!(f.perp_dot(rel).abs() < 1e-2);
    }

    #[test]
    fn test_drag_anisotropy_and_stance() {
        let t = tuning();
        let vel = Vec2::ZERO; // relative (0, 10)
        let along = drag(&t, PI, vel, WATER_SPEED, 1.0);
        let across = drag(&t, PI / 2.0, vel, WATER_SPEED, 1.0);
        assert!((along.y + 40.0).abs() < 1e-2);
        assert!((across.y + 90.0).abs() < 1e-2);

        let forward = drag(&t, PI, vel, WATER_SPEED, 0.7);
        assert!((forward.y + 28.0).abs() < 1e-2);
    }

    #[test]
    fn test_drag_zero_relative_speed() {
        let f = drag(&tuning(), 1.0, Vec2::new(0.0, WATER_SPEED), WATER_SPEED, 1.0);
        assert_eq!(f, Vec2::ZERO);
        assert!(f.is_finite());
    }

    #[test]
    fn test_lift_along_forward_axis() {
        let t = tuning();
        let f = lift(&t, 0.0, Vec2::ZERO, WATER_SPEED);
        // ½ · 1025 · 100 · 1.75 · 0.05
        assert!((f.x - 4484.375).abs() < 0.1);
        assert!(f.y.abs() < 1e-3);
    }

    #[test]
    fn test_centripetal_guards() {
        let t = tuning();
        assert_eq!(centripetal(&t, 0.0, Vec2::new(5.0, 0.0), 0.0, 1.5), Vec2::ZERO);
        assert_eq!(centripetal(&t, 0.0, Vec2::ZERO, 1.0, 1.5), Vec2::ZERO);
        assert_eq!(centripetal(&t, 0.0, Vec2::new(5.0, 0.0), 1.0, 0.0), Vec2::ZERO);
    }

    #[test]
    fn test_centripetal_lies_along_heading_minus_quarter_turn() {
        let t = tuning();
        let vel = Vec2::new(0.0, 5.0);
        let left = centripetal(&t, 0.0, vel, 1.0, 1.5);
        let right = centripetal(&t, 0.0, vel, -1.0, 1.5);

        // 0.8 · 5 · 1.5 · 70, both turn directions along heading -90°
        assert!(left.x.abs() < 1e-2);
        assert!((left.y + 420.0).abs() < 1e-2);
        assert!(right.x.abs() < 1e-2);
        assert!((right.y + 420.0).abs() < 1e-2);

        let half = centripetal(&t, 0.0, vel, 0.5, 1.5);
        assert!((half.length() - 210.0).abs() < 1e-2);
        assert!((half.y + 210.0).abs() < 1e-2);

        let half_right = centripetal(&t, 0.0, vel, -0.5, 1.5);
        assert!((half_right.y + 210.0).abs() < 1e-2);
    }

    #[test]
    fn test_centripetal_follows_heading() {
        let t = tuning();
        let vel = Vec2::new(0.0, 5.0);
        // Heading π/2: heading -90° is +x
        let f = centripetal(&t, PI / 2.0, vel, -1.0, 1.5);
        assert!((f.x - 420.0).abs() < 1e-2);
        assert!(f.y.abs() < 1e-2);
    }

    #[test]
    fn test_net_respects_toggles() {
        let breakdown = ForceBreakdown {
            gravity: Vec2::new(1.0, 0.0),
            water: Vec2::new(0.0, 2.0),
            drag: Vec2::new(-4.0, 0.0),
            lift: Vec2::new(100.0, 100.0),
            centripetal: Vec2::new(0.0, 8.0),
        };
        let net = breakdown.net(&ForceSet::default());
        assert_eq!(net, Vec2::new(-3.0, 10.0));

        let net = breakdown.net(&hydrodynamic());
        assert_eq!(net, Vec2::new(-4.0, 2.0));
    }
}
