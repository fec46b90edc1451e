//! The surfer and board
//!
//! One long-lived mutable record, owned by the game loop. `advance` is the
//! only per-frame mutator; every other query reads the stored state.

use glam::{EulerRot, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use super::forces::{self, ForceBreakdown};
use super::stance::Stance;
use super::wave::WaveField;
use crate::pool::PoolConfig;
use crate::tuning::Tuning;

/// Board orientation as intrinsic Euler angles, applied yaw → pitch → roll
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardOrientation {
    /// Nose-up rotation about the board's lateral axis (radians)
    pub pitch: f32,
    /// Heading about the vertical axis (radians)
    pub yaw: f32,
    pub roll: f32,
}

impl BoardOrientation {
    /// Rotation for a turn-then-tilt rig (matches a `YXZ` Euler order)
    pub fn to_quat(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll)
    }
}

/// A single surfer riding the pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surfer {
    pool: PoolConfig,
    wave: WaveField,
    tuning: Tuning,
    /// Planar position (.x lateral, .y = world z)
    pub pos: Vec2,
    /// Planar velocity (.x lateral, .y = world z)
    pub vel: Vec2,
    /// Heading against the z axis (radians, never normalized)
    pub heading: f32,
    pub stance: Stance,
    /// Turn input applied on the last advance
    turn_input: f32,
    /// Raw stance input from the last advance (not used by the physics)
    last_stance_input: i8,
    /// Slope sampled during the last advance
    wave_slope: f32,
    tilt_angle: f32,
}

impl Surfer {
    /// Create a surfer with the default tuning, positioned at the start
    pub fn new(pool: PoolConfig) -> Self {
        Self::with_tuning(pool, Tuning::default())
    }

    pub fn with_tuning(pool: PoolConfig, tuning: Tuning) -> Self {
        if !pool.is_valid() {
            log::warn!("Pool geometry is invalid, ride will be unstable: {:?}", pool);
        }

        let mut surfer = Self {
            pool,
            wave: WaveField::new(&pool),
            tuning,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            heading: PI,
            stance: Stance::Neutral,
            turn_input: 0.0,
            last_stance_input: 0,
            wave_slope: 0.0,
            tilt_angle: pool.tilt_angle(),
        };
        surfer.reset();
        surfer
    }

    /// Start position: three quarters of a wave length back from the far end
    pub fn start_position(&self) -> Vec2 {
        Vec2::new(0.0, self.pool.length - 0.75 * self.pool.wave_length)
    }

    /// Return to the canonical start state, facing the wave
    pub fn reset(&mut self) {
        self.pos = self.start_position();
        self.vel = Vec2::ZERO;
        self.heading = PI;
        self.stance = Stance::Neutral;
        self.turn_input = 0.0;
        self.last_stance_input = 0;
        self.wave_slope = self.wave.slope(self.pos.y);
        log::debug!("Surfer reset to ({:.2}, {:.2})", self.pos.x, self.pos.y);
    }

    /// Advance the ride by `dt` seconds.
    ///
    /// `turn_input` is clamped to [-1, 1]; `stance_input` maps by sign.
    /// Negative or non-finite `dt` is treated as zero. Only x is clamped;
    /// leaving the pool along z is for the caller to detect.
    pub fn advance(&mut self, dt: f32, turn_input: f32, stance_input: i8) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let turn_input = if turn_input.is_finite() {
            turn_input.clamp(-1.0, 1.0)
        } else {
            0.0
        };

        self.last_stance_input = stance_input;
        self.stance = Stance::from_input(stance_input);
        self.turn_input = turn_input;

        self.heading += turn_input * self.turn_rate() * dt;

        self.wave_slope = self.wave.slope(self.pos.y);

        let acceleration = self.net_force() / self.tuning.mass;
        self.vel += acceleration * dt;
        self.pos += self.vel * dt;

        self.clamp_to_walls();
    }

    /// Inelastic stops against the side walls and, when configured, the front wall
    fn clamp_to_walls(&mut self) {
        let limit = self.side_limit();
        if self.pos.x.abs() > limit {
            self.pos.x = limit.copysign(self.pos.x);
            self.vel.x = 0.0;
        }

        if let Some(front) = self.tuning.front_wall_tolerance {
            if self.pos.y < front {
                self.pos.y = front;
                self.vel.y = 0.0;
            }
        }
    }

    /// Largest |x| the board may reach
    #[inline]
    pub fn side_limit(&self) -> f32 {
        self.pool.width / 2.0 - self.tuning.side_wall_tolerance
    }

    /// Heading change per second at full input for the current stance
    #[inline]
    pub fn turn_rate(&self) -> f32 {
        self.tuning.base_turn_rate * self.stance.turn_multiplier()
    }

    pub fn pool(&self) -> &PoolConfig {
        &self.pool
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn wave(&self) -> &WaveField {
        &self.wave
    }

    /// Slope sampled on the last advance (or reset)
    pub fn wave_slope(&self) -> f32 {
        self.wave_slope
    }

    pub fn turn_input(&self) -> f32 {
        self.turn_input
    }

    pub fn last_stance_input(&self) -> i8 {
        self.last_stance_input
    }

    pub fn stance_name(&self) -> &'static str {
        self.stance.as_str()
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Notional water velocity along z
    pub fn water_speed(&self) -> f32 {
        self.pool.water_speed()
    }

    // === Force queries (read-only, from stored state) ===

    pub fn gravity_force(&self) -> Vec2 {
        let slope = self.wave.slope(self.pos.y);
        forces::gravity(&self.tuning, self.heading, slope, self.tilt_angle)
    }

    pub fn water_force(&self) -> Vec2 {
        forces::water(&self.tuning, self.heading, self.vel, self.water_speed())
    }

    pub fn drag_force(&self) -> Vec2 {
        forces::drag(
            &self.tuning,
            self.heading,
            self.vel,
            self.water_speed(),
            self.stance.drag_multiplier(),
        )
    }

    pub fn lift_force(&self) -> Vec2 {
        forces::lift(&self.tuning, self.heading, self.vel, self.water_speed())
    }

    pub fn centripetal_force(&self) -> Vec2 {
        forces::centripetal(
            &self.tuning,
            self.heading,
            self.vel,
            self.turn_input,
            self.turn_rate(),
        )
    }

    /// All force terms at the current state
    pub fn forces(&self) -> ForceBreakdown {
        ForceBreakdown {
            gravity: self.gravity_force(),
            water: self.water_force(),
            drag: self.drag_force(),
            lift: self.lift_force(),
            centripetal: self.centripetal_force(),
        }
    }

    /// Sum of the enabled force terms
    pub fn net_force(&self) -> Vec2 {
        self.forces().net(&self.tuning.forces)
    }

    // === Pose for the renderer ===

    /// World placement on the wave surface
    pub fn board_position(&self) -> Vec3 {
        Vec3::new(self.pos.x, self.wave.height(self.pos.y), self.pos.y)
    }

    /// Pitch follows the slope scaled by alignment with z, plus the stance bias
    pub fn board_orientation(&self) -> BoardOrientation {
        let slope = self.wave.slope(self.pos.y);
        BoardOrientation {
            pitch: slope * self.heading.cos() + self.stance.pitch_bias(),
            yaw: self.heading,
            roll: 0.0,
        }
    }
}
