//! Board and rider tuning
//!
//! Hand-tuned constants for the force model plus the set of force terms
//! that contribute to motion. Two presets cover the observed behavior:
//! `Classic` (gravity, water, drag) and `Extended` (adds the centripetal
//! correction and a front-wall stop).

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{GRAVITY, WATER_DENSITY};

/// Which force terms are summed into the net force.
///
/// Every term stays computable for telemetry regardless of its toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceSet {
    pub gravity: bool,
    pub water: bool,
    pub drag: bool,
    pub lift: bool,
    pub centripetal: bool,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self {
            gravity: true,
            water: true,
            drag: true,
            lift: false,
            centripetal: true,
        }
    }
}

/// Force model presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModelVariant {
    /// Gravity, water and drag; side walls only
    Classic,
    /// Classic plus centripetal correction and a front-wall stop
    #[default]
    Extended,
}

/// Surfer/board tuning parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Rider + board mass (kg)
    pub mass: f32,
    /// Gravitational acceleration (signed)
    pub gravity: f32,
    /// Heading change per second at full turn input (rad/s)
    pub base_turn_rate: f32,
    /// Longitudinal drag coefficient
    pub c_long: f32,
    /// Lateral drag coefficient, higher than longitudinal
    pub c_lat: f32,
    /// Propulsion force per (m/s)² of relative flow
    pub water_force_coeff: f32,
    /// Relative flow speed below which propulsion is zero
    pub water_dead_band: f32,
    /// Empirical scale on the centripetal correction
    pub centripetal_damping: f32,
    /// Water density (kg/m³)
    pub water_density: f32,
    pub board_length: f32,
    pub board_width: f32,
    /// Board thickness (m), mesh sizing only
    pub board_thickness: f32,
    /// Fraction of the length × width rectangle that is wetted planform
    pub board_area_factor: f32,
    pub board_lift_coefficient: f32,
    /// Rider height (m), used by the host to place the rider rig
    pub rider_height: f32,
    /// Distance kept from each side wall (m)
    pub side_wall_tolerance: f32,
    /// Minimum z kept from the front wall; `None` leaves z unclamped
    pub front_wall_tolerance: Option<f32>,
    /// Force terms summed into the net force
    pub forces: ForceSet,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::for_variant(ModelVariant::default())
    }
}

impl Tuning {
    /// Build the tuning for a model variant
    pub fn for_variant(variant: ModelVariant) -> Self {
        let base = Self {
            mass: 70.0,
            gravity: GRAVITY,
            base_turn_rate: 1.5,
            c_long: 0.4,
            c_lat: 0.9,
            water_force_coeff: 3.0,
            water_dead_band: 0.1,
            centripetal_damping: 0.8,
            water_density: WATER_DENSITY,
            board_length: 2.5,
            board_width: 1.0,
            board_thickness: 0.10,
            board_area_factor: 0.7,
            board_lift_coefficient: 0.05,
            rider_height: 1.8,
            side_wall_tolerance: 1.2,
            front_wall_tolerance: Some(2.0),
            forces: ForceSet::default(),
        };

        match variant {
            ModelVariant::Extended => base,
            ModelVariant::Classic => Self {
                board_width: 0.45,
                board_thickness: 0.05,
                side_wall_tolerance: 1.0,
                front_wall_tolerance: None,
                forces: ForceSet {
                    centripetal: false,
                    ..ForceSet::default()
                },
                ..base
            },
        }
    }

    /// Wetted planform area (m²)
    #[inline]
    pub fn board_area(&self) -> f32 {
        self.board_area_factor * self.board_length * self.board_width
    }

    /// Board box extents for the host mesh: (width, thickness, length)
    #[inline]
    pub fn board_size(&self) -> Vec3 {
        Vec3::new(self.board_width, self.board_thickness, self.board_length)
    }

    /// Weight magnitude term m·g (signed like `gravity`)
    #[inline]
    pub fn weight(&self) -> f32 {
        self.mass * self.gravity
    }
}
