//! Rider stance on the board
//!
//! Selected directly from input each tick; no transition or smoothing.

use serde::{Deserialize, Serialize};

/// Board pitch bias per stance (degrees, nose up)
pub const FORWARD_PITCH_BIAS_DEG: f32 = 5.0;
pub const NEUTRAL_PITCH_BIAS_DEG: f32 = 15.0;
pub const BACK_PITCH_BIAS_DEG: f32 = 25.0;

/// Where the rider's weight sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Stance {
    /// Weight on the nose: less drag, slower turns
    Forward,
    #[default]
    Neutral,
    /// Weight on the tail: more drag, sharper turns
    Back,
}

impl Stance {
    /// Map stance input (1 forward, -1 back, 0 neutral) by sign
    pub fn from_input(input: i8) -> Self {
        match input.signum() {
            1 => Stance::Forward,
            -1 => Stance::Back,
            _ => Stance::Neutral,
        }
    }

    /// (drag multiplier, turn multiplier)
    pub fn multipliers(&self) -> (f32, f32) {
        match self {
            Stance::Forward => (0.7, 0.8),
            Stance::Neutral => (1.0, 1.0),
            Stance::Back => (1.3, 1.2),
        }
    }

    #[inline]
    pub fn drag_multiplier(&self) -> f32 {
        self.multipliers().0
    }

    #[inline]
    pub fn turn_multiplier(&self) -> f32 {
        self.multipliers().1
    }

    /// Visual pitch bias (radians)
    pub fn pitch_bias(&self) -> f32 {
        let degrees = match self {
            Stance::Forward => FORWARD_PITCH_BIAS_DEG,
            Stance::Neutral => NEUTRAL_PITCH_BIAS_DEG,
            Stance::Back => BACK_PITCH_BIAS_DEG,
        };
        degrees.to_radians()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Forward => "Forward",
            Stance::Neutral => "Neutral",
            Stance::Back => "Back",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        assert_eq!(Stance::from_input(1), Stance::Forward);
        assert_eq!(Stance::from_input(0), Stance::Neutral);
        assert_eq!(Stance::from_input(-1), Stance::Back);
        // Out-of-range input maps by sign
        assert_eq!(Stance::from_input(5), Stance::Forward);
        assert_eq!(Stance::from_input(i8::MIN), Stance::Back);
    }

    #[test]
    fn test_lookup_table() {
        assert_eq!(Stance::Forward.multipliers(), (0.7, 0.8));
        assert_eq!(Stance::Neutral.multipliers(), (1.0, 1.0));
        assert_eq!(Stance::Back.multipliers(), (1.3, 1.2));
        assert!(Stance::Forward.pitch_bias() < Stance::Neutral.pitch_bias());
        assert!(Stance::Neutral.pitch_bias() < Stance::Back.pitch_bias());
        assert_eq!(Stance::Back.as_str(), "Back");
    }
}
