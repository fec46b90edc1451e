//! Fixed timestep ride loop
//!
//! Sits between the host's frame callback and the surfer: clamps frame time,
//! steps the physics at a fixed rate, and resets the ride when a terminal
//! condition trips.

use serde::{Deserialize, Serialize};

use super::surfer::Surfer;
use crate::consts::*;
use crate::pool::PoolConfig;
use crate::tuning::Tuning;

/// Input commands for a frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Turn input in [-1, 1] (positive turns toward +heading)
    pub turn: f32,
    /// Stance input: 1 forward, 0 neutral, -1 back
    pub stance: i8,
    /// The host detected a predator collision this frame
    pub hazard_hit: bool,
}

/// Why a ride ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetReason {
    /// Collided with a predator reported by the host
    Predator,
    /// Left the pool footprint
    OutOfBounds,
    /// Fell back into the foam zone behind the wave
    Whitewater,
}

/// Events for the host to react to (overlays, sounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Reset(ResetReason),
}

/// A running ride session
#[derive(Debug, Clone)]
pub struct Session {
    pub surfer: Surfer,
    accumulator: f32,
    /// Hazard flag waiting for the next tick
    pending_hazard: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks since the last reset
    pub ride_ticks: u64,
    /// Number of rides that ended
    pub resets: u32,
    events: Vec<GameEvent>,
}

impl Session {
    pub fn new(pool: PoolConfig) -> Self {
        Self::with_tuning(pool, Tuning::default())
    }

    pub fn with_tuning(pool: PoolConfig, tuning: Tuning) -> Self {
        Self {
            surfer: Surfer::with_tuning(pool, tuning),
            accumulator: 0.0,
            pending_hazard: false,
            time_ticks: 0,
            ride_ticks: 0,
            resets: 0,
            events: Vec::new(),
        }
    }

    /// Run the fixed-rate ticks owed for one frame. Returns the number run.
    pub fn update(&mut self, frame_dt: f32, input: &TickInput) -> u32 {
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;
        self.pending_hazard |= input.hazard_hit;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.tick(input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        // Drop time we could not catch up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        substeps
    }

    /// Advance one step and handle terminal conditions
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Option<ResetReason> {
        self.surfer.advance(dt, input.turn, input.stance);
        self.time_ticks += 1;
        self.ride_ticks += 1;

        let hazard = std::mem::take(&mut self.pending_hazard);
        let reason = self.terminal_condition(hazard)?;

        log::info!(
            "Ride over ({:?}) after {:.1}s at ({:.1}, {:.1})",
            reason,
            self.ride_time(),
            self.surfer.pos.x,
            self.surfer.pos.y
        );
        self.restart();
        self.resets += 1;
        self.events.push(GameEvent::Reset(reason));
        Some(reason)
    }

    /// First terminal condition that applies, if any
    pub fn terminal_condition(&self, hazard_hit: bool) -> Option<ResetReason> {
        if hazard_hit {
            return Some(ResetReason::Predator);
        }

        let pool = self.surfer.pool();
        let pos = self.surfer.pos;
        if pos.x.abs() > pool.width / 2.0 || pos.y < 0.0 || pos.y > pool.length {
            return Some(ResetReason::OutOfBounds);
        }

        if pos.y <= pool.foam_line() {
            return Some(ResetReason::Whitewater);
        }

        None
    }

    /// Put the surfer back at the start without counting a reset
    pub fn restart(&mut self) {
        self.surfer.reset();
        self.ride_ticks = 0;
    }

    /// Seconds since the last reset
    pub fn ride_time(&self) -> f32 {
        self.ride_ticks as f32 * SIM_DT
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
