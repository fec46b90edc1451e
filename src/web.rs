//! JS binding for the browser host
//!
//! The host owns the scene, input devices and HUD. Each animation frame it
//! calls `update` with the raw frame delta and control scalars, then reads
//! the board pose back.

use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

use crate::pool::PoolConfig;
use crate::sim::{GameEvent, Session, Telemetry, TickInput};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Wave Pool Surfer loaded");
}

/// Ride session handle exposed to JS
#[wasm_bindgen]
pub struct WasmSurfer {
    session: Session,
    /// Resets not yet collected by the host
    pending_resets: u32,
}

#[wasm_bindgen]
impl WasmSurfer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let pool = PoolConfig::default();
        log::info!(
            "Pool {}x{} m, wave length {} m, amplitude {} m",
            pool.width,
            pool.length,
            pool.wave_length,
            pool.wave_amplitude
        );
        Self {
            session: Session::new(pool),
            pending_resets: 0,
        }
    }

    /// Start a fresh ride
    pub fn reset(&mut self) {
        self.session.restart();
    }

    /// Step the ride for one animation frame (seconds)
    pub fn update(&mut self, dt: f32, turn: f32, stance: i32, hazard_hit: bool) {
        let input = TickInput {
            turn,
            stance: stance.signum() as i8,
            hazard_hit,
        };
        self.session.update(dt, &input);

        for event in self.session.drain_events() {
            match event {
                GameEvent::Reset(_) => self.pending_resets += 1,
            }
        }
    }

    /// Board world position as [x, y, z]
    pub fn board_position(&self) -> Float32Array {
        let p = self.session.surfer.board_position();
        Float32Array::from(&p.to_array()[..])
    }

    /// Board rotation as a quaternion [x, y, z, w]
    pub fn board_quaternion(&self) -> Float32Array {
        let q = self.session.surfer.board_orientation().to_quat();
        Float32Array::from(&q.to_array()[..])
    }

    /// Board box extents as [width, thickness, length] (m)
    pub fn board_size(&self) -> Float32Array {
        let size = self.session.surfer.tuning().board_size();
        Float32Array::from(&size.to_array()[..])
    }

    /// Rider height (m) for placing the rider rig on the board
    pub fn rider_height(&self) -> f32 {
        self.session.surfer.tuning().rider_height
    }

    /// Heading in radians (for camera follow)
    pub fn heading(&self) -> f32 {
        self.session.surfer.heading
    }

    pub fn stance_name(&self) -> String {
        self.session.surfer.stance_name().to_string()
    }

    /// HUD readouts as JSON
    pub fn telemetry_json(&self) -> String {
        let telemetry = Telemetry::capture(&self.session.surfer);
        match serde_json::to_string(&telemetry) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Telemetry encode failed: {}", e);
                "{}".to_string()
            }
        }
    }

    /// Number of rides ended since the last call
    pub fn take_resets(&mut self) -> u32 {
        std::mem::take(&mut self.pending_resets)
    }
}

impl Default for WasmSurfer {
    fn default() -> Self {
        Self::new()
    }
}
