//! Wave Pool Surfer entry point
//!
//! The browser build is driven from JS through `web::WasmSurfer`; natively
//! this runs a scripted headless ride and logs the HUD readouts.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use wave_pool_surfer::PoolConfig;
    use wave_pool_surfer::consts::SIM_DT;
    use wave_pool_surfer::sim::{GameEvent, Session, Telemetry, TickInput};

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    log::info!("Wave Pool Surfer (native) starting...");

    let mut session = Session::new(PoolConfig::default());
    let frame_dt = 1.0 / 60.0;
    let frames = 10 * 60;

    for frame in 0..frames {
        let t = frame as f32 * frame_dt;
        // Carve left and right across the face, leaning forward on the way down
        let turn = (t * 0.8).sin();
        let input = TickInput {
            turn,
            stance: if turn < 0.0 { 1 } else { 0 },
            hazard_hit: false,
        };
        session.update(frame_dt, &input);

        for event in session.drain_events() {
            match event {
                GameEvent::Reset(reason) => log::info!("t={:.2}s reset: {:?}", t, reason),
            }
        }

        if frame % 60 == 0 {
            match serde_json::to_string(&Telemetry::capture(&session.surfer)) {
                Ok(json) => log::info!("t={:.0}s {}", t, json),
                Err(e) => log::warn!("Telemetry encode failed: {}", e),
            }
        }
    }

    log::info!(
        "Ride finished: {} ticks ({:.1}s simulated), {} resets",
        session.time_ticks,
        session.time_ticks as f32 * SIM_DT,
        session.resets
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}
