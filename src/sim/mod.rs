//! Deterministic ride simulation
//!
//! All physics lives here. This module must be pure and deterministic:
//! - No rendering or platform dependencies
//! - No randomness
//! - One surfer, mutated only by its owner once per tick

pub mod forces;
pub mod session;
pub mod stance;
pub mod surfer;
pub mod telemetry;
pub mod wave;

pub use forces::ForceBreakdown;
pub use session::{GameEvent, ResetReason, Session, TickInput};
pub use stance::Stance;
pub use surfer::{BoardOrientation, Surfer};
pub use telemetry::Telemetry;
pub use wave::WaveField;
