//! Crystal Pop - a crystallization particle-population simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, population dynamics)
//! - `config`: Validated simulation parameters
//!
//! The library owns no window, canvas, or timer. A host drives the
//! simulation by calling [`sim::tick`] at its own cadence and reads the
//! published [`sim::Snapshot`] to draw particles and overlay metrics.

pub mod config;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use sim::{SimState, Snapshot, tick};

/// Simulation constants
pub mod consts {
    /// Radius gain per tick per unit of excess supersaturation
    pub const GROWTH_FACTOR: f32 = 0.1;

    /// Minimum center distance for normal-based collision resolution.
    /// Below this the contact normal is undefined and the pair is skipped.
    pub const CONTACT_EPSILON: f32 = 1e-6;

    /// Reference host cadence between ticks (milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 20;
}
