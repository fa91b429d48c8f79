//! Deterministic simulation module
//!
//! All population dynamics live here. This module must be pure and
//! deterministic:
//! - Unit timestep only (one tick = one integration step)
//! - Seeded RNG only, owned by the simulation state
//! - Stable pair priority (population iteration order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod particle;
pub mod state;
pub mod tick;

pub use collision::{find_colliding_pairs, resolve_elastic};
pub use particle::Particle;
pub use state::{ParticleView, SimState, Snapshot};
pub use tick::tick;
