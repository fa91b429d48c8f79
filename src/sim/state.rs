//! Simulation state aggregate and the published snapshot
//!
//! Exactly one `SimState` exists per simulation instance and exactly one
//! owner mutates it, once per tick. The rendering collaborator never sees
//! the state itself; it gets an owned [`Snapshot`] each tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::config::{ConfigError, SimConfig};

use super::particle::Particle;

/// Complete simulation state: population, supersaturation, RNG, and the
/// fixed configuration. All stochastic draws flow through the state-owned
/// seeded RNG, so two states built with the same seed and config evolve
/// identically.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Fixed run constants, validated at construction
    pub config: SimConfig,
    /// Scalar driving growth; decays toward `critical_concentration`
    pub supersaturation: f32,
    /// The particle population. Iteration order sets pair priority within
    /// a tick; tombstones are purged at end of tick.
    pub particles: Vec<Particle>,
    /// Tick counter
    pub time_ticks: u64,
    /// RNG for all stochastic draws (events, spawn velocities, jitter)
    pub rng: Pcg32,
    /// Next particle ID
    next_id: u32,
}

impl SimState {
    /// Build a simulation from a validated config, spawning the initial
    /// population at random positions and radii within the viewport.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut state = Self {
            seed,
            supersaturation: config.initial_supersaturation,
            particles: Vec::with_capacity(config.initial_particles),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 0,
            config,
        };

        for _ in 0..state.config.initial_particles {
            let id = state.next_particle_id();
            let p = Particle::spawn_random(id, &mut state.rng, &state.config);
            state.particles.push(p);
        }

        Ok(state)
    }

    /// Allocate a fresh particle ID
    pub fn next_particle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Count of live (non-tombstoned) particles
    pub fn particle_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_live()).count()
    }

    /// Publish the read-only view for the rendering collaborator.
    pub fn snapshot(&self) -> Snapshot {
        let particles: Vec<ParticleView> = self
            .particles
            .iter()
            .filter(|p| p.is_live())
            .map(|p| ParticleView {
                pos: p.pos,
                radius: p.radius,
            })
            .collect();
        Snapshot {
            tick: self.time_ticks,
            supersaturation: self.supersaturation,
            particle_count: particles.len(),
            particles,
        }
    }
}

/// One particle as the renderer sees it: enough to draw a circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Per-tick publication to the rendering collaborator.
///
/// An owned value: the reader cannot reach back into the simulation, and
/// the simulation never sees it again.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    /// Current supersaturation, for the metrics overlay
    pub supersaturation: f32,
    /// Live particle count, for the metrics overlay
    pub particle_count: usize,
    /// Live particles only; tombstones are never published
    pub particles: Vec<ParticleView>,
}
