//! A single circular particle
//!
//! Particles only mutate their own state: motion, wall reflection, and
//! radius changes. Pairwise interactions are handled in `collision` and
//! `tick`.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::config::SimConfig;

/// A circular body with position, radius, and velocity.
///
/// A radius of exactly `0.0` marks a tombstone: the particle is logically
/// dead, never collides again, and is purged at the end of the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Stable identity, assigned at creation and never reused within a run
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
}

impl Particle {
    pub fn new(id: u32, pos: Vec2, radius: f32, vel: Vec2) -> Self {
        Self {
            id,
            pos,
            radius,
            vel,
        }
    }

    /// Spawn a particle at `pos` with a freshly randomized velocity.
    ///
    /// Each velocity component is uniform in [-max_speed, max_speed]; the
    /// same distribution is used for the initial population and for
    /// breakage children.
    pub fn spawn(id: u32, pos: Vec2, radius: f32, rng: &mut Pcg32, config: &SimConfig) -> Self {
        let s = config.max_speed;
        let vel = Vec2::new(rng.random_range(-s..=s), rng.random_range(-s..=s));
        Self::new(id, pos, radius, vel)
    }

    /// Spawn a particle with random position and radius within the viewport.
    pub fn spawn_random(id: u32, rng: &mut Pcg32, config: &SimConfig) -> Self {
        let margin = config.max_radius;
        let pos = Vec2::new(
            rng.random_range(margin..=config.width - margin),
            rng.random_range(margin..=config.height - margin),
        );
        let radius = rng.random_range(config.min_radius..=config.max_radius);
        Self::spawn(id, pos, radius, rng, config)
    }

    /// Advance position by one unit timestep.
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Bounce off the viewport walls.
    ///
    /// Must run on the post-integrate position. Each axis is checked
    /// independently: when the particle's extent (`pos ± radius`) crosses
    /// `0` or the bound, that axis's velocity component is negated. A
    /// particle in a corner can flip both components in the same tick.
    pub fn reflect_at_bounds(&mut self, width: f32, height: f32) {
        if self.pos.x - self.radius <= 0.0 || self.pos.x + self.radius >= width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y - self.radius <= 0.0 || self.pos.y + self.radius >= height {
            self.vel.y = -self.vel.y;
        }
    }

    /// Change radius by `amount`, clamped so the radius never goes negative.
    #[inline]
    pub fn grow(&mut self, amount: f32) {
        self.radius = (self.radius + amount).max(0.0);
    }

    /// Set the radius directly. `0.0` is legal and tombstones the particle.
    #[inline]
    pub fn resize(&mut self, new_radius: f32) {
        self.radius = new_radius;
    }

    /// A live particle has positive radius; a tombstone has radius 0.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.radius > 0.0
    }
}
