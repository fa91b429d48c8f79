//! One simulation step
//!
//! Advances the whole population by one tick: motion and wall reflection,
//! supersaturation-driven growth, pairwise collision handling with
//! stochastic agglomeration/breakage, population compaction, and
//! supersaturation decay.

use glam::Vec2;
use rand::Rng;

use crate::consts::GROWTH_FACTOR;

use super::collision::{find_colliding_pairs, resolve_elastic};
use super::particle::Particle;
use super::state::SimState;

/// Advance the simulation by one tick.
///
/// Order per tick:
/// 1. Every particle integrates, reflects at the viewport walls, and grows
///    by `GROWTH_FACTOR * (supersaturation - critical_concentration)` while
///    supersaturation is above the floor.
/// 2. Colliding pairs are enumerated against this post-motion population.
/// 3. Each pair independently agglomerates, breaks, or bounces. The pair
///    list is never recomputed mid-tick; pairs whose participants were
///    tombstoned by an earlier pair are no-ops.
/// 4. Tombstones are purged and breakage children appended.
/// 5. Supersaturation decays by `nucleation_rate`, floored at
///    `critical_concentration`.
pub fn tick(state: &mut SimState) {
    let width = state.config.width;
    let height = state.config.height;

    let excess = state.supersaturation - state.config.critical_concentration;
    let growth = if excess > 0.0 {
        GROWTH_FACTOR * excess
    } else {
        0.0
    };

    for particle in &mut state.particles {
        particle.integrate();
        particle.reflect_at_bounds(width, height);
        if growth > 0.0 {
            particle.grow(growth);
        }
    }

    let pairs = find_colliding_pairs(&state.particles);

    let mut spawned: Vec<Particle> = Vec::new();
    let mut merges = 0u32;
    let mut splits = 0u32;
    let mut bounces = 0u32;

    for (i, j) in pairs {
        // An earlier pair may have tombstoned either side; dead particles
        // no longer interact.
        if !state.particles[i].is_live() || !state.particles[j].is_live() {
            continue;
        }

        if state.rng.random_range(0.0..1.0) < state.config.agglomeration_probability {
            let merged = state.particles[i]
                .radius
                .hypot(state.particles[j].radius);
            state.particles[i].resize(merged);
            state.particles[j].resize(0.0);
            merges += 1;
            log::trace!(
                "agglomeration: #{} absorbed #{}, radius {merged:.2}",
                state.particles[i].id,
                state.particles[j].id
            );
        } else if state.rng.random_range(0.0..1.0) < state.config.breakage_probability {
            let parent_pos = state.particles[i].pos;
            let parent_id = state.particles[i].id;
            let child_radius = state.particles[i].radius / 2.0;
            state.particles[i].resize(0.0);
            for _ in 0..2 {
                let jitter = state.config.breakage_jitter;
                let pos = parent_pos
                    + Vec2::new(
                        state.rng.random_range(-jitter..=jitter),
                        state.rng.random_range(-jitter..=jitter),
                    );
                let id = state.next_particle_id();
                let child = Particle::spawn(id, pos, child_radius, &mut state.rng, &state.config);
                spawned.push(child);
            }
            splits += 1;
            log::trace!("breakage: #{parent_id} split into two of radius {child_radius:.2}");
        } else {
            // i < j always, so the split point is valid
            let (left, right) = state.particles.split_at_mut(j);
            resolve_elastic(&mut left[i], &mut right[0], state.config.restitution);
            bounces += 1;
        }
    }

    state.particles.retain(|p| p.is_live());
    state.particles.append(&mut spawned);

    state.supersaturation =
        (state.supersaturation - state.config.nucleation_rate).max(state.config.critical_concentration);

    state.time_ticks += 1;

    if merges + splits > 0 {
        log::debug!(
            "tick {}: {} particles, {merges} merges, {splits} splits, {bounces} bounces",
            state.time_ticks,
            state.particles.len()
        );
    }
}
