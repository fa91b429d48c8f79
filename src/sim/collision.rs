//! Collision detection and response for circular particles
//!
//! Detection is a plain O(n²) sweep over unordered index pairs — fine for
//! the population sizes this model targets. Response is a 1-D elastic
//! collision along the contact normal with radius standing in for mass,
//! scaled by a restitution coefficient.

use crate::consts::CONTACT_EPSILON;

use super::particle::Particle;

/// Report every colliding pair of live particles as `(i, j)` with `i < j`.
///
/// Two particles collide iff their center distance is `<= r_i + r_j`
/// (exact tangency counts). Tombstoned particles never collide. A particle
/// may appear in multiple reported pairs; the caller is responsible for
/// handling stale pairs after it mutates the population.
pub fn find_colliding_pairs(particles: &[Particle]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..particles.len() {
        if !particles[i].is_live() {
            continue;
        }
        for j in (i + 1)..particles.len() {
            if !particles[j].is_live() {
                continue;
            }
            let reach = particles[i].radius + particles[j].radius;
            if particles[i].pos.distance_squared(particles[j].pos) <= reach * reach {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Elastic collision response along the contact normal.
///
/// Computes the unit normal from `a` to `b`, projects both velocities onto
/// it, and applies the unequal-mass 1-D elastic formula with each radius as
/// its mass proxy. Post-collision normal speeds are scaled by `restitution`
/// to model inelastic loss; tangential components are untouched.
///
/// Velocity-only response: overlapping particles are not pushed apart, so a
/// pair can stay geometrically overlapped across ticks (reference parity).
///
/// No-op when the centers are within `CONTACT_EPSILON` of each other — the
/// contact normal is undefined there.
pub fn resolve_elastic(a: &mut Particle, b: &mut Particle, restitution: f32) {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    if distance < CONTACT_EPSILON {
        return;
    }
    let normal = delta / distance;

    let v1n = a.vel.dot(normal);
    let v2n = b.vel.dot(normal);

    let (r1, r2) = (a.radius, b.radius);
    let total = r1 + r2;
    let v1n_after = restitution * ((v1n * (r1 - r2) + 2.0 * r2 * v2n) / total);
    let v2n_after = restitution * ((v2n * (r2 - r1) + 2.0 * r1 * v1n) / total);

    a.vel += (v1n_after - v1n) * normal;
    b.vel += (v2n_after - v2n) * normal;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn particle(id: u32, pos: Vec2, radius: f32, vel: Vec2) -> Particle {
        Particle::new(id, pos, radius, vel)
    }

    #[test]
    fn test_exact_tangency_collides() {
        // Centers exactly r1 + r2 apart
        let particles = vec![
            particle(0, Vec2::new(0.0, 0.0), 3.0, Vec2::ZERO),
            particle(1, Vec2::new(7.0, 0.0), 4.0, Vec2::ZERO),
        ];
        assert_eq!(find_colliding_pairs(&particles), vec![(0, 1)]);
    }

    #[test]
    fn test_separated_by_epsilon_misses() {
        let particles = vec![
            particle(0, Vec2::new(0.0, 0.0), 3.0, Vec2::ZERO),
            particle(1, Vec2::new(7.001, 0.0), 4.0, Vec2::ZERO),
        ];
        assert!(find_colliding_pairs(&particles).is_empty());
    }

    #[test]
    fn test_tombstone_never_collides() {
        let particles = vec![
            particle(0, Vec2::new(0.0, 0.0), 0.0, Vec2::ZERO),
            particle(1, Vec2::new(1.0, 0.0), 4.0, Vec2::ZERO),
        ];
        assert!(find_colliding_pairs(&particles).is_empty());
    }

    #[test]
    fn test_pairs_are_ordered_and_not_deduplicated() {
        // Three mutually overlapping particles: all three pairs reported
        let particles = vec![
            particle(0, Vec2::new(0.0, 0.0), 5.0, Vec2::ZERO),
            particle(1, Vec2::new(4.0, 0.0), 5.0, Vec2::ZERO),
            particle(2, Vec2::new(2.0, 3.0), 5.0, Vec2::ZERO),
        ];
        assert_eq!(find_colliding_pairs(&particles), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_equal_mass_head_on_swaps_velocities() {
        // restitution 1.0, equal radii: classic elastic swap
        let mut a = particle(0, Vec2::new(0.0, 0.0), 5.0, Vec2::new(2.0, 0.0));
        let mut b = particle(1, Vec2::new(10.0, 0.0), 5.0, Vec2::new(-3.0, 0.0));
        resolve_elastic(&mut a, &mut b, 1.0);
        assert!((a.vel.x - (-3.0)).abs() < 1e-5);
        assert!((b.vel.x - 2.0).abs() < 1e-5);
        assert_eq!(a.vel.y, 0.0);
        assert_eq!(b.vel.y, 0.0);
    }

    #[test]
    fn test_tangential_component_untouched() {
        // Contact normal is along x; y-velocity must survive unchanged
        let mut a = particle(0, Vec2::new(0.0, 0.0), 5.0, Vec2::new(2.0, 1.5));
        let mut b = particle(1, Vec2::new(9.0, 0.0), 5.0, Vec2::new(-2.0, -4.0));
        resolve_elastic(&mut a, &mut b, 1.0);
        assert!((a.vel.y - 1.5).abs() < 1e-5);
        assert!((b.vel.y - (-4.0)).abs() < 1e-5);
    }

    #[test]
    fn test_restitution_scales_normal_speeds() {
        let mut a = particle(0, Vec2::new(0.0, 0.0), 5.0, Vec2::new(2.0, 0.0));
        let mut b = particle(1, Vec2::new(10.0, 0.0), 5.0, Vec2::new(-2.0, 0.0));
        resolve_elastic(&mut a, &mut b, 0.5);
        // Equal masses swap normal speeds, then scale by e = 0.5
        assert!((a.vel.x - (-1.0)).abs() < 1e-5);
        assert!((b.vel.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_coincident_centers_is_noop() {
        let mut a = particle(0, Vec2::new(5.0, 5.0), 3.0, Vec2::new(1.0, 2.0));
        let mut b = particle(1, Vec2::new(5.0, 5.0), 4.0, Vec2::new(-1.0, 0.5));
        resolve_elastic(&mut a, &mut b, 0.8);
        assert_eq!(a.vel, Vec2::new(1.0, 2.0));
        assert_eq!(b.vel, Vec2::new(-1.0, 0.5));
    }

    #[test]
    fn test_unequal_mass_response() {
        // Heavy particle barely deflects, light one rebounds hard.
        // r1=9, r2=3: v1n' = (v1n*6 + 6*v2n)/12, v2n' = (v2n*(-6) + 18*v1n)/12
        let mut a = particle(0, Vec2::new(0.0, 0.0), 9.0, Vec2::new(4.0, 0.0));
        let mut b = particle(1, Vec2::new(12.0, 0.0), 3.0, Vec2::new(0.0, 0.0));
        resolve_elastic(&mut a, &mut b, 1.0);
        assert!((a.vel.x - 2.0).abs() < 1e-5);
        assert!((b.vel.x - 6.0).abs() < 1e-5);
    }
}
