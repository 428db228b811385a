//! Force calculations: all-pairs gravity and damped springs

use glam::Vec2;

use crate::particle::Particle;
use crate::spring::Spring;

/// Gravity pulling `p1` toward `p2`, before amplification.
///
/// `k = m1 * m2 / r³`, contribution `k * d` where `d` points from `p1` to `p2`.
/// Pairs closer than `cutoff` (including a particle paired with itself)
/// contribute nothing.
pub fn gravitational_force(p1: &Particle, p2: &Particle, cutoff: f32) -> Vec2 {
    let r_vec = p2.position - p1.position;
    let r = r_vec.length();

    if r < cutoff {
        return Vec2::ZERO;
    }

    let k = p1.mass() * p2.mass() / (r * r * r);
    r_vec * k
}

/// Accumulated gravity impulse for every particle.
///
/// Every entry is computed from the same positions; nothing moves while the
/// sweep runs. O(n²), no acceleration structure.
pub fn gravity_impulses(particles: &[Particle], cutoff: f32, amplification: f32) -> Vec<Vec2> {
    particles
        .iter()
        .map(|x| {
            let total: Vec2 = particles
                .iter()
                .map(|y| gravitational_force(x, y, cutoff))
                .sum();
            total * amplification
        })
        .collect()
}

/// Kick every particle with its gravity impulse
pub fn apply_gravity(particles: &mut [Particle], cutoff: f32, amplification: f32) {
    let impulses = gravity_impulses(particles, cutoff, amplification);
    for (particle, impulse) in particles.iter_mut().zip(impulses) {
        particle.apply_impulse(impulse);
    }
}

/// Force a damped spring exerts on its first endpoint.
///
/// The second endpoint receives the negation. A spring whose endpoints
/// coincide has no axis and exerts nothing.
pub fn spring_force(spring: &Spring, a: &Particle, b: &Particle) -> Vec2 {
    let d = b.position - a.position;
    let l = d.length();
    if !l.is_normal() {
        return Vec2::ZERO;
    }
    let n = d / l;

    let stretch = l - spring.rest_length;
    let closing_speed = (b.velocity - a.velocity).dot(n);
    let f = spring.stiffness * stretch + spring.damping * closing_speed;

    n * f
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GRAVITY_AMPLIFICATION, GRAVITY_CUTOFF};

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() <= 1e-6 * b.length().max(1.0)
    }

    #[test]
    fn test_gravity_points_toward_other() {
        let p1 = Particle::new(Vec2::new(100.0, 100.0));
        let p2 = Particle::new(Vec2::new(130.0, 140.0));

        let f = gravitational_force(&p1, &p2, GRAVITY_CUTOFF);

        // r = 50
        let k = p1.mass() * p2.mass() / 125_000.0;
        assert!(approx(f, Vec2::new(30.0, 40.0) * k));
        assert!(f.x > 0.0 && f.y > 0.0);
    }

    #[test]
    fn test_gravity_magnitude_inverse_square() {
        let mut p1 = Particle::new(Vec2::ZERO);
        let mut p2 = Particle::new(Vec2::new(20.0, 0.0));
        p1.set_mass(3.0);
        p2.set_mass(5.0);

        let f = gravitational_force(&p1, &p2, GRAVITY_CUTOFF);

        assert!((f.length() - 15.0 / 400.0).abs() < 1e-6);
    }

    #[test]
    fn test_gravity_cutoff() {
        let p1 = Particle::new(Vec2::new(0.0, 0.0));
        let near = Particle::new(Vec2::new(9.99, 0.0));
        let at = Particle::new(Vec2::new(10.0, 0.0));

        assert_eq!(gravitational_force(&p1, &p1, GRAVITY_CUTOFF), Vec2::ZERO);
        assert_eq!(gravitational_force(&p1, &near, GRAVITY_CUTOFF), Vec2::ZERO);
        assert_ne!(gravitational_force(&p1, &at, GRAVITY_CUTOFF), Vec2::ZERO);
    }

    #[test]
    fn test_impulses_are_amplified_sums() {
        let particles = vec![
            Particle::new(Vec2::new(0.0, 0.0)),
            Particle::new(Vec2::new(100.0, 0.0)),
            Particle::new(Vec2::new(0.0, 200.0)),
        ];

        let impulses = gravity_impulses(&particles, GRAVITY_CUTOFF, GRAVITY_AMPLIFICATION);

        let expected = (gravitational_force(&particles[0], &particles[1], GRAVITY_CUTOFF)
            + gravitational_force(&particles[0], &particles[2], GRAVITY_CUTOFF))
            * GRAVITY_AMPLIFICATION;
        assert_eq!(impulses.len(), 3);
        assert!(approx(impulses[0], expected));
    }

    #[test]
    fn test_apply_gravity_uses_snapshot() {
        let mut particles = vec![
            Particle::new(Vec2::new(0.0, 0.0)),
            Particle::new(Vec2::new(50.0, 0.0)),
        ];
        apply_gravity(&mut particles, GRAVITY_CUTOFF, GRAVITY_AMPLIFICATION);

        // Equal masses, same snapshot: equal and opposite kicks
        assert!(particles[0].velocity.x > 0.0);
        assert!(approx(particles[0].velocity, -particles[1].velocity));
        // Positions are untouched by the kick itself
        assert_eq!(particles[1].position, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_spring_pulls_when_stretched() {
        let spring = Spring::new(0, 1);
        let a = Particle::new(Vec2::new(0.0, 0.0));
        let b = Particle::new(Vec2::new(200.0, 0.0));

        let f = spring_force(&spring, &a, &b);

        assert_eq!(f, Vec2::new(50.0 * 50.0, 0.0));
    }

    #[test]
    fn test_spring_pushes_when_compressed() {
        let spring = Spring::new(0, 1);
        let a = Particle::new(Vec2::new(0.0, 0.0));
        let b = Particle::new(Vec2::new(0.0, 100.0));

        let f = spring_force(&spring, &a, &b);

        assert!(f.y < 0.0);
    }

    #[test]
    fn test_spring_at_rest_length_is_silent() {
        let spring = Spring::new(0, 1);
        let a = Particle::new(Vec2::new(0.0, 0.0));
        let b = Particle::new(Vec2::new(150.0, 0.0));

        assert_eq!(spring_force(&spring, &a, &b), Vec2::ZERO);
        assert_eq!(spring_force(&spring, &a, &a), Vec2::ZERO);
    }
}
