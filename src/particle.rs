/*
 * Particle Module
 *
 * Decorative trail particles. Every free body that is moving leaves one
 * particle behind per tick. Particles drift away from the body's direction of
 * travel, shrink at a fixed rate and disappear once their radius reaches zero.
 * They never feed back into the physics.
 */

use glam::DVec2;
use rand::Rng;

use crate::body::{Body, Color};
use crate::params::SimulationParams;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    pub shrink_rate: f64,
    pub gravity: f64,
    pub color: Color,
}

// Uniform integer between 1 and the truncated opposite of `velocity`, inclusive
fn trail_component<R: Rng>(rng: &mut R, velocity: f64, divisor: f64) -> f64 {
    let opposite = (-velocity).trunc() as i64;
    let (low, high) = if opposite < 1 { (opposite, 1) } else { (1, opposite) };
    rng.gen_range(low..=high) as f64 / divisor
}

impl Particle {
    // Trail particle for a moving free body, or None when the body should not leave one
    pub fn spawn_from<R: Rng>(body: &Body, params: &SimulationParams, rng: &mut R) -> Option<Self> {
        if body.is_growing() || body.velocity == DVec2::ZERO {
            return None;
        }

        let velocity = DVec2::new(
            trail_component(rng, body.velocity.x, params.particle_speed_divisor),
            trail_component(rng, body.velocity.y, params.particle_speed_divisor),
        );

        let shade = params.particle_shade;
        let color = body.color.map(|channel| channel.saturating_sub(shade));

        Some(Self {
            position: body.position,
            velocity,
            radius: (body.radius() / params.particle_radius_divisor).trunc(),
            shrink_rate: params.particle_shrink_rate,
            gravity: params.particle_gravity,
            color,
        })
    }

    // Drift, shrink and fall
    pub fn update(&mut self) {
        self.position += self.velocity;
        self.radius -= self.shrink_rate;
        self.velocity.y += self.gravity;
    }

    pub fn is_alive(&self) -> bool {
        self.radius > 0.0
    }
}

// Advance all particles and drop the ones that have shrunk away
pub fn update_particles(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.update();
    }
    particles.retain(Particle::is_alive);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyId, PALETTE};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn moving_body(velocity: DVec2) -> Body {
        let params = SimulationParams::default();
        Body::free(BodyId(1), DVec2::new(5.0, 5.0), velocity, 30.0, PALETTE[0], &params)
    }

    #[test]
    fn resting_body_leaves_no_trail() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let params = SimulationParams::default();
        assert!(Particle::spawn_from(&moving_body(DVec2::ZERO), &params, &mut rng).is_none());
    }

    #[test]
    fn motion_along_one_axis_still_leaves_a_trail() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let params = SimulationParams::default();

        let particle = Particle::spawn_from(&moving_body(DVec2::new(0.0, -5.0)), &params, &mut rng)
            .expect("vertical motion spawns a particle");
        assert!(particle.velocity.y >= 0.1 && particle.velocity.y <= 0.5);
        assert!(particle.velocity.x >= 0.0 && particle.velocity.x <= 0.1);
    }

    #[test]
    fn trail_points_against_the_motion() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let params = SimulationParams::default();

        for _ in 0..50 {
            let particle = Particle::spawn_from(&moving_body(DVec2::new(20.0, -20.0)), &params, &mut rng)
                .expect("moving body spawns a particle");
            assert!(particle.velocity.x <= 0.1 && particle.velocity.x >= -2.0);
            assert!(particle.velocity.y >= 0.1 && particle.velocity.y <= 2.0);
            assert_eq!(particle.radius, 20.0);
            assert_eq!(particle.color, [201, 2, 2]);
        }
    }

    #[test]
    fn particles_shrink_away() {
        let mut particles = vec![Particle {
            position: DVec2::ZERO,
            velocity: DVec2::new(1.0, 0.0),
            radius: 1.0,
            shrink_rate: 0.4,
            gravity: 0.0,
            color: PALETTE[0],
        }];

        update_particles(&mut particles);
        update_particles(&mut particles);
        assert_eq!(particles.len(), 1);
        assert_eq!(particles[0].position, DVec2::new(2.0, 0.0));

        update_particles(&mut particles);
        assert!(particles.is_empty());
    }
}
