/*
 * Physics Module
 *
 * This module handles the force and motion pass of the sandbox.
 * Every free body is pulled by every other free body under Newton's inverse
 * square law, then all bodies advance by one explicit Euler step.
 *
 * Bodies that are still growing neither exert nor receive gravity; their
 * velocity comes from the pointer instead. The pass is a plain O(n²) sweep,
 * which is fine because the population is capped.
 */

use glam::DVec2;

use crate::body::Body;
use crate::params::SimulationParams;

// Acceleration that `attractor` imparts on a body of mass `mass` at `position`
pub fn pairwise_acceleration(
    position: DVec2,
    mass: f64,
    attractor_position: DVec2,
    attractor_mass: f64,
    params: &SimulationParams,
) -> DVec2 {
    // A massless receiver has no meaningful force to divide through
    if mass <= 0.0 {
        return DVec2::ZERO;
    }

    let dx = attractor_position.x - position.x;
    let dy = attractor_position.y - position.y;

    let mut d = (dx * dx + dy * dy).sqrt();
    if d == 0.0 {
        d = params.min_distance;
    }

    let angle = dy.atan2(dx);
    let f = params.gravitational_constant * mass * attractor_mass / (d * d);

    DVec2::new(angle.cos() * f / mass, angle.sin() * f / mass)
}

// Add one tick of gravitational pull to the velocity of every free body
pub fn accumulate_gravity(bodies: &mut [Body], params: &SimulationParams) {
    // Radius is authoritative, so refresh mass before reading it
    for body in bodies.iter_mut() {
        body.refresh_derived(params);
    }

    // Read positions and masses from a snapshot so the pass is order independent
    let snapshot: Vec<(DVec2, f64, bool)> = bodies
        .iter()
        .map(|body| (body.position, body.mass(), body.is_growing()))
        .collect();

    for (i, body) in bodies.iter_mut().enumerate() {
        if body.is_growing() {
            continue;
        }

        let mut acceleration = DVec2::ZERO;
        for (j, &(other_position, other_mass, other_growing)) in snapshot.iter().enumerate() {
            if i == j || other_growing {
                continue;
            }
            acceleration += pairwise_acceleration(body.position, body.mass(), other_position, other_mass, params);
        }

        body.velocity += acceleration;
    }
}

// Explicit Euler step with a unit time delta. Growing bodies are pinned to the pointer.
pub fn integrate(bodies: &mut [Body]) {
    for body in bodies.iter_mut().filter(|body| !body.is_growing()) {
        body.position += body.velocity;
    }
}

// Full force and motion pass
pub fn step(bodies: &mut [Body], params: &SimulationParams) {
    accumulate_gravity(bodies, params);
    integrate(bodies);
}
