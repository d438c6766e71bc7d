/*
 * Collision Module
 *
 * This module detects overlapping free bodies and merges them.
 * The heavier body of an overlapping pair absorbs the lighter one and takes
 * over its volume; its position and velocity are left as they were.
 *
 * Overlap uses a square of side 1.5 × radius centred on each body as a cheap
 * stand-in for circle intersection. Absorbed bodies are only marked during
 * the sweep and dropped once it finishes, so no body is skipped or visited
 * twice.
 */

use log::debug;

use crate::body::{Body, BodyId};
use crate::params::SimulationParams;

// A single absorption performed during a collision pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merge {
    pub absorber: BodyId,
    pub absorbed: BodyId,
    pub absorbed_volume: f64,
}

// Resolve all merges for this tick and return what happened
pub fn resolve_collisions(bodies: &mut Vec<Body>, params: &SimulationParams) -> Vec<Merge> {
    let mut absorbed = vec![false; bodies.len()];
    let mut merges = Vec::new();

    for a in 0..bodies.len() {
        if absorbed[a] || bodies[a].is_growing() {
            continue;
        }

        for b in 0..bodies.len() {
            if a == b || absorbed[b] || bodies[b].is_growing() {
                continue;
            }

            // Strictly heavier wins; equal masses never merge
            if !(bodies[a].overlaps(&bodies[b], params) && bodies[a].mass() > bodies[b].mass()) {
                continue;
            }

            absorbed[b] = true;
            let volume = bodies[b].volume();

            // Past the cap the body still swallows but no longer grows
            if bodies[a].radius() <= params.max_radius {
                bodies[a].absorb_volume(volume, params);
            }

            debug!(
                "body {} absorbed body {} (volume {:.1}), radius now {:.2}",
                bodies[a].id.0,
                bodies[b].id.0,
                volume,
                bodies[a].radius()
            );

            merges.push(Merge {
                absorber: bodies[a].id,
                absorbed: bodies[b].id,
                absorbed_volume: volume,
            });
        }
    }

    // Compact: keep only the survivors, in their original order
    if !merges.is_empty() {
        let mut flags = absorbed.into_iter();
        bodies.retain(|_| !flags.next().unwrap_or(false));
    }

    merges
}
