/*
 * Culling Module
 *
 * This module keeps the body population small and numerically sane.
 * Once per tick it evicts bodies that have wandered too far, bodies moving
 * fast enough to signal an unstable close encounter, and finally the oldest
 * bodies while the population is above its cap.
 *
 * The pass rebuilds the collection by filtering, never by removing while
 * iterating.
 */

use log::debug;

use crate::body::{Body, BodyId};
use crate::params::SimulationParams;

// Why a body was removed by the population pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionReason {
    OutOfBounds,
    Runaway,
    OverPopulation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eviction {
    pub id: BodyId,
    pub reason: EvictionReason,
}

// The first rule a body breaks, if any. Population is handled separately.
pub fn check_bounds(body: &Body, params: &SimulationParams) -> Option<EvictionReason> {
    let position = body.position.abs();
    let velocity = body.velocity.abs();

    if position.x > params.position_limit || position.y > params.position_limit {
        Some(EvictionReason::OutOfBounds)
    } else if velocity.x > params.velocity_limit || velocity.y > params.velocity_limit {
        Some(EvictionReason::Runaway)
    } else {
        None
    }
}

// Run the eviction pass and report every body that was dropped
pub fn evict(bodies: &mut Vec<Body>, params: &SimulationParams) -> Vec<Eviction> {
    let mut evictions = Vec::new();

    bodies.retain(|body| match check_bounds(body, params) {
        Some(reason) => {
            evictions.push(Eviction { id: body.id, reason });
            false
        }
        None => true,
    });

    // Oldest bodies are first in the collection, so they go first
    if bodies.len() > params.population_cap {
        let excess = bodies.len() - params.population_cap;
        evictions.extend(bodies.drain(..excess).map(|body| Eviction {
            id: body.id,
            reason: EvictionReason::OverPopulation,
        }));
    }

    for eviction in &evictions {
        debug!("evicted body {} ({:?})", eviction.id.0, eviction.reason);
    }

    evictions
}
