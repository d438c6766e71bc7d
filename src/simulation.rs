/*
 * Simulation Module
 *
 * This module owns the whole sandbox state: the ordered body collection, the
 * decorative particles, the id counter, the pointer state machine and the
 * seeded random source. One call to `tick` runs the full pipeline:
 *
 * 1. Apply the clear request and pointer edges (create / release bodies)
 * 2. Evict out-of-bounds, runaway and surplus bodies
 * 3. Advance the decorative particles
 * 4. Grow the bodies still held by the pointer
 * 5. Accumulate gravity and integrate
 * 6. Merge overlapping bodies
 * 7. Leave a trail particle behind every moving free body
 *
 * Randomness is only used for colors and particle jitter, so the physics is
 * fully reproducible for a given seed and input sequence.
 */

use glam::DVec2;
use log::{debug, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::body::{random_color, Body, BodyId, Color};
use crate::collision::{self, Merge};
use crate::culling::{self, Eviction};
use crate::input::{PointerEvent, PointerInput, PointerPhase};
use crate::params::{ParamsError, SimulationParams};
use crate::particle::{self, Particle};
use crate::physics;

// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub cleared: bool,
    pub created: Option<BodyId>,
    pub released: Vec<BodyId>,
    pub evictions: Vec<Eviction>,
    pub merges: Vec<Merge>,
    pub particles_spawned: usize,
}

// A filled circle for the renderer, in simulation coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCircle {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub color: Color,
}

impl DrawCircle {
    fn new(position: DVec2, radius: f64, color: Color) -> Self {
        Self {
            x: position.x.round() as i32,
            y: position.y.round() as i32,
            radius: radius.round() as i32,
            color,
        }
    }
}

pub struct Simulation {
    params: SimulationParams,
    bodies: Vec<Body>,
    particles: Vec<Particle>,
    next_id: u64,
    pointer: PointerPhase,
    rng: ChaCha8Rng,
    tick_count: u64,
}

impl Simulation {
    pub fn new(params: SimulationParams, seed: u64) -> Result<Self, ParamsError> {
        Self::with_rng(params, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy(params: SimulationParams) -> Result<Self, ParamsError> {
        Self::with_rng(params, ChaCha8Rng::from_entropy())
    }

    fn with_rng(params: SimulationParams, rng: ChaCha8Rng) -> Result<Self, ParamsError> {
        params.validate()?;

        Ok(Self {
            bodies: Vec::with_capacity(params.population_cap + 1),
            particles: Vec::new(),
            params,
            next_id: 0,
            pointer: PointerPhase::Idle,
            rng,
            tick_count: 0,
        })
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut SimulationParams {
        &mut self.params
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|body| body.id == id)
    }

    pub fn pointer_phase(&self) -> PointerPhase {
        self.pointer
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    fn allocate_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    // Start growing a new body at the given point
    pub fn begin_growth(&mut self, x: f64, y: f64) -> BodyId {
        let id = self.allocate_id();
        let color = random_color(&mut self.rng);
        self.bodies.push(Body::begin_growth(id, x, y, color));
        debug!("body {} created at ({:.1}, {:.1})", id.0, x, y);
        id
    }

    // Release every body that is still growing
    pub fn release_growing(&mut self) -> Vec<BodyId> {
        let mut released = Vec::new();
        for body in self.bodies.iter_mut().filter(|body| body.is_growing()) {
            body.end_growth();
            debug!("body {} released with radius {:.2}", body.id.0, body.radius());
            released.push(body.id);
        }
        released
    }

    // Insert an already released body, skipping the growth phase
    pub fn spawn_body(&mut self, position: DVec2, velocity: DVec2, radius: f64) -> BodyId {
        let id = self.allocate_id();
        let color = random_color(&mut self.rng);
        self.bodies.push(Body::free(id, position, velocity, radius, color, &self.params));
        id
    }

    // Drop every body and particle. Ids keep counting.
    pub fn clear(&mut self) {
        debug!("cleared {} bodies and {} particles", self.bodies.len(), self.particles.len());
        self.bodies.clear();
        self.particles.clear();
    }

    // Run one fixed step of the sandbox
    pub fn tick(&mut self, input: &PointerInput) -> TickReport {
        let mut report = TickReport::default();

        if input.clear {
            self.clear();
            report.cleared = true;
        }

        let (phase, event) = self.pointer.advance(input.primary_down);
        self.pointer = phase;

        match event {
            Some(PointerEvent::Press) if !input.modifier_held => {
                report.created = Some(self.begin_growth(input.position.x, input.position.y));
            }
            Some(PointerEvent::Release) => {
                report.released = self.release_growing();
            }
            _ => {}
        }

        report.evictions = culling::evict(&mut self.bodies, &self.params);

        particle::update_particles(&mut self.particles);

        for body in self.bodies.iter_mut() {
            body.grow(input.position, &self.params);
        }

        physics::step(&mut self.bodies, &self.params);

        report.merges = collision::resolve_collisions(&mut self.bodies, &self.params);

        for body in &self.bodies {
            if let Some(particle) = Particle::spawn_from(body, &self.params, &mut self.rng) {
                self.particles.push(particle);
                report.particles_spawned += 1;
            }
        }

        self.tick_count += 1;

        trace!(
            "tick {}: {} bodies, {} particles, {} merges, {} evictions",
            self.tick_count,
            self.bodies.len(),
            self.particles.len(),
            report.merges.len(),
            report.evictions.len()
        );

        report
    }

    // Circles to draw this frame: particles first so bodies cover them
    pub fn render_feed(&self) -> Vec<DrawCircle> {
        let particles = self
            .particles
            .iter()
            .map(|particle| DrawCircle::new(particle.position, particle.radius, particle.color));

        let bodies = self
            .bodies
            .iter()
            .map(|body| DrawCircle::new(body.position, body.radius(), body.color));

        particles.chain(bodies).collect()
    }
}
