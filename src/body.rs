/*
 * Body Module
 *
 * This module defines the Body struct and its life cycle.
 * A body is created at the pointer with zero radius and grows while the
 * primary button is held, tracking the pointer. On release it becomes a free
 * body that attracts and is attracted by every other free body.
 *
 * Radius is the only independent size variable: mass and volume are always
 * derived from it.
 */

use glam::DVec2;
use rand::Rng;

use crate::params::SimulationParams;

// RGB triple used by bodies, particles and the render feed
pub type Color = [u8; 3];

// Colors a new body can be given
pub const PALETTE: [Color; 8] = [
    [236, 37, 37],
    [236, 151, 37],
    [247, 219, 41],
    [41, 247, 72],
    [46, 231, 208],
    [46, 63, 231],
    [221, 53, 232],
    [255, 84, 180],
];

// Identity of a body for the whole lifetime of a simulation. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

// Pick a palette entry for a new body
pub fn random_color<R: Rng>(rng: &mut R) -> Color {
    PALETTE[rng.gen_range(0..PALETTE.len())]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub position: DVec2,
    pub velocity: DVec2,
    pub color: Color,
    radius: f64,
    mass: f64,
    volume: f64,
    growing: bool,
    last_pointer: DVec2,
}

impl Body {
    // Start a new body at the pointer; it stays in the growing state until released
    pub fn begin_growth(id: BodyId, x: f64, y: f64, color: Color) -> Self {
        let position = DVec2::new(x, y);

        Self {
            id,
            position,
            velocity: DVec2::ZERO,
            color,
            radius: 0.0,
            mass: 0.0,
            volume: 0.0,
            growing: true,
            last_pointer: position,
        }
    }

    // Build an already released body, used for scripted setups and benchmarks
    pub fn free(id: BodyId, position: DVec2, velocity: DVec2, radius: f64, color: Color, params: &SimulationParams) -> Self {
        let mut body = Self::begin_growth(id, position.x, position.y, color);
        body.velocity = velocity;
        body.growing = false;
        body.set_radius(radius, params);
        body
    }

    // One growth tick: follow the pointer, estimate the fling velocity and expand
    pub fn grow(&mut self, pointer: DVec2, params: &SimulationParams) {
        if !self.growing {
            return;
        }

        // Velocity is the damped pointer delta since the previous tick
        self.velocity = (pointer - self.last_pointer) * params.fling_damping;
        self.last_pointer = pointer;

        let radius = (self.radius + params.growth_rate).min(params.max_radius);
        self.set_radius(radius, params);
        self.position = pointer;
    }

    // Release the body into the gravitational field. There is no way back.
    pub fn end_growth(&mut self) {
        self.growing = false;
    }

    pub fn is_growing(&self) -> bool {
        self.growing
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    // Change the radius and re-derive mass and volume from it
    pub fn set_radius(&mut self, radius: f64, params: &SimulationParams) {
        self.radius = radius.max(0.0);
        self.refresh_derived(params);
    }

    // Recompute mass and volume from the current radius. Idempotent.
    pub fn refresh_derived(&mut self, params: &SimulationParams) {
        self.mass = params.mass_for_radius(self.radius);
        self.volume = self.radius.powi(3);
    }

    // Take over the volume of an absorbed body. The radius follows the new volume.
    pub fn absorb_volume(&mut self, volume: f64, params: &SimulationParams) {
        self.volume += volume;
        self.radius = self.volume.cbrt();
        self.mass = params.mass_for_radius(self.radius);
    }

    // Half the side of the square used as the overlap proxy
    pub fn half_extent(&self, params: &SimulationParams) -> f64 {
        self.radius * params.collision_box_factor / 2.0
    }

    // Axis aligned box overlap, strict so touching edges do not count
    pub fn overlaps(&self, other: &Body, params: &SimulationParams) -> bool {
        let reach = self.half_extent(params) + other.half_extent(params);
        let delta = (other.position - self.position).abs();
        delta.x < reach && delta.y < reach
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_is_capped_at_max_radius() {
        let params = SimulationParams::default();
        let mut body = Body::begin_growth(BodyId(0), 0.0, 0.0, PALETTE[0]);

        for _ in 0..1000 {
            body.grow(DVec2::ZERO, &params);
        }

        assert_eq!(body.radius(), params.max_radius);
        assert_eq!(body.volume(), params.max_radius.powi(3));
    }

    #[test]
    fn released_body_ignores_growth() {
        let params = SimulationParams::default();
        let mut body = Body::begin_growth(BodyId(0), 0.0, 0.0, PALETTE[0]);
        body.grow(DVec2::ZERO, &params);
        body.end_growth();

        let radius = body.radius();
        body.grow(DVec2::new(10.0, 10.0), &params);

        assert_eq!(body.radius(), radius);
        assert_eq!(body.position, DVec2::ZERO);
    }

    #[test]
    fn fling_velocity_is_half_the_pointer_delta() {
        let params = SimulationParams::default();
        let mut body = Body::begin_growth(BodyId(0), 10.0, 10.0, PALETTE[0]);

        body.grow(DVec2::new(14.0, 6.0), &params);

        assert_eq!(body.velocity, DVec2::new(2.0, -2.0));
        assert_eq!(body.position, DVec2::new(14.0, 6.0));
    }

    #[test]
    fn boxes_use_one_and_a_half_radius() {
        let params = SimulationParams::default();
        let a = Body::free(BodyId(0), DVec2::ZERO, DVec2::ZERO, 10.0, PALETTE[0], &params);
        // Half extents are 7.5 each, so centres 14.9 apart overlap and 15 apart do not
        let near = Body::free(BodyId(1), DVec2::new(14.9, 0.0), DVec2::ZERO, 10.0, PALETTE[0], &params);
        let touching = Body::free(BodyId(2), DVec2::new(15.0, 0.0), DVec2::ZERO, 10.0, PALETTE[0], &params);

        assert!(a.overlaps(&near, &params));
        assert!(!a.overlaps(&touching, &params));
    }
}
