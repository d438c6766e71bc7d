/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains every tunable
 * constant of the sandbox: the gravitational constant, growth rates, eviction
 * limits and the decorative particle settings. The UI flags for pausing and
 * the debug overlay live here too so the control panel can edit them directly.
 */

use thiserror::Error;

// Parameters for the simulation that can be adjusted via UI or command line
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    // Physics
    pub gravitational_constant: f64,
    pub mass_area_ratio: f64,
    pub min_distance: f64,

    // Growth
    pub growth_rate: f64,
    pub max_radius: f64,
    pub fling_damping: f64,

    // Collision
    pub collision_box_factor: f64,

    // Population limits
    pub population_cap: usize,
    pub position_limit: f64,
    pub velocity_limit: f64,

    // Decorative particles
    pub particle_shrink_rate: f64,
    pub particle_speed_divisor: f64,
    pub particle_radius_divisor: f64,
    pub particle_gravity: f64,
    pub particle_shade: u8,

    // Frame pacing
    pub tick_rate: f32,
    pub max_ticks_per_frame: usize,

    // UI state
    pub show_debug: bool,
    pub pause_simulation: bool,
}

// Reasons a parameter set is rejected before a simulation starts.
#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("{name} must be a finite positive number, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("population cap must be at least 1")]
    EmptyPopulation,
    #[error("tick rate must be positive, got {0}")]
    InvalidTickRate(f32),
    #[error("at least one tick per frame is required")]
    NoTicksPerFrame,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            gravitational_constant: 6.67408e-11,
            mass_area_ratio: 2.0e9, // kilograms per square unit of area
            min_distance: 1.0e-6,
            growth_rate: 0.35,
            max_radius: 200.0,
            fling_damping: 0.5, // halves the pointer delta so flings are less sensitive
            collision_box_factor: 1.5,
            population_cap: 50,
            position_limit: 50_000.0,
            velocity_limit: 1_000.0,
            particle_shrink_rate: 0.4,
            particle_speed_divisor: 10.0,
            particle_radius_divisor: 1.5,
            particle_gravity: 0.0,
            particle_shade: 35,
            tick_rate: 60.0,
            max_ticks_per_frame: 4,
            show_debug: false,
            pause_simulation: false,
        }
    }
}

impl SimulationParams {
    // Check every value the physics divides by or compares against
    pub fn validate(&self) -> Result<(), ParamsError> {
        let positive = [
            ("gravitational_constant", self.gravitational_constant),
            ("mass_area_ratio", self.mass_area_ratio),
            ("min_distance", self.min_distance),
            ("growth_rate", self.growth_rate),
            ("max_radius", self.max_radius),
            ("fling_damping", self.fling_damping),
            ("collision_box_factor", self.collision_box_factor),
            ("position_limit", self.position_limit),
            ("velocity_limit", self.velocity_limit),
            ("particle_shrink_rate", self.particle_shrink_rate),
            ("particle_speed_divisor", self.particle_speed_divisor),
            ("particle_radius_divisor", self.particle_radius_divisor),
        ];

        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParamsError::NotPositive { name, value });
            }
        }

        if self.population_cap == 0 {
            return Err(ParamsError::EmptyPopulation);
        }

        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(ParamsError::InvalidTickRate(self.tick_rate));
        }

        if self.max_ticks_per_frame == 0 {
            return Err(ParamsError::NoTicksPerFrame);
        }

        Ok(())
    }

    // Mass of a disc of the given radius
    pub fn mass_for_radius(&self, radius: f64) -> f64 {
        std::f64::consts::PI * radius * radius * self.mass_area_ratio
    }

    // Get parameter ranges for UI sliders
    pub fn get_growth_rate_range() -> std::ops::RangeInclusive<f64> {
        0.05..=5.0
    }

    pub fn get_tick_rate_range() -> std::ops::RangeInclusive<f32> {
        10.0..=240.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SimulationParams::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_growth_rate() {
        let params = SimulationParams { growth_rate: 0.0, ..Default::default() };
        assert!(matches!(
            params.validate(),
            Err(ParamsError::NotPositive { name: "growth_rate", .. })
        ));
    }

    #[test]
    fn rejects_nan_limits() {
        let params = SimulationParams { velocity_limit: f64::NAN, ..Default::default() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_empty_population() {
        let params = SimulationParams { population_cap: 0, ..Default::default() };
        assert_eq!(params.validate(), Err(ParamsError::EmptyPopulation));
    }

    #[test]
    fn rejects_bad_tick_rate() {
        let params = SimulationParams { tick_rate: -1.0, ..Default::default() };
        assert_eq!(params.validate(), Err(ParamsError::InvalidTickRate(-1.0)));
    }
}
