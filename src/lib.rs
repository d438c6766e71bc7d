/*
 * Orbital Sandbox - Module Definitions
 *
 * This file defines the module structure for the sandbox.
 * body, physics, collision, culling, particle and simulation make up the
 * physics core and never touch the window; app, renderer and ui are the
 * nannou front-end around it, with input shared between the two.
 */

// Re-export key components for easier access
pub use body::{Body, BodyId, Color, PALETTE};
pub use collision::Merge;
pub use culling::{Eviction, EvictionReason};
pub use debug::DebugInfo;
pub use input::{PointerEvent, PointerInput, PointerPhase};
pub use params::{ParamsError, SimulationParams};
pub use particle::Particle;
pub use simulation::{DrawCircle, Simulation, TickReport};

// Define modules
pub mod body;
pub mod physics;
pub mod collision;
pub mod culling;
pub mod particle;
pub mod params;
pub mod simulation;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;
pub mod input;
