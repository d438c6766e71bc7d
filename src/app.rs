/*
 * Application Module
 *
 * This module defines the main application model and the nannou glue for the
 * sandbox: window creation, the fixed timestep loop that drives the
 * simulation, and the hand-off to the renderer.
 *
 * The simulation always advances in fixed ticks. Wall clock time only decides
 * how many ticks run in a frame, never how far a tick moves things.
 */

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::input::{self, InputState};
use crate::params::{ParamsError, SimulationParams};
use crate::renderer;
use crate::simulation::Simulation;
use crate::ui;

// Window size used when the monitor cannot be queried
const FALLBACK_WINDOW_SIZE: (f32, f32) = (1920.0, 1080.0);

// Settings chosen on the command line before the window exists
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub params: SimulationParams,
    pub seed: Option<u64>,
}

// nannou builds the model from a plain function, so launch options are handed over here
static LAUNCH_OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub input: InputState,
    // Fixed timestep variables
    pub tick_accumulator: Duration,
    pub last_update_time: Instant,
}

// Validate the options and hand control to nannou
pub fn run(options: LaunchOptions) -> Result<(), ParamsError> {
    options.params.validate()?;

    log::info!(
        "starting sandbox at {} ticks per second (seed: {})",
        options.params.tick_rate,
        options.seed.map_or_else(|| "random".to_string(), |seed| seed.to_string())
    );

    // Only the first launch in a process takes effect
    if LAUNCH_OPTIONS.set(options).is_err() {
        log::warn!("sandbox already launched in this process, ignoring the new launch options");
    }

    nannou::app(model).update(update).run();
    Ok(())
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let options = LAUNCH_OPTIONS.get().cloned().unwrap_or_default();

    // Calculate window size based on monitor size (80% of monitor size)
    let (window_width, window_height) = app
        .primary_monitor()
        .map(|monitor| {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        })
        .unwrap_or(FALLBACK_WINDOW_SIZE);

    // Create the main window
    let window_id = app
        .new_window()
        .title("Orbital Sandbox")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .key_pressed(input::key_pressed)
        .key_released(input::key_released)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to create window");

    // Get the window
    let window = app.window(window_id).expect("window was just created");

    // Create the UI
    let egui = Egui::from_window(&window);

    // Parameters were validated in `run`
    let simulation = match options.seed {
        Some(seed) => Simulation::new(options.params, seed),
        None => Simulation::from_entropy(options.params),
    }
    .expect("launch parameters are valid");

    Model {
        simulation,
        egui,
        debug_info: DebugInfo::default(),
        input: InputState::default(),
        tick_accumulator: Duration::ZERO,
        last_update_time: Instant::now(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and check if the sandbox should be cleared
    if ui::update_ui(&mut model.egui, model.simulation.params_mut(), &model.debug_info) {
        model.input.clear_requested = true;
    }

    // Get current time
    let current_time = Instant::now();
    let frame_time = current_time.duration_since(model.last_update_time);
    model.last_update_time = current_time;

    let params = model.simulation.params();
    let step = Duration::from_secs_f32(1.0 / params.tick_rate);
    let max_ticks = params.max_ticks_per_frame;

    if params.pause_simulation {
        // Time does not pile up while paused, but clearing still works
        model.tick_accumulator = Duration::ZERO;
        model.debug_info.ticks_per_frame = 0;
        if model.input.clear_requested {
            model.input.clear_requested = false;
            model.simulation.clear();
        }
    } else {
        model.tick_accumulator += frame_time;

        let mut ticks = 0;
        while model.tick_accumulator >= step && ticks < max_ticks {
            let pointer = model.input.sample();
            let report = model.simulation.tick(&pointer);
            model.debug_info.record(&report);

            model.tick_accumulator -= step;
            ticks += 1;
        }

        // Drop the backlog after a long stall instead of fast-forwarding
        if ticks == max_ticks {
            model.tick_accumulator = Duration::ZERO;
        }

        model.debug_info.ticks_per_frame = ticks;
    }

    model.debug_info.body_count = model.simulation.bodies().len();
    model.debug_info.particle_count = model.simulation.particles().len();
}
