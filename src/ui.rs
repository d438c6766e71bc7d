/*
 * UI Module
 *
 * This module contains the control panel, built with nannou_egui.
 * It shows the live counters, lets the user pause, toggle the debug overlay,
 * tune the growth rate and clear the sandbox.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and return whether the sandbox should be cleared
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> bool {
    let mut should_clear = false;

    let ctx = egui.begin_frame();

    egui::Window::new("Orbital Sandbox")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.label(format!("Bodies: {} / {}", debug_info.body_count, params.population_cap));
            ui.label(format!("Particles: {}", debug_info.particle_count));

            ui.collapsing("Controls", |ui| {
                ui.label("Hold left mouse to grow a body, drag to fling it");
                ui.label("Hold left control to click without creating");
                ui.label("Tab clears everything");
            });

            ui.collapsing("Tuning", |ui| {
                ui.add(egui::Slider::new(&mut params.growth_rate, SimulationParams::get_growth_rate_range()).text("Growth Rate"));
                ui.add(egui::Slider::new(&mut params.tick_rate, SimulationParams::get_tick_rate_range()).text("Ticks per Second"));
            });

            if ui.button("Clear").clicked() {
                should_clear = true;
            }

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    should_clear
}

// Draw the debug overlay in the top right corner of the window
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let lines = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Ticks this frame: {}", debug_info.ticks_per_frame),
        format!("Bodies created: {}", debug_info.bodies_created),
        format!("Merges: {}", debug_info.total_merges),
        format!("Evictions: {}", debug_info.total_evictions),
    ];

    for (i, line) in lines.iter().enumerate() {
        draw.text(line)
            .x_y(window_rect.right() - 120.0, window_rect.top() - 20.0 - i as f32 * 20.0)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
