/*
 * Renderer Module
 *
 * This module draws the sandbox. It consumes the simulation's render feed,
 * which already lists particles before bodies, so bodies cover their trails.
 * Simulation coordinates are used as window coordinates directly.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::simulation::DrawCircle;
use crate::ui;

// Background shade behind the bodies
const BACKGROUND: [u8; 3] = [25, 25, 25];

// Draw a single circle from the render feed
fn draw_circle(draw: &Draw, circle: &DrawCircle) {
    let [r, g, b] = circle.color;

    draw.ellipse()
        .x_y(circle.x as f32, circle.y as f32)
        .radius(circle.radius as f32)
        .color(rgb(r, g, b));
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    let [r, g, b] = BACKGROUND;
    draw.background().color(rgb(r, g, b));

    for circle in model.simulation.render_feed() {
        // Zero radius circles are not worth a draw call
        if circle.radius > 0 {
            draw_circle(&draw, &circle);
        }
    }

    // Draw debug overlay if enabled
    if model.simulation.params().show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect());
    }

    // Finish drawing
    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {err:?}");
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("failed to draw control panel: {err:?}");
    }
}
