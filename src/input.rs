/*
 * Input Module
 *
 * This module turns raw pointer state into the discrete events the
 * simulation consumes, and hosts the nannou event handlers that feed it.
 *
 * Features:
 * - Press/release edge detection through a small state machine
 * - Left control held suppresses body creation
 * - Tab clears the sandbox
 * - Clicks on the control panel are ignored
 */

use glam::DVec2;
use nannou::prelude::*;
use nannou::winit::event::MouseButton;

use crate::app::Model;

// Phase of the primary button as seen once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerPhase {
    #[default]
    Idle,
    Pressed,
    Held,
    Released,
}

// Edge produced by a phase change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Press,
    Release,
}

impl PointerPhase {
    // Advance the machine with this tick's button level
    pub fn advance(self, down: bool) -> (Self, Option<PointerEvent>) {
        match (self, down) {
            (PointerPhase::Idle | PointerPhase::Released, true) => (PointerPhase::Pressed, Some(PointerEvent::Press)),
            (PointerPhase::Idle | PointerPhase::Released, false) => (PointerPhase::Idle, None),
            (PointerPhase::Pressed | PointerPhase::Held, true) => (PointerPhase::Held, None),
            (PointerPhase::Pressed | PointerPhase::Held, false) => (PointerPhase::Released, Some(PointerEvent::Release)),
        }
    }

    pub fn is_down(self) -> bool {
        matches!(self, PointerPhase::Pressed | PointerPhase::Held)
    }
}

// Everything the simulation reads from the input collaborator in one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerInput {
    pub position: DVec2,
    pub primary_down: bool,
    pub modifier_held: bool,
    pub clear: bool,
}

impl PointerInput {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            ..Default::default()
        }
    }

    pub fn pressed(mut self) -> Self {
        self.primary_down = true;
        self
    }
}

// Raw device state collected between ticks by the event handlers
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub position: Vec2,
    pub primary_down: bool,
    // Set by every press and kept until the next sample, so a click that is
    // released before any tick runs still reaches the simulation
    pub press_latched: bool,
    pub modifier_held: bool,
    pub clear_requested: bool,
}

impl InputState {
    // Snapshot for the next tick. Press and clear requests are edges, so they are consumed.
    pub fn sample(&mut self) -> PointerInput {
        let input = PointerInput {
            position: DVec2::new(self.position.x as f64, self.position.y as f64),
            primary_down: self.primary_down || self.press_latched,
            modifier_held: self.modifier_held,
            clear: self.clear_requested,
        };
        self.press_latched = false;
        self.clear_requested = false;
        input
    }

    pub fn press(&mut self) {
        self.primary_down = true;
        self.press_latched = true;
    }

    pub fn release(&mut self) {
        self.primary_down = false;
    }
}

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.input.position = Vec2::new(pos.x, pos.y);
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        // Check if the click is on the UI before handling it
        if !model.egui.ctx().is_pointer_over_area() {
            model.input.press();
        }
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.input.release();
    }
}

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::LControl => model.input.modifier_held = true,
        Key::Tab => model.input.clear_requested = true,
        _ => {}
    }
}

// Key released event handler
pub fn key_released(_app: &App, model: &mut Model, key: Key) {
    if key == Key::LControl {
        model.input.modifier_held = false;
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
