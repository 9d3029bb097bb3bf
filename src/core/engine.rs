//! Mount-scoped state of one particle background
//!
//! `FieldEngine` owns the field, the pointer state and the RNG, and threads
//! them explicitly through the simulator and renderer. It has two states:
//! Running from construction, and Stopped, which is terminal. A stopped
//! engine ignores ticks, resizes and pointer events.

use tracing::{debug, info};

use super::config::FieldConfig;
use super::field::{Field, FieldRng};
use super::pointer::{DeviceClass, PointerState};
use super::simulator;
use crate::render::{Renderer, Surface};
use crate::stats::FrameStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

#[derive(Debug)]
pub struct FieldEngine {
    config: FieldConfig,
    renderer: Renderer,
    rng: FieldRng,
    field: Field,
    pointer: PointerState,
    state: RunState,
    frames: u64,
}

impl FieldEngine {
    /// Mount on a surface: size it to the viewport and lay out the field
    pub fn mount<S: Surface + ?Sized>(
        config: FieldConfig,
        device: DeviceClass,
        surface: &mut S,
        width: f32,
        height: f32,
    ) -> Self {
        let mut rng = FieldRng::from_seed_option(config.seed);
        surface.set_size(pixels(width), pixels(height));
        let field = Field::initialized(width, height, &config, &mut rng);
        info!(width, height, particles = field.len(), ?device, "Particle field mounted");

        Self {
            renderer: Renderer::new(&config),
            config,
            rng,
            field,
            pointer: PointerState::new(device),
            state: RunState::Running,
            frames: 0,
        }
    }

    /// One animation frame: simulate, then paint.
    ///
    /// Returns `None` once stopped.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<FrameStats> {
        if self.state == RunState::Stopped {
            return None;
        }
        simulator::step(&mut self.field, &self.pointer, &self.config);
        let stats = self.renderer.draw(surface, &self.field);
        self.frames += 1;
        Some(stats)
    }

    /// Viewport changed: resize the surface and rebuild the field from scratch
    pub fn resize<S: Surface + ?Sized>(&mut self, surface: &mut S, width: f32, height: f32) {
        if self.state == RunState::Stopped {
            return;
        }
        surface.set_size(pixels(width), pixels(height));
        self.field.initialize(width, height, &self.config, &mut self.rng);
        debug!(width, height, particles = self.field.len(), "Field reset after resize");
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.state == RunState::Running {
            self.pointer.on_move(x, y);
        }
    }

    pub fn pointer_left(&mut self) {
        if self.state == RunState::Running {
            self.pointer.on_leave();
        }
    }

    /// Enter the terminal Stopped state. Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        if self.state == RunState::Stopped {
            return false;
        }
        self.state = RunState::Stopped;
        info!(frames = self.frames, "Particle field stopped");
        true
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Frames simulated since mount
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Viewport size in whole pixels, negative and non-finite sizes become 0
fn pixels(dim: f32) -> u32 {
    if dim.is_finite() && dim > 0.0 {
        dim.round() as u32
    } else {
        0
    }
}
