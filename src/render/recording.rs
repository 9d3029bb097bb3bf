//! In-memory surface that records draw calls
//!
//! Used for headless runs and tests. A `clear` drops everything recorded so
//! far, so the command list always describes what is currently on screen.

use super::surface::{Glow, Surface};
use crate::theme::Rgba;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Glow(Glow),
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Rgba,
        width: f32,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    /// Number of `set_size` calls, including no-op ones
    resizes: usize,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn glows(&self) -> impl Iterator<Item = &Glow> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Glow(glow) => Some(glow),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = ((f32, f32), (f32, f32), Rgba, f32)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            DrawCommand::Line { from, to, color, width } => Some((from, to, color, width)),
            _ => None,
        })
    }

    pub fn resizes(&self) -> usize {
        self.resizes
    }
}

impl Surface for RecordingSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.resizes += 1;
        // Resizing a canvas wipes it
        self.commands.clear();
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_glow(&mut self, glow: &Glow) {
        self.commands.push(DrawCommand::Glow(*glow));
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Line { from, to, color, width });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::colors;

    #[test]
    fn clear_drops_history() {
        let mut surface = RecordingSurface::new(100, 100);
        surface.stroke_line((0.0, 0.0), (1.0, 1.0), colors::NODE.with_alpha(0.5), 1.0);
        surface.stroke_line((0.0, 0.0), (2.0, 2.0), colors::NODE.with_alpha(0.5), 1.0);
        assert_eq!(surface.lines().count(), 2);

        surface.clear();
        assert_eq!(surface.commands(), &[DrawCommand::Clear]);
    }

    #[test]
    fn set_size_updates_dimensions() {
        let mut surface = RecordingSurface::new(100, 100);
        surface.set_size(640, 480);
        assert_eq!(surface.size(), (640, 480));
        assert_eq!(surface.resizes(), 1);
        assert!(surface.commands().is_empty());
    }
}
