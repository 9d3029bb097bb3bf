//! Drawing surface abstraction
//!
//! The renderer only needs a handful of 2D primitives. Browser canvases and
//! the in-memory recorder both implement this trait.

use crate::theme::Rgba;

/// One colour stop of a radial gradient
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// 0.0 at the centre, 1.0 at the outer radius
    pub offset: f32,
    pub color: Rgba,
}

/// A filled disc with a radial gradient from its centre
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub stops: [GradientStop; 3],
}

pub trait Surface {
    /// Resize the backing raster. Implementations may clear the contents.
    fn set_size(&mut self, width: u32, height: u32);

    fn size(&self) -> (u32, u32);

    /// Wipe the whole surface to transparent
    fn clear(&mut self);

    fn fill_glow(&mut self, glow: &Glow);

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba, width: f32);
}
