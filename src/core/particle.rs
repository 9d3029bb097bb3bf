//! A single animated node of the field

/// One glowing node. Radius and opacity are fixed for its lifetime;
/// position and velocity change every step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Anchor the particle elastically returns to
    pub base_x: f32,
    pub base_y: f32,
    pub radius: f32,
    pub base_opacity: f32,
}

impl Particle {
    /// Particle resting at its anchor
    pub fn at_rest(x: f32, y: f32, radius: f32, base_opacity: f32) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            base_x: x,
            base_y: y,
            radius,
            base_opacity,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vx.hypot(self.vy)
    }

    #[inline]
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        (self.x - x).hypot(self.y - y)
    }
}
