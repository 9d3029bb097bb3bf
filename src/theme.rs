//! Node palette: soft blue glow on a transparent background

/// Opaque base colour, alpha is applied per draw call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba {
            rgb: self,
            a: a.clamp(0.0, 1.0),
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    /// 0.0 (transparent) to 1.0
    pub a: f32,
}

impl Rgba {
    /// CSS colour string, e.g. `rgba(100, 150, 255, 0.5)`
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b, self.a)
    }
}

pub mod colors {
    use super::Rgb;

    pub const NODE: Rgb = Rgb::new(100, 150, 255); // #6496FF
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_formatting() {
        assert_eq!(colors::NODE.with_alpha(0.5).to_css(), "rgba(100, 150, 255, 0.5)");
        assert_eq!(colors::NODE.with_alpha(0.0).to_css(), "rgba(100, 150, 255, 0)");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(colors::NODE.with_alpha(1.7).a, 1.0);
        assert_eq!(colors::NODE.with_alpha(-0.2).a, 0.0);
    }
}
