//! Field renderer: glow discs plus proximity connection lines
//!
//! All discs are painted first, in field order, then the lines between every
//! pair of particles closer than the connection distance. The pair pass is
//! O(N²); the particle cap keeps it at ~45k distance checks per frame.

use tracing::trace;

use super::surface::{GradientStop, Glow, Surface};
use crate::core::{Field, FieldConfig, Particle};
use crate::stats::FrameStats;
use crate::theme::Rgb;

/// Paints a field with a fixed palette
#[derive(Clone, Debug)]
pub struct Renderer {
    color: Rgb,
    glow_scale: f32,
    connection_distance: f32,
    connection_alpha: f32,
    line_width: f32,
}

impl Renderer {
    pub fn new(config: &FieldConfig) -> Self {
        Self {
            color: Rgb::from(config.color),
            glow_scale: config.glow_scale,
            connection_distance: config.connection_distance,
            connection_alpha: config.connection_alpha,
            line_width: config.line_width,
        }
    }

    /// Clear the surface and paint the whole field
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, field: &Field) -> FrameStats {
        surface.clear();

        let particles = field.particles();
        for particle in particles {
            surface.fill_glow(&self.glow(particle));
        }

        let mut stats = FrameStats {
            particles: particles.len(),
            ..FrameStats::default()
        };

        for (i, a) in particles.iter().enumerate() {
            for b in &particles[i + 1..] {
                stats.pairs_tested += 1;
                let dist = a.distance_to(b.x, b.y);
                if let Some(alpha) = self.connection_alpha(dist) {
                    surface.stroke_line(
                        (a.x, a.y),
                        (b.x, b.y),
                        self.color.with_alpha(alpha),
                        self.line_width,
                    );
                    stats.lines += 1;
                }
            }
        }

        trace!(particles = stats.particles, lines = stats.lines, "Frame drawn");
        stats
    }

    /// Soft glow for a particle: full opacity at the centre, fading to 0
    pub fn glow(&self, particle: &Particle) -> Glow {
        let opacity = particle.base_opacity;
        Glow {
            x: particle.x,
            y: particle.y,
            radius: particle.radius * self.glow_scale,
            stops: [
                GradientStop {
                    offset: 0.0,
                    color: self.color.with_alpha(opacity),
                },
                GradientStop {
                    offset: 0.5,
                    color: self.color.with_alpha(opacity * 0.6),
                },
                GradientStop {
                    offset: 1.0,
                    color: self.color.with_alpha(0.0),
                },
            ],
        }
    }

    /// Line alpha for two particles `dist` apart, `None` when too far to connect
    pub fn connection_alpha(&self, dist: f32) -> Option<f32> {
        (dist < self.connection_distance)
            .then(|| (1.0 - dist / self.connection_distance) * self.connection_alpha)
    }
}
