//! Per-frame physics step
//!
//! Each particle goes through, in order: repulsion (overwrites velocity),
//! damping, integration, elastic return toward its anchor, and edge wrap.
//! The order is part of the look of the effect and must not change.

use super::config::FieldConfig;
use super::field::Field;
use super::particle::Particle;
use super::pointer::PointerState;

/// Advance every particle of the field by one frame
pub fn step(field: &mut Field, pointer: &PointerState, config: &FieldConfig) {
    let width = field.width();
    let height = field.height();
    let repels = pointer.repels();

    for particle in field.particles_mut() {
        if repels {
            if let Some((vx, vy)) = repulsion_velocity(particle, pointer.x, pointer.y, config) {
                particle.vx = vx;
                particle.vy = vy;
            }
        }

        particle.vx *= config.velocity_damping;
        particle.vy *= config.velocity_damping;

        particle.x += particle.vx;
        particle.y += particle.vy;

        // Positional nudge, independent of current speed
        particle.x += (particle.base_x - particle.x) * config.return_strength;
        particle.y += (particle.base_y - particle.y) * config.return_strength;

        wrap(particle, width, height, config.wrap_margin);
    }
}

/// Velocity a pointer at (px, py) imposes on the particle, if it is in range.
///
/// Returns `None` outside the repulsion radius and at distance 0, where the
/// push direction is undefined.
pub fn repulsion_velocity(particle: &Particle, px: f32, py: f32, config: &FieldConfig) -> Option<(f32, f32)> {
    let dx = particle.x - px;
    let dy = particle.y - py;
    let dist = dx.hypot(dy);

    if !(dist > 0.0 && dist < config.repulsion_radius) {
        return None;
    }

    let force = (1.0 - dist / config.repulsion_radius) * config.repulsion_strength;
    let scale = force * config.repulsion_boost / dist;
    Some((dx * scale, dy * scale))
}

/// Teleport a particle that drifted past the margin to the opposite edge
#[inline]
fn wrap(particle: &mut Particle, width: f32, height: f32, margin: f32) {
    if particle.x < -margin {
        particle.x = width + margin;
    } else if particle.x > width + margin {
        particle.x = -margin;
    }

    if particle.y < -margin {
        particle.y = height + margin;
    } else if particle.y > height + margin {
        particle.y = -margin;
    }
}
