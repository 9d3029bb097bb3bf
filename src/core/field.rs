//! Particle field - fixed-capacity arena of particles
//!
//! The field is sized from the viewport area and rebuilt wholesale on every
//! (re)initialization. Storage is allocated once; re-initialization
//! overwrites entries in place and only the live count changes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::FieldConfig;
use super::particle::Particle;

/// Maximum number of particles a field can hold
pub const FIELD_CAPACITY: usize = 300;

/// Random source for field layouts.
///
/// Seeded for reproducible layouts (tests, CLI runs); entropy-backed
/// otherwise.
#[derive(Clone, Debug)]
pub struct FieldRng(SmallRng);

impl FieldRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(SmallRng::from_entropy())
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Uniform in [0, 1)
    #[inline]
    pub fn unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }

    /// Uniform in [lo, hi); returns `lo` for an empty range
    #[inline]
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.unit() * (hi - lo)
    }
}

/// Number of particles for a viewport: `clamp(round(area / area_per_particle), min, max)`
pub fn particle_count(width: f32, height: f32, config: &FieldConfig) -> usize {
    let area = sanitize(width) as f64 * sanitize(height) as f64;
    let raw = (area / config.area_per_particle as f64).round();
    let max = config.max_count.min(FIELD_CAPACITY);
    let min = config.min_count.min(max);
    // Float-to-int casts saturate, so huge viewports land on max
    (raw as usize).clamp(min, max)
}

/// Non-finite or negative dimensions collapse to 0
#[inline]
fn sanitize(dim: f32) -> f32 {
    if dim.is_finite() && dim > 0.0 {
        dim
    } else {
        0.0
    }
}

#[derive(Clone, Debug)]
pub struct Field {
    particles: Box<[Particle; FIELD_CAPACITY]>,
    len: usize,
    width: f32,
    height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl Field {
    /// Empty field with storage for `FIELD_CAPACITY` particles
    pub fn new() -> Self {
        Self {
            particles: Box::new([Particle::default(); FIELD_CAPACITY]),
            len: 0,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Build a freshly initialized field for the given viewport
    pub fn initialized(width: f32, height: f32, config: &FieldConfig, rng: &mut FieldRng) -> Self {
        let mut field = Self::new();
        field.initialize(width, height, config, rng);
        field
    }

    /// Replace every particle with a new random layout for the viewport.
    ///
    /// Positions are uniform over [0, width) x [0, height) and double as the
    /// anchors. Previous positions and velocities are discarded.
    pub fn initialize(&mut self, width: f32, height: f32, config: &FieldConfig, rng: &mut FieldRng) {
        let width = sanitize(width);
        let height = sanitize(height);
        let count = particle_count(width, height, config);
        let [r_lo, r_hi] = config.radius_range;
        let [o_lo, o_hi] = config.opacity_range;
        let max_speed = config.max_initial_speed;

        for slot in self.particles[..count].iter_mut() {
            let x = rng.unit() * width;
            let y = rng.unit() * height;
            *slot = Particle {
                x,
                y,
                vx: rng.range(-max_speed, max_speed),
                vy: rng.range(-max_speed, max_speed),
                base_x: x,
                base_y: y,
                radius: rng.range(r_lo, r_hi),
                base_opacity: rng.range(o_lo, o_hi),
            };
        }

        self.len = count;
        self.width = width;
        self.height = height;
        debug!(width, height, count, "Field initialized");
    }

    /// Live particles, in render order
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles[..self.len]
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Mean particle speed, 0 for an empty field
    pub fn mean_speed(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.particles().iter().map(Particle::speed).sum::<f32>() / self.len as f32
    }

    /// Place particles explicitly, bypassing the random layout.
    /// Entries beyond capacity are ignored.
    pub fn from_particles(width: f32, height: f32, particles: &[Particle]) -> Self {
        let mut field = Self::new();
        let count = particles.len().min(FIELD_CAPACITY);
        field.particles[..count].copy_from_slice(&particles[..count]);
        field.len = count;
        field.width = sanitize(width);
        field.height = sanitize(height);
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FieldConfig {
        FieldConfig::default()
    }

    #[test]
    fn test_count_lower_bound() {
        // 480000 / 8000 = 60 -> clamped up
        assert_eq!(particle_count(800.0, 600.0, &config()), 100);
    }

    #[test]
    fn test_count_upper_bound() {
        // 6000000 / 8000 = 750 -> clamped down
        assert_eq!(particle_count(3000.0, 2000.0, &config()), 300);
    }

    #[test]
    fn test_count_unclamped() {
        assert_eq!(particle_count(1600.0, 1000.0, &config()), 200);
    }

    #[test]
    fn test_count_rounds_to_nearest() {
        // 1_212_000 / 8000 = 151.5 -> 152
        assert_eq!(particle_count(1212.0, 1000.0, &config()), 152);
        // 1_211_000 / 8000 = 151.375 -> 151
        assert_eq!(particle_count(1211.0, 1000.0, &config()), 151);
    }

    #[test]
    fn test_count_degenerate_dimensions() {
        assert_eq!(particle_count(0.0, 0.0, &config()), 100);
        assert_eq!(particle_count(-10.0, 500.0, &config()), 100);
        assert_eq!(particle_count(f32::NAN, 500.0, &config()), 100);
        assert_eq!(particle_count(f32::INFINITY, 500.0, &config()), 100);
    }

    #[test]
    fn initialize_respects_spawn_ranges() {
        let mut rng = FieldRng::seeded(1);
        let field = Field::initialized(1600.0, 1000.0, &config(), &mut rng);
        assert_eq!(field.len(), 200);

        for p in field.particles() {
            assert!((0.0..1600.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((0.0..1000.0).contains(&p.y), "y out of range: {}", p.y);
            assert_eq!((p.x, p.y), (p.base_x, p.base_y));
            assert!((-0.15..=0.15).contains(&p.vx));
            assert!((-0.15..=0.15).contains(&p.vy));
            assert!((1.0..=2.5).contains(&p.radius));
            assert!((0.3..=0.7).contains(&p.base_opacity));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = Field::initialized(1024.0, 768.0, &config(), &mut FieldRng::seeded(42));
        let b = Field::initialized(1024.0, 768.0, &config(), &mut FieldRng::seeded(42));
        assert_eq!(a.particles(), b.particles());

        let c = Field::initialized(1024.0, 768.0, &config(), &mut FieldRng::seeded(43));
        assert_ne!(a.particles(), c.particles());
    }

    #[test]
    fn reinitialize_replaces_everything() {
        let mut rng = FieldRng::seeded(9);
        let mut field = Field::initialized(3000.0, 2000.0, &config(), &mut rng);
        assert_eq!(field.len(), 300);
        for p in field.particles_mut() {
            p.vx = 99.0;
        }

        field.initialize(800.0, 600.0, &config(), &mut rng);
        assert_eq!(field.len(), 100);
        assert_eq!(field.width(), 800.0);
        assert_eq!(field.height(), 600.0);
        assert!(field.particles().iter().all(|p| p.vx.abs() <= 0.15));
        assert!(field.particles().iter().all(|p| p.x < 800.0 && p.y < 600.0));
    }

    #[test]
    fn zero_sized_viewport_collapses_to_origin() {
        let field = Field::initialized(0.0, 0.0, &config(), &mut FieldRng::seeded(3));
        assert_eq!(field.len(), 100);
        assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }

    #[test]
    fn from_particles_truncates_to_capacity() {
        let many = vec![Particle::at_rest(1.0, 1.0, 1.0, 0.5); FIELD_CAPACITY + 10];
        let field = Field::from_particles(100.0, 100.0, &many);
        assert_eq!(field.len(), FIELD_CAPACITY);
    }

    #[test]
    fn mean_speed_of_empty_field_is_zero() {
        assert_eq!(Field::new().mean_speed(), 0.0);
    }
}
