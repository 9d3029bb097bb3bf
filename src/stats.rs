//! Frame diagnostics: per-frame draw counts and a rolling FPS estimate

use std::collections::VecDeque;

/// What a single `Renderer::draw` call painted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    /// Unordered pairs whose distance was checked
    pub pairs_tested: usize,
    pub lines: usize,
}

/// Millisecond clock local to one counter
#[derive(Debug)]
struct FrameClock {
    #[cfg(all(feature = "wasm", target_arch = "wasm32"))]
    performance: Option<web_sys::Performance>,
    #[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
    started: std::time::Instant,
}

impl FrameClock {
    #[cfg(all(feature = "wasm", target_arch = "wasm32"))]
    fn new() -> Self {
        Self {
            performance: web_sys::window().and_then(|w| w.performance()),
        }
    }

    #[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
    fn new() -> Self {
        Self {
            started: std::time::Instant::now(),
        }
    }

    /// No performance API means no timestamps, and `fps()` stays 0
    #[cfg(all(feature = "wasm", target_arch = "wasm32"))]
    fn now_ms(&self) -> Option<f64> {
        self.performance.as_ref().map(|p| p.now())
    }

    #[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
    fn now_ms(&self) -> Option<f64> {
        Some(self.started.elapsed().as_secs_f64() * 1000.0)
    }
}

/// Frames per second over the last 60 ticks
#[derive(Debug)]
pub struct FpsCounter {
    clock: FrameClock,
    /// Tick timestamps in milliseconds
    frames: VecDeque<f64>,
}

impl FpsCounter {
    const WINDOW: usize = 60;

    pub fn new() -> Self {
        Self {
            clock: FrameClock::new(),
            frames: VecDeque::with_capacity(Self::WINDOW + 1),
        }
    }

    /// Record a frame at the counter's own clock
    pub fn tick(&mut self) {
        if let Some(now_ms) = self.clock.now_ms() {
            self.tick_at(now_ms);
        }
    }

    pub fn tick_at(&mut self, now_ms: f64) {
        self.frames.push_back(now_ms);
        if self.frames.len() > Self::WINDOW {
            self.frames.pop_front();
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.front(), self.frames.back()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / (elapsed / 1000.0)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_needs_two_ticks() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.fps(), 0.0);
        fps.tick_at(0.0);
        assert_eq!(fps.fps(), 0.0);
    }

    #[test]
    fn fps_steady_sixty() {
        let mut fps = FpsCounter::new();
        for i in 0..200 {
            fps.tick_at(i as f64 * 1000.0 / 60.0);
        }
        assert!((fps.fps() - 60.0).abs() < 1e-6);
    }

    #[test]
    fn tick_uses_monotonic_clock() {
        let mut fps = FpsCounter::new();
        fps.tick();
        std::thread::sleep(std::time::Duration::from_millis(5));
        fps.tick();
        assert_eq!(fps.frames.len(), 2);
        assert!(fps.frames[1] > fps.frames[0]);
        assert!(fps.fps() > 0.0);
    }

    #[test]
    fn fps_zero_elapsed() {
        let mut fps = FpsCounter::new();
        fps.tick_at(5.0);
        fps.tick_at(5.0);
        assert_eq!(fps.fps(), 0.0);
    }
}
