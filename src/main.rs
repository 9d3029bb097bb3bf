//! Headless runner for the particle field
//!
//! Simulates and renders into an in-memory surface at ~60 fps, sweeping a
//! synthetic pointer across the field, and logs stats periodically.
//!
//! Run with: cargo run --features cli --bin field-cli

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use ambient_field::core::{DeviceClass, FieldConfig, FieldEngine};
    use ambient_field::render::RecordingSurface;
    use ambient_field::stats::FpsCounter;
    use std::time::Duration;
    use tracing::{info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ambient_field=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let mut config = match std::env::var("FIELD_CONFIG") {
        Ok(path) => {
            info!(path = %path, "Loading config");
            FieldConfig::from_json(&std::fs::read_to_string(&path)?)?
        }
        Err(_) => FieldConfig::default(),
    };
    if let Some(seed) = env_parse::<u64>("FIELD_SEED") {
        config.seed = Some(seed);
    }
    let width = env_parse::<f32>("FIELD_WIDTH").unwrap_or(1600.0);
    let height = env_parse::<f32>("FIELD_HEIGHT").unwrap_or(1000.0);
    let frame_budget = env_parse::<u64>("FIELD_FRAMES");

    let mut surface = RecordingSurface::new(0, 0);
    let mut engine = FieldEngine::mount(config, DeviceClass::Fine, &mut surface, width, height);
    let mut fps = FpsCounter::new();
    let mut lines_last_interval = 0usize;
    let mut frames_last_interval = 0u64;
    let mut resized = false;

    let mut frame_interval = tokio::time::interval(Duration::from_micros(16_667));
    let mut stats_interval = tokio::time::interval(Duration::from_secs(5));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    info!(width, height, budget = ?frame_budget, "Running particle field");

    loop {
        tokio::select! {
            _ = frame_interval.tick() => {
                let frame = engine.frames();
                let (w, h) = (engine.field().width(), engine.field().height());
                match sweep(frame, w, h) {
                    Some((x, y)) => engine.pointer_moved(x, y),
                    None => engine.pointer_left(),
                }

                if let Some(stats) = engine.tick(&mut surface) {
                    fps.tick();
                    lines_last_interval += stats.lines;
                    frames_last_interval += 1;
                }

                // Exercise the resize path once, halfway through a bounded run
                if let Some(budget) = frame_budget {
                    if !resized && engine.frames() >= budget / 2 {
                        engine.resize(&mut surface, height, width);
                        resized = true;
                    }
                    if engine.frames() >= budget {
                        break;
                    }
                }
            }
            _ = stats_interval.tick() => {
                let field = engine.field();
                info!(
                    particles = field.len(),
                    frames = engine.frames(),
                    fps = format!("{:.1}", fps.fps()),
                    lines_per_frame = lines_last_interval / frames_last_interval.max(1) as usize,
                    mean_speed = format!("{:.3}", field.mean_speed()),
                    pointer_active = engine.pointer().active,
                    "stats"
                );
                lines_last_interval = 0;
                frames_last_interval = 0;
            }
            _ = &mut ctrl_c => {
                warn!("Interrupted");
                break;
            }
        }
    }

    engine.stop();
    Ok(())
}

/// Synthetic pointer path: a Lissajous curve over the field, leaving the
/// viewport for 2 s out of every 6
#[cfg(not(target_arch = "wasm32"))]
fn sweep(frame: u64, width: f32, height: f32) -> Option<(f32, f32)> {
    const PERIOD: u64 = 360;
    if frame % PERIOD >= 240 {
        return None;
    }
    let t = frame as f32 / 60.0;
    let x = width * 0.5 + width * 0.35 * (t * 0.9).cos();
    let y = height * 0.5 + height * 0.35 * (t * 1.7).sin();
    Some((x, y))
}

#[cfg(not(target_arch = "wasm32"))]
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparseable environment value");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
