//! Browser entry point
//!
//! `ParticleBackground` is the handle a host page holds for the lifetime of
//! a mount. Construction never throws: if the canvas or its 2D context is
//! missing, the handle is inert and nothing animates.

mod host;
mod mount;

use std::rc::Rc;

use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::core::FieldConfig;
use crate::error::FieldError;
use mount::Mount;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    // Initialize tracing for browser console; the host may already have one
    let _ = tracing_wasm::try_set_as_global_default();
}

#[wasm_bindgen]
pub struct ParticleBackground {
    mount: Option<Rc<Mount>>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Mount on a canvas with default tuning and start animating
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> ParticleBackground {
        Self::mount(Ok(canvas), FieldConfig::default())
    }

    /// Mount with a partial config object, e.g. `{ connection_distance: 90 }`
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(canvas: HtmlCanvasElement, config: JsValue) -> ParticleBackground {
        Self::mount(Ok(canvas), config_from_js(&config))
    }

    /// Mount on the canvas with the given element id
    pub fn attach(canvas_id: &str) -> ParticleBackground {
        Self::mount(find_canvas(canvas_id), FieldConfig::default())
    }

    /// Stop animating and detach from the page. Stopped is final.
    pub fn stop(&mut self) {
        if let Some(mount) = &self.mount {
            mount.stop();
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.mount.as_ref().is_some_and(|m| m.is_running())
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.mount.as_ref().map_or(0, |m| m.particle_count())
    }

    pub fn fps(&self) -> f64 {
        self.mount.as_ref().map_or(0.0, |m| m.fps())
    }
}

impl ParticleBackground {
    fn mount(canvas: Result<HtmlCanvasElement, FieldError>, config: FieldConfig) -> Self {
        let mounted = canvas.and_then(|canvas| {
            let window = web_sys::window()
                .ok_or_else(|| FieldError::SurfaceUnavailable("no window".into()))?;
            Mount::new(window, canvas, config)
        });

        match mounted {
            Ok(mount) => {
                mount.start();
                info!(particles = mount.particle_count(), "Particle background running");
                Self { mount: Some(mount) }
            }
            Err(e) => {
                warn!(error = %e, "Particle background disabled");
                Self { mount: None }
            }
        }
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.stop();
    }
}

fn find_canvas(id: &str) -> Result<HtmlCanvasElement, FieldError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(|| FieldError::SurfaceUnavailable(format!("no element #{id}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| FieldError::SurfaceUnavailable(format!("#{id} is not a canvas")))
}

/// Read a JS config object, falling back to defaults on any problem
fn config_from_js(value: &JsValue) -> FieldConfig {
    if value.is_undefined() || value.is_null() {
        return FieldConfig::default();
    }
    let json = match js_sys::JSON::stringify(value) {
        Ok(json) => String::from(json),
        Err(e) => {
            warn!(?e, "Config is not serializable, using defaults");
            return FieldConfig::default();
        }
    };
    FieldConfig::from_json(&json).unwrap_or_else(|e| {
        warn!(error = %e, "Invalid config, using defaults");
        FieldConfig::default()
    })
}
