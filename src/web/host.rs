//! Queries against the host page: viewport size, device class, canvas styling

use tracing::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{HtmlCanvasElement, Window};

use crate::core::DeviceClass;

/// Media query matching devices without a persistent hover pointer
const NO_HOVER_QUERY: &str = "(hover: none), (pointer: coarse)";

/// Current viewport size in CSS pixels
pub fn viewport_size(window: &Window) -> (f32, f32) {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Classify the device once per mount.
///
/// Prefers the hover/pointer capability query; falls back to the user agent
/// when `matchMedia` is missing.
pub fn detect_device(window: &Window) -> DeviceClass {
    match window.match_media(NO_HOVER_QUERY) {
        Ok(Some(query)) => {
            let device = DeviceClass::from_capability(query.matches());
            debug!(?device, "Device classified by media query");
            device
        }
        _ => {
            let ua = window.navigator().user_agent().unwrap_or_default();
            let device = DeviceClass::from_user_agent(&ua);
            debug!(?device, "Device classified by user agent");
            device
        }
    }
}

/// Fixed, full-viewport, transparent and invisible to pointer events
pub fn style_background_canvas(canvas: &HtmlCanvasElement) {
    let style = canvas.style();
    let props = [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("pointer-events", "none"),
        ("background", "transparent"),
        ("will-change", "transform"),
    ];
    for (name, value) in props {
        if let Err(e) = style.set_property(name, value) {
            warn!(name, ?e, "Failed to style background canvas");
        }
    }
}
