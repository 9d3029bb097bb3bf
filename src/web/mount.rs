//! One mounted background: frame loop plus window listeners
//!
//! Every browser callback holds only a `Weak` to the mount, so dropping the
//! mount releases the pending animation frame and detaches all listeners.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use tracing::{info, trace};
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use super::host;
use crate::core::{FieldConfig, FieldEngine};
use crate::error::Result;
use crate::render::Canvas2dSurface;
use crate::stats::FpsCounter;

/// Log frame stats every this many frames
const STATS_EVERY: u64 = 300;

pub struct Mount {
    window: Window,
    engine: RefCell<FieldEngine>,
    surface: RefCell<Canvas2dSurface>,
    fps: RefCell<FpsCounter>,
    /// Outstanding frame request, cancelled on drop
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Mount {
    pub fn new(window: Window, canvas: HtmlCanvasElement, config: FieldConfig) -> Result<Rc<Self>> {
        host::style_background_canvas(&canvas);
        let mut surface = Canvas2dSurface::new(canvas)?;
        let device = host::detect_device(&window);
        let (width, height) = host::viewport_size(&window);
        let engine = FieldEngine::mount(config, device, &mut surface, width, height);

        Ok(Rc::new(Self {
            window,
            engine: RefCell::new(engine),
            surface: RefCell::new(surface),
            fps: RefCell::new(FpsCounter::new()),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        }))
    }

    /// Attach listeners and request the first frame
    pub fn start(self: &Rc<Self>) {
        if !self.is_running() || self.frame.borrow().is_some() {
            return;
        }
        self.install_listeners();
        self.schedule_frame();
    }

    /// Cancel the pending frame and detach listeners. Idempotent.
    pub fn stop(&self) {
        self.engine.borrow_mut().stop();
        self.frame.borrow_mut().take();
        let listeners = self.listeners.take();
        if !listeners.is_empty() {
            info!(count = listeners.len(), "Detached particle field listeners");
        }
    }

    pub fn is_running(&self) -> bool {
        self.engine.borrow().is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.engine.borrow().field().len()
    }

    pub fn fps(&self) -> f64 {
        self.fps.borrow().fps()
    }

    fn schedule_frame(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |_timestamp| {
            let Some(mount) = weak.upgrade() else {
                return;
            };
            mount.frame.borrow_mut().take();
            if mount.tick() {
                mount.schedule_frame();
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    /// Run one frame. Returns false once the engine has stopped.
    fn tick(&self) -> bool {
        let mut engine = self.engine.borrow_mut();
        let mut surface = self.surface.borrow_mut();
        let Some(stats) = engine.tick(&mut *surface) else {
            return false;
        };

        let mut fps = self.fps.borrow_mut();
        fps.tick();
        if engine.frames() % STATS_EVERY == 0 {
            trace!(
                frames = engine.frames(),
                fps = format!("{:.1}", fps.fps()),
                particles = stats.particles,
                lines = stats.lines,
                "Frame stats"
            );
        }
        true
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::with_capacity(3);

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.window, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if let Some(mount) = weak.upgrade() {
                mount
                    .engine
                    .borrow_mut()
                    .pointer_moved(event.client_x() as f32, event.client_y() as f32);
            }
        }));

        // mouseleave does not fire on window itself in every browser
        let leave_target: EventTarget = match self.window.document().and_then(|d| d.document_element()) {
            Some(root) => root.into(),
            None => self.window.clone().into(),
        };
        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&leave_target, "mouseleave", move |_event: &Event| {
            if let Some(mount) = weak.upgrade() {
                mount.engine.borrow_mut().pointer_left();
            }
        }));

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.window, "resize", move |_event: &Event| {
            if let Some(mount) = weak.upgrade() {
                let (width, height) = host::viewport_size(&mount.window);
                let mut surface = mount.surface.borrow_mut();
                mount.engine.borrow_mut().resize(&mut *surface, width, height);
            }
        }));

        *self.listeners.borrow_mut() = listeners;
    }
}
