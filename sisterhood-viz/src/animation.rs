//! `requestAnimationFrame` loop and resize handling
//!
//! The frame callback re-schedules itself, so it has to reach its own
//! `Closure`. It lives in an `Rc<RefCell<Option<..>>>` that is filled in
//! after the closure is created.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand_chacha::ChaCha8Rng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use sisterhood_field::ParticleField;

use crate::canvas2d::Canvas2DSurface;

pub type BrowserField = ParticleField<Canvas2DSurface, ChaCha8Rng>;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Current viewport size in CSS pixels, 0×0 if it can't be read
pub fn viewport_size(window: &Window) -> (u32, u32) {
    let dimension = |v: Result<JsValue, JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .filter(|d| d.is_finite() && *d > 0.0)
            .map_or(0, |d| d as u32)
    };
    (
        dimension(window.inner_width()),
        dimension(window.inner_height()),
    )
}

/// A running background animation
///
/// Created by [`Animation::start`]; runs until [`Animation::stop`] is called
/// or the page unloads.
pub struct Animation {
    window: Window,
    field: Rc<RefCell<BrowserField>>,
    running: Rc<Cell<bool>>,
    frame_id: Rc<Cell<Option<i32>>>,
    frame: FrameClosure,
    on_resize: Closure<dyn FnMut()>,
}

impl Animation {
    /// Size the field to the viewport, hook up resizing and schedule the
    /// first frame
    pub fn start(window: Window, mut field: BrowserField) -> Result<Self, JsValue> {
        let (width, height) = viewport_size(&window);
        field.resize(width, height);

        let field = Rc::new(RefCell::new(field));
        let running = Rc::new(Cell::new(true));
        let frame_id = Rc::new(Cell::new(None));

        let on_resize = {
            let field = field.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                let (width, height) = viewport_size(&window);
                field.borrow_mut().resize(width, height);
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        let frame: FrameClosure = Rc::new(RefCell::new(None));
        {
            let field = field.clone();
            let running = running.clone();
            let frame_id = frame_id.clone();
            let window = window.clone();
            let next = frame.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                if !running.get() {
                    return;
                }
                field.borrow_mut().tick();

                let scheduled = next
                    .borrow()
                    .as_ref()
                    .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                frame_id.set(scheduled);
            }) as Box<dyn FnMut()>));
        }

        let first = frame
            .borrow()
            .as_ref()
            .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()))
            .transpose()?;
        frame_id.set(first);

        tracing::debug!(width, height, "background animation started");

        Ok(Self {
            window,
            field,
            running,
            frame_id,
            frame,
            on_resize,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame, detach the resize listener and release the
    /// frame callback
    pub fn stop(&mut self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.frame_id.take() {
            self.window.cancel_animation_frame(id).ok();
        }
        self.window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
            .ok();
        self.frame.borrow_mut().take();
        tracing::debug!(time = self.field.borrow().time(), "background animation stopped");
    }

    /// Snapshot of the collection sizes
    pub fn counts(&self) -> sisterhood_field::FieldCounts {
        self.field.borrow().counts()
    }
}

impl Drop for Animation {
    fn drop(&mut self) {
        self.stop();
    }
}
