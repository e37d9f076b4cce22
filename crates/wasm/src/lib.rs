#![deny(unsafe_code)]
//! Browser host for the ambient particle field.
//!
//! [`ParticleBackground`] binds a [`FrameLoop`] to a `<canvas>`: it sizes the
//! canvas to the window, drives ticks from `requestAnimationFrame`, samples
//! `window.scrollY` at the top of each frame and feeds `mousemove` positions
//! in as they arrive. The canvas is made transparent to pointer events so it
//! never steals clicks from the page above or below it.
//!
//! Everything here is decorative. When the window, canvas or 2D context is
//! unavailable the background stays inert instead of throwing.

mod canvas;

use std::cell::RefCell;
use std::rc::Rc;

use ambient_field::{FieldConfig, FrameLoop};
use log::{info, warn, Level};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

pub use canvas::CanvasSurface;

/// Installs the console logger and panic hook. Safe to call repeatedly.
#[wasm_bindgen]
pub fn init_logging() {
    let _ = console_log::init_with_level(Level::Debug);
    console_error_panic_hook::set_once();
}

/// Loop plus the surface it draws on, shared with the browser callbacks.
struct Shared {
    frame_loop: FrameLoop,
    surface: CanvasSurface,
    frame_id: Option<i32>,
}

/// Callbacks registered with the window; dropped on stop.
struct Listeners {
    animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    mouse_move: Closure<dyn FnMut(MouseEvent)>,
    mouse_leave: Closure<dyn FnMut(MouseEvent)>,
    resize: Closure<dyn FnMut()>,
}

struct Running {
    window: Window,
    shared: Rc<RefCell<Shared>>,
    listeners: Listeners,
}

/// An animated particle background bound to a canvas element.
#[wasm_bindgen]
pub struct ParticleBackground {
    running: Option<Running>,
}

fn window_size(window: &Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

fn request_frame(window: &Window, cb: &Closure<dyn FnMut()>) -> Option<i32> {
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Starts animating `canvas` at window size.
    ///
    /// `params_json` is a JSON object of field parameters (`"{}"` for the
    /// defaults); malformed JSON falls back to the defaults.
    pub fn start(canvas: HtmlCanvasElement, seed: u32, params_json: &str) -> ParticleBackground {
        let running = launch(canvas, seed, params_json);
        if running.is_none() {
            warn!("ambient: canvas 2D context unavailable, background disabled");
        }
        ParticleBackground { running }
    }

    /// Resizes the canvas to the window and reseeds the field.
    pub fn on_resize(&self) {
        if let Some(r) = &self.running {
            resize_to_window(&r.window, &r.shared);
        }
    }

    /// Stops the animation and removes every listener. Idempotent.
    pub fn stop(&mut self) {
        let Some(r) = self.running.take() else {
            return;
        };
        {
            let mut s = r.shared.borrow_mut();
            if let Some(id) = s.frame_id.take() {
                let _ = r.window.cancel_animation_frame(id);
            }
            s.frame_loop.stop();
        }
        let l = &r.listeners;
        let _ = r.window.remove_event_listener_with_callback(
            "mousemove",
            l.mouse_move.as_ref().unchecked_ref(),
        );
        if let Some(doc) = r.window.document().and_then(|d| d.document_element()) {
            let _ = doc.remove_event_listener_with_callback(
                "mouseleave",
                l.mouse_leave.as_ref().unchecked_ref(),
            );
        }
        let _ = r
            .window
            .remove_event_listener_with_callback("resize", l.resize.as_ref().unchecked_ref());
        // Breaks the closure's reference to itself.
        l.animate.borrow_mut().take();
        info!("ambient: background stopped");
    }

    /// Whether frames are currently being drawn.
    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|r| r.shared.borrow().frame_loop.is_running())
    }

    /// Frames drawn so far.
    pub fn ticks(&self) -> f64 {
        self.running
            .as_ref()
            .map_or(0.0, |r| r.shared.borrow().frame_loop.ticks() as f64)
    }

    /// Particles in the current population.
    pub fn particle_count(&self) -> u32 {
        self.running
            .as_ref()
            .map_or(0, |r| r.shared.borrow().frame_loop.particle_count() as u32)
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.stop();
    }
}

fn resize_to_window(window: &Window, shared: &Rc<RefCell<Shared>>) {
    let (w, h) = window_size(window);
    let mut s = shared.borrow_mut();
    s.surface.resize(w, h);
    s.frame_loop.on_resize(w, h);
}

fn launch(canvas: HtmlCanvasElement, seed: u32, params_json: &str) -> Option<Running> {
    let window = web_sys::window()?;
    let _ = canvas.style().set_property("pointer-events", "none");
    let surface = CanvasSurface::acquire(canvas)?;

    let params = serde_json::from_str(params_json).unwrap_or_else(|e| {
        warn!("ambient: ignoring params ({e})");
        serde_json::Value::Null
    });
    let mut frame_loop = FrameLoop::new(FieldConfig::from_json(&params), seed as u64);

    let (w, h) = window_size(&window);
    surface.resize(w, h);
    frame_loop.on_scroll(window.scroll_y().unwrap_or(0.0));
    frame_loop.start(w, h);
    info!(
        "ambient: started {w}x{h} with {} particles",
        frame_loop.particle_count()
    );

    let shared = Rc::new(RefCell::new(Shared {
        frame_loop,
        surface,
        frame_id: None,
    }));

    let shared_move = shared.clone();
    let mouse_move = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
        shared_move
            .borrow_mut()
            .frame_loop
            .on_pointer_move(ev.client_x() as f64, ev.client_y() as f64);
    });
    let _ = window
        .add_event_listener_with_callback("mousemove", mouse_move.as_ref().unchecked_ref());

    let shared_leave = shared.clone();
    let mouse_leave = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
        shared_leave.borrow_mut().frame_loop.on_pointer_leave();
    });
    if let Some(doc) = window.document().and_then(|d| d.document_element()) {
        let _ = doc
            .add_event_listener_with_callback("mouseleave", mouse_leave.as_ref().unchecked_ref());
    }

    let (shared_resize, window_resize) = (shared.clone(), window.clone());
    let resize = Closure::<dyn FnMut()>::new(move || {
        resize_to_window(&window_resize, &shared_resize);
    });
    let _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());

    let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let (shared_anim, animate_inner, window_anim) =
        (shared.clone(), animate.clone(), window.clone());
    *animate.borrow_mut() = Some(Closure::new(move || {
        let mut guard = shared_anim.borrow_mut();
        let s = &mut *guard;
        s.frame_id = None;
        if !s.frame_loop.is_running() {
            return;
        }
        s.frame_loop.on_scroll(window_anim.scroll_y().unwrap_or(0.0));
        s.frame_loop.tick(&mut s.surface);
        if let Some(cb) = animate_inner.borrow().as_ref() {
            s.frame_id = request_frame(&window_anim, cb);
        }
    }));
    if let Some(cb) = animate.borrow().as_ref() {
        shared.borrow_mut().frame_id = request_frame(&window, cb);
    }

    Some(Running {
        window,
        shared,
        listeners: Listeners {
            animate,
            mouse_move,
            mouse_leave,
            resize,
        },
    })
}
