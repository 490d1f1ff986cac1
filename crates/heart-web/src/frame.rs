use crate::canvas::WebCanvas;
use crate::surface::SurfaceManager;
use heart_core::{FrameDriver, FrameOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(callback: &FrameCallback) {
    let Some(window) = web::window() else {
        log::error!("[frame] no window; loop halted");
        return;
    };
    if let Some(cb) = callback.borrow().as_ref() {
        let f: &js_sys::Function = cb.as_ref().unchecked_ref();
        if let Err(e) = window.request_animation_frame(f) {
            log::error!("[frame] requestAnimationFrame error: {:?}", e);
        }
    }
}

/// Drives `driver` once per display refresh. Exactly one callback is pending
/// at a time; the next one is requested only after the current frame is
/// drawn, and never after a draw error or a stop request.
pub fn start_loop(surface: Rc<SurfaceManager>, driver: Rc<RefCell<FrameDriver>>) {
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_next = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        let size = surface.logical_size();
        let mut canvas = WebCanvas::new(surface.context());
        let outcome = driver.borrow_mut().run_frame(&mut canvas, now_ms, size);
        match outcome {
            Ok(FrameOutcome::Reschedule) => request_frame(&tick_next),
            Ok(FrameOutcome::Stopped) => {}
            Err(e) => {
                log::error!("[frame] render error, loop halted: {}", e);
            }
        }
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}
