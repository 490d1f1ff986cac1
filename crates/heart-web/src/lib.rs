#![cfg(target_arch = "wasm32")]
use heart_core::{FrameDriver, HeartConfig, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod dom;
mod frame;
mod surface;

// Host page element that receives the glyph
const CANVAS_ID: &str = "scene";

thread_local! {
    static DRIVER: RefCell<Option<Rc<RefCell<FrameDriver>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stops the animation after the frame in flight; the last frame stays on
/// the canvas.
#[wasm_bindgen]
pub fn stop() {
    DRIVER.with(|d| {
        if let Some(driver) = d.borrow().as_ref() {
            driver.borrow_mut().request_stop();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;

    let config = HeartConfig::from_attributes(|key| canvas.get_attribute(key))?;
    log::info!(
        "[config] steps={} beat={:.2}Hz speed={:.2} tail={}",
        config.motion.steps,
        config.motion.beat_frequency_hz,
        config.motion.line_speed,
        config.motion.tail_len()
    );
    let scene = Scene::new(config)?;

    // Backing store follows CSS size * devicePixelRatio
    let surface = Rc::new(surface::SurfaceManager::new(canvas)?);
    surface.sync();
    surface::wire_resize(&window, surface.clone());

    let start_ms = dom::now_ms(&window)?;
    let driver = Rc::new(RefCell::new(FrameDriver::new(scene, start_ms)));
    DRIVER.with(|d| *d.borrow_mut() = Some(driver.clone()));
    frame::start_loop(surface, driver);
    Ok(())
}
