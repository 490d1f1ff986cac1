use wasm_bindgen::JsCast;
use web_sys as web;

pub fn canvas_by_id(
    document: &web::Document,
    element_id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", element_id, e))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext error: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// High-resolution monotonic time, same timebase as animation-frame stamps.
pub fn now_ms(window: &web::Window) -> anyhow::Result<f64> {
    window
        .performance()
        .map(|p| p.now())
        .ok_or_else(|| anyhow::anyhow!("no performance clock"))
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}
