use crate::dom;
use heart_core::{LogicalSize, PhysicalSize, SurfaceLayout, SurfaceTransform};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owns the canvas, its 2D context and the current logical-to-physical
/// transform. Drawing code only ever sees logical units.
pub struct SurfaceManager {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    transform: Cell<SurfaceTransform>,
}

impl SurfaceManager {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self {
            canvas,
            ctx,
            transform: Cell::new(SurfaceTransform::default()),
        })
    }

    pub fn context(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }

    /// Re-derives backing size and transform from the displayed size and the
    /// current density ratio.
    pub fn sync(&self) {
        let rect = self.canvas.get_bounding_client_rect();
        let logical = LogicalSize::new(rect.width(), rect.height());
        let layout = SurfaceLayout::compute(logical, dom::device_pixel_ratio());

        // Assigning width/height clears the canvas and resets its transform
        if self.canvas.width() != layout.physical.width {
            self.canvas.set_width(layout.physical.width);
        }
        if self.canvas.height() != layout.physical.height {
            self.canvas.set_height(layout.physical.height);
        }
        let [a, b, c, d, e, f] = layout.transform.matrix();
        if let Err(err) = self.ctx.set_transform(a, b, c, d, e, f) {
            log::error!("[surface] setTransform error: {:?}", err);
        }
        self.transform.set(layout.transform);
        log::debug!(
            "[surface] {:.0}x{:.0} @{:.2} -> {}x{}",
            logical.width,
            logical.height,
            layout.transform.ratio(),
            layout.physical.width,
            layout.physical.height
        );
    }

    /// Logical extent of the current backing store.
    pub fn logical_size(&self) -> LogicalSize {
        let physical = PhysicalSize {
            width: self.canvas.width(),
            height: self.canvas.height(),
        };
        self.transform.get().logical_size(physical)
    }
}

pub fn wire_resize(window: &web::Window, surface: Rc<SurfaceManager>) {
    let resize_closure = Closure::wrap(Box::new(move || {
        surface.sync();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();
}
