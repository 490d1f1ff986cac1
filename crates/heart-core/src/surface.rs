//! Density-aware sizing of the drawing surface.
//!
//! All drawing code works in logical units; [`SurfaceTransform`] owns the one
//! uniform scale that maps them onto the physical pixel buffer.

use glam::DVec2;

use crate::curve::Point;

/// Surface size in logical (density-independent) units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogicalSize {
    pub width: f64,
    pub height: f64,
}

impl LogicalSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    pub fn center(&self) -> Point {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Backing-store size in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

/// Uniform logical-to-physical scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceTransform {
    ratio: f64,
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self { ratio: 1.0 }
    }
}

impl SurfaceTransform {
    /// Non-finite or sub-unit density ratios are treated as 1.
    pub fn new(device_pixel_ratio: f64) -> Self {
        let ratio = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.max(1.0)
        } else {
            1.0
        };
        Self { ratio }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Physical buffer for a displayed logical size, rounded down.
    pub fn physical_size(&self, logical: LogicalSize) -> PhysicalSize {
        let px = |v: f64| (v.max(0.0) * self.ratio).floor() as u32;
        PhysicalSize {
            width: px(logical.width),
            height: px(logical.height),
        }
    }

    /// Logical extent covered by a physical buffer under this transform.
    pub fn logical_size(&self, physical: PhysicalSize) -> LogicalSize {
        LogicalSize::new(
            physical.width as f64 / self.ratio,
            physical.height as f64 / self.ratio,
        )
    }

    pub fn to_physical(&self, p: Point) -> Point {
        p * self.ratio
    }

    pub fn to_logical(&self, p: Point) -> Point {
        p / self.ratio
    }

    /// Affine matrix `(a, b, c, d, e, f)` in canvas `setTransform` order.
    pub fn matrix(&self) -> [f64; 6] {
        [self.ratio, 0.0, 0.0, self.ratio, 0.0, 0.0]
    }
}

/// Result of one resize pass: what the host must apply to its surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceLayout {
    pub transform: SurfaceTransform,
    pub physical: PhysicalSize,
}

impl SurfaceLayout {
    /// Recomputed from scratch on every call, so repeated or out-of-order
    /// resize notifications converge on the latest size.
    pub fn compute(logical: LogicalSize, device_pixel_ratio: f64) -> Self {
        let transform = SurfaceTransform::new(device_pixel_ratio);
        Self {
            transform,
            physical: transform.physical_size(logical),
        }
    }
}
