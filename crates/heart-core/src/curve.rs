//! The classic parametric heart and its discretization.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::constants::CURVE_UNITS;

/// A position in surface-local logical units (y grows downward).
pub type Point = DVec2;

/// Evaluates the heart curve in canonical units (y grows upward):
///
/// x(t) = 16 sin³ t
/// y(t) = 13 cos t − 5 cos 2t − 2 cos 3t − cos 4t
///
/// Periodic in `t` with period 2π.
#[inline]
pub fn curve_point(t: f64) -> Point {
    let s = t.sin();
    let x = 16.0 * s * s * s;
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    DVec2::new(x, y)
}

/// A closed, ordered run of curve samples. The last sample repeats the first.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSequence {
    points: Vec<Point>,
}

impl PointSequence {
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}

impl From<Vec<Point>> for PointSequence {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Samples one full period at `steps + 1` evenly spaced parameters, maps
/// canonical units by `size / 20`, flips y and translates to `center`.
///
/// The closing sample reuses the parameter of the first so both ends are
/// bit-identical. `steps` below 2 is raised to 2.
pub fn sample_curve(center: Point, size: f64, steps: usize) -> PointSequence {
    let steps = steps.max(2);
    let k = size / CURVE_UNITS;
    let points = (0..=steps)
        .map(|i| {
            let t = if i == steps {
                0.0
            } else {
                i as f64 / steps as f64 * TAU
            };
            let p = curve_point(t);
            DVec2::new(center.x + p.x * k, center.y - p.y * k)
        })
        .collect();
    PointSequence { points }
}
