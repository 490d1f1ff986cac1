// Host-side end-to-end tests: elapsed time in, ordered draw calls out.

mod common;

use common::{approx, Op, RecordingCanvas};
use glam::DVec2;
use heart_core::*;

const SIZE: LogicalSize = LogicalSize::new(800.0, 600.0);

fn scene() -> Scene {
    Scene::new(HeartConfig::default()).unwrap()
}

fn first(c: &RecordingCanvas, pred: impl Fn(&Op) -> bool) -> usize {
    c.ops.iter().position(pred).expect("op present")
}

#[test]
fn geometry_layout_follows_surface_size() {
    let geo = scene().geometry(0.0, SIZE);
    assert!(approx(geo.base, 600.0 * 0.34));
    assert!(approx(geo.center.x, 400.0));
    assert!(approx(geo.center.y, 300.0 - geo.base * 0.02));
    assert_eq!(geo.beat.scale, 1.0);
    assert_eq!(geo.points.len(), 721);
}

#[test]
fn head_returns_to_start_after_one_cycle() {
    let s = scene();
    let g0 = s.geometry(0.0, SIZE);
    assert_eq!(g0.head_index, 0);
    let g1 = s.geometry(1.0 / 0.35, SIZE);
    assert_eq!(g1.head_index, 0);
}

#[test]
fn trail_ends_at_the_head_with_configured_length() {
    let s = scene();
    for elapsed in [0.0, 0.4, 1.3, 2.0, 2.85] {
        let geo = s.geometry(elapsed, SIZE);
        assert_eq!(geo.trail.len(), s.config().motion.tail_len() + 1);
        assert_eq!(geo.trail.head(), geo.head());
    }
}

#[test]
fn trail_at_start_wraps_through_the_closing_sample() {
    let geo = scene().geometry(0.0, SIZE);
    let trail = geo.trail.as_slice();
    let n = geo.points.len();
    let tail = trail.len() - 1;
    // oldest sample sits `tail` indices before index 0
    assert_eq!(Some(trail[0]), geo.points.get(n - tail));
    assert_eq!(Some(trail[tail]), geo.points.get(0));
}

#[test]
fn frame_is_composited_back_to_front() {
    let s = scene();
    let mut c = RecordingCanvas::new();
    s.render(&mut c, 0.3, SIZE).unwrap();

    let background = first(&c, |op| matches!(op, Op::FillRect(..)));
    let shadow = first(&c, |op| matches!(op, Op::Ellipse(..)));
    let glow = first(&c, |op| matches!(op, Op::Circle(..)));
    let strokes: Vec<usize> = c
        .ops
        .iter()
        .enumerate()
        .filter(|(_, op)| **op == Op::StrokePath)
        .map(|(i, _)| i)
        .collect();
    let head = c
        .ops
        .iter()
        .rposition(|op| matches!(op, Op::Circle(..)))
        .unwrap();

    assert_eq!(strokes.len(), 3);
    assert!(background < shadow);
    assert!(shadow < glow);
    assert!(glow < strokes[0]);
    assert!(strokes[2] < head);
    assert!(c.is_balanced());
}

#[test]
fn strokes_are_guide_then_wide_glow_then_narrow_core() {
    let s = scene();
    let stroke = &s.config().stroke;
    let mut c = RecordingCanvas::new();
    let geo = s.render(&mut c, 1.1, SIZE).unwrap();

    assert_eq!(
        c.stroke_widths(),
        vec![
            stroke.guide_width(),
            stroke.trail_glow_width(),
            stroke.trail_core_width()
        ]
    );
    let paths = c.stroked_paths();
    assert_eq!(paths[0], geo.points.as_slice());
    assert_eq!(paths[1], geo.trail.as_slice());
    assert_eq!(paths[2], geo.trail.as_slice());
    // the trail glow pass and the head marker are the only shadowed layers
    assert_eq!(c.count(|op| matches!(op, Op::Shadow(..))), 2);
}

#[test]
fn head_marker_sits_on_the_head_sample() {
    let s = scene();
    let mut c = RecordingCanvas::new();
    let geo = s.render(&mut c, 0.9, SIZE).unwrap();
    let head = geo.head().unwrap();
    assert_eq!(
        c.ops.iter().rev().find(|op| matches!(op, Op::Circle(..))),
        Some(&Op::Circle(head, s.config().stroke.head_radius()))
    );
}

#[test]
fn shadow_darkens_with_the_beat() {
    let s = scene();
    let peak = 1.0 / (4.0 * 1.05);
    let alpha_at = |t: f64| {
        let mut c = RecordingCanvas::new();
        s.render(&mut c, t, SIZE).unwrap();
        c.ops
            .iter()
            .find_map(|op| match op {
                Op::GlobalAlpha(a) => Some(*a),
                _ => None,
            })
            .unwrap()
    };
    assert!(approx(alpha_at(0.0), 0.18));
    assert!(alpha_at(peak) > alpha_at(0.0));
}

#[test]
fn rendering_is_a_pure_function_of_elapsed_time() {
    let s = scene();
    let mut a = RecordingCanvas::new();
    let mut b = RecordingCanvas::new();
    s.render(&mut a, 7.25, SIZE).unwrap();
    s.render(&mut b, 3.0, SIZE).unwrap();
    b.ops.clear();
    s.render(&mut b, 7.25, SIZE).unwrap();
    assert_eq!(a.ops, b.ops);
}

#[test]
fn beat_enlarges_the_curve() {
    let s = scene();
    let rest = s.geometry(0.0, SIZE);
    let peak = s.geometry(1.0 / (4.0 * 1.05), SIZE);
    let height = |g: &FrameGeometry| {
        let ys = g.points.iter().map(|p| p.y);
        let (lo, hi) = ys.fold((f64::MAX, f64::MIN), |(lo, hi), y| (lo.min(y), hi.max(y)));
        hi - lo
    };
    assert!(peak.beat.scale > 1.0);
    assert!(height(&peak) > height(&rest));
}

#[test]
fn zero_sized_surface_still_renders() {
    let mut c = RecordingCanvas::new();
    let geo = scene()
        .render(&mut c, 1.0, LogicalSize::new(0.0, 0.0))
        .unwrap();
    assert_eq!(geo.base, 0.0);
    assert!(geo.points.iter().all(|p| *p == DVec2::ZERO));
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let mut config = HeartConfig::default();
    config.motion.steps = 1;
    assert_eq!(
        Scene::new(config).unwrap_err(),
        ConfigError::TooFewSteps(1)
    );
}
