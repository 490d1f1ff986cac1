use crate::curve::{Point, PointSequence};

/// A contiguous arc of a closed sequence, oldest sample first, head last.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    points: Vec<Point>,
}

impl Trail {
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn head(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

/// Collects `points[(head - k) mod n]` for `k = tail_len ..= 0`.
///
/// Out-of-range input is clamped rather than rejected: `head_index` wraps
/// modulo `n` and `tail_len` is capped at `n - 1`, so the trail never covers a
/// sample twice. An empty sequence yields an empty trail.
pub fn extract_trail(points: &PointSequence, head_index: usize, tail_len: usize) -> Trail {
    let src = points.as_slice();
    let n = src.len();
    if n == 0 {
        return Trail { points: Vec::new() };
    }
    let head = head_index % n;
    let tail = tail_len.min(n - 1);
    if tail != tail_len || head != head_index {
        log::debug!(
            "[trail] clamped head {}->{} tail {}->{} (n={})",
            head_index,
            head,
            tail_len,
            tail,
            n
        );
    }
    let points = (0..=tail)
        .rev()
        .map(|k| src[(head + n - k) % n])
        .collect();
    Trail { points }
}
