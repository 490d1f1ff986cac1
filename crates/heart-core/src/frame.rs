//! Host-agnostic frame driver.
//!
//! The host owns the actual per-refresh scheduling primitive; the driver only
//! tracks whether a callback is pending or running and whether the host
//! should request another one.

use crate::canvas::{Canvas2d, DrawError};
use crate::constants::FRAME_LOG_INTERVAL;
use crate::scene::Scene;
use crate::surface::LogicalSize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopPhase {
    /// A frame callback is pending.
    Scheduled,
    /// A frame is being drawn.
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Request the next frame callback.
    Reschedule,
    /// A stop was requested; do not reschedule.
    Stopped,
}

pub struct FrameDriver {
    scene: Scene,
    start_ms: f64,
    phase: LoopPhase,
    stop_requested: bool,
    frames: u64,
}

impl FrameDriver {
    /// `start_ms` is the time origin, read once from the host's monotonic
    /// clock in the same timebase as the per-frame timestamps.
    pub fn new(scene: Scene, start_ms: f64) -> Self {
        Self {
            scene,
            start_ms,
            phase: LoopPhase::Scheduled,
            stop_requested: false,
            frames: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested
    }

    /// Checked after the current frame, before rescheduling.
    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    /// Seconds since the time origin. A refresh timestamp may predate the
    /// origin by a fraction of a frame; that is reported as zero.
    pub fn elapsed_seconds(&self, now_ms: f64) -> f64 {
        ((now_ms - self.start_ms) / 1000.0).max(0.0)
    }

    /// Draws one frame. A draw error leaves the driver in `Running`; the host
    /// is expected to stop scheduling.
    pub fn run_frame<C: Canvas2d>(
        &mut self,
        canvas: &mut C,
        now_ms: f64,
        size: LogicalSize,
    ) -> Result<FrameOutcome, DrawError> {
        self.phase = LoopPhase::Running;
        let elapsed = self.elapsed_seconds(now_ms);
        self.scene.render(canvas, elapsed, size)?;
        self.frames += 1;
        if self.frames % FRAME_LOG_INTERVAL == 0 {
            log::debug!(
                "[frame] {} frames, t={:.2}s, surface {:.0}x{:.0}",
                self.frames,
                elapsed,
                size.width,
                size.height
            );
        }
        if self.stop_requested {
            log::info!("[frame] stop requested after {} frames", self.frames);
            return Ok(FrameOutcome::Stopped);
        }
        self.phase = LoopPhase::Scheduled;
        Ok(FrameOutcome::Reschedule)
    }
}
