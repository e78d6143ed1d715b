//! Driving loop: the imperative shell around [`render`].
//!
//! A [`TickSource`] produces render requests, a [`DisplaySink`] shows the
//! frames, and a [`CancelToken`] is the teardown hook. The rotation is
//! threaded explicitly through the loop; nothing is global.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::frame::Frame;
use crate::renderer::render;
use crate::types::RotationState;

/// Shared "stop scheduling frames" flag.
///
/// Clones observe the same flag. Cancelling is idempotent and may happen
/// from any thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// One render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Zero-based count of ticks produced by the source.
    pub index: u64,
}

/// Anything that can pace render requests.
pub trait TickSource {
    /// Wait for the next tick. `None` ends the loop.
    fn next_tick(&mut self) -> Option<Tick>;
}

/// Ticks at a fixed interval, sleeping between them.
#[derive(Debug, Clone)]
pub struct IntervalTicks {
    interval: Duration,
    next_due: Option<Instant>,
    index: u64,
}

impl IntervalTicks {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
            index: 0,
        }
    }

    /// Interval for a frame rate; zero is treated as one frame per second.
    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs(1) / fps.max(1))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl TickSource for IntervalTicks {
    fn next_tick(&mut self) -> Option<Tick> {
        if let Some(due) = self.next_due {
            let now = Instant::now();
            if due > now {
                thread::sleep(due - now);
            }
        }
        self.next_due = Some(Instant::now() + self.interval);

        let tick = Tick { index: self.index };
        self.index += 1;
        Some(tick)
    }
}

/// Ticks back to back, optionally a fixed number of times.
#[derive(Debug, Clone, Default)]
pub struct ImmediateTicks {
    remaining: Option<u64>,
    index: u64,
}

impl ImmediateTicks {
    pub fn new(count: Option<u64>) -> Self {
        Self {
            remaining: count,
            index: 0,
        }
    }
}

impl TickSource for ImmediateTicks {
    fn next_tick(&mut self) -> Option<Tick> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }
        let tick = Tick { index: self.index };
        self.index += 1;
        Some(tick)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The surface is gone or unusable for this frame. The frame is skipped.
    #[error("display unavailable: {0}")]
    Unavailable(String),
    #[error("display write failed: {0}")]
    Io(#[from] io::Error),
}

/// Where frames are shown.
pub trait DisplaySink {
    fn paint(&mut self, frame: &Frame) -> Result<(), SinkError>;
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn paint(&mut self, frame: &Frame) -> Result<(), SinkError> {
        (**self).paint(frame)
    }
}

/// Totals reported when a [`Driver`] stops.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DriveSummary {
    /// Frames rendered.
    pub ticks: u64,
    pub painted: u64,
    /// Frames rendered while the sink was unavailable.
    pub skipped: u64,
    /// Orientation the next frame would have used.
    pub final_state: RotationState,
}

pub struct Driver<T, S> {
    ticks: T,
    sink: S,
    cancel: CancelToken,
    state: RotationState,
    frame_limit: Option<u64>,
}

impl<T: TickSource, S: DisplaySink> Driver<T, S> {
    pub fn new(ticks: T, sink: S, cancel: CancelToken) -> Self {
        Self {
            ticks,
            sink,
            cancel,
            state: RotationState::default(),
            frame_limit: None,
        }
    }

    /// Start from an orientation other than (0, 0).
    pub fn with_state(mut self, state: RotationState) -> Self {
        self.state = state;
        self
    }

    /// Stop after `limit` frames.
    pub fn with_frame_limit(mut self, limit: Option<u64>) -> Self {
        self.frame_limit = limit;
        self
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Run until the ticks end, the token is cancelled, or the frame limit is hit.
    ///
    /// An unavailable sink skips that frame and the loop carries on. Any other
    /// sink error stops the loop and is returned.
    pub fn run(&mut self) -> Result<DriveSummary, SinkError> {
        let mut summary = DriveSummary::default();
        info!(
            "driver starting at a={:.3} b={:.3} limit={:?}",
            self.state.angle_a, self.state.angle_b, self.frame_limit
        );

        loop {
            if self.frame_limit.is_some_and(|limit| summary.ticks >= limit) {
                break;
            }
            if self.cancel.is_cancelled() {
                break;
            }
            let Some(tick) = self.ticks.next_tick() else {
                break;
            };
            // Teardown may have fired while we were waiting for the tick.
            if self.cancel.is_cancelled() {
                break;
            }

            let (frame, next) = render(self.state);
            self.state = next;
            summary.ticks += 1;

            match self.sink.paint(&frame) {
                Ok(()) => summary.painted += 1,
                Err(SinkError::Unavailable(reason)) => {
                    debug!("skipping frame {}: {reason}", tick.index);
                    summary.skipped += 1;
                }
                Err(err) => {
                    warn!("stopping after frame {}: {err}", tick.index);
                    return Err(err);
                }
            }
        }

        summary.final_state = self.state;
        info!(
            "driver stopped: {} frames, {} painted, {} skipped",
            summary.ticks, summary.painted, summary.skipped
        );
        Ok(summary)
    }
}
