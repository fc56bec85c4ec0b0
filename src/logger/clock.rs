//! Wall-clock time and frame counter sources

use chrono::{DateTime, Local};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Timestamp and frame number captured for a single log call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStamp {
    pub time: DateTime<Local>,
    pub frame: u64,
}

/// Source of the time and frame metadata stamped on every line
pub trait FrameClock: Send + Sync {
    fn now(&self) -> FrameStamp;
}

/// Frame counter advanced by the host once per rendered frame
#[derive(Debug, Default)]
pub struct FrameCounter(AtomicU64);

impl FrameCounter {
    /// Create a counter starting at frame 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current frame number
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Advance to the next frame and return the new frame number
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Jump to a specific frame number
    pub fn set(&self, frame: u64) {
        self.0.store(frame, Ordering::Relaxed);
    }
}

/// Local system time paired with a shared [`FrameCounter`]
#[derive(Debug, Clone, Default)]
pub struct SystemClock {
    frames: Arc<FrameCounter>,
}

impl SystemClock {
    /// Create a clock with its own counter at frame 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock reading a counter owned by the host
    pub fn with_counter(frames: Arc<FrameCounter>) -> Self {
        Self { frames }
    }

    /// Handle for the host's frame loop
    pub fn frame_counter(&self) -> Arc<FrameCounter> {
        Arc::clone(&self.frames)
    }
}

impl FrameClock for SystemClock {
    fn now(&self) -> FrameStamp {
        FrameStamp {
            time: Local::now(),
            frame: self.frames.get(),
        }
    }
}
