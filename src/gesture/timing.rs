//! Timing controller: speed-to-duration mapping and playback progress.
//!
//! All times are monotonic milliseconds supplied by the host.

use crate::clamp;

/// Durations for one spin-and-throw stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTiming {
    pub spin_ms: f64,
    pub throw_ms: f64,
}

impl SpinTiming {
    /// Constant angular velocity: the spin takes `speed × sweep / 360`.
    pub fn new(speed_ms_per_revolution: f64, sweep_deg: f64, throw_ms: f64) -> Self {
        Self {
            spin_ms: spin_duration_ms(speed_ms_per_revolution, sweep_deg),
            throw_ms: throw_ms.max(0.0),
        }
    }

    pub fn total_ms(&self) -> f64 {
        self.spin_ms + self.throw_ms
    }
}

pub fn spin_duration_ms(speed_ms_per_revolution: f64, sweep_deg: f64) -> f64 {
    speed_ms_per_revolution.max(0.0) * (sweep_deg.abs() / 360.0)
}

/// Identifies one gesture playback. A newer playback always has a larger id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlaybackId(pub u64);

/// Progress clock for a single timed gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    id: PlaybackId,
    started_at_ms: f64,
    ends_at_ms: f64,
    last_progress: f64,
}

impl Playback {
    pub fn start(id: PlaybackId, now_ms: f64, duration_ms: f64) -> Self {
        Self {
            id,
            started_at_ms: now_ms,
            ends_at_ms: now_ms + duration_ms.max(0.0),
            last_progress: 0.0,
        }
    }

    pub fn id(&self) -> PlaybackId {
        self.id
    }

    pub fn duration_ms(&self) -> f64 {
        self.ends_at_ms - self.started_at_ms
    }

    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.started_at_ms).max(0.0)
    }

    /// Samples progress at `now_ms`.
    ///
    /// Never lower than a previous sample and exactly 1.0 once the
    /// duration has elapsed.
    pub fn sample(&mut self, now_ms: f64) -> f64 {
        let raw = if self.is_complete(now_ms) {
            1.0
        } else {
            clamp(self.elapsed_ms(now_ms) / self.duration_ms(), 0.0, 1.0)
        };
        self.last_progress = self.last_progress.max(raw);
        self.last_progress
    }

    pub fn last_progress(&self) -> f64 {
        self.last_progress
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        now_ms >= self.ends_at_ms
    }
}
