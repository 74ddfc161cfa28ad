//! In-memory collaborators: recorders for tests, loggers for the demo host.

use super::{GestureSink, MetricsProvider, Renderer};
use crate::gesture::{GesturePath, PathSegment};
use crate::model::RenderState;
use crate::status::StatusMessage;

/// One frame as the renderer saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub state: RenderState,
    pub status: Option<String>,
}

/// Keeps a copy of every drawn frame.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<Frame>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, state: &RenderState, status: Option<&StatusMessage>) {
        self.frames.push(Frame {
            state: state.clone(),
            status: status.map(|m| m.text.clone()),
        });
    }
}

/// Keeps every dispatched path.
#[derive(Debug, Default)]
pub struct RecordingSink {
    dispatched: Vec<GesturePath>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatched(&self) -> &[GesturePath] {
        &self.dispatched
    }
}

impl GestureSink for RecordingSink {
    fn dispatch(&mut self, path: GesturePath) {
        self.dispatched.push(path);
    }
}

/// Screen size the host can change between transitions.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics {
    pub width: i64,
    pub height: i64,
}

impl FixedMetrics {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    pub fn set(&mut self, width: i64, height: i64) {
        self.width = width;
        self.height = height;
    }
}

impl MetricsProvider for FixedMetrics {
    fn screen_metrics(&mut self) -> (i64, i64) {
        (self.width, self.height)
    }
}

/// Writes a one-line frame summary to the log, skipping repeats.
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_line: String,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, state: &RenderState, status: Option<&StatusMessage>) {
        let line = format!(
            "circle={} progress={:.2} spin={} target={} ({:.0}, {:.0}) status={:?}",
            state.circle_visible,
            state.progress,
            state.spin_active,
            state.target_visible,
            state.target.x,
            state.target.y,
            status.map(|m| m.text.as_str()),
        );
        if line != self.last_line {
            log::info!("frame: {}", line);
            self.last_line = line;
        }
    }
}

/// Logs each stroke instead of injecting it.
#[derive(Debug, Default)]
pub struct LogSink;

impl GestureSink for LogSink {
    fn dispatch(&mut self, path: GesturePath) {
        log::info!(
            "dispatch: {} segment(s), {:.1} ms",
            path.segments().len(),
            path.total_duration_ms()
        );
        for segment in path.segments() {
            match segment {
                PathSegment::Oval { bbox } => log::debug!("  oval {:?}", bbox),
                PathSegment::Arc {
                    start_deg,
                    sweep_deg,
                    ..
                } => log::debug!("  arc start={} sweep={}", start_deg, sweep_deg),
                PathSegment::Line { from, to } => log::debug!(
                    "  line ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                    from.x,
                    from.y,
                    to.x,
                    to.y
                ),
            }
        }
    }
}
