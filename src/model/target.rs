//! User-adjustable release target.
//!
//! The target is driven by an inverted control: control 0 puts the target
//! at the bottom of the screen, control max at the top.

use super::geometry::ScreenMetrics;
use crate::clamp;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetPoint {
    pub x: f64,
    pub y: f64,
}

impl TargetPoint {
    /// Default target: marker column, `ratio` of the height from the top.
    pub fn default_for(metrics: &ScreenMetrics, x_ratio: f64, ratio: f64) -> Self {
        Self {
            x: metrics.width() * x_ratio,
            y: metrics.height() * ratio,
        }
    }

    /// Maps a bounded control value to `y = screen_height - value`.
    ///
    /// The control is clamped to `[0, control_max]` first and the result
    /// to `[0, screen_height]`. `x` is left untouched.
    pub fn set_from_control_value(&mut self, control_value: f64, control_max: f64, screen_height: f64) {
        let value = clamp(control_value, 0.0, control_max.max(0.0));
        self.y = clamp(screen_height - value, 0.0, screen_height);
    }

    /// Control value that would produce the current `y`.
    pub fn control_value(&self, screen_height: f64) -> f64 {
        clamp(screen_height - self.y, 0.0, screen_height)
    }

    /// Keeps a stale target inside a newly measured screen.
    pub fn clamp_to(&mut self, screen_width: f64, screen_height: f64) {
        self.x = clamp(self.x, 0.0, screen_width);
        self.y = clamp(self.y, 0.0, screen_height);
    }
}
