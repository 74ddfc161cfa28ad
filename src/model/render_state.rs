//! Render state (pure Rust, no drawing).
//!
//! This is the snapshot a renderer paints each frame. The engine owns the
//! only mutable copy and hands out shared references.

use super::constants::PROGRESS_START_DEG;
use super::geometry::Circle;
use super::style::OverlayStyle;
use super::target::TargetPoint;
use crate::clamp;

/// Everything the overlay needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// Draw the full outline ellipse?
    pub circle_visible: bool,
    /// Ellipse geometry.
    pub circle: Circle,
    /// Spin progress in [0.0, 1.0].
    pub progress: f64,
    /// Is a spin playing (draw the progress arc)?
    pub spin_active: bool,
    /// Angle the progress arc starts from, matching the dispatched stroke.
    pub progress_start_deg: f64,
    /// Draw the target marker?
    pub target_visible: bool,
    /// Target marker position.
    pub target: TargetPoint,
    /// Paint parameters.
    pub style: OverlayStyle,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            circle_visible: false,
            circle: Circle::default(),
            progress: 0.0,
            spin_active: false,
            progress_start_deg: PROGRESS_START_DEG,
            target_visible: false,
            target: TargetPoint::default(),
            style: OverlayStyle::default(),
        }
    }
}

impl RenderState {
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Arc extent the renderer draws from `progress_start_deg`.
    pub fn progress_sweep_deg(&self) -> f64 {
        360.0 * self.progress
    }

    /// Marks a spin as playing, with its arc starting at `start_deg`.
    pub fn start_spin(&mut self, start_deg: f64) {
        self.spin_active = true;
        self.progress_start_deg = start_deg;
    }

    /// Raises progress; never lowers it within one playback.
    pub fn advance_progress(&mut self, progress: f64) {
        self.progress = self.progress.max(clamp(progress, 0.0, 1.0));
    }

    /// Shows the outline for a fresh gesture.
    pub fn show_circle(&mut self, circle: Circle) {
        self.circle = circle;
        self.circle_visible = true;
        self.progress = 0.0;
    }

    pub fn show_target(&mut self, target: TargetPoint) {
        self.target = target;
        self.target_visible = true;
    }

    /// Drops spin-only flags, keeping the static outline and marker.
    pub fn end_spin(&mut self) {
        self.spin_active = false;
        self.progress = 0.0;
    }

    /// Hides everything transient.
    pub fn clear(&mut self) {
        self.end_spin();
        self.circle_visible = false;
        self.target_visible = false;
    }
}
