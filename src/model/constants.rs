//! Choreography constants and default values.
//!
//! This module contains all engine constants including geometry defaults,
//! timing defaults, overlay style defaults and validation limits.

// === Geometry Defaults ===

/// Default horizontal ellipse radius in pixels.
pub const DEFAULT_RADIUS_X: f64 = 500.0;

/// Default vertical ellipse radius in pixels.
pub const DEFAULT_RADIUS_Y: f64 = 300.0;

/// Default circle centre x as a fraction of screen width.
pub const DEFAULT_CENTER_X_RATIO: f64 = 0.5;

/// Default circle centre y as a fraction of screen height.
pub const DEFAULT_CENTER_Y_RATIO: f64 = 0.75;

/// Default target y as a fraction of screen height (20% from top).
pub const DEFAULT_TARGET_RATIO: f64 = 0.2;

/// Target marker x as a fraction of screen width.
pub const DEFAULT_TARGET_X_RATIO: f64 = 0.5;

/// Release point x as a fraction of screen width.
pub const DEFAULT_RELEASE_X_RATIO: f64 = 1.0 / 3.0;

// === Choreography Defaults ===

/// Spin start angle in degrees (upper-left of the ellipse).
pub const DEFAULT_START_ANGLE_DEG: f64 = 260.0;

/// Clockwise sweep in degrees (ends at 180°, the leftmost point).
pub const DEFAULT_SWEEP_DEG: f64 = 280.0;

/// Time for one full revolution in milliseconds.
pub const DEFAULT_SPEED_MS_PER_REVOLUTION: f64 = 500.0;

/// Release travel time appended after the spin, in milliseconds.
pub const DEFAULT_THROW_DURATION_MS: f64 = 100.0;

/// Hold stroke duration in milliseconds (effectively indefinite).
pub const DEFAULT_HOLD_DURATION_MS: f64 = 60_000.0;

/// Vertical extent of the hold stroke in pixels.
pub const DEFAULT_HOLD_NUDGE_PX: f64 = 1.0;

/// How long a status message stays visible, in milliseconds.
pub const DEFAULT_STATUS_DURATION_MS: f64 = 2_000.0;

/// Host tick cadence in milliseconds (~60 FPS).
pub const DEFAULT_TICK_INTERVAL_MS: f64 = 16.0;

/// Start angle of the progress arc drawn by the overlay.
pub const PROGRESS_START_DEG: f64 = 260.0;

// === Overlay Style Defaults ===

/// Outline colour: red, alpha 150/255.
pub const DEFAULT_OUTLINE_COLOR: &str = "#FF000096";

/// Progress arc colour: opaque green.
pub const DEFAULT_PROGRESS_COLOR: &str = "#00FF00";

/// Target marker colour: green, alpha 200/255.
pub const DEFAULT_TARGET_COLOR: &str = "#00FF00C8";

/// Outline and progress stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 10.0;

/// Target marker radius in pixels.
pub const DEFAULT_MARKER_RADIUS: f64 = 20.0;

// === Status Texts ===

pub const STATUS_ARMED: &str = "Armed";
pub const STATUS_SPINNING: &str = "Spinning...";
pub const STATUS_HOLDING: &str = "Holding Center...";
pub const STATUS_RELEASED: &str = "Hold released";
pub const STATUS_IDLE: &str = "Idle";
pub const STATUS_DISABLED: &str = "Disabled";
pub const STATUS_NOT_ARMED: &str = "Arm first";
pub const STATUS_INVALID_METRICS: &str = "Invalid screen metrics";

// === Validation Limits ===

/// Minimum spin speed in milliseconds per revolution.
pub const MIN_SPEED_MS: f64 = 50.0;

/// Maximum spin speed in milliseconds per revolution.
pub const MAX_SPEED_MS: f64 = 10_000.0;

/// Minimum sweep in degrees.
pub const MIN_SWEEP_DEG: f64 = 1.0;

/// Maximum sweep in degrees (two full turns).
pub const MAX_SWEEP_DEG: f64 = 720.0;

/// Minimum throw duration in milliseconds.
pub const MIN_THROW_MS: f64 = 1.0;

/// Maximum throw duration in milliseconds.
pub const MAX_THROW_MS: f64 = 2_000.0;

/// Minimum hold duration in milliseconds.
pub const MIN_HOLD_MS: f64 = 1.0;

/// Maximum hold duration in milliseconds (platform stroke limit).
pub const MAX_HOLD_MS: f64 = 60_000.0;

/// Maximum hold nudge in pixels.
pub const MAX_HOLD_NUDGE_PX: f64 = 10.0;

/// Maximum ellipse radius in pixels.
pub const MAX_RADIUS: f64 = 4_000.0;

/// Minimum status duration in milliseconds.
pub const MIN_STATUS_MS: f64 = 100.0;

/// Maximum status duration in milliseconds.
pub const MAX_STATUS_MS: f64 = 30_000.0;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_MS: f64 = 1.0;

/// Maximum tick interval in milliseconds.
pub const MAX_TICK_MS: f64 = 1_000.0;

/// Maximum stroke width / marker radius in pixels.
pub const MAX_STROKE_PX: f64 = 200.0;
