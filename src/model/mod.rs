//! Choreography domain model.
//!
//! This module contains pure value types (no host dependencies):
//! screen geometry, the release target, render state, overlay style and
//! configuration constants.

pub mod config;
pub mod constants;
pub mod geometry;
pub mod render_state;
pub mod style;
pub mod target;

pub use config::{ChoreographyConfig, ConfigError};
pub use constants::*;
pub use geometry::{
    bounding_box, point_on_ellipse, BoundingBox, Circle, MetricsError, Point, ScreenMetrics,
};
pub use render_state::RenderState;
pub use style::{OverlayStyle, Rgba, StyleConfig};
pub use target::TargetPoint;
