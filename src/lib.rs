//! Gesture choreography and overlay synchronization.
//!
//! Pure engine: geometry, stroke building, timing and the hold → spin →
//! idle state machine. Drawing, touch injection and screen measurement
//! are host collaborators (see [`platform`]), so everything here runs as
//! normal unit and integration tests.

pub mod engine;
pub mod events;
pub mod gesture;
pub mod handlers;
pub mod model;
pub mod platform;
pub mod status;

// Re-export the main types for convenience
pub use engine::{ChoreographyEngine, ChoreographyState};
pub use events::{EventBus, EventPublisher, TriggerEvent};
pub use gesture::{GesturePath, PathSegment};
pub use model::{ChoreographyConfig, Circle, Point, RenderState, ScreenMetrics, TargetPoint};
pub use platform::{GestureSink, MetricsProvider, Renderer};
pub use status::{StatusBoard, StatusMessage};

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
