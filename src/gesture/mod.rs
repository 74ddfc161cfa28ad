//! Gesture strokes and their timing.
//!
//! - [`path`]: `PathSegment`, `GesturePath` and the hold / spin-and-throw builders
//! - [`timing`]: speed-to-duration mapping and the playback progress clock

pub mod path;
pub mod timing;

pub use path::{build_hold_path, build_spin_and_throw_path, GesturePath, HoldPlan, PathSegment};
pub use timing::{spin_duration_ms, Playback, PlaybackId, SpinTiming};
