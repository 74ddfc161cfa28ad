//! Choreography engine.
//!
//! - [`state`]: the `ChoreographyState` enum
//! - [`machine`]: `ChoreographyEngine`, the single owner of all mutable state

pub mod machine;
pub mod state;

pub use machine::ChoreographyEngine;
pub use state::ChoreographyState;
