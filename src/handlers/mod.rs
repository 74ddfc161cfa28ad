//! Event handlers and dispatching.
//!
//! This module contains the dispatcher that drains the event bus into
//! the choreography engine.

pub mod dispatcher;

pub use dispatcher::{dispatch_events, run_frame};
