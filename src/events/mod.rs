//! Event queue in front of the choreography engine.
//!
//! The engine is single-owner and not reentrant. Producers on any thread
//! publish [`TriggerEvent`]s; the owner drains them and applies them in
//! order, so engine mutations are always serialized.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Triggers   │     │   Target    │     │ Host timer  │
//! │ arm / throw │     │   control   │     │   (tick)    │
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()         │ publish()
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! │                   (mpsc channel)                    │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ drain()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │          Dispatcher → ChoreographyEngine            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! - [`types`]: Event definitions (`TriggerEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::TriggerEvent;
