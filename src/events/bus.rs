//! Thread-safe event bus using mpsc channels.
//!
//! The bus serializes engine input:
//! - Any thread can publish events via `EventPublisher::publish()`
//! - The engine's owner polls for events via `EventBus::drain()`

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::TriggerEvent;

/// Multi-producer, single-consumer queue in front of the engine.
///
/// # Example
///
/// ```
/// use arcthrow::events::{EventBus, TriggerEvent};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(TriggerEvent::Arm);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<TriggerEvent>,
    receiver: Receiver<TriggerEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<TriggerEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus holds its own sender, so Disconnected cannot happen
            // while it is alive.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events, in publish order.
    pub fn drain(&self) -> Vec<TriggerEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<TriggerEvent>,
}

impl EventPublisher {
    /// Queue an event. Silently dropped if the bus is gone.
    pub fn publish(&self, event: TriggerEvent) {
        let _ = self.sender.send(event);
    }
}
