//! Event dispatcher feeding the choreography engine.
//!
//! Called from the host loop on every timer fire. Drains all pending
//! events and applies them in publish order.
//!
//! ```text
//! EventBus::drain() → dispatch_events() → ChoreographyEngine::handle()
//! ```

use crate::engine::ChoreographyEngine;
use crate::events::{EventBus, TriggerEvent};
use crate::platform::{GestureSink, MetricsProvider, Renderer};

/// Apply every pending event at `now_ms`. Returns how many were applied.
pub fn dispatch_events<M, R, S>(
    engine: &mut ChoreographyEngine<M, R, S>,
    bus: &EventBus,
    now_ms: f64,
) -> usize
where
    M: MetricsProvider,
    R: Renderer,
    S: GestureSink,
{
    let events = bus.drain();
    let count = events.len();
    for event in events {
        dispatch_single_event(engine, event, now_ms);
    }
    count
}

/// One host frame: pending events first, then the periodic tick.
pub fn run_frame<M, R, S>(engine: &mut ChoreographyEngine<M, R, S>, bus: &EventBus, now_ms: f64)
where
    M: MetricsProvider,
    R: Renderer,
    S: GestureSink,
{
    dispatch_events(engine, bus, now_ms);
    engine.tick(now_ms);
}

fn dispatch_single_event<M, R, S>(
    engine: &mut ChoreographyEngine<M, R, S>,
    event: TriggerEvent,
    now_ms: f64,
) where
    M: MetricsProvider,
    R: Renderer,
    S: GestureSink,
{
    if event.starts_gesture() {
        log::info!("Dispatching: {}", event.description());
    } else if !matches!(event, TriggerEvent::Tick) {
        log::debug!("Dispatching: {}", event.description());
    }
    engine.handle(event, now_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ChoreographyState;
    use crate::model::ChoreographyConfig;
    use crate::platform::headless::{FixedMetrics, RecordingRenderer, RecordingSink};

    fn engine() -> ChoreographyEngine<FixedMetrics, RecordingRenderer, RecordingSink> {
        ChoreographyEngine::new(
            ChoreographyConfig::default(),
            FixedMetrics::new(1080, 2400),
            RecordingRenderer::new(),
            RecordingSink::new(),
        )
    }

    #[test]
    fn test_events_applied_in_order() {
        let mut engine = engine();
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(TriggerEvent::Arm);
        publisher.publish(TriggerEvent::Throw);

        assert_eq!(dispatch_events(&mut engine, &bus, 0.0), 2);
        assert_eq!(engine.state(), ChoreographyState::Gesturing);
        assert_eq!(engine.sink().dispatched().len(), 1);
    }

    #[test]
    fn test_throw_before_arm_is_ignored() {
        let mut engine = engine();
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(TriggerEvent::Throw);
        publisher.publish(TriggerEvent::Arm);

        dispatch_events(&mut engine, &bus, 0.0);
        assert_eq!(engine.state(), ChoreographyState::Armed);
        assert!(engine.sink().dispatched().is_empty());
    }

    #[test]
    fn test_run_frame_ticks_after_events() {
        let mut engine = engine();
        let bus = EventBus::new();
        bus.publisher().publish(TriggerEvent::Arm);
        bus.publisher().publish(TriggerEvent::Throw);

        run_frame(&mut engine, &bus, 0.0);
        run_frame(&mut engine, &bus, 10_000.0);
        assert_eq!(engine.state(), ChoreographyState::Idle);
    }
}
