//! Trigger events consumed by the choreography engine.
//!
//! These are the discrete inputs from the host: trigger buttons, the
//! target control, and the periodic tick. Pure Rust, fully testable.

use crate::model::Point;

/// Inputs to the engine's single transition function.
///
/// Events flow from producers (buttons, sliders, the host timer) through
/// the EventBus to the dispatcher, which feeds them to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerEvent {
    // === Triggers ===
    /// Show the circle and wait for a throw.
    Arm,

    /// Start the spin-and-throw stroke.
    Throw,

    /// Abandon whatever is playing and go idle.
    Cancel,

    // === Hold ===
    /// Long near-stationary touch at a point.
    HoldAt(Point),

    /// Long near-stationary touch at the circle centre.
    HoldAtCenter,

    /// The host terminated the hold (e.g. service disabled).
    ReleaseHold,

    // === Control ===
    /// Target slider moved.
    TargetControl { value: f64, max: f64 },

    // === Timer ===
    /// Periodic sample: advances progress and status expiry.
    Tick,
}

impl TriggerEvent {
    /// True for events that may start a new gesture.
    pub fn starts_gesture(&self) -> bool {
        matches!(
            self,
            TriggerEvent::Throw | TriggerEvent::HoldAt(_) | TriggerEvent::HoldAtCenter
        )
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            TriggerEvent::Arm => "Arm",
            TriggerEvent::Throw => "Spin and throw",
            TriggerEvent::Cancel => "Cancel",
            TriggerEvent::HoldAt(_) => "Hold at point",
            TriggerEvent::HoldAtCenter => "Hold at centre",
            TriggerEvent::ReleaseHold => "Release hold",
            TriggerEvent::TargetControl { .. } => "Target control changed",
            TriggerEvent::Tick => "Tick",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_starting_events() {
        assert!(TriggerEvent::Throw.starts_gesture());
        assert!(TriggerEvent::HoldAtCenter.starts_gesture());
        assert!(TriggerEvent::HoldAt(Point::new(1.0, 2.0)).starts_gesture());
    }

    #[test]
    fn test_non_gesture_events() {
        assert!(!TriggerEvent::Arm.starts_gesture());
        assert!(!TriggerEvent::Cancel.starts_gesture());
        assert!(!TriggerEvent::Tick.starts_gesture());
        assert!(!TriggerEvent::ReleaseHold.starts_gesture());
        assert!(!TriggerEvent::TargetControl { value: 1.0, max: 2.0 }.starts_gesture());
    }

    #[test]
    fn test_event_debug() {
        let debug_str = format!("{:?}", TriggerEvent::Arm);
        assert_eq!(debug_str, "Arm");
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            TriggerEvent::Arm,
            TriggerEvent::Throw,
            TriggerEvent::Cancel,
            TriggerEvent::HoldAt(Point::default()),
            TriggerEvent::HoldAtCenter,
            TriggerEvent::ReleaseHold,
            TriggerEvent::TargetControl { value: 0.0, max: 1.0 },
            TriggerEvent::Tick,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
