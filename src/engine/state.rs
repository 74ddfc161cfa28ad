//! Choreography state.

/// Where the engine is in the hold → spin → idle sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChoreographyState {
    /// Nothing armed; overlay may be hidden.
    #[default]
    Idle,
    /// Circle shown, waiting for a throw.
    Armed,
    /// A spin-and-throw stroke is playing.
    Gesturing,
}

impl ChoreographyState {
    pub fn is_idle(&self) -> bool {
        matches!(self, ChoreographyState::Idle)
    }

    pub fn is_gesturing(&self) -> bool {
        matches!(self, ChoreographyState::Gesturing)
    }

    /// Hold gestures may start from these states.
    pub fn accepts_hold(&self) -> bool {
        matches!(self, ChoreographyState::Idle | ChoreographyState::Armed)
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChoreographyState::Idle => "idle",
            ChoreographyState::Armed => "armed",
            ChoreographyState::Gesturing => "gesturing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(ChoreographyState::default(), ChoreographyState::Idle);
    }

    #[test]
    fn test_hold_not_accepted_while_gesturing() {
        assert!(ChoreographyState::Idle.accepts_hold());
        assert!(ChoreographyState::Armed.accepts_hold());
        assert!(!ChoreographyState::Gesturing.accepts_hold());
    }

    #[test]
    fn test_all_states_have_descriptions() {
        for state in [
            ChoreographyState::Idle,
            ChoreographyState::Armed,
            ChoreographyState::Gesturing,
        ] {
            assert!(!state.description().is_empty());
        }
    }
}
