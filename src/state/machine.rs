use super::error::{StateError, StateResult};
use super::{GestureEvent, GestureState, StateTransition};

#[derive(Debug, Default)]
pub struct GestureMachine {
    state: GestureState,
    last_transition: Option<StateTransition>,
}

impl GestureMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn last_transition(&self) -> Option<StateTransition> {
        self.last_transition
    }

    pub fn can_transition(&self, event: GestureEvent) -> bool {
        self.next_state(event).is_some()
    }

    pub fn next_state(&self, event: GestureEvent) -> Option<GestureState> {
        use GestureEvent::*;
        match (self.state, event) {
            // Hover-triggered begin re-anchors on every motion event.
            (GestureState::Idle | GestureState::Dragging, Begin) => Some(GestureState::Dragging),
            (GestureState::Dragging, Drag) => Some(GestureState::Dragging),
            (GestureState::Idle | GestureState::Dragging, Release) => Some(GestureState::Idle),
            (GestureState::Idle, Drag) => None,
        }
    }

    pub fn transition(&mut self, event: GestureEvent) -> StateResult<GestureState> {
        let from = self.state;
        let next = self.next_state(event).ok_or_else(|| {
            tracing::debug!(from = ?from, event = ?event, "rejected gesture transition");
            StateError::InvalidGestureTransition { from, event }
        })?;

        if next != from {
            tracing::trace!(from = ?from, event = ?event, to = ?next, "gesture transition");
        }
        self.last_transition = Some(StateTransition::new(from, event, next));
        self.state = next;
        Ok(self.state)
    }
}

impl std::fmt::Display for GestureMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GestureState::{:?}", self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_transition_tracks_valid_and_invalid_events() {
        let mut machine = GestureMachine::new();
        assert!(machine.can_transition(GestureEvent::Begin));
        assert!(machine.can_transition(GestureEvent::Release));
        assert!(!machine.can_transition(GestureEvent::Drag));

        let _ = machine
            .transition(GestureEvent::Begin)
            .expect("idle -> dragging should transition");

        assert!(machine.can_transition(GestureEvent::Drag));
        assert!(machine.can_transition(GestureEvent::Begin));
        assert!(machine.can_transition(GestureEvent::Release));
    }

    #[test]
    fn full_gesture_returns_to_idle_and_records_last_transition() {
        let mut machine = GestureMachine::new();
        for event in [
            GestureEvent::Begin,
            GestureEvent::Drag,
            GestureEvent::Drag,
            GestureEvent::Release,
        ] {
            machine.transition(event).expect("gesture should be valid");
        }

        assert_eq!(machine.state(), GestureState::Idle);
        assert_eq!(
            machine.last_transition(),
            Some(StateTransition::new(
                GestureState::Dragging,
                GestureEvent::Release,
                GestureState::Idle
            ))
        );
        assert_eq!(machine.to_string(), "GestureState::Idle");
    }

    #[test]
    fn drag_from_idle_returns_error_without_mutating_state() {
        let mut machine = GestureMachine::new();

        let err = machine
            .transition(GestureEvent::Drag)
            .expect_err("idle -> drag should fail");
        assert_eq!(
            err,
            StateError::InvalidGestureTransition {
                from: GestureState::Idle,
                event: GestureEvent::Drag
            }
        );
        assert_eq!(machine.state(), GestureState::Idle);
        assert!(machine.last_transition().is_none());
    }
}
