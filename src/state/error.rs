use super::event::GestureEvent;
use super::model::GestureState;
use thiserror::Error;

pub type StateResult<T> = std::result::Result<T, StateError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("invalid gesture transition: from {from:?} using event {event:?}")]
    InvalidGestureTransition {
        from: GestureState,
        event: GestureEvent,
    },
}
