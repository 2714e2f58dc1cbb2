//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Result of reducing one intent: the next state plus the effects the
/// runtime has to carry out, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction<S, E> {
    pub state: S,
    pub effects: Vec<E>,
}

impl<S, E> Reduction<S, E> {
    /// A transition with no side effects.
    pub fn pure(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(state: S, effect: E) -> Self {
        Self {
            state,
            effects: vec![effect],
        }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Effects).
/// Effects are data; executing them is the runtime's job.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Side effects requested by a transition.
    type Effect;

    /// Process an intent and return the new state with its effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Reduction<Self::State, Self::Effect>;
}
