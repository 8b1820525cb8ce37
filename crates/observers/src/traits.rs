//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and reused across solvers.
//!
//! # Example
//!
//! ```rust
//! use fixstep_core::Observer;
//! use fixstep_observers::traits::{CanStopEarly, HasState};
//!
//! struct Ceiling {
//!     max_y: f64,
//! }
//!
//! impl<E: HasState, A: CanStopEarly> Observer<E, A> for Ceiling {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.state().y > self.max_y).then(A::stop_early)
//!     }
//! }
//! ```

use fixstep_core::State;
use fixstep_solvers::ode;

/// An event that carries the solver's current state.
pub trait HasState {
    /// Returns the step number, 0 for the initial state.
    fn step(&self) -> usize;

    /// Returns the state at this step.
    fn state(&self) -> State;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasState for ode::Event {
    fn step(&self) -> usize {
        self.step
    }

    fn state(&self) -> State {
        self.state
    }
}

impl CanStopEarly for ode::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
