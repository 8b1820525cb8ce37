use fixstep_core::State;

use super::Method;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed every step of the grid.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a fixed-step integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// The method used to advance the state.
    pub method: Method,

    /// The final state.
    pub state: State,

    /// Number of integration steps completed.
    pub steps: usize,

    /// Number of times the equation was evaluated.
    pub evaluations: usize,
}

impl Solution {
    pub(super) fn new(status: Status, method: Method, state: State, steps: usize) -> Self {
        Self {
            status,
            method,
            state,
            steps,
            evaluations: steps * method.evaluations_per_step(),
        }
    }
}
