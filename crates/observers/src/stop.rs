use fixstep_core::{Observer, State};

use crate::traits::{CanStopEarly, HasState};

/// Stops the solver as soon as a predicate on the state returns `true`.
///
/// The state that triggered the stop is the one reported in the solution.
#[derive(Debug, Clone, Copy)]
pub struct StopWhen<F> {
    predicate: F,
}

impl<F> StopWhen<F>
where
    F: FnMut(State) -> bool,
{
    /// Creates an observer that stops once `predicate` holds.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl StopWhen<fn(State) -> bool> {
    /// Creates an observer that stops once `y` becomes `NaN` or infinite.
    #[must_use]
    pub fn non_finite() -> Self {
        Self::new(|state| !state.y.is_finite())
    }
}

impl<E, A, F> Observer<E, A> for StopWhen<F>
where
    E: HasState,
    A: CanStopEarly,
    F: FnMut(State) -> bool,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (self.predicate)(event.state()).then(A::stop_early)
    }
}
