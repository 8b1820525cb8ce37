use fixstep_core::State;

/// Event emitted by a fixed-step solver.
///
/// Step 0 carries the initial state before any integration.
/// Steps 1..N are emitted after each completed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// The state after this step.
    pub state: State,
}
