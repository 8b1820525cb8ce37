/// Control actions supported by the fixed-step solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop integrating and return the state reached so far.
    StopEarly,
}
