/// The point `(x, y)` on an approximate solution curve.
///
/// A solver owns its state exclusively and advances it one step at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    /// The independent variable.
    pub x: f64,

    /// The dependent variable at `x`.
    pub y: f64,
}

impl State {
    /// Creates a state at `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
