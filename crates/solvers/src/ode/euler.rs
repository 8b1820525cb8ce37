//! Forward Euler.
//!
//! ```text
//! y_{n+1} = y_n + h * f(x_n, y_n)
//! ```
//!
//! One evaluation per step. The local truncation error is O(h²) and the
//! global error is O(h), so halving the step size roughly halves the error.

use fixstep_core::{Equation, Grid, Observer, State};

use super::{Action, Error, Event, Method, Solution};

/// Advances `state` by one forward Euler step of size `h`.
///
/// # Errors
///
/// Returns the equation's error if the evaluation fails.
pub fn step<E: Equation>(equation: &E, state: State, h: f64) -> Result<State, E::Error> {
    let State { x, y } = state;
    let slope = equation.call(x, y)?;

    Ok(State::new(x + h, y + h * slope))
}

/// Approximates `y(upper)` using forward Euler.
///
/// # Errors
///
/// Returns [`Error::Grid`] if the bounds or step size are invalid, or
/// [`Error::Equation`] if any evaluation of the equation fails.
pub fn integrate<E: Equation>(
    equation: &E,
    initial_value: f64,
    lower: f64,
    upper: f64,
    step_size: f64,
) -> Result<f64, Error<E::Error>> {
    super::integrate(equation, Method::Euler, initial_value, lower, upper, step_size)
}

/// Integrates across `grid` using forward Euler.
///
/// # Errors
///
/// Returns [`Error::Equation`] if any evaluation of the equation fails.
pub fn solve<E, Obs>(
    equation: &E,
    initial_value: f64,
    grid: &Grid,
    observer: Obs,
) -> Result<Solution, Error<E::Error>>
where
    E: Equation,
    Obs: Observer<Event, Action>,
{
    super::solve(equation, Method::Euler, initial_value, grid, observer)
}
