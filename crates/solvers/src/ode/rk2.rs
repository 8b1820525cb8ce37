//! Midpoint Runge-Kutta (RK2).
//!
//! ```text
//! k1 = f(x_n, y_n)
//! k2 = f(x_n + h/2, y_n + h/2 * k1)
//!
//! y_{n+1} = y_n + h * k2
//! ```
//!
//! Two evaluations per step with global error O(h²).

use fixstep_core::{Equation, Grid, Observer, State};

use super::{Action, Error, Event, Method, Solution};

/// Advances `state` by one midpoint step of size `h`.
///
/// # Errors
///
/// Returns the equation's error if either evaluation fails.
pub fn step<E: Equation>(equation: &E, state: State, h: f64) -> Result<State, E::Error> {
    let State { x, y } = state;
    let half = 0.5 * h;

    let k1 = equation.call(x, y)?;
    let k2 = equation.call(x + half, y + half * k1)?;

    Ok(State::new(x + h, y + h * k2))
}

/// Approximates `y(upper)` using the midpoint method.
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
    super::integrate(equation, Method::Rk2, initial_value, lower, upper, step_size)
}

/// Integrates across `grid` using the midpoint method.
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
    super::solve(equation, Method::Rk2, initial_value, grid, observer)
}
