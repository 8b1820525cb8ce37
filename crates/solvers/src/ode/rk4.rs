//! Classical fourth-order Runge-Kutta (RK4).
//!
//! ```text
//! k1 = f(x_n, y_n)
//! k2 = f(x_n + h/2, y_n + h/2 * k1)
//! k3 = f(x_n + h/2, y_n + h/2 * k2)
//! k4 = f(x_n + h, y_n + h * k3)
//!
//! y_{n+1} = y_n + h/6 * (k1 + 2*k2 + 2*k3 + k4)
//! ```
//!
//! Four evaluations per step with global error O(h⁴). Halving the step size
//! reduces the error by roughly a factor of sixteen.

use fixstep_core::{Equation, Grid, Observer, State};

use super::{Action, Error, Event, Method, Solution};

/// Advances `state` by one RK4 step of size `h`.
///
/// # Errors
///
/// Returns the equation's error if any of the four evaluations fails.
pub fn step<E: Equation>(equation: &E, state: State, h: f64) -> Result<State, E::Error> {
    let State { x, y } = state;
    let half = 0.5 * h;

    let k1 = equation.call(x, y)?;
    let k2 = equation.call(x + half, y + half * k1)?;
    let k3 = equation.call(x + half, y + half * k2)?;
    let k4 = equation.call(x + h, y + h * k3)?;

    Ok(State::new(
        x + h,
        y + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4),
    ))
}

/// Approximates `y(upper)` using classical Runge-Kutta.
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
    super::integrate(equation, Method::Rk4, initial_value, lower, upper, step_size)
}

/// Integrates across `grid` using classical Runge-Kutta.
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
    super::solve(equation, Method::Rk4, initial_value, grid, observer)
}
