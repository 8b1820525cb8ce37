//! Fixed-step integration of scalar ODEs.
//!
//! Each solver advances `dy/dx = f(x, y)` from `(lower, initial_value)` to the
//! end of a [`Grid`] using a fixed step size `h`:
//!
//! | Method | Evaluations per step | Global error |
//! |--------|----------------------|--------------|
//! | [`euler`] | 1 | O(h) |
//! | [`rk2`] (midpoint) | 2 | O(h²) |
//! | [`rk4`] | 4 | O(h⁴) |
//!
//! The step count is fixed by the grid before integration begins, so every
//! solver performs exactly [`Grid::steps`] iterations regardless of floating
//! point drift in `x`.
//!
//! Non-finite values are not detected: if the equation or the arithmetic
//! produces `NaN` or an infinity, it propagates to the result. If the equation
//! returns an error, integration stops at once and that error is returned in
//! [`Error::Equation`].
//!
//! # Example
//!
//! ```
//! use fixstep_core::equation;
//! use fixstep_solvers::ode::rk4;
//!
//! // dy/dx = y with y(0) = 1, so y(1) = e.
//! let growth = equation::from_fn(|_x, y| y);
//! let y = rk4::integrate(&growth, 1.0, 0.0, 1.0, 1e-3).unwrap();
//!
//! assert!((y - std::f64::consts::E).abs() < 1e-10);
//! ```
//!
//! # Observer Events
//!
//! [`solve`] emits an [`Event`] for the initial state (step 0) and after each
//! completed step. Observers can return [`Action::StopEarly`] to end
//! integration and receive the state reached so far.

mod action;
mod error;
mod event;
mod method;
mod solution;

#[cfg(test)]
mod tests;

pub mod euler;
pub mod rk2;
pub mod rk4;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use method::Method;
pub use solution::{Solution, Status};

use fixstep_core::{Equation, Grid, Observer, State};

/// Integrates `equation` across `grid` with the given method.
///
/// Integration starts at `(grid.lower(), initial_value)` and takes exactly
/// `grid.steps()` steps of size `grid.step_size()`.
///
/// The observer receives an [`Event`] before the first step and after every
/// step. Returning [`Action::StopEarly`] ends integration immediately.
///
/// # Errors
///
/// Returns [`Error::Equation`] with the equation's error, unchanged, if any
/// evaluation fails.
pub fn solve<E, Obs>(
    equation: &E,
    method: Method,
    initial_value: f64,
    grid: &Grid,
    mut observer: Obs,
) -> Result<Solution, Error<E::Error>>
where
    E: Equation,
    Obs: Observer<Event, Action>,
{
    let h = grid.step_size();
    let steps = grid.steps();

    log::debug!(
        "{method}: integrating over [{}, {}] in {steps} steps of {h}",
        grid.lower(),
        grid.upper(),
    );

    let mut state = State::new(grid.lower(), initial_value);

    let event = Event { step: 0, state };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        log::debug!("{method}: stopped by observer before the first step");
        return Ok(Solution::new(Status::StoppedByObserver, method, state, 0));
    }

    for step in 1..=steps {
        state = method.step(equation, state, h).map_err(Error::Equation)?;

        let event = Event { step, state };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::debug!("{method}: stopped by observer at step {step} of {steps}");
            return Ok(Solution::new(
                Status::StoppedByObserver,
                method,
                state,
                step,
            ));
        }
    }

    log::debug!("{method}: reached x = {} with y = {}", state.x, state.y);

    Ok(Solution::new(Status::Complete, method, state, steps))
}

/// Integrates `equation` across `grid` without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::Equation`] if any evaluation of the equation fails.
pub fn solve_unobserved<E: Equation>(
    equation: &E,
    method: Method,
    initial_value: f64,
    grid: &Grid,
) -> Result<Solution, Error<E::Error>> {
    solve(equation, method, initial_value, grid, ())
}

/// Approximates `y(upper)` for `dy/dx = equation(x, y)` with `y(lower) = initial_value`.
///
/// The step count is `round((upper - lower) / step_size)`; see [`Grid`] for
/// how non-integral quotients are handled.
///
/// # Errors
///
/// Returns [`Error::Grid`] if the bounds or step size are invalid, or
/// [`Error::Equation`] if any evaluation of the equation fails.
pub fn integrate<E: Equation>(
    equation: &E,
    method: Method,
    initial_value: f64,
    lower: f64,
    upper: f64,
    step_size: f64,
) -> Result<f64, Error<E::Error>> {
    let grid = Grid::new(lower, upper, step_size)?;
    let solution = solve_unobserved(equation, method, initial_value, &grid)?;
    Ok(solution.state.y)
}
