//! Core traits and types for fixed-step ODE integration.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Equation`] — the right-hand side `f(x, y)` of `dy/dx = f(x, y)`
//! - [`State`] — the `(x, y)` pair advanced by a solver
//! - [`Grid`] — validated bounds and step size with a fixed step count
//! - [`Observer`] — receives solver events and optionally returns control actions

pub mod equation;
mod grid;
mod observer;
mod state;

pub use equation::Equation;
pub use grid::{DEFAULT_STEP_SIZE, Grid, GridError};
pub use observer::Observer;
pub use state::State;
