//! The right-hand side of a scalar ODE.
//!
//! An [`Equation`] evaluates `dy/dx = f(x, y)`. Solvers call it repeatedly,
//! so implementations should be free of observable side effects.
//!
//! Closures are adapted with [`from_fn`] (infallible) or [`try_from_fn`]
//! (fallible):
//!
//! ```
//! use fixstep_core::{Equation, equation};
//!
//! let growth = equation::from_fn(|_x, y| 0.5 * y);
//! assert_eq!(growth.call(0.0, 2.0), Ok(1.0));
//!
//! let log_rate = equation::try_from_fn(|x: f64, _y| {
//!     if x > 0.0 {
//!         Ok(x.ln())
//!     } else {
//!         Err(std::fmt::Error)
//!     }
//! });
//! assert!(log_rate.call(-1.0, 0.0).is_err());
//! ```

use std::convert::Infallible;

/// A scalar ODE right-hand side `f(x, y) = dy/dx`.
pub trait Equation {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the derivative `dy/dx` at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be evaluated, for
    /// example when `(x, y)` lies outside the equation's domain.
    fn call(&self, x: f64, y: f64) -> Result<f64, Self::Error>;
}

impl<T: Equation + ?Sized> Equation for &T {
    type Error = T::Error;

    fn call(&self, x: f64, y: f64) -> Result<f64, Self::Error> {
        (**self).call(x, y)
    }
}

/// An [`Equation`] backed by an infallible closure.
///
/// Created by [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnEquation<F>(F);

impl<F> Equation for FnEquation<F>
where
    F: Fn(f64, f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64, y: f64) -> Result<f64, Self::Error> {
        Ok((self.0)(x, y))
    }
}

/// An [`Equation`] backed by a closure that may fail.
///
/// Created by [`try_from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct TryFnEquation<F>(F);

impl<F, E> Equation for TryFnEquation<F>
where
    F: Fn(f64, f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64, y: f64) -> Result<f64, Self::Error> {
        (self.0)(x, y)
    }
}

/// Wraps an infallible closure `f(x, y)` as an [`Equation`].
pub fn from_fn<F>(f: F) -> FnEquation<F>
where
    F: Fn(f64, f64) -> f64,
{
    FnEquation(f)
}

/// Wraps a fallible closure `f(x, y)` as an [`Equation`].
///
/// The closure's error is returned unchanged by every solver.
pub fn try_from_fn<F, E>(f: F) -> TryFnEquation<F>
where
    F: Fn(f64, f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    TryFnEquation(f)
}
