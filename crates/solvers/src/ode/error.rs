use fixstep_core::GridError;
use thiserror::Error;

/// Errors that can occur during fixed-step integration.
///
/// The equation's error type `E` is kept as-is rather than boxed, so callers
/// can match on the exact failure the equation reported.
#[derive(Debug, Error)]
pub enum Error<E> {
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("equation error: {0}")]
    Equation(#[source] E),
}

impl<E> Error<E> {
    /// Returns the equation's error, if that is what caused the failure.
    #[must_use]
    pub fn equation(&self) -> Option<&E> {
        match self {
            Self::Equation(e) => Some(e),
            Self::Grid(_) => None,
        }
    }

    /// Consumes the error and returns the equation's error, if any.
    pub fn into_equation(self) -> Option<E> {
        match self {
            Self::Equation(e) => Some(e),
            Self::Grid(_) => None,
        }
    }
}
