use thiserror::Error;

/// Step size used by [`Grid::with_default_step`].
pub const DEFAULT_STEP_SIZE: f64 = 1e-6;

/// A validated integration interval with a fixed step size.
///
/// The number of steps is derived once, at construction, as
/// `round((upper - lower) / step_size)` using round-half-up. Solvers iterate
/// exactly [`Grid::steps`] times and never compare `x` against `upper`, so
/// accumulated floating-point drift in `x` cannot change the iteration count.
///
/// When the interval is not an integer multiple of the step size, integration
/// ends at [`Grid::end`] rather than exactly at `upper`. The two differ by at
/// most half a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    lower: f64,
    upper: f64,
    step_size: f64,
    steps: usize,
}

/// Errors that can occur when validating a [`Grid`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("step size must be finite and positive, got {0}")]
    StepSize(f64),

    #[error("bounds must be finite, got [{lower}, {upper}]")]
    NonFiniteBound { lower: f64, upper: f64 },

    #[error("lower bound {lower} exceeds upper bound {upper}")]
    Reversed { lower: f64, upper: f64 },

    #[error("interval requires too many steps ({quotient} at step size {step_size})")]
    TooManySteps { quotient: f64, step_size: f64 },
}

impl Grid {
    /// Creates a grid spanning `[lower, upper]` with the given step size.
    ///
    /// # Errors
    ///
    /// Returns an error if the step size is not finite and positive, if either
    /// bound is not finite, if `lower > upper`, or if the step count does not
    /// fit in a `usize`.
    pub fn new(lower: f64, upper: f64, step_size: f64) -> Result<Self, GridError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(GridError::StepSize(step_size));
        }
        if !lower.is_finite() || !upper.is_finite() {
            return Err(GridError::NonFiniteBound { lower, upper });
        }
        if lower > upper {
            return Err(GridError::Reversed { lower, upper });
        }

        let quotient = ((upper - lower) / step_size).round();

        // usize::MAX as f64 rounds up to 2^64, which itself does not fit.
        #[allow(clippy::cast_precision_loss)]
        let limit = usize::MAX as f64;
        if !quotient.is_finite() || quotient >= limit {
            return Err(GridError::TooManySteps {
                quotient,
                step_size,
            });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = quotient as usize;

        Ok(Self {
            lower,
            upper,
            step_size,
            steps,
        })
    }

    /// Creates a grid spanning `[lower, upper]` with [`DEFAULT_STEP_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Grid::new`].
    pub fn with_default_step(lower: f64, upper: f64) -> Result<Self, GridError> {
        Self::new(lower, upper, DEFAULT_STEP_SIZE)
    }

    /// Returns the lower bound, where integration starts.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the requested upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the step size.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the number of steps a solver takes across this grid.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns `lower + steps * step_size`, the nominal `x` where integration stops.
    #[must_use]
    pub fn end(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let steps = self.steps as f64;
        self.lower + steps * self.step_size
    }
}
