use std::fmt;

use fixstep_core::{Equation, State};

use super::{euler, rk2, rk4};

/// A fixed-step update rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Forward Euler, first order.
    Euler,

    /// Midpoint Runge-Kutta, second order.
    Rk2,

    /// Classical Runge-Kutta, fourth order.
    Rk4,
}

impl Method {
    /// Every available method, lowest order first.
    pub const ALL: [Self; 3] = [Self::Euler, Self::Rk2, Self::Rk4];

    /// Returns the order of the global truncation error, `p` in `O(h^p)`.
    #[must_use]
    pub fn order(self) -> u32 {
        match self {
            Self::Euler => 1,
            Self::Rk2 => 2,
            Self::Rk4 => 4,
        }
    }

    /// Returns the number of equation evaluations per step.
    #[must_use]
    pub fn evaluations_per_step(self) -> usize {
        match self {
            Self::Euler => 1,
            Self::Rk2 => 2,
            Self::Rk4 => 4,
        }
    }

    /// Advances `state` by one step of size `h`.
    ///
    /// # Errors
    ///
    /// Returns the equation's error if any evaluation fails.
    pub fn step<E: Equation>(
        self,
        equation: &E,
        state: State,
        h: f64,
    ) -> Result<State, E::Error> {
        match self {
            Self::Euler => euler::step(equation, state, h),
            Self::Rk2 => rk2::step(equation, state, h),
            Self::Rk4 => rk4::step(equation, state, h),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Euler => "euler",
            Self::Rk2 => "rk2",
            Self::Rk4 => "rk4",
        };
        f.write_str(name)
    }
}
