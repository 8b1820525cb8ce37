//! Fixed-step solvers for scalar ordinary differential equations.
//!
//! # Modules
//!
//! - [`ode`] — Euler, midpoint (RK2), and classical Runge-Kutta (RK4)
//!   integration of `dy/dx = f(x, y)` over a [`Grid`]
//!
//! [`Grid`]: fixstep_core::Grid

pub mod ode;
