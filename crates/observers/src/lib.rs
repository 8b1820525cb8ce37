//! Reusable observers for fixstep solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose events carry a [`State`].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasState`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — logs the state through the `log` facade
//! - [`StopWhen`] — stops integration once a predicate on the state holds
//!
//! [`Observer`]: fixstep_core::Observer
//! [`State`]: fixstep_core::State
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logging;
mod stop;

pub use logging::LogObserver;
pub use stop::StopWhen;
