use log::Level;

use fixstep_core::{Observer, State};

use crate::traits::HasState;

/// Logs solver states through the [`log`] facade.
///
/// Every `stride`-th step is logged at the configured level, along with the
/// initial state (step 0). The observer never requests an action.
///
/// No output appears unless the application installs a logger.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    level: Level,
    stride: usize,
}

impl LogObserver {
    /// Creates an observer that logs every step at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level, stride: 1 }
    }

    /// Logs only every `stride`-th step. A stride of zero is treated as one.
    #[must_use]
    pub fn every(self, stride: usize) -> Self {
        Self {
            stride: stride.max(1),
            ..self
        }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Trace)
    }
}

impl<E: HasState, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        let step = event.step();
        if step % self.stride == 0 {
            let State { x, y } = event.state();
            log::log!(self.level, "step {step}: x = {x}, y = {y}");
        }
        None
    }
}
