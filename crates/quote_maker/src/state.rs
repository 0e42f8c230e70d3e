//! Quoting-cycle state machine.

use crate::MakerError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where the maker is in its quoting cycle.
///
/// The cycle runs Idle → Quoting → Hedging → Idle; a cycle with no delta
/// drift may return from Quoting straight to Idle. Transitions are explicit
/// and checked; the scheduler that drives them lives outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MakerState {
    /// Waiting for the next cycle trigger.
    #[default]
    Idle,
    /// Building or refreshing the quote set.
    Quoting,
    /// Reacting to delta drift.
    Hedging,
}

impl MakerState {
    fn name(&self) -> &'static str {
        match self {
            MakerState::Idle => "Idle",
            MakerState::Quoting => "Quoting",
            MakerState::Hedging => "Hedging",
        }
    }

    /// Idle → Quoting.
    ///
    /// # Errors
    /// [`MakerError::InvalidTransition`] unless currently idle.
    pub fn start_quoting(&mut self) -> Result<(), MakerError> {
        match self {
            MakerState::Idle => {
                debug!("maker cycle: Idle -> Quoting");
                *self = MakerState::Quoting;
                Ok(())
            }
            other => Err(MakerError::InvalidTransition {
                from: other.name(),
                to: "Quoting",
            }),
        }
    }

    /// Quoting → Hedging.
    ///
    /// # Errors
    /// [`MakerError::InvalidTransition`] unless currently quoting.
    pub fn start_hedging(&mut self) -> Result<(), MakerError> {
        match self {
            MakerState::Quoting => {
                debug!("maker cycle: Quoting -> Hedging");
                *self = MakerState::Hedging;
                Ok(())
            }
            other => Err(MakerError::InvalidTransition {
                from: other.name(),
                to: "Hedging",
            }),
        }
    }

    /// Quoting or Hedging → Idle, ending the cycle.
    ///
    /// # Errors
    /// [`MakerError::InvalidTransition`] when already idle.
    pub fn finish_cycle(&mut self) -> Result<(), MakerError> {
        match self {
            MakerState::Quoting | MakerState::Hedging => {
                debug!(from = self.name(), "maker cycle: -> Idle");
                *self = MakerState::Idle;
                Ok(())
            }
            MakerState::Idle => Err(MakerError::InvalidTransition {
                from: "Idle",
                to: "Idle",
            }),
        }
    }
}
