//! Error types for the network crate.

use qit_sim::SimError;
use thiserror::Error;

/// Errors produced by network operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum NetError {
    /// Message sender is not registered.
    #[error("Sender not found: {0}")]
    UnknownSender(String),

    /// Message receiver is not registered.
    #[error("Receiver not found: {0}")]
    UnknownReceiver(String),

    /// No computer with this name is registered.
    #[error("Computer not found: {0}")]
    UnknownComputer(String),

    /// A computer with this name is already registered.
    #[error("Computer '{0}' already exists")]
    DuplicateComputer(String),

    /// The engine rejected an operation.
    #[error(transparent)]
    Sim(#[from] SimError),
}

/// Result type for network operations.
pub type NetResult<T> = Result<T, NetError>;
