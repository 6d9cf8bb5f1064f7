//! Error types for advisor operations.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors raised while reading cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The symbol is not one of 2-10, J, Q, K, A.
    #[error("unknown card: {0}")]
    UnknownCard(String),
}

/// Errors raised by the round driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
    /// The initial player hand has fewer than two cards.
    #[error("the initial hand needs at least two cards")]
    IncompleteHand,
}

/// Errors raised by the console shell.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The round driver rejected a call.
    #[error(transparent)]
    Round(#[from] RoundError),
}
