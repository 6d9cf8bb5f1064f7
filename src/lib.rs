//! A blackjack basic-strategy advisor with optional `no_std` support.
//!
//! The crate evaluates hands, recommends an action for a player hand against
//! the dealer's up card, and drives a manual round where every card is
//! supplied by the caller.
//!
//! # Example
//!
//! ```
//! use bjadvisor::{Action, Rank, advise, evaluate};
//!
//! let hand = [Rank::King, Rank::Ace];
//! assert_eq!(evaluate(&hand), 21);
//! assert_eq!(advise(&hand, Rank::Nine, true), Action::Stand);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod shell;
pub mod strategy;

// Re-export main types
pub use card::{Rank, parse_hand};
#[cfg(feature = "std")]
pub use error::ShellError;
pub use error::{CardError, RoundError};
pub use hand::{Hand, evaluate, evaluate_symbols, is_natural, pair};
pub use options::{DealerStand, NineSplitRule, PlayerBustRule, TableOptions};
pub use result::{Outcome, RoundResult};
pub use round::{Round, RoundState};
#[cfg(feature = "std")]
pub use shell::Shell;
pub use strategy::{Action, Advisor, advise, advise_symbols};
