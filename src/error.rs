//! Error taxonomy for the decision engine.
//!
//! Only genuine faults are errors here. Running out of weighings is a valid
//! terminal outcome and is reported as [`Resolution::Unsolvable`], never as
//! an `Err`.
//!
//! [`Resolution::Unsolvable`]: crate::solver::Resolution::Unsolvable

use thiserror::Error;

use crate::coin::Marker;

/// Fatal faults of the decision engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolverError {
    /// A pool held fewer coins than a computed split required.
    ///
    /// Signals a desynchronisation between the partition arithmetic and the
    /// registry — an invariant violation, not a recoverable condition.
    #[error("insufficient coins in {marker} pool: requested {requested}, available {available}")]
    InsufficientCoins {
        /// Pool the coins were requested from.
        marker: Marker,
        /// Number of coins the split asked for.
        requested: usize,
        /// Number of coins actually present.
        available: usize,
    },

    /// The puzzle was configured with an unusable coin count.
    #[error("invalid coin count: {0} (must be at least 1)")]
    InvalidCoinCount(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_pool() {
        let err = SolverError::InsufficientCoins {
            marker: Marker::Standard,
            requested: 3,
            available: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("standard"), "msg={msg}");
        assert!(msg.contains("requested 3"), "msg={msg}");
        assert!(msg.contains("available 1"), "msg={msg}");
    }

    #[test]
    fn test_invalid_coin_count_message() {
        let err = SolverError::InvalidCoinCount(0);
        assert!(err.to_string().contains('0'));
    }
}
