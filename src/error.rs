//! Error type shared by design generation and deck assembly.

use serde::{Deserialize, Serialize};

/// Errors raised while generating a design or assembling a deck.
///
/// Generation is deterministic, so none of these are retryable: the input
/// is either valid or it is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum DeckError {
    /// The requested order is not a prime `>= 2`.
    #[error("invalid order {order}: must be a prime >= 2")]
    InvalidOrder {
        /// The rejected order.
        order: u32,
    },

    /// The caller supplied fewer assets than the design has symbols.
    #[error("insufficient symbols: design needs {required}, only {available} supplied")]
    InsufficientSymbols {
        /// Symbols the design requires.
        required: usize,
        /// Assets the caller provided.
        available: usize,
    },

    /// A design failed a structural check.
    #[error("malformed design: {reason}")]
    MalformedDesign {
        /// Which check failed.
        reason: String,
    },

    /// More cards were requested than the design contains.
    #[error("card limit {requested} exceeds the {available} cards in the design")]
    CardLimitExceeded {
        /// Requested card count.
        requested: usize,
        /// Cards available for the chosen order.
        available: usize,
    },

    /// A deck configuration value is out of range.
    #[error("invalid deck config: {reason}")]
    InvalidConfig {
        /// What was wrong.
        reason: String,
    },
}

impl DeckError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDesign {
            reason: reason.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, DeckError>;
