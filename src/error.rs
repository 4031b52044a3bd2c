//! Error types for token parsing.

use thiserror::Error;

/// Errors that can occur when decoding a card token or promoting a
/// [`PartialCard`](crate::PartialCard) into a [`Card`](crate::Card).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Token has no `#` separator.
    #[error("token has no `#` separator")]
    MissingSeparator,
    /// Card id is not a decimal integer.
    #[error("card id is not a decimal integer")]
    InvalidId,
    /// Value is not a known rank label.
    #[error("value is not a known rank label")]
    UnknownValue,
    /// Suit letter is not in the suit catalog.
    #[error("suit letter is not in the suit catalog")]
    UnknownSuit,
    /// A required card field is missing.
    #[error("a required card field is missing")]
    IncompleteCard,
}
