//! Error types for babel-core

use thiserror::Error;

/// Result type alias for babel-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in babel-core operations
///
/// All variants are precondition violations surfaced synchronously to the
/// caller; nothing is retried inside the core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Search text was empty
    #[error("text should not be empty")]
    EmptyText,

    /// Search text exceeds one page
    #[error("text exceeds 3200 character limit")]
    TextTooLong,

    /// A character is not part of the page alphabet
    #[error("text contains invalid character {character:?}, supported charset: {charset:?}")]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// The full supported charset
        charset: &'static str,
    },

    /// Dotted address did not split into the expected number of parts
    #[error("address is not of valid length, expected {expected}, got {got}")]
    InvalidAddressFormat {
        /// Number of parts a dotted address must have
        expected: usize,
        /// Number of parts found
        got: usize,
    },

    /// Hexagon identifier is not a lowercase base-36 string
    #[error("invalid hexagon: must be a lowercase base-36 string")]
    InvalidHexagon,

    /// A numeric address part did not parse as a signed decimal
    #[error("failed to parse {field}: {source}")]
    InvalidField {
        /// Name of the address field
        field: &'static str,
        /// The underlying parse failure
        source: std::num::ParseIntError,
    },

    /// A numeric address part lies outside its closed interval
    #[error("{field} must be between {min} and {max}, got {got}")]
    OutOfRange {
        /// Name of the address field
        field: &'static str,
        /// Lower bound (inclusive)
        min: i64,
        /// Upper bound (inclusive)
        max: i64,
        /// The rejected value
        got: i64,
    },

    /// Pagination offset was negative
    #[error("offset cannot be negative")]
    OffsetNegative,

    /// Pagination limit was zero or negative
    #[error("limit must be positive")]
    LimitNonPositive,
}
