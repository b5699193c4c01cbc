//! Error types for enigma-core.
//!
//! All errors are deterministic functions of the input, so none are retryable.
//! No external dependencies - implements `std::error::Error` manually.
//!
//! # Error Categories
//!
//! - **Configuration errors**: `RotorCount`, `PositionCount`, `RingSettingCount`, `MissingReflector`
//! - **Input errors**: `InvalidInput`
//!
//! A malformed plugboard specification is deliberately not an error; the
//! plugboard degrades to the identity mapping instead.

use std::error::Error as StdError;
use std::fmt;

/// Result type alias for enigma-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during enigma-core operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ==================== Configuration Errors ====================
    /// The configuration does not name exactly three rotors.
    RotorCount {
        /// Number of rotor names supplied.
        count: usize,
    },

    /// The configuration does not carry exactly three rotor positions.
    PositionCount {
        /// Number of positions supplied.
        count: usize,
    },

    /// The configuration does not carry exactly three ring settings.
    RingSettingCount {
        /// Number of ring settings supplied.
        count: usize,
    },

    /// The reflector name is empty.
    MissingReflector,

    // ==================== Input Errors ====================
    /// Character-level encryption was given something other than one character.
    InvalidInput {
        /// Number of characters supplied.
        len: usize,
    },
}

impl Error {
    /// Whether this error was raised while validating a machine configuration.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Error::InvalidInput { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RotorCount { count } => {
                write!(f, "exactly 3 rotors must be specified, got {}", count)
            }
            Error::PositionCount { count } => {
                write!(f, "exactly 3 rotor positions must be specified, got {}", count)
            }
            Error::RingSettingCount { count } => {
                write!(f, "exactly 3 ring settings must be specified, got {}", count)
            }
            Error::MissingReflector => write!(f, "reflector name must be specified"),
            Error::InvalidInput { len } => {
                write!(f, "input must be a single character, got {} characters", len)
            }
        }
    }
}

impl StdError for Error {}
