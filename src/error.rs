//! Error types for pin table construction.
//!
//! The hash functions themselves are total and never fail; errors arise only
//! when building a custom [`PinTable`](crate::pins::PinTable) from entries.

use thiserror::Error;

/// The error type for oxihash operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OxiHashError {
    /// A pinned code is not exactly two bytes long.
    #[error("pinned code {code:?} is {length} bytes, expected exactly 2")]
    InvalidCode {
        /// The offending code, lossily decoded for display.
        code: String,
        /// Actual byte length of the code.
        length: usize,
    },

    /// The same code was given two different bucket values.
    #[error("pinned code {code:?} maps to both bucket {existing} and bucket {conflicting}")]
    ConflictingCode {
        /// The duplicated code, lossily decoded for display.
        code: String,
        /// Bucket already recorded for the code.
        existing: u32,
        /// Conflicting bucket from the later entry.
        conflicting: u32,
    },
}

/// Result type alias for oxihash operations.
pub type Result<T> = std::result::Result<T, OxiHashError>;

impl OxiHashError {
    /// Create an invalid code error.
    pub fn invalid_code(code: &[u8]) -> Self {
        Self::InvalidCode {
            code: String::from_utf8_lossy(code).into_owned(),
            length: code.len(),
        }
    }

    /// Create a conflicting code error.
    pub fn conflicting_code(code: &[u8], existing: u32, conflicting: u32) -> Self {
        Self::ConflictingCode {
            code: String::from_utf8_lossy(code).into_owned(),
            existing,
            conflicting,
        }
    }
}
