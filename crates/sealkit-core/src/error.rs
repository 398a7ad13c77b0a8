//! Error handling for SealKit
//!
//! Provides error types for every layer that participates in a render:
//! - Stamp errors (invalid parameters, degenerate geometry, missing fonts)
//! - I/O and image encoding errors raised by exporters
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Stamp error type
///
/// Raised by the geometry utilities, the layout functions and the composer.
/// Any of these aborts the current render before a drawing command is issued.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StampError {
    /// A render parameter is out of range or produces degenerate geometry
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A geometric function was evaluated outside its domain
    #[error("Domain error: {reason}")]
    DomainError {
        /// Description of the degenerate input.
        reason: String,
    },

    /// No usable font face could be resolved for glyph drawing
    #[error("No usable font face for family '{family}'")]
    FontUnavailable {
        /// The requested family name.
        family: String,
    },
}

impl StampError {
    /// Build an `InvalidParameter` error
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Build a `DomainError`
    pub fn domain(reason: impl Into<String>) -> Self {
        Self::DomainError {
            reason: reason.into(),
        }
    }
}

/// Main error type for SealKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Stamp rendering error
    #[error(transparent)]
    Stamp(#[from] StampError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an invalid parameter error
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::Stamp(StampError::InvalidParameter { .. }))
    }

    /// Check if this is a geometry domain error
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Error::Stamp(StampError::DomainError { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
