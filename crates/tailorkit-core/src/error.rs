//! Error handling for TailorKit
//!
//! Provides the error types shared by the drafting pipeline:
//! - Drafting errors (invalid measurements, units, curves, darts)
//! - Rendering and export failures
//! - I/O and serialization failures
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Drafting error type
///
/// Precondition failures detected before or while a pattern is drafted.
/// None of these are transient; they are reported to the caller as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DraftingError {
    /// A body measurement is zero, negative, NaN or infinite
    #[error("Invalid measurement '{name}': {value} (must be a positive finite number)")]
    InvalidMeasurement {
        /// The measurement name (waist, hips, length).
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// A measurement string that is not a number
    #[error("Malformed measurement '{name}': {reason}")]
    MalformedMeasurement {
        /// The measurement name (waist, hips, length).
        name: String,
        /// Why the text was not understood.
        reason: String,
    },

    /// Unit token outside the supported set
    #[error("Unsupported unit: {0} (expected cm or inch)")]
    UnsupportedUnit(String),

    /// Garment style token outside the supported set
    #[error("Unsupported garment style: {0}")]
    UnsupportedStyle(String),

    /// Curve resolution outside the supported range
    #[error("Degenerate curve: resolution must be between 1 and 10000, got {resolution}")]
    DegenerateCurve {
        /// The rejected resolution.
        resolution: usize,
    },

    /// Measurements are individually valid but cannot produce the garment
    #[error("Invalid proportions: {0}")]
    InvalidProportions(String),

    /// A dart does not fit inside the seam it is carved from
    #[error("Degenerate dart on {piece}: {reason}")]
    DegenerateDart {
        /// The piece carrying the dart.
        piece: String,
        /// Why the dart was rejected.
        reason: String,
    },

    /// An assembled outline crosses itself
    #[error("Outline of {piece} is self-intersecting")]
    SelfIntersecting {
        /// The offending piece.
        piece: String,
    },
}

impl DraftingError {
    /// Shorthand for an [`DraftingError::InvalidMeasurement`]
    pub fn invalid_measurement(name: impl Into<String>, value: f64) -> Self {
        DraftingError::InvalidMeasurement {
            name: name.into(),
            value,
        }
    }
}

/// Main error type for TailorKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Drafting error
    #[error(transparent)]
    Drafting(#[from] DraftingError),

    /// Rendering or document export failure
    #[error("Render error: {0}")]
    Render(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a render error from a string message
    pub fn render(msg: impl Into<String>) -> Self {
        Error::Render(msg.into())
    }

    /// Check if this is a drafting error
    pub fn is_drafting_error(&self) -> bool {
        matches!(self, Error::Drafting(_))
    }

    /// Check if this error was caused by bad measurements or proportions
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::Drafting(DraftingError::InvalidMeasurement { .. })
                | Error::Drafting(DraftingError::MalformedMeasurement { .. })
                | Error::Drafting(DraftingError::InvalidProportions(_))
                | Error::Drafting(DraftingError::UnsupportedUnit(_))
                | Error::Drafting(DraftingError::UnsupportedStyle(_))
        )
    }

    /// Check if this is a render error
    pub fn is_render_error(&self) -> bool {
        matches!(self, Error::Render(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
