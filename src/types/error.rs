//! Spin errors and their reason codes
//!
//! Codes follow the R-code taxonomy:
//! - R101: version inference
//! - R102: base vector validation
//! - R103: spin parameters

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::CvVersion;

/// Broad category of a spin failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The version of the base vector could not be determined
    VersionInference,
    /// The base vector failed validation for its version
    Validation,
    /// Spin parameters were out of range or unknown
    Parameter,
}

/// Everything that can go wrong before a spin value is produced.
///
/// No variant leaves partial output behind: a failed spin returns no vector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpinError {
    /// Empty input string
    #[error("Correlation vector is empty")]
    EmptyVector,

    /// Nothing before the first '.'
    #[error("Correlation vector {0:?} has no base segment")]
    MissingBase(String),

    #[error("The {version} correlation vector can not be bigger than {max} characters (got {len})")]
    VectorTooLong {
        version: CvVersion,
        len: usize,
        max: usize,
    },

    #[error("Correlation vector {0:?} needs a base and at least one extension")]
    TooFewSegments(String),

    #[error("Invalid correlation vector {vector:?}: base length {len}, {version} expects {expected}")]
    InvalidBaseLength {
        vector: String,
        version: CvVersion,
        len: usize,
        expected: usize,
    },

    #[error("Invalid correlation vector {vector:?}: base {base:?} is not base64")]
    InvalidBaseCharacter { vector: String, base: String },

    #[error("Invalid correlation vector {vector:?}: invalid extension value {segment:?}")]
    InvalidExtension { vector: String, segment: String },

    /// Entropy must be 0..=4 bytes
    #[error("Spin entropy {0} is out of range (0-4 bytes)")]
    EntropyOutOfRange(i64),

    /// Unrecognized interval / periodicity / version name
    #[error("Unknown {what}: {value:?}")]
    UnknownParameter { what: &'static str, value: String },
}

impl SpinError {
    /// Category used by callers that only care about the failure class
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyVector | Self::MissingBase(_) => ErrorKind::VersionInference,
            Self::VectorTooLong { .. }
            | Self::TooFewSegments(_)
            | Self::InvalidBaseLength { .. }
            | Self::InvalidBaseCharacter { .. }
            | Self::InvalidExtension { .. } => ErrorKind::Validation,
            Self::EntropyOutOfRange(_) | Self::UnknownParameter { .. } => ErrorKind::Parameter,
        }
    }

    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyVector => "R101_VECTOR_EMPTY",
            Self::MissingBase(_) => "R101_BASE_MISSING",
            Self::VectorTooLong { .. } => "R102_VECTOR_TOO_LONG",
            Self::TooFewSegments(_) => "R102_TOO_FEW_SEGMENTS",
            Self::InvalidBaseLength { .. } => "R102_BASE_LENGTH",
            Self::InvalidBaseCharacter { .. } => "R102_BASE_CHARACTER",
            Self::InvalidExtension { .. } => "R102_EXTENSION_INVALID",
            Self::EntropyOutOfRange(_) => "R103_ENTROPY_OUT_OF_RANGE",
            Self::UnknownParameter { .. } => "R103_PARAMETER_UNKNOWN",
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}
