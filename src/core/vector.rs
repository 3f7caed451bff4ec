//! Vector collaborator: version inference and base validation
//!
//! Only what Spin needs. Full grammar parsing and the extend/increment
//! operators live elsewhere.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{CvVersion, SpinError};

lazy_static! {
    // Base is base64 without padding
    static ref RE_BASE: Regex = Regex::new(r"^[A-Za-z0-9+/]+$").unwrap();

    // Extension is a plain decimal; range is checked separately
    static ref RE_EXTENSION: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Infer the version from the length of the base segment.
///
/// A 22 character base is V2; any other non-empty base is treated as V1.
pub fn infer_version(correlation_vector: &str) -> Result<CvVersion, SpinError> {
    if correlation_vector.is_empty() {
        return Err(SpinError::EmptyVector);
    }

    let base = correlation_vector
        .split('.')
        .next()
        .unwrap_or_default();

    match base.len() {
        0 => Err(SpinError::MissingBase(correlation_vector.to_string())),
        len if len == CvVersion::V2.base_length() => Ok(CvVersion::V2),
        _ => Ok(CvVersion::V1),
    }
}

/// Validate a vector against the limits of its version
pub fn validate(correlation_vector: &str, version: CvVersion) -> Result<(), SpinError> {
    let max = version.max_vector_length();
    if correlation_vector.len() > max {
        return Err(SpinError::VectorTooLong {
            version,
            len: correlation_vector.len(),
            max,
        });
    }

    let mut parts = correlation_vector.split('.');
    let base = parts.next().unwrap_or_default();
    let extensions: Vec<&str> = parts.collect();

    if extensions.is_empty() {
        return Err(SpinError::TooFewSegments(correlation_vector.to_string()));
    }

    if base.len() != version.base_length() {
        return Err(SpinError::InvalidBaseLength {
            vector: correlation_vector.to_string(),
            version,
            len: base.len(),
            expected: version.base_length(),
        });
    }

    if !RE_BASE.is_match(base) {
        return Err(SpinError::InvalidBaseCharacter {
            vector: correlation_vector.to_string(),
            base: base.to_string(),
        });
    }

    for segment in extensions {
        if !is_valid_extension(segment) {
            return Err(SpinError::InvalidExtension {
                vector: correlation_vector.to_string(),
                segment: segment.to_string(),
            });
        }
    }

    Ok(())
}

/// Decimal that fits in a u32
fn is_valid_extension(segment: &str) -> bool {
    RE_EXTENSION.is_match(segment) && segment.parse::<u32>().is_ok()
}

// =============================================================================
// TESTS
// =============================================================================
