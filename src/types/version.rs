//! Correlation vector versions

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::SpinError;
use crate::{BASE_LENGTH_V1, BASE_LENGTH_V2, MAX_VECTOR_LENGTH_V1, MAX_VECTOR_LENGTH_V2};

/// Version of a correlation vector, determined by its base length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CvVersion {
    /// 16 character base, 63 characters max
    V1,
    /// 22 character base, 127 characters max
    V2,
}

impl CvVersion {
    pub fn base_length(&self) -> usize {
        match self {
            CvVersion::V1 => BASE_LENGTH_V1,
            CvVersion::V2 => BASE_LENGTH_V2,
        }
    }

    pub fn max_vector_length(&self) -> usize {
        match self {
            CvVersion::V1 => MAX_VECTOR_LENGTH_V1,
            CvVersion::V2 => MAX_VECTOR_LENGTH_V2,
        }
    }
}

impl FromStr for CvVersion {
    type Err = SpinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "V1" => Ok(CvVersion::V1),
            "V2" => Ok(CvVersion::V2),
            other => Err(SpinError::UnknownParameter {
                what: "version",
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CvVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CvVersion::V1 => "V1",
            CvVersion::V2 => "V2",
        };
        write!(f, "{}", name)
    }
}
