//! Correlation vector value

use serde::{Deserialize, Serialize};

use crate::types::CvVersion;

/// An immutable correlation vector: a base string plus the current
/// extension counter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationVector {
    base: String,
    extension: u32,
    version: CvVersion,
}

impl CorrelationVector {
    /// Build from an already formed base; no validation happens here
    pub fn new(base: impl Into<String>, extension: u32, version: CvVersion) -> Self {
        Self {
            base: base.into(),
            extension,
            version,
        }
    }

    /// Everything before the extension counter
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn extension(&self) -> u32 {
        self.extension
    }

    pub fn version(&self) -> CvVersion {
        self.version
    }

    /// Full string form: `<base>.<extension>`
    pub fn value(&self) -> String {
        format!("{}.{}", self.base, self.extension)
    }

    /// Segments of the base, split on '.'
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.base.split('.')
    }
}

impl std::fmt::Display for CorrelationVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.base, self.extension)
    }
}
