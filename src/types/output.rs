//! Output structures for terminal display

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{CorrelationVector, CvVersion, SpinParameters};

/// One spin result, as printed by the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Base vector the spin was applied to
    pub input: String,
    /// Spun vector (base form, without the extension counter)
    pub vector: String,
    /// Spin segment alone: one or two decimal fields
    pub suffix: String,
    pub version: CvVersion,
    pub parameters: SpinParameters,
}

impl SpinOutput {
    pub fn new(input: &str, cv: &CorrelationVector, parameters: SpinParameters) -> Self {
        let suffix = cv
            .base()
            .strip_prefix(input)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or_default()
            .to_string();

        Self {
            timestamp: Utc::now(),
            input: input.to_string(),
            vector: cv.base().to_string(),
            suffix,
            version: cv.version(),
            parameters,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        format!(
            "{}.{} {}",
            self.input.dimmed(),
            self.suffix.green().bold(),
            format!("[{}]", self.version).cyan()
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        self.vector.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_extracted() {
        let cv = CorrelationVector::new("abc.1.5.7", 0, CvVersion::V1);
        let out = SpinOutput::new("abc.1", &cv, SpinParameters::default());
        assert_eq!(out.suffix, "5.7");
        assert_eq!(out.to_parseable_string(), "abc.1.5.7");
    }
}
