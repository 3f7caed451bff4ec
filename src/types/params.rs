//! Spin parameters
//!
//! Interval picks how many low tick bits are dropped, periodicity picks how
//! many counter bits survive, entropy picks how many random bytes follow.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::SpinError;
use crate::{COARSE_TICK_BITS_TO_DROP, FINE_TICK_BITS_TO_DROP, MAX_ENTROPY_BYTES};

/// Interval (proportional to time) by which the spin counter increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinCounterInterval {
    /// Drops the 24 least significant tick bits, incrementing every ~1.67 seconds
    #[default]
    Coarse,
    /// Drops the 16 least significant tick bits, incrementing every ~6.5 milliseconds
    Fine,
}

impl SpinCounterInterval {
    pub fn tick_bits_to_drop(&self) -> u32 {
        match self {
            Self::Coarse => COARSE_TICK_BITS_TO_DROP,
            Self::Fine => FINE_TICK_BITS_TO_DROP,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Coarse => "coarse",
            Self::Fine => "fine",
        }
    }
}

/// Numeric interval codes: 1 is fine, anything else is coarse
impl From<u8> for SpinCounterInterval {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::Fine,
            _ => Self::Coarse,
        }
    }
}

impl FromStr for SpinCounterInterval {
    type Err = SpinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coarse" => Ok(Self::Coarse),
            "fine" => Ok(Self::Fine),
            other => Err(SpinError::UnknownParameter {
                what: "interval",
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SpinCounterInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How frequently the counter wraps around to zero, as determined by the
/// space it is stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinCounterPeriodicity {
    /// No counter in the spin value
    None,
    /// 16 bit counter
    #[default]
    Short,
    /// 24 bit counter
    Medium,
    /// 32 bit counter
    Long,
}

impl SpinCounterPeriodicity {
    pub fn counter_bits(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::Short => 16,
            Self::Medium => 24,
            Self::Long => 32,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl FromStr for SpinCounterPeriodicity {
    type Err = SpinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(SpinError::UnknownParameter {
                what: "periodicity",
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SpinCounterPeriodicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Number of random bytes in a spin value, always within 0..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SpinEntropy(u8);

impl SpinEntropy {
    pub const NONE: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);

    /// Rejects anything above four bytes
    pub fn new(bytes: u8) -> Result<Self, SpinError> {
        if bytes > MAX_ENTROPY_BYTES {
            return Err(SpinError::EntropyOutOfRange(i64::from(bytes)));
        }
        Ok(Self(bytes))
    }

    pub fn bytes(&self) -> usize {
        self.0 as usize
    }

    pub fn bits(&self) -> u32 {
        u32::from(self.0) * 8
    }
}

impl Default for SpinEntropy {
    fn default() -> Self {
        Self::TWO
    }
}

impl TryFrom<u8> for SpinEntropy {
    type Error = SpinError;

    fn try_from(bytes: u8) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl TryFrom<i64> for SpinEntropy {
    type Error = SpinError;

    fn try_from(bytes: i64) -> Result<Self, Self::Error> {
        u8::try_from(bytes)
            .map_err(|_| SpinError::EntropyOutOfRange(bytes))
            .and_then(Self::new)
    }
}

impl From<SpinEntropy> for u8 {
    fn from(entropy: SpinEntropy) -> Self {
        entropy.0
    }
}

impl std::fmt::Display for SpinEntropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parameters used by the Spin operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinParameters {
    pub interval: SpinCounterInterval,
    pub periodicity: SpinCounterPeriodicity,
    pub entropy: SpinEntropy,
}

impl SpinParameters {
    pub fn new(
        interval: SpinCounterInterval,
        periodicity: SpinCounterPeriodicity,
        entropy: SpinEntropy,
    ) -> Self {
        Self {
            interval,
            periodicity,
            entropy,
        }
    }

    pub fn tick_bits_to_drop(&self) -> u32 {
        self.interval.tick_bits_to_drop()
    }

    /// Counter bits plus entropy bits, never more than 64
    pub fn total_bits(&self) -> u32 {
        self.periodicity.counter_bits() + self.entropy.bits()
    }

    /// Whether the spin value needs two decimal fields
    pub fn is_split(&self) -> bool {
        self.total_bits() > crate::SINGLE_FIELD_BITS
    }
}

impl std::fmt::Display for SpinParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "interval={} periodicity={} entropy={}",
            self.interval, self.periodicity, self.entropy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = SpinParameters::default();
        assert_eq!(params.interval, SpinCounterInterval::Coarse);
        assert_eq!(params.periodicity, SpinCounterPeriodicity::Short);
        assert_eq!(params.entropy, SpinEntropy::TWO);
        assert_eq!(params.total_bits(), 32);
        assert!(!params.is_split());
    }

    #[test]
    fn test_tick_bits_to_drop() {
        assert_eq!(SpinCounterInterval::Coarse.tick_bits_to_drop(), 24);
        assert_eq!(SpinCounterInterval::Fine.tick_bits_to_drop(), 16);
    }

    #[test]
    fn test_unknown_interval_code_falls_back_to_coarse() {
        assert_eq!(SpinCounterInterval::from(0), SpinCounterInterval::Coarse);
        assert_eq!(SpinCounterInterval::from(1), SpinCounterInterval::Fine);
        assert_eq!(SpinCounterInterval::from(7), SpinCounterInterval::Coarse);
        assert_eq!(SpinCounterInterval::from(7).tick_bits_to_drop(), 24);
    }

    #[test]
    fn test_counter_bits() {
        assert_eq!(SpinCounterPeriodicity::None.counter_bits(), 0);
        assert_eq!(SpinCounterPeriodicity::Short.counter_bits(), 16);
        assert_eq!(SpinCounterPeriodicity::Medium.counter_bits(), 24);
        assert_eq!(SpinCounterPeriodicity::Long.counter_bits(), 32);
    }

    #[test]
    fn test_total_bits_max_is_64() {
        let params = SpinParameters::new(
            SpinCounterInterval::Fine,
            SpinCounterPeriodicity::Long,
            SpinEntropy::FOUR,
        );
        assert_eq!(params.total_bits(), 64);
        assert!(params.is_split());
    }

    #[test]
    fn test_entropy_range() {
        for bytes in 0..=4u8 {
            assert_eq!(SpinEntropy::new(bytes).unwrap().bytes(), bytes as usize);
        }
        assert_eq!(SpinEntropy::new(5), Err(SpinError::EntropyOutOfRange(5)));
        assert_eq!(
            SpinEntropy::try_from(-1i64),
            Err(SpinError::EntropyOutOfRange(-1))
        );
        assert_eq!(
            SpinEntropy::try_from(300i64),
            Err(SpinError::EntropyOutOfRange(300))
        );
    }

    #[test]
    fn test_entropy_rejected_on_deserialize() {
        let json = r#"{"interval":"fine","periodicity":"long","entropy":9}"#;
        assert!(serde_json::from_str::<SpinParameters>(json).is_err());

        let json = r#"{"interval":"fine","periodicity":"long","entropy":3}"#;
        let params: SpinParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.entropy, SpinEntropy::THREE);
        assert_eq!(params.total_bits(), 56);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let params: SpinParameters = serde_json::from_str(r#"{"interval":"fine"}"#).unwrap();
        assert_eq!(params.interval, SpinCounterInterval::Fine);
        assert_eq!(params.periodicity, SpinCounterPeriodicity::Short);
        assert_eq!(params.entropy, SpinEntropy::TWO);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Fine".parse::<SpinCounterInterval>(), Ok(SpinCounterInterval::Fine));
        assert_eq!(
            " medium ".parse::<SpinCounterPeriodicity>(),
            Ok(SpinCounterPeriodicity::Medium)
        );
        let err = "hourly".parse::<SpinCounterInterval>().unwrap_err();
        assert_eq!(err.code(), "R103_PARAMETER_UNKNOWN");
    }
}
