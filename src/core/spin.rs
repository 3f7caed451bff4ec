//! Spin operator
//!
//! Packs a truncated tick counter and a few random bytes into one u64,
//! masks it to the configured width and appends it to the base vector as
//! one or two decimal fields:
//!
//! - `<base>.<value>`        when total bits <= 32
//! - `<base>.<high>.<low>`   when total bits > 32

use tracing::{debug, warn};

use crate::config::SpinConfig;
use crate::core::source::{Clock, EntropySource, SystemClock, ThreadRngEntropy};
use crate::core::vector::{infer_version, validate};
use crate::types::{CorrelationVector, SpinError, SpinParameters};
use crate::{MAX_ENTROPY_BYTES, SINGLE_FIELD_BITS};

/// Applies the Spin operator using injected time and entropy sources.
///
/// Holds no mutable state, so a single generator can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct SpinGenerator<C = SystemClock, E = ThreadRngEntropy> {
    config: SpinConfig,
    clock: C,
    entropy: E,
}

impl SpinGenerator {
    /// Generator backed by the wall clock and the thread RNG
    pub fn new(config: SpinConfig) -> Self {
        Self::with_sources(config, SystemClock, ThreadRngEntropy)
    }
}

impl Default for SpinGenerator {
    fn default() -> Self {
        Self::new(SpinConfig::default())
    }
}

impl<C: Clock, E: EntropySource> SpinGenerator<C, E> {
    pub fn with_sources(config: SpinConfig, clock: C, entropy: E) -> Self {
        Self {
            config,
            clock,
            entropy,
        }
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    /// Spin with the configured default parameters
    pub fn spin(&self, correlation_vector: &str) -> Result<CorrelationVector, SpinError> {
        self.spin_with_parameters(correlation_vector, &self.config.parameters)
    }

    /// Create a new correlation vector by applying the Spin operator to an
    /// existing value. Call at the entry point of an operation.
    pub fn spin_with_parameters(
        &self,
        correlation_vector: &str,
        parameters: &SpinParameters,
    ) -> Result<CorrelationVector, SpinError> {
        let version = infer_version(correlation_vector).map_err(|e| {
            warn!(code = e.code(), "cannot infer correlation vector version");
            e
        })?;

        if self.config.validate_during_creation {
            validate(correlation_vector, version).map_err(|e| {
                warn!(code = e.code(), vector = correlation_vector, "base vector rejected");
                e
            })?;
        }

        let mut buf = [0u8; MAX_ENTROPY_BYTES as usize];
        let bytes = &mut buf[..parameters.entropy.bytes()];
        self.entropy.fill(bytes);

        // 100ns ticks
        let ticks = self.clock.ticks();
        let value = pack_spin_value(ticks, bytes, parameters);
        let suffix = format_spin_value(value, parameters);

        debug!(
            %parameters,
            ticks,
            value,
            %version,
            "spin {} -> {}",
            correlation_vector,
            suffix
        );

        Ok(CorrelationVector::new(
            format!("{}.{}", correlation_vector, suffix),
            0,
            version,
        ))
    }
}

/// Spin with default parameters, no validation, wall clock and thread RNG
pub fn spin(correlation_vector: &str) -> Result<CorrelationVector, SpinError> {
    SpinGenerator::new(SpinConfig::default()).spin(correlation_vector)
}

/// Spin with explicit parameters, no validation, wall clock and thread RNG
pub fn spin_with_parameters(
    correlation_vector: &str,
    parameters: &SpinParameters,
) -> Result<CorrelationVector, SpinError> {
    SpinGenerator::new(SpinConfig::default()).spin_with_parameters(correlation_vector, parameters)
}

/// Drop the low tick bits, append entropy bytes, and mask to
/// `parameters.total_bits()`.
///
/// Only the first `parameters.entropy` bytes of `entropy` are used.
pub fn pack_spin_value(ticks: u64, entropy: &[u8], parameters: &SpinParameters) -> u64 {
    let mut value = ticks >> parameters.tick_bits_to_drop();
    for &byte in entropy.iter().take(parameters.entropy.bytes()) {
        value = (value << 8) | u64::from(byte);
    }
    value & low_bits_mask(parameters.total_bits())
}

/// Render a packed value as one or two decimal fields
pub fn format_spin_value(value: u64, parameters: &SpinParameters) -> String {
    if parameters.total_bits() > SINGLE_FIELD_BITS {
        format!("{}.{}", value >> 32, value & u64::from(u32::MAX))
    } else {
        value.to_string()
    }
}

/// Mask of the low `bits` bits
fn low_bits_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        // 1 << 64 would overflow
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

// =============================================================================
// TESTS
// =============================================================================
