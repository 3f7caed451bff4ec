//! cvspin: Correlation Vector Spin operator
//!
//! Spin appends a time and entropy derived segment to an existing
//! correlation vector at the entry point of an operation.
//!
//! CLI → SpinConfig → SpinGenerator → CorrelationVector

pub mod config;
pub mod core;
pub mod types;

pub use crate::config::{ConfigError, SpinConfig};
pub use crate::core::{spin, spin_with_parameters, SpinGenerator};
pub use crate::types::{
    CorrelationVector, CvVersion, SpinCounterInterval, SpinCounterPeriodicity, SpinEntropy,
    SpinError, SpinParameters,
};

// =============================================================================
// TICKS - 100 nanosecond units since the Unix epoch
// =============================================================================

/// Nanoseconds per tick
pub const NANOS_PER_TICK: u64 = 100;

/// Ticks per second
pub const TICKS_PER_SECOND: u64 = 10_000_000;

/// Tick bits dropped by the coarse interval (~1.67s per increment)
pub const COARSE_TICK_BITS_TO_DROP: u32 = 24;

/// Tick bits dropped by the fine interval (~6.5ms per increment)
pub const FINE_TICK_BITS_TO_DROP: u32 = 16;

// =============================================================================
// VECTOR LIMITS - per version
// =============================================================================

/// Base length of a V1 vector
pub const BASE_LENGTH_V1: usize = 16;

/// Max total length of a V1 vector
pub const MAX_VECTOR_LENGTH_V1: usize = 63;

/// Base length of a V2 vector
pub const BASE_LENGTH_V2: usize = 22;

/// Max total length of a V2 vector
pub const MAX_VECTOR_LENGTH_V2: usize = 127;

// =============================================================================
// SPIN LIMITS
// =============================================================================

/// Max entropy bytes in a spin value
pub const MAX_ENTROPY_BYTES: u8 = 4;

/// Spin values wider than this are split into two decimal fields
pub const SINGLE_FIELD_BITS: u32 = 32;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
