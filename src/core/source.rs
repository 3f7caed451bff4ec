//! Time and entropy sources for the Spin operator
//!
//! Both are traits so a generator can run against a fixed instant and a
//! fixed byte sequence.

use chrono::Utc;
use rand::RngCore;

use crate::{NANOS_PER_TICK, TICKS_PER_SECOND};

/// Source of the current time, in 100ns ticks since the Unix epoch
pub trait Clock: Send + Sync {
    fn ticks(&self) -> u64;
}

/// Source of uniformly distributed bytes. Used for disambiguation only,
/// not secrecy.
pub trait EntropySource: Send + Sync {
    fn fill(&self, buf: &mut [u8]);
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn ticks(&self) -> u64 {
        let now = Utc::now();
        // Pre-epoch clocks clamp to zero
        let secs = u64::try_from(now.timestamp()).unwrap_or(0);
        secs * TICKS_PER_SECOND + u64::from(now.timestamp_subsec_nanos()) / NANOS_PER_TICK
    }
}

/// Thread-local RNG from `rand`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngEntropy;

impl EntropySource for ThreadRngEntropy {
    fn fill(&self, buf: &mut [u8]) {
        rand::thread_rng().fill_bytes(buf);
    }
}

/// Clock frozen at a given tick count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl FixedClock {
    /// Clock whose ticks shift down to `shifted` after dropping `bits`
    pub fn from_shifted(shifted: u64, bits: u32) -> Self {
        Self(shifted << bits)
    }
}

impl Clock for FixedClock {
    fn ticks(&self) -> u64 {
        self.0
    }
}

/// Repeats a fixed byte sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedEntropy(pub Vec<u8>);

impl EntropySource for FixedEntropy {
    fn fill(&self, buf: &mut [u8]) {
        if self.0.is_empty() {
            buf.fill(0);
            return;
        }
        for (dst, src) in buf.iter_mut().zip(self.0.iter().cycle()) {
            *dst = *src;
        }
    }
}
