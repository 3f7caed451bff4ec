//! Core modules for cvspin

pub mod source;
pub mod spin;
pub mod vector;

pub use source::{Clock, EntropySource, FixedClock, FixedEntropy, SystemClock, ThreadRngEntropy};
pub use spin::{format_spin_value, pack_spin_value, spin, spin_with_parameters, SpinGenerator};
pub use vector::{infer_version, validate};
