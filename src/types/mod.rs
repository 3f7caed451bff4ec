//! Core types for cvspin

mod error;
mod output;
mod params;
mod vector;
mod version;

pub use error::{ErrorKind, SpinError};
pub use output::SpinOutput;
pub use params::{SpinCounterInterval, SpinCounterPeriodicity, SpinEntropy, SpinParameters};
pub use vector::CorrelationVector;
pub use version::CvVersion;
