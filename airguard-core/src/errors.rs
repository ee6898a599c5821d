//! Error Types for the Correction Pipeline
//!
//! ## Design Philosophy
//!
//! Errors follow the same rules as the rest of the crate:
//!
//! 1. **No Heap Allocation**: every variant carries plain scalars, so the
//!    type stays `Copy` and usable without `alloc`.
//!
//! 2. **Distinct From Readings**: a failed correction is never encoded as a
//!    magic float. `Unavailable` cannot be confused with a legitimate zero
//!    reading.
//!
//! 3. **Nothing To Retry**: the core performs no I/O, so every error is
//!    final for the call that produced it and is returned to the caller.
//!
//! ## Error Kinds
//!
//! - `InvalidChannel`: channel identifier outside the known set, no state touched
//! - `InvalidWindowSize`: window outside `[1, HISTORY_CAPACITY]`, prior value kept
//! - `Unavailable`: no history to average, or a non-positive window
//! - `Rejected`: an abnormal-data check refused the sample
//!
//! ```rust
//! use airguard_core::{CorrectionError, DataCorrector};
//!
//! let mut corrector = DataCorrector::new();
//! match corrector.correct_by_id(7, 12.0) {
//!     Ok(value) => println!("corrected: {}", value),
//!     Err(CorrectionError::InvalidChannel { id }) => println!("no channel {}", id),
//!     Err(e) => println!("correction failed: {}", e),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for correction operations
pub type CorrectionResult<T> = Result<T, CorrectionError>;

/// Correction errors - small and `Copy` for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CorrectionError {
    /// Channel identifier is not a member of the channel set
    #[error("Invalid channel identifier {id}")]
    InvalidChannel {
        /// The raw identifier that failed to map to a channel
        id: u8,
    },

    /// Requested window size outside the accepted range
    #[error("Window size {requested} outside range [1, {max}]")]
    InvalidWindowSize {
        /// Window size the caller asked for
        requested: usize,
        /// Largest accepted window (the history capacity)
        max: usize,
    },

    /// No value can be produced from the current history
    #[error("Filtered value unavailable")]
    Unavailable,

    /// Abnormal-data check refused the sample
    #[error("Sample {value} rejected as abnormal")]
    Rejected {
        /// The raw sample that was refused
        value: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for CorrectionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidChannel { id } =>
                defmt::write!(fmt, "Invalid channel {}", id),
            Self::InvalidWindowSize { requested, max } =>
                defmt::write!(fmt, "Window {} outside [1, {}]", requested, max),
            Self::Unavailable =>
                defmt::write!(fmt, "Unavailable"),
            Self::Rejected { value } =>
                defmt::write!(fmt, "Rejected {}", value),
        }
    }
}
