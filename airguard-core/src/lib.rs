//! Correction engine for AirGuard
//!
//! Smooths raw air-quality readings per sensor channel with a windowed
//! median and a moving average over a bounded sample history.
//! Designed for small gateways polling field-bus sensors.
//!
//! Key constraints:
//! - Fixed memory: `HISTORY_CAPACITY` samples per channel, allocated once
//! - No heap allocation in the correction path
//! - No I/O, no locking, every call bounded by the history capacity
//!
//! ```no_run
//! use airguard_core::{Channel, DataCorrector};
//!
//! let mut corrector = DataCorrector::new();
//!
//! // Feed each new sensor reading
//! match corrector.correct(Channel::Pm, 35.0) {
//!     Ok(corrected) => {}, // Publish it
//!     Err(e) => {},        // Handle failed correction
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod buffer;
pub mod channel;
pub mod config;
pub mod constants;
pub mod errors;
pub mod filters;
pub mod pipeline;
pub mod time;
pub mod traits;

// Public API
pub use buffer::HistoryBuffer;
pub use channel::Channel;
pub use config::FilterConfig;
pub use constants::HISTORY_CAPACITY;
pub use errors::{CorrectionError, CorrectionResult};
pub use pipeline::{Correction, DataCorrector};
pub use traits::{AbnormalDataCheck, AcceptAll, RejectNonFinite};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
