//! Constants for AirGuard Core
//!
//! Every numeric limit and default used by the correction pipeline lives
//! here, with a note on where it comes from.
//!
//! ## Organization
//!
//! - **Filters**: history capacity, window defaults and bounds

/// History capacity, window sizes and filter defaults.
pub mod filters;

pub use filters::{
    HISTORY_CAPACITY, DEFAULT_MEDIAN_WINDOW, DEFAULT_AVERAGE_WINDOW,
    DEFAULT_CALIBRATION_OFFSET, MIN_WINDOW_SIZE, MIN_FILTER_HISTORY, MEDIAN_EVEN_DIVISOR,
};
