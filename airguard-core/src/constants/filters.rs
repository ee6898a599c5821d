//! History Capacity and Filter Window Limits
//!
//! Sized for one reading per second from slow field-bus air sensors.

// ===== HISTORY BUFFER =====

/// Number of raw samples retained per channel.
///
/// - 100 samples × 4 bytes/sample = 400 bytes per channel
/// - Covers 100 seconds at 1Hz polling
/// - Upper bound for both filter windows
pub const HISTORY_CAPACITY: usize = 100;

// ===== WINDOW SIZES =====

/// Default median window (samples).
///
/// Three samples is the smallest window that rejects a single-sample spike.
pub const DEFAULT_MEDIAN_WINDOW: usize = 3;

/// Default moving-average window (samples).
pub const DEFAULT_AVERAGE_WINDOW: usize = 6;

/// Smallest accepted window for either filter.
pub const MIN_WINDOW_SIZE: usize = 1;

/// History length below which the median stage passes the raw sample through.
pub const MIN_FILTER_HISTORY: usize = 2;

// ===== CALIBRATION =====

/// Calibration offset applied when none is configured.
pub const DEFAULT_CALIBRATION_OFFSET: f32 = 0.0;

/// Divisor for averaging the two central values of an even-sized window.
pub const MEDIAN_EVEN_DIVISOR: f32 = 2.0;
