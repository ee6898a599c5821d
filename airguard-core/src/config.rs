//! Filter configuration and calibration
//!
//! One [`FilterConfig`] is shared by every channel of a
//! [`DataCorrector`](crate::DataCorrector). Window sizes are validated on
//! every write; the calibration offset is accepted as-is.

use crate::{
    constants::{
        DEFAULT_AVERAGE_WINDOW, DEFAULT_CALIBRATION_OFFSET, DEFAULT_MEDIAN_WINDOW,
        HISTORY_CAPACITY, MIN_WINDOW_SIZE,
    },
    errors::{CorrectionError, CorrectionResult},
};

/// Window sizes and calibration offset for the correction pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterConfig {
    median_window: usize,
    average_window: usize,
    calibration_offset: f32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            median_window: DEFAULT_MEDIAN_WINDOW,
            average_window: DEFAULT_AVERAGE_WINDOW,
            calibration_offset: DEFAULT_CALIBRATION_OFFSET,
        }
    }
}

impl FilterConfig {
    /// Create a configuration, validating both windows
    pub fn new(median_window: usize, average_window: usize, calibration_offset: f32) -> CorrectionResult<Self> {
        check_window(median_window)?;
        check_window(average_window)?;

        Ok(Self {
            median_window,
            average_window,
            calibration_offset,
        })
    }

    /// Samples considered by the median stage
    pub fn median_window(&self) -> usize {
        self.median_window
    }

    /// Samples considered by the moving-average stage
    pub fn average_window(&self) -> usize {
        self.average_window
    }

    /// Stored calibration offset
    ///
    /// Accepted and kept, but not applied to corrected values.
    pub fn calibration_offset(&self) -> f32 {
        self.calibration_offset
    }

    /// Store a calibration offset. Always succeeds.
    pub fn set_calibration_offset(&mut self, offset: f32) {
        self.calibration_offset = offset;
    }

    /// Update the median window; out-of-range sizes leave it unchanged
    pub fn set_median_window(&mut self, size: usize) -> CorrectionResult<()> {
        check_window(size).map_err(|e| {
            log_warn!("median window {} rejected, keeping {}", size, self.median_window);
            e
        })?;
        self.median_window = size;
        Ok(())
    }

    /// Update the moving-average window; out-of-range sizes leave it unchanged
    pub fn set_average_window(&mut self, size: usize) -> CorrectionResult<()> {
        check_window(size).map_err(|e| {
            log_warn!("average window {} rejected, keeping {}", size, self.average_window);
            e
        })?;
        self.average_window = size;
        Ok(())
    }
}

/// Check a window size against `[MIN_WINDOW_SIZE, HISTORY_CAPACITY]`
pub fn check_window(size: usize) -> CorrectionResult<()> {
    if (MIN_WINDOW_SIZE..=HISTORY_CAPACITY).contains(&size) {
        Ok(())
    } else {
        Err(CorrectionError::InvalidWindowSize {
            requested: size,
            max: HISTORY_CAPACITY,
        })
    }
}
