//! Median filter
//!
//! Sorting uses [`f32::total_cmp`], so NaN samples have a defined position
//! (after every finite value) instead of corrupting the order.

use heapless::Vec;

use crate::{
    buffer::HistoryBuffer,
    constants::{MEDIAN_EVEN_DIVISOR, MIN_FILTER_HISTORY},
    errors::{CorrectionError, CorrectionResult},
};

/// Insert `sample` into `history`, then take the windowed median
///
/// The sample is recorded unconditionally. With fewer than two samples in
/// history the raw sample is returned unchanged.
pub fn median_filter<const N: usize>(
    history: &mut HistoryBuffer<N>,
    sample: f32,
    window: usize,
) -> CorrectionResult<f32> {
    history.push(sample);

    if history.len() < MIN_FILTER_HISTORY {
        log_debug!("median passthrough: {} sample(s) in history", history.len());
        return Ok(sample);
    }

    windowed_median(history, window)
}

/// Median of the last `min(window, len)` samples
pub fn windowed_median<const N: usize>(
    history: &HistoryBuffer<N>,
    window: usize,
) -> CorrectionResult<f32> {
    let mut values: Vec<f32, N> = history.recent(window).collect();
    find_median(&mut values).ok_or(CorrectionError::Unavailable)
}

/// Sort `values` in place and pick the middle
///
/// Odd lengths return the middle element, even lengths the mean of the two
/// central elements. Empty input has no median.
pub fn find_median(values: &mut [f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }

    values.sort_unstable_by(f32::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / MEDIAN_EVEN_DIVISOR)
    } else {
        Some(values[mid])
    }
}
