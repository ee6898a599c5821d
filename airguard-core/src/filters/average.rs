//! Moving-average filter
//!
//! Reads raw history directly; it keeps no buffer of its own.

use crate::{
    buffer::HistoryBuffer,
    errors::{CorrectionError, CorrectionResult},
};

/// Mean of the last `min(window, len)` samples
///
/// An empty history or a zero window is [`CorrectionError::Unavailable`].
pub fn moving_average<const N: usize>(
    history: &HistoryBuffer<N>,
    window: usize,
) -> CorrectionResult<f32> {
    if history.is_empty() || window == 0 {
        return Err(CorrectionError::Unavailable);
    }

    let samples = history.recent(window);
    let count = samples.len();
    let sum: f32 = samples.sum();

    Ok(sum / count as f32)
}
