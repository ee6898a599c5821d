//! Correction Pipeline
//!
//! ## Overview
//!
//! [`DataCorrector`] owns one [`HistoryBuffer`] per [`Channel`] plus the
//! shared [`FilterConfig`]. Each call to [`DataCorrector::correct`]:
//!
//! 1. runs the abnormal-data check (accepts everything by default)
//! 2. inserts the raw sample and computes the windowed median, or passes the
//!    sample through while history holds fewer than two samples
//! 3. averages the most recent `average_window` raw samples of the same channel
//! 4. returns that average as the corrected value
//!
//! The median is computed on every call and exposed through
//! [`DataCorrector::correct_detailed`], but the corrected value is the
//! moving average of raw history. The calibration offset is stored and
//! reported, never applied.
//!
//! ## Lifecycle
//!
//! Construction is the explicit initialization step: every channel starts
//! with an empty history. [`DataCorrector::shutdown`] releases all samples.
//! Nothing is persisted.
//!
//! ## Concurrency
//!
//! A corrector is plain data mutated through `&mut self`. Share one across
//! threads behind a `Mutex`; the working set is small enough that a single
//! lock over both channels is fine.
//!
//! ## Usage Example
//!
//! ```rust
//! use airguard_core::{Channel, DataCorrector};
//!
//! let mut corrector = DataCorrector::new();
//! corrector.set_median_window(3)?;
//! corrector.set_average_window(3)?;
//!
//! for raw in [10.0, 12.0, 11.0] {
//!     corrector.correct(Channel::Pm, raw)?;
//! }
//!
//! let detail = corrector.correct_detailed(Channel::Pm, 50.0)?;
//! assert_eq!(detail.median, 12.0);
//! assert!((detail.corrected - 73.0 / 3.0).abs() < 1e-4);
//! # Ok::<(), airguard_core::CorrectionError>(())
//! ```


use crate::{
    buffer::HistoryBuffer,
    channel::{Channel, CHANNEL_COUNT},
    config::FilterConfig,
    constants::HISTORY_CAPACITY,
    errors::{CorrectionError, CorrectionResult},
    filters::{median_filter, moving_average},
    traits::{AbnormalDataCheck, AcceptAll},
};

/// History buffer type used for every channel
pub type ChannelHistory = HistoryBuffer<HISTORY_CAPACITY>;

/// Outcome of one correction step
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Correction {
    /// Sample as read from the sensor
    pub raw: f32,
    /// Windowed median, or `raw` while history is too short
    pub median: f32,
    /// Moving average of raw history, returned as the corrected value
    pub corrected: f32,
}

/// Per-channel smoothing pipeline
pub struct DataCorrector<H = AcceptAll> {
    channels: [ChannelHistory; CHANNEL_COUNT],
    config: FilterConfig,
    check: H,
}

impl DataCorrector<AcceptAll> {
    /// Corrector with default windows and no abnormal-data rejection
    pub fn new() -> Self {
        Self::with_config(FilterConfig::default())
    }

    /// Corrector with the given configuration
    pub fn with_config(config: FilterConfig) -> Self {
        DataCorrector::with_check(config, AcceptAll)
    }
}

impl Default for DataCorrector<AcceptAll> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: AbnormalDataCheck> DataCorrector<H> {
    /// Corrector with a custom abnormal-data check
    pub fn with_check(config: FilterConfig, check: H) -> Self {
        Self {
            channels: core::array::from_fn(|_| HistoryBuffer::new()),
            config,
            check,
        }
    }

    /// Correct a raw reading, returning the smoothed value
    pub fn correct(&mut self, channel: Channel, raw: f32) -> CorrectionResult<f32> {
        self.correct_detailed(channel, raw).map(|c| c.corrected)
    }

    /// Correct a reading addressed by raw channel identifier
    ///
    /// Unknown identifiers fail with [`CorrectionError::InvalidChannel`]
    /// before any history is touched.
    pub fn correct_by_id(&mut self, id: u8, raw: f32) -> CorrectionResult<f32> {
        let channel = Channel::try_from(id).map_err(|e| {
            log_warn!("correction requested for unknown channel {}", id);
            e
        })?;
        self.correct(channel, raw)
    }

    /// Correct a raw reading, also reporting the median stage
    pub fn correct_detailed(&mut self, channel: Channel, raw: f32) -> CorrectionResult<Correction> {
        if self.check.is_abnormal(channel, raw) {
            log_debug!("{} sample {} rejected as abnormal", channel, raw);
            return Err(CorrectionError::Rejected { value: raw });
        }

        let history = &mut self.channels[channel.index()];

        let median = median_filter(history, raw, self.config.median_window())
            .map_err(|_| CorrectionError::Unavailable)?;
        let corrected = moving_average(history, self.config.average_window())?;

        Ok(Correction { raw, median, corrected })
    }

    /// Raw history of a channel
    pub fn history(&self, channel: Channel) -> &ChannelHistory {
        &self.channels[channel.index()]
    }

    /// Drop every sample of one channel
    pub fn reset(&mut self, channel: Channel) {
        self.channels[channel.index()].clear();
    }

    /// Release all channel histories
    ///
    /// The corrector stays usable; channels start again from empty history.
    pub fn shutdown(&mut self) {
        for channel in Channel::ALL {
            log_info!(
                "releasing {} history ({} samples)",
                channel,
                self.channels[channel.index()].len()
            );
            self.reset(channel);
        }
    }

    /// Current filter configuration
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Store a calibration offset
    pub fn set_calibration_offset(&mut self, offset: f32) {
        self.config.set_calibration_offset(offset);
    }

    /// Update the median window, see [`FilterConfig::set_median_window`]
    pub fn set_median_window(&mut self, size: usize) -> CorrectionResult<()> {
        self.config.set_median_window(size)
    }

    /// Update the moving-average window, see [`FilterConfig::set_average_window`]
    pub fn set_average_window(&mut self, size: usize) -> CorrectionResult<()> {
        self.config.set_average_window(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn first_sample_passes_through() {
        let mut corrector = DataCorrector::new();
        assert_eq!(corrector.correct(Channel::Pm, 17.5), Ok(17.5));
        assert_eq!(corrector.correct(Channel::Co, -2.0), Ok(-2.0));
    }

    #[test]
    fn spike_scenario() {
        let mut corrector = DataCorrector::new();
        corrector.set_median_window(3).unwrap();
        corrector.set_average_window(3).unwrap();

        let inputs = [10.0, 12.0, 11.0, 50.0, 13.0, 12.0];
        let expected_median = [10.0, 11.0, 11.0, 12.0, 13.0, 13.0];
        let expected_corrected = [10.0, 11.0, 11.0, 73.0 / 3.0, 74.0 / 3.0, 25.0];

        for (i, &raw) in inputs.iter().enumerate() {
            let c = corrector.correct_detailed(Channel::Pm, raw).unwrap();
            assert_eq!(c.raw, raw);
            assert_close(c.median, expected_median[i]);
            assert_close(c.corrected, expected_corrected[i]);
        }
    }

    #[test]
    fn invalid_channel_touches_nothing() {
        let mut corrector = DataCorrector::new();
        assert_eq!(
            corrector.correct_by_id(5, 1.0),
            Err(CorrectionError::InvalidChannel { id: 5 })
        );
        for channel in Channel::ALL {
            assert!(corrector.history(channel).is_empty());
        }
    }

    #[test]
    fn correct_by_id_routes_to_channel() {
        let mut corrector = DataCorrector::new();
        corrector.correct_by_id(1, 3.0).unwrap();
        assert_eq!(corrector.history(Channel::Co).len(), 1);
        assert!(corrector.history(Channel::Pm).is_empty());
    }

    #[test]
    fn calibration_offset_is_not_applied() {
        let mut corrector = DataCorrector::new();
        corrector.set_calibration_offset(100.0);

        assert_eq!(corrector.config().calibration_offset(), 100.0);
        assert_eq!(corrector.correct(Channel::Pm, 5.0), Ok(5.0));
        assert_eq!(corrector.correct(Channel::Pm, 7.0), Ok(6.0));
    }

    #[test]
    fn rejected_sample_skips_history() {
        let check = |_: Channel, value: f32| value < 0.0;
        let mut corrector = DataCorrector::with_check(FilterConfig::default(), check);

        assert_eq!(corrector.correct(Channel::Pm, 4.0), Ok(4.0));
        assert_eq!(
            corrector.correct(Channel::Pm, -1.0),
            Err(CorrectionError::Rejected { value: -1.0 })
        );
        assert_eq!(corrector.history(Channel::Pm).len(), 1);
    }

    #[test]
    fn shutdown_releases_history() {
        let mut corrector = DataCorrector::new();
        for i in 0..10 {
            corrector.correct(Channel::Pm, i as f32).unwrap();
            corrector.correct(Channel::Co, i as f32).unwrap();
        }

        corrector.shutdown();
        for channel in Channel::ALL {
            assert!(corrector.history(channel).is_empty());
        }
        assert_eq!(corrector.correct(Channel::Pm, 3.0), Ok(3.0));
    }

    #[test]
    fn rejected_window_keeps_previous() {
        let mut corrector = DataCorrector::new();
        assert!(corrector.set_average_window(0).is_err());
        assert!(corrector.set_median_window(HISTORY_CAPACITY + 1).is_err());
        assert_eq!(corrector.config().average_window(), 6);
        assert_eq!(corrector.config().median_window(), 3);
    }
}
