//! Windowed Filters Over Raw Sample History
//!
//! ## Overview
//!
//! Two filters run over the same per-channel [`HistoryBuffer`]:
//!
//! - [`median`]: median of the most recent `median_window` samples
//! - [`average`]: arithmetic mean of the most recent `average_window` samples
//!
//! ## Shared History, Independent Windows
//!
//! The filters are not chained through separate buffers. The median stage
//! inserts the raw sample; the moving average then reads the *raw* history,
//! not a history of medians:
//!
//! ```text
//! raw ──► HistoryBuffer ──┬──► median(last m)   (reported alongside)
//!                         └──► mean(last a)     (corrected value)
//! ```
//!
//! With `[10, 12, 11, 50]` and both windows at 3, the median stage yields
//! `12` while the corrected value is `(12 + 11 + 50) / 3`.
//!
//! ## Windows Larger Than History
//!
//! Both filters shrink their window to the samples available. Neither treats
//! a short history as an error; only an empty history (or a zero window for
//! the average) is [`Unavailable`](crate::CorrectionError::Unavailable).
//!
//! [`HistoryBuffer`]: crate::buffer::HistoryBuffer

pub mod average;
pub mod median;

pub use average::moving_average;
pub use median::{find_median, median_filter, windowed_median};
