//! Extension points for the correction pipeline
//!
//! Keep them simple - embedded callers don't need complex abstractions.

use crate::channel::Channel;

/// Per-sample abnormal-data check run before a sample enters history
///
/// Returning `true` makes [`DataCorrector::correct`](crate::DataCorrector::correct)
/// refuse the sample with [`CorrectionError::Rejected`](crate::CorrectionError::Rejected)
/// and leave the channel's history untouched.
pub trait AbnormalDataCheck {
    /// Decide whether `value` on `channel` should be refused
    fn is_abnormal(&self, channel: Channel, value: f32) -> bool;
}

/// Check that accepts every sample
///
/// This is the default stage: no outlier rejection is performed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl AbnormalDataCheck for AcceptAll {
    fn is_abnormal(&self, _channel: Channel, _value: f32) -> bool {
        false
    }
}

impl<F> AbnormalDataCheck for F
where
    F: Fn(Channel, f32) -> bool,
{
    fn is_abnormal(&self, channel: Channel, value: f32) -> bool {
        self(channel, value)
    }
}

/// Check that refuses NaN and infinite samples
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectNonFinite;

impl AbnormalDataCheck for RejectNonFinite {
    fn is_abnormal(&self, _channel: Channel, value: f32) -> bool {
        !value.is_finite()
    }
}
