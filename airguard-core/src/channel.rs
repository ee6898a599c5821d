//! Sensor channels
//!
//! A channel is one sensor's logical data stream. The set is closed: adding
//! a kind means adding a variant here and a slot in the corrector.

use core::fmt;

use crate::errors::CorrectionError;

/// Number of channels in [`Channel::ALL`]
pub const CHANNEL_COUNT: usize = 2;

/// Channel enumeration
///
/// The discriminants double as the raw identifiers used on the wire and in
/// [`DataCorrector::correct_by_id`](crate::DataCorrector::correct_by_id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Channel {
    /// Particulate matter (PM2.5)
    Pm = 0,
    /// Carbon monoxide
    Co = 1,
}

impl Channel {
    /// Every channel, in identifier order
    pub const ALL: [Channel; CHANNEL_COUNT] = [Channel::Pm, Channel::Co];

    /// Slot index used for per-channel storage
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Raw identifier
    pub const fn id(&self) -> u8 {
        *self as u8
    }

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Channel::Pm => "pm",
            Channel::Co => "co",
        }
    }

    /// Get expected unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            Channel::Pm => "µg/m³",
            Channel::Co => "ppm",
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = CorrectionError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Channel::Pm),
            1 => Ok(Channel::Co),
            _ => Err(CorrectionError::InvalidChannel { id }),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
