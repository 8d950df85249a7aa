use std::fmt;

use serde::{Deserialize, Serialize};

use super::layout;

/// OSC timetag: 32-bit seconds since 1900-01-01 in the high half, 32-bit
/// fractional seconds in the low half. The raw value `1` is reserved to
/// mean "execute immediately" and never denotes a real instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeTag(u64);

impl TimeTag {
    pub const IMMEDIATE: TimeTag = TimeTag(layout::IMMEDIATE);

    pub const fn from_raw(raw: u64) -> Self {
        TimeTag(raw)
    }

    pub const fn from_parts(seconds: u32, fraction: u32) -> Self {
        TimeTag(((seconds as u64) << 32) | fraction as u64)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn is_immediate(self) -> bool {
        self.0 == layout::IMMEDIATE
    }

    /// Seconds component, or `None` for the immediate sentinel.
    pub const fn seconds(self) -> Option<u32> {
        if self.is_immediate() {
            None
        } else {
            Some((self.0 >> 32) as u32)
        }
    }

    /// Fractional-seconds component, or `None` for the immediate sentinel.
    pub const fn fraction(self) -> Option<u32> {
        if self.is_immediate() {
            None
        } else {
            Some(self.0 as u32)
        }
    }
}

impl fmt::Display for TimeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.seconds(), self.fraction()) {
            (Some(seconds), Some(fraction)) => write!(f, "{seconds}.{fraction:08x}"),
            _ => write!(f, "immediate"),
        }
    }
}
