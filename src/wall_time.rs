//! Wall clock time and the collaborators that provide it.

use core::net::Ipv4Addr;

/// Local time of day, minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallTime {
    pub hour: u8,
    pub minute: u8,
}

impl WallTime {
    /// Checked constructor, `None` unless `hour < 24` and `minute < 60`.
    ///
    /// The fields stay public: forced times from remote control are not
    /// range checked and the phrase compiler copes with minutes up to 64.
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }
}

impl From<time::Time> for WallTime {
    fn from(value: time::Time) -> Self {
        Self {
            hour: value.hour(),
            minute: value.minute(),
        }
    }
}

impl From<time::OffsetDateTime> for WallTime {
    fn from(value: time::OffsetDateTime) -> Self {
        value.time().into()
    }
}

/// Source of the current local time.
///
/// Returns `None` while the clock has not been synchronised yet.
pub trait TimeSource {
    fn local_time(&mut self) -> Option<WallTime>;
}

impl<F: FnMut() -> Option<WallTime>> TimeSource for F {
    fn local_time(&mut self) -> Option<WallTime> {
        self()
    }
}

/// Source of the device's network address, `0.0.0.0` when unassigned
pub trait AddressSource {
    fn address(&self) -> Ipv4Addr;
}

impl AddressSource for Ipv4Addr {
    fn address(&self) -> Ipv4Addr {
        *self
    }
}
