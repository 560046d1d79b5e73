//! Server timestamps.
//!
//! The backend stamps every document with the time the server received it.
//! That stamp, not the client clock, is the ordering key for event logs.

use serde::{Deserialize, Serialize};

/// A server-assigned point in time with nanosecond precision.
///
/// Ordering is lexicographic on `(seconds, nanoseconds)`, so sorting a log by
/// `Timestamp` yields the order in which the server accepted the writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    /// Whole seconds since the Unix epoch.
    pub seconds: i64,
    /// Sub-second part, `0..1_000_000_000`.
    pub nanoseconds: u32,
}

impl Timestamp {
    const NANOS_PER_SECOND: u32 = 1_000_000_000;

    /// Create a timestamp, carrying overflowing nanoseconds into seconds.
    ///
    /// The carry saturates at `i64::MAX` seconds.
    #[must_use]
    pub const fn new(seconds: i64, nanoseconds: u32) -> Self {
        Self {
            seconds: seconds.saturating_add((nanoseconds / Self::NANOS_PER_SECOND) as i64),
            nanoseconds: nanoseconds % Self::NANOS_PER_SECOND,
        }
    }

    /// Timestamp at a whole second.
    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self::new(seconds, 0)
    }

    /// Timestamp from milliseconds since the epoch.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        let seconds = millis.div_euclid(1000);
        let rem = millis.rem_euclid(1000) as u32;
        Self::new(seconds, rem * 1_000_000)
    }

    /// Milliseconds since the epoch (sub-millisecond part truncated).
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.seconds * 1000 + (self.nanoseconds / 1_000_000) as i64
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanoseconds)
    }
}
