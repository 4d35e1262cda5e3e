//! Origin timestamps

use core::fmt;
use serde::{Deserialize, Serialize};

/// Modification timestamp of a catalog's physical origin (nanoseconds since
/// epoch)
///
/// A catalog has exactly one origin (the container its keys were read from),
/// so every node served from it reports this single value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OriginTimestamp(u64);

impl OriginTimestamp {
    /// Returns the zero timestamp
    pub fn zero() -> Self {
        Self(0)
    }

    /// Creates a timestamp from nanoseconds since epoch
    pub fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    /// Returns nanoseconds since epoch
    pub fn as_nanos(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OriginTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_default() {
        assert_eq!(OriginTimestamp::zero(), OriginTimestamp::default());
        assert_eq!(OriginTimestamp::zero().as_nanos(), 0);
    }

    #[test]
    fn test_nanos_round_trip() {
        let ts = OriginTimestamp::from_nanos(1_700_000_000_000_000_000);
        assert_eq!(ts.as_nanos(), 1_700_000_000_000_000_000);
    }

    #[test]
    fn test_ordering() {
        assert!(OriginTimestamp::from_nanos(1) < OriginTimestamp::from_nanos(2));
        assert!(OriginTimestamp::zero() < OriginTimestamp::from_nanos(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(OriginTimestamp::from_nanos(42).to_string(), "42ns");
    }
}
