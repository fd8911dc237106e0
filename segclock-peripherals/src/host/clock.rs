use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

use segclock_core::constants::time::{SECONDS_PER_DAY, SIXTEENTHS_PER_SECOND};
use segclock_core::periph::TimeSourcePort;

const NANOS_PER_SIXTEENTH: u32 = 62_500_000;

/// Wall-clock time source: samples the host clock and presents it the way
/// the hardware register would, sixteenths of a second since midnight.
pub struct HostClock {
    offset_minutes: i32,
}

impl HostClock {
    /// `offset_minutes` shifts the UTC day boundary, e.g. -420 for PDT.
    pub fn new(offset_minutes: i32) -> HostClock {
        HostClock { offset_minutes }
    }
}

/// Folds a unix timestamp into the port encoding. Kept free of the host
/// clock itself so the arithmetic stays testable.
pub fn sixteenths_since_midnight(unix_seconds: i64, subsec_nanos: u32, offset_minutes: i32) -> i32 {
    let local = unix_seconds + offset_minutes as i64 * 60;
    let day_seconds = local.rem_euclid(SECONDS_PER_DAY as i64) as i32;
    day_seconds * SIXTEENTHS_PER_SECOND + (subsec_nanos / NANOS_PER_SIXTEENTH) as i32
}

impl TimeSourcePort for HostClock {
    fn read(&self) -> i32 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(now) => sixteenths_since_midnight(
                now.as_secs() as i64,
                now.subsec_nanos(),
                self.offset_minutes,
            ),
            Err(e) => {
                warn!("host clock predates the epoch: {}", e);
                -1 // out of domain on purpose; the controller skips the cycle
            }
        }
    }
}

#[cfg(test)]
mod clock_tests {
    use super::*;

    #[test]
    fn epoch_is_midnight() {
        assert_eq!(sixteenths_since_midnight(0, 0, 0), 0);
    }

    #[test]
    fn counts_sixteenths_within_the_day() {
        assert_eq!(sixteenths_since_midnight(39_906, 0, 0), 16 * 39_906);
        assert_eq!(sixteenths_since_midnight(43_200, 62_500_000, 0), 16 * 43_200 + 1);
        // just under one second of nanos is still the 15th count
        assert_eq!(sixteenths_since_midnight(0, 999_999_999, 0), 15);
    }

    #[test]
    fn day_boundary_wraps() {
        assert_eq!(sixteenths_since_midnight(86_400, 0, 0), 0);
        assert_eq!(sixteenths_since_midnight(86_401, 0, 0), 16);
    }

    #[test]
    fn negative_offsets_fold_into_the_previous_day() {
        // one hour west of the epoch lands at 23:00
        assert_eq!(sixteenths_since_midnight(0, 0, -60), 16 * 82_800);
        assert_eq!(sixteenths_since_midnight(0, 0, 60), 16 * 3_600);
    }

    #[test]
    fn readings_always_land_in_the_valid_domain() {
        use segclock_core::constants::time::MAX_RAW_READING;
        for secs in [0i64, 1, 86_399, 86_400, 1_763_647_200] {
            for nanos in [0u32, 62_499_999, 999_999_999] {
                let raw = sixteenths_since_midnight(secs, nanos, -420);
                assert!(raw >= 0 && raw < MAX_RAW_READING);
            }
        }
    }
}
