use log::{debug, error, warn};

use crate::display;
use crate::error::RangeError;
use crate::periph::{DisplayPort, TimeSourcePort};
use crate::tod;

/// Ties the two port cells together: reads the raw time register, runs it
/// through decode and encode, and latches the result on the display.
///
/// Holds nothing beyond the port handles; one [`update`](Self::update)
/// call is one full read-compute-write cycle. The surrounding scheduler
/// is expected to serialize calls.
pub struct ClockController<'a> {
    time_port: &'a dyn TimeSourcePort,
    display_port: &'a mut dyn DisplayPort,
}

impl<'a> ClockController<'a> {
    pub fn new(
        time_port: &'a dyn TimeSourcePort,
        display_port: &'a mut dyn DisplayPort,
    ) -> ClockController<'a> {
        ClockController {
            time_port,
            display_port,
        }
    }

    /// Runs one conversion cycle.
    ///
    /// On a malformed reading nothing is written, so the previous pattern
    /// stays visible until the port recovers on a later cycle.
    pub fn update(&mut self) -> Result<(), RangeError> {
        let raw = self.time_port.read();
        debug!("time port read: {}", raw);

        let tod = match tod::decode(raw) {
            Ok(tod) => tod,
            Err(e) => {
                warn!("time port reading {} out of range, keeping last display", raw);
                return Err(e);
            }
        };

        // decode's invariants satisfy encode's preconditions, so this arm
        // is unreachable from here.
        let pattern = match display::encode(&tod) {
            Ok(pattern) => pattern,
            Err(e) => {
                error!("decoded time failed encoding: {:?}", tod);
                return Err(e);
            }
        };

        self.display_port.write(pattern);
        Ok(())
    }
}

#[cfg(test)]
mod controller_tests {
    use super::*;
    use crate::constants::display::GLYPHS;
    use crate::constants::time::MAX_RAW_READING;
    use crate::display::DisplaySegments;
    use core::cell::Cell;

    struct ScriptedTimeSource {
        value: i32,
        reads: Cell<u32>,
    }

    impl ScriptedTimeSource {
        fn new(value: i32) -> ScriptedTimeSource {
            ScriptedTimeSource {
                value,
                reads: Cell::new(0),
            }
        }
    }

    impl TimeSourcePort for ScriptedTimeSource {
        fn read(&self) -> i32 {
            self.reads.set(self.reads.get() + 1);
            self.value
        }
    }

    struct RecordingDisplay {
        last: Option<DisplaySegments>,
        writes: u32,
    }

    impl DisplayPort for RecordingDisplay {
        fn write(&mut self, pattern: DisplaySegments) {
            self.last = Some(pattern);
            self.writes += 1;
        }
    }

    #[test]
    fn update_drives_the_display_end_to_end() {
        // 39906 seconds after midnight reads 11:05:06 AM
        let source = ScriptedTimeSource::new(16 * 39_906);
        let mut panel = RecordingDisplay {
            last: None,
            writes: 0,
        };

        ClockController::new(&source, &mut panel).update().unwrap();

        let pattern = panel.last.unwrap();
        assert_eq!(pattern.digit_field(3), 0); // no leading digit for 11
        assert_eq!(pattern.digit_field(2), GLYPHS[1]);
        assert_eq!(pattern.digit_field(1), GLYPHS[0]);
        assert_eq!(pattern.digit_field(0), GLYPHS[5]);
        assert!(pattern.am_lit());
        assert!(!pattern.pm_lit());

        // one port read, one port write per cycle
        assert_eq!(source.reads.get(), 1);
        assert_eq!(panel.writes, 1);
    }

    #[test]
    fn failed_decode_leaves_the_previous_pattern() {
        let stale = DisplaySegments::from_bits(0x1234_5678);
        for bad in [-1, MAX_RAW_READING + 1] {
            let source = ScriptedTimeSource::new(bad);
            let mut panel = RecordingDisplay {
                last: Some(stale),
                writes: 0,
            };

            let result = ClockController::new(&source, &mut panel).update();

            assert_eq!(result, Err(RangeError));
            assert_eq!(source.reads.get(), 1);
            assert_eq!(panel.writes, 0);
            assert_eq!(panel.last, Some(stale));
        }
    }
}
