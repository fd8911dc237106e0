use core::cell::Cell;

use segclock_core::periph::TimeSourcePort;

/// Time-source cell driven by tooling instead of hardware. Sweeps and
/// tests poke readings in and let the controller sample them back out.
pub struct ManualTimeSource {
    value: Cell<i32>,
}

impl ManualTimeSource {
    pub fn new(value: i32) -> ManualTimeSource {
        ManualTimeSource {
            value: Cell::new(value),
        }
    }

    pub fn set(&self, value: i32) {
        self.value.set(value);
    }
}

impl TimeSourcePort for ManualTimeSource {
    fn read(&self) -> i32 {
        self.value.get()
    }
}
