use crate::display::DisplaySegments;

/// Read side of the time-of-day register.
pub trait TimeSourcePort {
    /// Sample the raw reading, sixteenths of a second since midnight.
    /// Garbage values (uninitialized hardware) are the caller's problem.
    fn read(&self) -> i32;
}

/// Write side of the display latch.
pub trait DisplayPort {
    /// Latch a composed segment pattern. A single integer write.
    fn write(&mut self, pattern: DisplaySegments);
}
