//! Host-side peripherals: the wall clock stands in for the hardware time
//! register, and the console/TCP panels stand in for the display latch.

mod clock;
mod console;
mod remote;

pub use clock::{sixteenths_since_midnight, HostClock};
pub use console::ConsolePanel;
pub use remote::RemotePanel;
