//! Core of the segmented clock driver: decodes the packed time-of-day
//! register into a 12-hour reading and encodes it as the composite bit
//! pattern the display latch expects. Integer arithmetic only (the target
//! has no FPU) and no heap anywhere in the update path.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod constants;
pub mod controller;
pub mod display;
pub mod error;
pub mod periph;
pub mod tod;

pub use controller::ClockController;
pub use display::{encode, DisplaySegments};
pub use error::RangeError;
pub use periph::{DisplayPort, TimeSourcePort};
pub use tod::{decode, Meridiem, TimeOfDay};
