//! Wire format for streaming clock panel register writes to an external
//! viewer. Shared between the driver side and any panel front end.
#![no_std]

pub mod panel;
