use core::fmt;

/// Raised when a port reading or a time-of-day field falls outside its
/// declared domain. Validation is local and immediate; signaling the
/// failure to the caller is the entire contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RangeError;

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value out of range")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RangeError {}
