//! Basic error reporting.

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

/// Represents a failure to convert a native integer into a
/// [`Nibble`](crate::Nibble), because the value lies outside the
/// closed range 0..=15.  The variant says which end of the range was
/// crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// The value was greater than 15.
    TooLarge,
    /// The value was negative.
    TooSmall,
}

impl Error for RangeError {}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            RangeError::TooLarge => f.write_str("value is too large (must be between 0 and 15)"),
            RangeError::TooSmall => f.write_str("value is too small (must be between 0 and 15)"),
        }
    }
}

#[test]
fn test_range_error_display() {
    assert_eq!(
        RangeError::TooLarge.to_string(),
        "value is too large (must be between 0 and 15)"
    );
    assert_eq!(
        RangeError::TooSmall.to_string(),
        "value is too small (must be between 0 and 15)"
    );
}
