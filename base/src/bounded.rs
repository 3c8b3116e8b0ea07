//! The `Nibble` type is a four-bit unsigned quantity (0..=15).
//!
//! Following the way early arithmetic units were assembled from
//! magnitude-comparator chips, `Nibble` has only three primitive
//! operations:
//!
//! - [`Nibble::threshold_ge`], a comparator which passes its rear
//!   input through when it is at least as large as the side input,
//!   and outputs zero otherwise;
//! - [`Nibble::subtract_saturating`], a subtraction comparator which
//!   never goes below zero;
//! - [`Nibble::invert_complement`], the four-bit one's complement.
//!
//! Every relational operation (including the implementations of the
//! standard comparison traits) is composed from `threshold_ge`.  The
//! arithmetic operators are deliberately not overloaded, so that the
//! zeroing and truncating behaviour of each primitive is visible where
//! it is used.

use std::cmp::Ordering;
use std::fmt::{self, Binary, Debug, Display, Formatter, LowerHex, UpperHex};
use std::hash::{Hash, Hasher};

use serde::Serialize;

#[cfg(test)]
use test_strategy::Arbitrary;

use super::error::RangeError;

#[cfg(test)]
mod tests;

/// This macro implements conversions from Nibble to native types.
/// These always succeed, since every native integer type can hold
/// 0..=15.
macro_rules! from_self_to_native_type {
    ($SelfT:ty, $($to:ty)*) => {
        $(
            impl From<$SelfT> for $to {
                fn from(n: $SelfT) -> $to {
                    n.bits as $to
                }
            }
        )*
    }
}

/// This macro implements conversions from native types to Nibble.
/// These may fail, since no native type is as narrow as four bits.
macro_rules! try_from_native_type_to_self {
    ($SelfT:ty, $($from:ty)*) => {
        $(
            impl TryFrom<$from> for $SelfT {
                type Error = RangeError;
                fn try_from(n: $from) -> Result<Self, RangeError> {
                    match u8::try_from(n) {
                        Err(_) => {
                            // This is also instantiated for unsigned
                            // types, where the comparison is always
                            // false.
                            #[allow(unused_comparisons)]
                            let negative = n < 0;
                            if negative {
                                Err(RangeError::TooSmall)
                            } else {
                                Err(RangeError::TooLarge)
                            }
                        }
                        Ok(bits) if bits > Self::VALUE_BITS => Err(RangeError::TooLarge),
                        Ok(bits) => Ok(Self { bits }),
                    }
                }
            }
        )*
    }
}

/// `Nibble` is an unsigned four-bit value.  It is always in the range
/// 0..=15; the only way to obtain one from a native integer is a
/// range-checked conversion (`TryFrom`) or the compile-time-checked
/// [`Nibble::new`] (also available as the [`nibble!`](crate::nibble)
/// macro).
#[derive(Clone, Copy, Serialize)]
#[serde(transparent)]
#[cfg_attr(test, derive(Arbitrary))]
pub struct Nibble {
    #[cfg_attr(test, strategy(0..=15u8))]
    pub(crate) bits: u8,
}

impl Nibble {
    const VALUE_BITS: u8 = 0b1111;

    pub const ZERO: Self = Self { bits: 0 };
    pub const ONE: Self = Self { bits: 1 };
    pub const FULL: Self = Self {
        bits: Self::VALUE_BITS,
    };
    pub const MIN: Self = Self::ZERO;
    pub const MAX: Self = Self::FULL;

    // An out-of-range argument fails at compile time.  It's pub so
    // that it can be used in nibble!().
    pub const fn new<const N: u8>() -> Nibble {
        struct Helper<const M: u8>;
        impl<const M: u8> Helper<M> {
            const U: Nibble = {
                if M > Nibble::VALUE_BITS {
                    panic!("input value is out of range")
                } else {
                    Nibble { bits: M }
                }
            };
        }
        Helper::<N>::U
    }

    pub const fn is_zero(&self) -> bool {
        self.bits == 0
    }

    pub const fn is_nonzero(&self) -> bool {
        self.bits != 0
    }

    /// True when every bit is set; that is, the value is 15.
    pub const fn is_full(&self) -> bool {
        self.bits == Self::VALUE_BITS
    }

    /// The comparator primitive.  `self` is the rear input and `side`
    /// is the side input.  The rear input is passed through unchanged
    /// when it is greater than or equal to the side input; otherwise
    /// the output is zero.
    ///
    /// Notice that the output does not distinguish "0 >= side" from a
    /// failed comparison.  [`Nibble::greater_equal`] accounts for that.
    pub const fn threshold_ge(self, side: Nibble) -> Nibble {
        if self.bits >= side.bits {
            self
        } else {
            Self::ZERO
        }
    }

    /// The subtraction comparator: `self - side`, clamped at zero.
    pub const fn subtract_saturating(self, side: Nibble) -> Nibble {
        Self {
            bits: self.bits.saturating_sub(side.bits),
        }
    }

    /// Four-bit one's complement, `15 - self`.
    pub const fn invert_complement(self) -> Nibble {
        Self {
            bits: !self.bits & Self::VALUE_BITS,
        }
    }

    /// `self >= side`, read from the output of the threshold
    /// comparator.  A zero side input is satisfied by any rear input,
    /// including a zero one whose passed-through output is
    /// indistinguishable from "false".
    pub const fn greater_equal(self, side: Nibble) -> bool {
        side.is_zero() || self.threshold_ge(side).is_nonzero()
    }

    /// `self <= side`; this is the threshold comparator with its
    /// inputs swapped.
    pub const fn less_equal(self, side: Nibble) -> bool {
        side.greater_equal(self)
    }

    pub const fn equal(self, other: Nibble) -> bool {
        self.greater_equal(other) && other.greater_equal(self)
    }

    pub const fn not_equal(self, other: Nibble) -> bool {
        !self.equal(other)
    }

    pub const fn greater_than(self, other: Nibble) -> bool {
        self.greater_equal(other) && self.not_equal(other)
    }

    pub const fn less_than(self, other: Nibble) -> bool {
        self.less_equal(other) && self.not_equal(other)
    }
}

impl Default for Nibble {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Display for Nibble {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        Display::fmt(&self.bits, f)
    }
}

impl Debug for Nibble {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Nibble({})", self.bits)
    }
}

impl UpperHex for Nibble {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        UpperHex::fmt(&self.bits, f)
    }
}

impl LowerHex for Nibble {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        LowerHex::fmt(&self.bits, f)
    }
}

impl Binary for Nibble {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        Binary::fmt(&self.bits, f)
    }
}

impl Hash for Nibble {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.bits.hash(state)
    }
}

impl<T> PartialEq<T> for Nibble
where
    T: TryInto<Nibble> + Copy,
{
    fn eq(&self, other: &T) -> bool {
        let converted: Result<Nibble, _> = (*other).try_into();
        match converted {
            Ok(rhs) => self.equal(rhs),
            // `other` cannot be represented as a Nibble, so it cannot
            // be equal to one.
            Err(_) => false,
        }
    }
}

impl Eq for Nibble {}

impl PartialOrd<Nibble> for Nibble {
    fn partial_cmp(&self, other: &Nibble) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Nibble {
    fn cmp(&self, other: &Nibble) -> Ordering {
        if self.less_than(*other) {
            Ordering::Less
        } else if self.greater_than(*other) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

// all the things that Nibble always fits into
from_self_to_native_type!(Nibble, u8 i8 u16 i16 u32 i32 u64 i64 usize isize);
// all the things that may not fit into Nibble
try_from_native_type_to_self!(Nibble, i8 u8 u16 i16 u32 i32 u64 i64 usize isize);
