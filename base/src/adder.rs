//! A four-bit adder made from comparators.
//!
//! There is no adder circuit here.  The sum is assembled from two
//! identities which each hold over part of the input range:
//!
//! - `!(!a - b)` is `a + b` when the true sum fits in four bits, and
//!   saturates at 15 otherwise;
//! - `max(a, b) - max(!a, !b)` is `a + b - 15` when the true sum is
//!   at least 15, and zero otherwise.
//!
//! (Here `-` is the saturating subtraction comparator and `!` is the
//! four-bit complement.)  When the first saturates and the second is
//! non-zero, the sum overflowed; the low four bits of the true sum are
//! then one less than the second.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use tracing::{event, Level};

use super::bounded::Nibble;
use super::comparator::maximum;

/// The result of a four-bit addition.  The carry is represented as a
/// nibble which is either [`Nibble::ZERO`] or [`Nibble::FULL`], since
/// that is what a comparator stage would drive onto its output lines.
/// Only [`add`] constructs a `Sum`, so no other carry value occurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Sum {
    carry: Nibble,
    value: Nibble,
}

impl Sum {
    /// [`Nibble::FULL`] if the addition overflowed, otherwise
    /// [`Nibble::ZERO`].
    pub const fn carry(&self) -> Nibble {
        self.carry
    }

    /// The low four bits of the sum.
    pub const fn value(&self) -> Nibble {
        self.value
    }

    pub const fn has_carry(&self) -> bool {
        self.carry.is_nonzero()
    }

    /// The result as a single five-bit quantity, carry included.
    /// This is for presentation; the addition itself never uses a
    /// native adder.
    pub fn as_five_bit(&self) -> u8 {
        let carry: u8 = if self.has_carry() { 0b1_0000 } else { 0 };
        carry | u8::from(self.value)
    }
}

impl Display for Sum {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        Display::fmt(&self.as_five_bit(), f)
    }
}

/// Valid (without overflow) when `a + b <= 15`.
fn add_low(a: Nibble, b: Nibble) -> Nibble {
    a.invert_complement()
        .subtract_saturating(b)
        .invert_complement()
}

/// Valid when `a + b >= 15`, giving `a + b - 15`.
fn add_high(a: Nibble, b: Nibble) -> Nibble {
    let inverted = [a.invert_complement(), b.invert_complement()];
    maximum(&[a, b]).subtract_saturating(maximum(&inverted))
}

/// Add two nibbles, producing the four-bit sum and a carry flag.
pub fn add(a: Nibble, b: Nibble) -> Sum {
    let a1 = add_low(a, b);
    let a2 = add_high(a, b);
    // Both conditions are needed: a1 also saturates when the sum is
    // exactly 15, and a2 is non-zero only above 15.
    let carry_detected = a1.is_full() && a2.is_nonzero();
    event!(
        Level::TRACE,
        "add({}, {}): a1={}, a2={}, carry={}",
        a,
        b,
        a1,
        a2,
        carry_detected
    );
    if carry_detected {
        Sum {
            carry: Nibble::FULL,
            value: a2.subtract_saturating(Nibble::ONE),
        }
    } else {
        Sum {
            carry: Nibble::ZERO,
            value: a1,
        }
    }
}

#[cfg(test)]
fn nib(n: u8) -> Nibble {
    Nibble::try_from(n).expect("test data should be in range")
}

#[cfg(test)]
fn sum(carry: Nibble, value: u8) -> Sum {
    Sum {
        carry,
        value: nib(value),
    }
}

#[test]
fn test_add_examples() {
    assert_eq!(add(nib(3), nib(4)), sum(Nibble::ZERO, 7));
    assert_eq!(add(nib(0), nib(0)), sum(Nibble::ZERO, 0));
    assert_eq!(add(nib(7), nib(8)), sum(Nibble::ZERO, 15));
    assert_eq!(add(nib(8), nib(8)), sum(Nibble::FULL, 0));
    assert_eq!(add(nib(15), nib(1)), sum(Nibble::FULL, 0));
    assert_eq!(add(nib(15), nib(15)), sum(Nibble::FULL, 14));
}

#[test]
fn test_add_table() {
    // Over every pair of inputs, the comparator adder agrees with
    // native addition modulo 16.
    for a in 0_u8..=15 {
        for b in 0_u8..=15 {
            let result = add(nib(a), nib(b));
            let total = a + b;
            assert_eq!(result.has_carry(), total > 15, "carry for {a}+{b}");
            assert_eq!(u8::from(result.value()), total % 16, "sum for {a}+{b}");
            assert_eq!(result.as_five_bit(), total, "five-bit total for {a}+{b}");
            assert!(
                result.carry() == Nibble::ZERO || result.carry() == Nibble::FULL,
                "carry for {a}+{b} should be ZERO or FULL, got {:?}",
                result.carry()
            );
        }
    }
}

#[test]
fn test_intermediate_identities() {
    for a in 0_u8..=15 {
        for b in 0_u8..=15 {
            assert_eq!(u8::from(add_low(nib(a), nib(b))), (a + b).min(15));
            assert_eq!(u8::from(add_high(nib(a), nib(b))), (a + b).saturating_sub(15));
        }
    }
}

#[test]
fn test_sum_accessors() {
    let overflowed = add(nib(12), nib(9));
    assert_eq!(overflowed.carry(), Nibble::FULL);
    assert_eq!(overflowed.value(), nib(5));
    let plain = add(nib(2), nib(9));
    assert_eq!(plain.carry(), Nibble::ZERO);
    assert_eq!(plain.value(), nib(11));
}

#[test]
fn test_sum_serializes_carry_and_value() {
    assert_eq!(
        serde_json::to_string(&add(nib(15), nib(1))).unwrap(),
        r#"{"carry":15,"value":0}"#
    );
    assert_eq!(
        serde_json::to_string(&add(nib(3), nib(4))).unwrap(),
        r#"{"carry":0,"value":7}"#
    );
}

#[test]
fn test_sum_display() {
    assert_eq!(add(nib(9), nib(9)).to_string(), "18");
    assert_eq!(add(nib(2), nib(2)).to_string(), "4");
}

#[cfg(test)]
mod proptests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn addition_is_commutative(a: Nibble, b: Nibble) {
        assert_eq!(add(a, b), add(b, a));
    }

    #[proptest]
    fn adding_zero_is_identity(a: Nibble) {
        assert_eq!(add(a, Nibble::ZERO), sum(Nibble::ZERO, u8::from(a)));
    }
}
