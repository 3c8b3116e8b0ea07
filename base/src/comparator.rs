//! Operations built from the comparator primitives of [`Nibble`].
//!
//! None of these functions touch the bits of a `Nibble` directly;
//! each is a composition of [`Nibble::threshold_ge`],
//! [`Nibble::subtract_saturating`] and [`Nibble::invert_complement`],
//! much as a circuit would wire together comparator packages.

use super::bounded::Nibble;

/// The greater of two values, taken from a pair of threshold
/// comparators fed the same two inputs in opposite orders.
fn maximum2(a: Nibble, b: Nibble) -> Nibble {
    let forward = a.threshold_ge(b);
    if forward.is_nonzero() {
        forward
    } else {
        // Either a < b, or a >= b with a == 0 (and therefore b == 0);
        // in both cases the reversed comparator gives the answer.
        b.threshold_ge(a)
    }
}

/// Return the greatest of the given values.  A comparator with no
/// inputs outputs zero, so the maximum of an empty slice is
/// [`Nibble::ZERO`].
pub fn maximum(values: &[Nibble]) -> Nibble {
    values.iter().copied().fold(Nibble::ZERO, maximum2)
}

/// Return the lesser of two values.  This is obtained from the
/// maximum of the complements (De Morgan duality), never by comparing
/// `a` and `b` directly.
pub fn minimum(a: Nibble, b: Nibble) -> Nibble {
    maximum(&[a.invert_complement(), b.invert_complement()]).invert_complement()
}

/// Perform the same operation as a subtraction comparator with two
/// side inputs: `rear - max(side_a, side_b)`, clamped at zero.
pub fn subtract(rear: Nibble, side_a: Nibble, side_b: Nibble) -> Nibble {
    rear.subtract_saturating(maximum(&[side_a, side_b]))
}

/// Perform the same operation as a comparison comparator with two
/// side inputs: `rear >= min(side_a, side_b)`.
pub fn compare(rear: Nibble, side_a: Nibble, side_b: Nibble) -> bool {
    rear.greater_equal(minimum(side_a, side_b))
}

/// The absolute difference between two values.
pub fn difference(a: Nibble, b: Nibble) -> Nibble {
    let m = maximum(&[a, b]);
    maximum(&[m.subtract_saturating(a), m.subtract_saturating(b)])
}

/// Add one.  This saturates, so incrementing 15 yields 15.
pub fn increment(a: Nibble) -> Nibble {
    Nibble::new::<14>()
        .subtract_saturating(a)
        .invert_complement()
}

/// Add one, modulo 16.  Incrementing 15 yields 0.
pub fn increment_wrapping(a: Nibble) -> Nibble {
    if a.greater_equal(Nibble::FULL) {
        Nibble::ZERO
    } else {
        increment(a)
    }
}

#[cfg(test)]
fn nib(n: u8) -> Nibble {
    Nibble::try_from(n).expect("test data should be in range")
}

#[cfg(test)]
fn all_nibbles() -> impl Iterator<Item = Nibble> {
    (0_u8..=15).map(nib)
}

#[test]
fn test_maximum_and_minimum_agree_with_native() {
    for a in all_nibbles() {
        for b in all_nibbles() {
            let (x, y) = (u8::from(a), u8::from(b));
            assert_eq!(u8::from(maximum(&[a, b])), x.max(y), "maximum({x}, {y})");
            assert_eq!(u8::from(minimum(a, b)), x.min(y), "minimum({x}, {y})");
        }
    }
}

#[test]
fn test_maximum_of_many() {
    assert_eq!(maximum(&[]), Nibble::ZERO);
    assert_eq!(maximum(&[nib(6)]), nib(6));
    assert_eq!(maximum(&[nib(3), nib(12), nib(0), nib(12), nib(7)]), nib(12));
    assert_eq!(maximum(&[Nibble::ZERO, Nibble::ZERO]), Nibble::ZERO);
    assert_eq!(maximum(&[nib(1), Nibble::FULL, nib(14)]), Nibble::FULL);
}

#[test]
fn test_difference_is_absolute_difference() {
    for a in all_nibbles() {
        for b in all_nibbles() {
            let (x, y) = (u8::from(a), u8::from(b));
            assert_eq!(u8::from(difference(a, b)), x.abs_diff(y), "difference({x}, {y})");
        }
    }
}

#[test]
fn test_subtract() {
    assert_eq!(subtract(nib(10), nib(3), nib(4)), nib(6));
    assert_eq!(subtract(nib(10), nib(4), nib(3)), nib(6));
    assert_eq!(subtract(nib(2), nib(3), nib(4)), Nibble::ZERO);
    assert_eq!(subtract(Nibble::FULL, Nibble::ZERO, Nibble::ZERO), Nibble::FULL);
}

#[test]
fn test_compare() {
    assert!(compare(nib(5), nib(5), nib(9)));
    assert!(compare(nib(5), nib(9), nib(4)));
    assert!(!compare(nib(3), nib(4), nib(9)));
    assert!(compare(Nibble::ZERO, Nibble::ZERO, nib(9)));
    for rear in all_nibbles() {
        for a in all_nibbles() {
            for b in all_nibbles() {
                let expected = u8::from(rear) >= u8::from(a).min(u8::from(b));
                assert_eq!(compare(rear, a, b), expected, "compare({rear}, {a}, {b})");
            }
        }
    }
}

#[test]
fn test_increment() {
    assert_eq!(increment(Nibble::FULL), Nibble::FULL);
    assert_eq!(increment_wrapping(Nibble::FULL), Nibble::ZERO);
    for a in 0_u8..15 {
        let expected = nib(a + 1);
        assert_eq!(increment(nib(a)), expected, "increment({a})");
        assert_eq!(increment_wrapping(nib(a)), expected, "increment_wrapping({a})");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn minimum_and_maximum_bracket_operands(a: Nibble, b: Nibble) {
        let lo = minimum(a, b);
        let hi = maximum(&[a, b]);
        assert!(lo.less_equal(a) && lo.less_equal(b));
        assert!(hi.greater_equal(a) && hi.greater_equal(b));
    }

    #[proptest]
    fn difference_is_symmetric(a: Nibble, b: Nibble) {
        assert_eq!(difference(a, b), difference(b, a));
    }

    #[proptest]
    fn maximum_is_order_independent(a: Nibble, b: Nibble, c: Nibble) {
        assert_eq!(maximum(&[a, b, c]), maximum(&[c, a, b]));
        assert_eq!(maximum(&[a, b, c]), maximum(&[b, c, a]));
    }
}
