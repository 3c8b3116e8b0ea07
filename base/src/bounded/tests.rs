use super::{Nibble, RangeError};

#[test]
fn test_nibble_max() {
    assert_eq!(Nibble::MAX.bits, 15);
    assert_eq!(Nibble::FULL.bits, 15);
}

#[test]
fn test_nibble_min() {
    assert_eq!(Nibble::MIN.bits, 0);
    assert_eq!(Nibble::ZERO.bits, 0);
    assert_eq!(Nibble::default(), Nibble::ZERO);
}

#[test]
fn test_new() {
    assert_eq!(Nibble::new::<0>(), Nibble::ZERO);
    assert_eq!(Nibble::new::<1>(), Nibble::ONE);
    assert_eq!(Nibble::new::<15>(), Nibble::FULL);
}

#[test]
fn test_make_round_trips_in_range() {
    for v in 0_u8..=15 {
        let n = Nibble::try_from(v).expect("test data should be in range");
        assert_eq!(u8::from(n), v, "Round trip failed for {v}->{n:?}");
    }
    for v in 0_i64..=15 {
        let n = Nibble::try_from(v).expect("test data should be in range");
        assert_eq!(i64::from(n), v, "Round trip failed for {v}->{n:?}");
    }
}

#[test]
fn test_make_rejects_out_of_range() {
    assert_eq!(Nibble::try_from(16_u8), Err(RangeError::TooLarge));
    assert_eq!(Nibble::try_from(255_u8), Err(RangeError::TooLarge));
    assert_eq!(Nibble::try_from(256_u16), Err(RangeError::TooLarge));
    assert_eq!(Nibble::try_from(16_i32), Err(RangeError::TooLarge));
    assert_eq!(Nibble::try_from(u64::MAX), Err(RangeError::TooLarge));
    assert_eq!(Nibble::try_from(-1_i8), Err(RangeError::TooSmall));
    assert_eq!(Nibble::try_from(-16_i32), Err(RangeError::TooSmall));
    assert_eq!(Nibble::try_from(i64::MIN), Err(RangeError::TooSmall));
    assert_eq!(Nibble::try_from(isize::MIN), Err(RangeError::TooSmall));
}

#[test]
fn test_predicates() {
    assert!(Nibble::ZERO.is_zero());
    assert!(!Nibble::ZERO.is_nonzero());
    assert!(!Nibble::ZERO.is_full());

    assert!(!Nibble::ONE.is_zero());
    assert!(Nibble::ONE.is_nonzero());
    assert!(!Nibble::ONE.is_full());

    assert!(Nibble::FULL.is_nonzero());
    assert!(Nibble::FULL.is_full());
}

#[test]
fn test_threshold_ge_table() {
    for rear in 0_u8..=15 {
        for side in 0_u8..=15 {
            let r = Nibble::try_from(rear).unwrap();
            let s = Nibble::try_from(side).unwrap();
            let expected: u8 = if rear >= side { rear } else { 0 };
            assert_eq!(
                r.threshold_ge(s).bits,
                expected,
                "threshold_ge({rear}, {side}) should be {expected}"
            );
        }
    }
}

#[test]
fn test_derived_relations_table() {
    for a in 0_u8..=15 {
        for b in 0_u8..=15 {
            let x = Nibble::try_from(a).unwrap();
            let y = Nibble::try_from(b).unwrap();
            assert_eq!(x.greater_equal(y), a >= b, "{a} >= {b}");
            assert_eq!(x.less_equal(y), a <= b, "{a} <= {b}");
            assert_eq!(x.equal(y), a == b, "{a} == {b}");
            assert_eq!(x.not_equal(y), a != b, "{a} != {b}");
            assert_eq!(x.greater_than(y), a > b, "{a} > {b}");
            assert_eq!(x.less_than(y), a < b, "{a} < {b}");
            assert_eq!(x.cmp(&y), a.cmp(&b), "cmp({a}, {b})");
        }
    }
}

#[test]
fn test_zero_equals_zero() {
    // The threshold comparator outputs zero for 0 >= 0, but the
    // comparison still holds.
    assert!(Nibble::ZERO.threshold_ge(Nibble::ZERO).is_zero());
    assert!(Nibble::ZERO.greater_equal(Nibble::ZERO));
    assert!(Nibble::ZERO.equal(Nibble::ZERO));
    assert_eq!(Nibble::ZERO, Nibble::ZERO);
}

#[test]
fn test_eq_native() {
    let seven = Nibble::try_from(7_u8).unwrap();
    assert_eq!(seven, 7_u8);
    assert_eq!(seven, 7_i64);
    assert_ne!(seven, 8_u8);
    // Values which are not representable are never equal.
    assert_ne!(Nibble::FULL, 31_u8);
    assert_ne!(Nibble::ZERO, -16_i32);
}

#[test]
fn test_subtract_saturating() {
    let three = Nibble::try_from(3_u8).unwrap();
    let five = Nibble::try_from(5_u8).unwrap();
    assert_eq!(five.subtract_saturating(three), 2_u8);
    assert_eq!(three.subtract_saturating(five), Nibble::ZERO);
    assert_eq!(Nibble::FULL.subtract_saturating(Nibble::FULL), Nibble::ZERO);
    assert_eq!(Nibble::FULL.subtract_saturating(Nibble::ZERO), Nibble::FULL);
}

#[test]
fn test_invert_complement() {
    assert_eq!(Nibble::ZERO.invert_complement(), Nibble::FULL);
    assert_eq!(Nibble::FULL.invert_complement(), Nibble::ZERO);
    assert_eq!(Nibble::try_from(5_u8).unwrap().invert_complement(), 10_u8);
}

#[test]
fn test_sorting_uses_derived_order() {
    let mut values: Vec<Nibble> = [9_u8, 0, 15, 3, 3, 12]
        .into_iter()
        .map(|v| Nibble::try_from(v).unwrap())
        .collect();
    values.sort();
    let sorted: Vec<u8> = values.into_iter().map(u8::from).collect();
    assert_eq!(sorted, vec![0, 3, 3, 9, 12, 15]);
}

#[test]
fn test_formatting() {
    let eleven = Nibble::try_from(11_u8).unwrap();
    assert_eq!(format!("{eleven}"), "11");
    assert_eq!(format!("{eleven:?}"), "Nibble(11)");
    assert_eq!(format!("{eleven:X}"), "B");
    assert_eq!(format!("{eleven:x}"), "b");
    assert_eq!(format!("{eleven:04b}"), "1011");
    assert_eq!(format!("{:>3}", Nibble::ONE), "  1");
}

#[test]
fn test_serializes_as_plain_number() {
    let eleven = Nibble::try_from(11_u8).unwrap();
    assert_eq!(serde_json::to_string(&eleven).unwrap(), "11");
    assert_eq!(serde_json::to_string(&Nibble::ZERO).unwrap(), "0");
}

#[cfg(test)]
mod proptests {
    use super::super::Nibble;
    use test_strategy::proptest;

    #[proptest]
    fn invert_is_an_involution(x: Nibble) {
        assert_eq!(x.invert_complement().invert_complement(), x);
    }

    #[proptest]
    fn subtraction_saturates_at_floor(x: Nibble) {
        assert_eq!(x.subtract_saturating(Nibble::ZERO), x);
        assert_eq!(Nibble::ZERO.subtract_saturating(x), Nibble::ZERO);
        assert_eq!(x.subtract_saturating(x), Nibble::ZERO);
    }

    #[proptest]
    fn threshold_ge_passes_rear_or_zero(rear: Nibble, side: Nibble) {
        let out = rear.threshold_ge(side);
        if u8::from(rear) >= u8::from(side) {
            assert_eq!(out, rear);
        } else {
            assert!(out.is_zero());
        }
    }

    #[proptest]
    fn ordering_is_antisymmetric(a: Nibble, b: Nibble) {
        if a.less_equal(b) && b.less_equal(a) {
            assert!(a.equal(b));
        }
        assert_eq!(a.greater_than(b), b.less_than(a));
    }
}
