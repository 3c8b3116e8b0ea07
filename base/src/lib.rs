//! The `base` crate defines four-bit ("nibble") arithmetic built
//! entirely from magnitude comparators, in the way that early
//! arithmetic units were sometimes assembled from comparator ICs
//! rather than from adders.
//!
//! There are three layers:
//!
//! - [`Nibble`], a value in 0..=15 whose primitive operations are a
//!   threshold comparator, a saturating subtraction and a complement;
//! - [`comparator`], which derives maximum, minimum, difference and
//!   increment from those primitives;
//! - [`adder`], a four-bit add-with-carry made from the two layers
//!   above without using a native addition.

mod bounded;
mod error;

pub mod adder;
pub mod comparator;
pub mod prelude;
pub use crate::bounded::Nibble;
pub use crate::error::RangeError;

#[macro_export]
macro_rules! nibble {
    ($n:expr) => {
        $crate::prelude::Nibble::new::<{ $n }>()
    };
}

#[test]
fn test_nibble_macro() {
    use prelude::Nibble;
    let m: Nibble = nibble!(12_u8);
    let n: Nibble = Nibble::try_from(12_u32).expect("test data should be in range");
    assert_eq!(m, n);
    assert_eq!(nibble!(0), Nibble::ZERO);
    assert_eq!(nibble!(15), Nibble::FULL);
}
