//! The prelude exports the nibble type together with the operations
//! built on it, so that callers can bring the whole comparator
//! toolkit into scope with a single `use`.
pub use super::adder::{add, Sum};
pub use super::bounded::Nibble;
pub use super::comparator::{
    compare, difference, increment, increment_wrapping, maximum, minimum, subtract,
};
pub use super::error::RangeError;
pub use super::nibble;
