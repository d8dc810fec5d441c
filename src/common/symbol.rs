//! Page identifier bound.

use std::fmt::Debug;
use std::hash::Hash;

/// Anything usable as a page identifier in a reference string.
///
/// Policies only compare symbols for equality. `Hash` lets callers count
/// distinct pages; `Debug` feeds the log output. Formatting a trace for
/// humans additionally needs `Display`, which is required by the
/// [`report`](crate::report) functions only.
///
/// Implemented for every type meeting the bounds, so `char`, `u32`,
/// `String` and `&str` all work out of the box.
pub trait PageSymbol: Clone + Eq + Hash + Debug {}

impl<T> PageSymbol for T where T: Clone + Eq + Hash + Debug {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_symbol<P: PageSymbol>() {}

    #[test]
    fn test_common_symbol_types() {
        assert_symbol::<char>();
        assert_symbol::<u32>();
        assert_symbol::<String>();
        assert_symbol::<&str>();
    }
}
