//! Callback-based dispatch on the active slot.
//!
//! A `match` is usually the most direct way to handle every slot of a choice. The traits here
//! cover call sites that need a reusable, named handler instead: implement the trait for the arity
//! at hand and pass it to `visit`, which calls exactly one method, the one matching the active
//! slot. Visitors are consumed; implement the trait for `&mut YourVisitor` to reuse one.
//!
//! ```rust
//! use anyof::{AnyOfThree, Visit3};
//!
//! struct Describe;
//! impl Visit3<u8, char, String> for Describe {
//!     type Output = String;
//!     fn visit_first(self, value: u8) -> String { format!("byte {}", value) }
//!     fn visit_second(self, value: char) -> String { format!("char {}", value) }
//!     fn visit_third(self, value: String) -> String { format!("text {}", value) }
//! }
//!
//! let c: AnyOfThree<u8, char, String> = AnyOfThree::with_second('x');
//! assert_eq!(c.visit(Describe), "char x");
//! ```

/// Handles a two-slot choice.
pub trait Visit2<A, B> {
    /// Returned by every callback.
    type Output;

    fn visit_first(self, value: A) -> Self::Output;
    fn visit_second(self, value: B) -> Self::Output;
}

/// Handles a three-slot choice.
pub trait Visit3<A, B, C> {
    /// Returned by every callback.
    type Output;

    fn visit_first(self, value: A) -> Self::Output;
    fn visit_second(self, value: B) -> Self::Output;
    fn visit_third(self, value: C) -> Self::Output;
}

/// Handles a four-slot choice.
pub trait Visit4<A, B, C, D> {
    /// Returned by every callback.
    type Output;

    fn visit_first(self, value: A) -> Self::Output;
    fn visit_second(self, value: B) -> Self::Output;
    fn visit_third(self, value: C) -> Self::Output;
    fn visit_fourth(self, value: D) -> Self::Output;
}

/// Handles a five-slot choice.
pub trait Visit5<A, B, C, D, E> {
    /// Returned by every callback.
    type Output;

    fn visit_first(self, value: A) -> Self::Output;
    fn visit_second(self, value: B) -> Self::Output;
    fn visit_third(self, value: C) -> Self::Output;
    fn visit_fourth(self, value: D) -> Self::Output;
    fn visit_fifth(self, value: E) -> Self::Output;
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Either, Variant4};

    #[derive(Default)]
    struct Tally {
        calls: Vec<&'static str>,
    }

    impl<'a> Visit2<i32, &'static str> for &'a mut Tally {
        type Output = usize;

        fn visit_first(self, value: i32) -> usize {
            self.calls.push("first");
            value as usize
        }

        fn visit_second(self, value: &'static str) -> usize {
            self.calls.push("second");
            value.len()
        }
    }

    #[test]
    fn visits_only_the_active_slot() {
        let mut tally = Tally::default();
        let c1: Either<i32, &'static str> = Either::with_first(7);
        let c2: Either<i32, &'static str> = Either::with_second("four");
        assert_eq!(c1.visit(&mut tally), 7);
        assert_eq!(c2.visit(&mut tally), 4);
        assert_eq!(tally.calls, vec!["first", "second"]);
    }

    struct IsMissing;

    impl<A, B, C, D> Visit4<Option<A>, Option<B>, Option<C>, Option<D>> for IsMissing {
        type Output = bool;

        fn visit_first(self, value: Option<A>) -> bool { value.is_none() }
        fn visit_second(self, value: Option<B>) -> bool { value.is_none() }
        fn visit_third(self, value: Option<C>) -> bool { value.is_none() }
        fn visit_fourth(self, value: Option<D>) -> bool { value.is_none() }
    }

    #[test]
    fn visits_variant_payloads() {
        let c1: Variant4<u8, u16, u32, u64> = Variant4::with_third(None);
        let c2: Variant4<u8, u16, u32, u64> = Variant4::with_fourth(Some(9));
        assert!(c1.visit(IsMissing));
        assert!(!c2.visit(IsMissing));
    }
}
