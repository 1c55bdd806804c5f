//! Choices between two slots: [`Either`](crate::Either) and [`Variant2`](crate::Variant2).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::error::{self, ChoiceError, ChoiceResult};
use crate::visit::Visit2;
use crate::{Choice, Choice3, NonNull, NullPolicy};

/// Represents a choice between two slots, exactly one of which is active.
///
/// The null policy `P` decides what an active slot stores: `A` itself for [`NonNull`] (the
/// [`Either`](crate::Either) alias), or `Option<A>` for [`Nullable`](crate::Nullable) (the
/// [`Variant2`](crate::Variant2) alias). Every operation consumes the choice and returns a new one;
/// nothing is ever changed in place.
///
/// ```rust
/// use anyof::Either;
/// let parsed: Either<u32, String> = match "42".parse() {
///     Ok(n) => Either::with_first(n),
///     Err(_) => Either::with_second("not a number".to_string()),
/// };
/// assert_eq!(parsed.try_first(), Some(&42));
/// assert_eq!(parsed.swap().try_second(), Some(&42));
/// ```
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(bound(
    serialize = "P::Slot<A>: serde::Serialize, P::Slot<B>: serde::Serialize",
    deserialize = "P::Slot<A>: serde::Deserialize<'de>, P::Slot<B>: serde::Deserialize<'de>"
)))]
pub enum Choice2<P: NullPolicy, A, B> {
    /// The first slot is active.
    First(P::Slot<A>),
    /// The second slot is active.
    Second(P::Slot<B>),
}

impl_choice!(Choice2, 2, {
    0 => First(A),
    1 => Second(B),
});

impl<P: NullPolicy, A, B> Choice2<P, A, B> {
    /// Constructs a choice whose first slot is active.
    pub fn with_first(value: P::Slot<A>) -> Self {
        Choice2::First(value)
    }

    /// Constructs a choice whose second slot is active.
    pub fn with_second(value: P::Slot<B>) -> Self {
        Choice2::Second(value)
    }

    /// Constructs a choice from whichever argument is present.
    ///
    /// Fails if both arguments are present. When neither is, the [`NonNull`] family fails while the
    /// [`Nullable`](crate::Nullable) family yields an active first slot holding `None`.
    ///
    /// ```rust
    /// use anyof::{ChoiceError, Either, Variant2};
    /// assert_eq!(Either::<u8, char>::of(None, Some('b')), Ok(Either::with_second('b')));
    /// assert_eq!(Either::<u8, char>::of(None, None), Err(ChoiceError::NoneSet { arity: 2 }));
    /// assert_eq!(Variant2::<u8, char>::of(None, None), Ok(Variant2::with_first(None)));
    /// ```
    pub fn of(first: Option<A>, second: Option<B>) -> ChoiceResult<Self> {
        let index = P::select_of(&[first.is_some(), second.is_some()])?;
        Self::build(index, first, second)
    }

    /// Constructs a choice from the first present argument, ignoring the rest.
    ///
    /// With no argument present, the [`NonNull`] family fails and the
    /// [`Nullable`](crate::Nullable) family yields an active first slot holding `None`.
    pub fn first_of(first: Option<A>, second: Option<B>) -> ChoiceResult<Self> {
        let index = P::select_first_of(&[first.is_some(), second.is_some()])?;
        Self::build(index, first, second)
    }

    fn build(index: usize, first: Option<A>, second: Option<B>) -> ChoiceResult<Self> {
        let built = match index {
            0 => P::lift(first).map(Self::First),
            _ => P::lift(second).map(Self::Second),
        };
        built.ok_or(ChoiceError::NoneSet { arity: Self::ARITY })
    }

    /// Whether the first slot is active.
    pub fn has_first(&self) -> bool {
        matches!(self, Choice2::First(_))
    }

    /// Whether the second slot is active.
    pub fn has_second(&self) -> bool {
        matches!(self, Choice2::Second(_))
    }

    /// Returns the first slot's value.
    ///
    /// # Panics
    ///
    /// Panics if the first slot is not active. See [`Choice2::try_first`] for a checked accessor.
    pub fn get_first(&self) -> &P::Slot<A> {
        match self {
            Choice2::First(v) => v,
            _ => panic!("{}", error::inactive(self, 0)),
        }
    }

    /// Returns the second slot's value.
    ///
    /// # Panics
    ///
    /// Panics if the second slot is not active.
    pub fn get_second(&self) -> &P::Slot<B> {
        match self {
            Choice2::Second(v) => v,
            _ => panic!("{}", error::inactive(self, 1)),
        }
    }

    /// Returns the first slot's value if that slot is active.
    pub fn try_first(&self) -> Option<&P::Slot<A>> {
        match self {
            Choice2::First(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the second slot's value if that slot is active.
    pub fn try_second(&self) -> Option<&P::Slot<B>> {
        match self {
            Choice2::Second(v) => Some(v),
            _ => None,
        }
    }

    /// Takes the first slot's value, or hands the choice back if another slot is active.
    pub fn into_first(self) -> Result<P::Slot<A>, Self> {
        match self {
            Choice2::First(v) => Ok(v),
            other => Err(other),
        }
    }

    /// Takes the second slot's value, or hands the choice back if another slot is active.
    pub fn into_second(self) -> Result<P::Slot<B>, Self> {
        match self {
            Choice2::Second(v) => Ok(v),
            other => Err(other),
        }
    }

    /// Returns the active value with its type erased.
    pub fn get(&self) -> &dyn Any
    where
        P::Slot<A>: Any,
        P::Slot<B>: Any,
    {
        match self {
            Choice2::First(v) => v,
            Choice2::Second(v) => v,
        }
    }

    /// Borrows the active value without consuming the choice.
    pub fn as_ref(&self) -> Choice2<P, &A, &B> {
        match self {
            Choice2::First(v) => Choice2::First(P::slot_ref::<A>(v)),
            Choice2::Second(v) => Choice2::Second(P::slot_ref::<B>(v)),
        }
    }

    /// Applies `f` to the first slot's value if that slot is active, changing the slot's type.
    /// Otherwise the choice is returned unchanged under the new type.
    ///
    /// ```rust
    /// use anyof::Either;
    /// let c: Either<&str, bool> = Either::with_first("four");
    /// assert_eq!(c.transform_first(str::len), Either::with_first(4));
    /// let c: Either<&str, bool> = Either::with_second(true);
    /// assert_eq!(c.transform_first(str::len), Either::with_second(true));
    /// ```
    pub fn transform_first<A2, F>(self, f: F) -> Choice2<P, A2, B>
    where
        F: FnOnce(P::Slot<A>) -> P::Slot<A2>,
    {
        match self {
            Choice2::First(v) => Choice2::First(f(v)),
            Choice2::Second(v) => Choice2::Second(v),
        }
    }

    /// Applies `f` to the second slot's value if that slot is active, changing the slot's type.
    pub fn transform_second<B2, F>(self, f: F) -> Choice2<P, A, B2>
    where
        F: FnOnce(P::Slot<B>) -> P::Slot<B2>,
    {
        match self {
            Choice2::First(v) => Choice2::First(v),
            Choice2::Second(v) => Choice2::Second(f(v)),
        }
    }

    /// Replaces the choice with `f(value)` if the first slot is active.
    pub fn flat_map_first<F>(self, f: F) -> Self
    where
        F: FnOnce(P::Slot<A>) -> Self,
    {
        match self {
            Choice2::First(v) => f(v),
            other => other,
        }
    }

    /// Replaces the choice with `f(value)` if the second slot is active.
    pub fn flat_map_second<F>(self, f: F) -> Self
    where
        F: FnOnce(P::Slot<B>) -> Self,
    {
        match self {
            Choice2::Second(v) => f(v),
            other => other,
        }
    }

    /// Exchanges the two slots.
    pub fn swap(self) -> Choice2<P, B, A> {
        match self {
            Choice2::First(v) => Choice2::Second(v),
            Choice2::Second(v) => Choice2::First(v),
        }
    }

    /// Inserts a new, inactive slot of type `X` in first position.
    pub fn expand_first<X>(self) -> Choice3<P, X, A, B> {
        match self {
            Choice2::First(v) => Choice3::Second(v),
            Choice2::Second(v) => Choice3::Third(v),
        }
    }

    /// Inserts a new, inactive slot of type `X` in second position.
    pub fn expand_second<X>(self) -> Choice3<P, A, X, B> {
        match self {
            Choice2::First(v) => Choice3::First(v),
            Choice2::Second(v) => Choice3::Third(v),
        }
    }

    /// Inserts a new, inactive slot of type `X` in third position.
    pub fn expand_third<X>(self) -> Choice3<P, A, B, X> {
        match self {
            Choice2::First(v) => Choice3::First(v),
            Choice2::Second(v) => Choice3::Second(v),
        }
    }

    /// Appends a new, inactive slot of type `X`. Same as [`Choice2::expand_third`].
    pub fn expand<X>(self) -> Choice3<P, A, B, X> {
        self.expand_third()
    }

    /// Removes the first slot. If it is active, `f` maps its value into the second slot's type;
    /// otherwise the second slot's value is returned and `f` is not called.
    ///
    /// ```rust
    /// use anyof::Either;
    /// let c: Either<&str, usize> = Either::with_first("four");
    /// assert_eq!(c.contract_first(str::len), 4);
    /// let c: Either<&str, usize> = Either::with_second(7);
    /// assert_eq!(c.contract_first(str::len), 7);
    /// ```
    pub fn contract_first<F>(self, f: F) -> P::Slot<B>
    where
        F: FnOnce(P::Slot<A>) -> P::Slot<B>,
    {
        match self {
            Choice2::First(v) => f(v),
            Choice2::Second(v) => v,
        }
    }

    /// Removes the second slot. If it is active, `f` maps its value into the first slot's type;
    /// otherwise the first slot's value is returned and `f` is not called.
    pub fn contract_second<F>(self, f: F) -> P::Slot<A>
    where
        F: FnOnce(P::Slot<B>) -> P::Slot<A>,
    {
        match self {
            Choice2::First(v) => v,
            Choice2::Second(v) => f(v),
        }
    }

    /// Calls the visitor method matching the active slot.
    pub fn visit<V>(self, visitor: V) -> V::Output
    where
        V: Visit2<P::Slot<A>, P::Slot<B>>,
    {
        match self {
            Choice2::First(v) => visitor.visit_first(v),
            Choice2::Second(v) => visitor.visit_second(v),
        }
    }

    /// Calls the closure matching the active slot.
    pub fn fold<R, F1, F2>(self, first: F1, second: F2) -> R
    where
        F1: FnOnce(P::Slot<A>) -> R,
        F2: FnOnce(P::Slot<B>) -> R,
    {
        match self {
            Choice2::First(v) => first(v),
            Choice2::Second(v) => second(v),
        }
    }

    /// Converts into a `Result`, with the first slot as success and the second as failure.
    pub fn into_result(self) -> Result<P::Slot<A>, P::Slot<B>> {
        match self {
            Choice2::First(v) => Ok(v),
            Choice2::Second(v) => Err(v),
        }
    }
}

impl<P: NullPolicy, T> Choice2<P, T, T> {
    /// Returns the active value when both slots share a type.
    pub fn into_inner(self) -> P::Slot<T> {
        match self {
            Choice2::First(v) | Choice2::Second(v) => v,
        }
    }
}

/// The outcome of a completed computation: success in the first slot, failure in the second.
impl<A, B> From<Result<A, B>> for Choice2<NonNull, A, B> {
    fn from(result: Result<A, B>) -> Self {
        match result {
            Ok(v) => Self::First(v),
            Err(e) => Self::Second(e),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{AnyOfThree, Either, Variant2};

    #[test]
    fn can_compare() {
        let c1: Either<&'static str, char> = Either::with_first("a");
        let c2: Either<&'static str, char> = Either::with_first("b");
        let c3: Either<&'static str, char> = Either::with_second('a');
        let c4: Either<&'static str, char> = Either::with_second('b');

        assert!(c1 < c2);
        assert!(c2 < c3); // leftmost slot is considered smallest
        assert!(c3 < c4);

        assert_eq!(c1, Either::with_first("a"));
        assert_eq!(c4, Either::with_second('b'));

        // Same value in different slots is never equal.
        let c1: Either<char, char> = Either::with_first('a');
        let c2: Either<char, char> = Either::with_second('a');
        assert_ne!(c1, c2);
    }

    #[test]
    fn can_debug() {
        let c1: Either<&'static str, char> = Either::with_first("a");
        let c2: Variant2<&'static str, char> = Variant2::with_second(None);
        assert_eq!(format!("{:?}", c1), "First(\"a\")");
        assert_eq!(format!("{:?}", c2), "Second(None)");
    }

    #[test]
    fn can_display() {
        let c1: Either<&'static str, char> = Either::with_first("a");
        let c2: Either<&'static str, char> = Either::with_second('b');
        assert_eq!(format!("{}", c1), "a");
        assert_eq!(format!("{}", c2), "b");
    }

    #[test]
    fn completed_computation() {
        let c: Either<i32, String> = Either::with_first(42);
        assert!(c.has_first());
        assert!(!c.has_second());
        assert_eq!(*c.get_first(), 42);
        assert_eq!(c.try_second(), None);
        assert_eq!(*c.clone().swap().get_second(), 42);

        let failed: Either<i32, String> = Err("boom".to_string()).into();
        assert_eq!(failed.into_result(), Err("boom".to_string()));
        assert_eq!(Either::<i32, String>::from(Ok(42)), c);
    }

    #[test]
    #[should_panic(expected = "slot 1 of 2 is not active (slot 0 is)")]
    fn get_inactive_panics() {
        let c: Either<i32, String> = Either::with_first(42);
        c.get_second();
    }

    #[test]
    fn of_requires_exactly_one() {
        assert_eq!(Either::<u8, char>::of(Some(1), None), Ok(Either::with_first(1)));
        assert_eq!(Either::<u8, char>::of(None, Some('b')), Ok(Either::with_second('b')));
        assert_eq!(
            Either::<u8, char>::of(Some(1), Some('b')),
            Err(ChoiceError::TooManySet { arity: 2, count: 2 }));
        assert_eq!(
            Either::<u8, char>::of(None, None),
            Err(ChoiceError::NoneSet { arity: 2 }));
    }

    #[test]
    fn first_of_takes_first_present() {
        assert_eq!(Either::<u8, char>::first_of(Some(1), Some('b')), Ok(Either::with_first(1)));
        assert_eq!(Either::<u8, char>::first_of(None, Some('b')), Ok(Either::with_second('b')));
        assert_eq!(
            Either::<u8, char>::first_of(None, None),
            Err(ChoiceError::NoneSet { arity: 2 }));
        assert_eq!(Variant2::<u8, char>::first_of(None, None), Ok(Variant2::with_first(None)));
    }

    #[test]
    fn variant_of_defaults_to_first_slot() {
        // All-absent input is accepted and lands in the first slot.
        let c = Variant2::<u8, char>::of(None, None).unwrap();
        assert!(c.has_first());
        assert_eq!(c.get_first(), &None);

        assert_eq!(Variant2::<u8, char>::of(None, Some('b')), Ok(Variant2::with_second(Some('b'))));
        assert_eq!(
            Variant2::<u8, char>::of(Some(1), Some('b')),
            Err(ChoiceError::TooManySet { arity: 2, count: 2 }));
    }

    #[test]
    fn can_transform() {
        let c: Either<i32, &'static str> = Either::with_first(20);
        assert_eq!(c.transform_first(|v| v * 2 + 2).get_first(), &42);
        assert_eq!(c.transform_second(str::len), Either::with_first(20));

        let v: Variant2<i32, &'static str> = Variant2::with_second(None);
        let v = v.transform_second(|s| s.map(str::len).or(Some(0)));
        assert_eq!(v, Variant2::with_second(Some(0)));
    }

    #[test]
    fn can_flat_map() {
        let c: Either<i32, i32> = Either::with_first(3);
        assert_eq!(c.flat_map_first(Either::with_second), Either::with_second(3));
        assert_eq!(c.flat_map_second(|_| unreachable!()), c);
    }

    #[test]
    fn can_expand_and_contract() {
        let c: Either<u8, char> = Either::with_second('b');
        assert_eq!(c.expand_first::<bool>(), AnyOfThree::with_third('b'));
        assert_eq!(c.expand_second::<bool>(), AnyOfThree::with_third('b'));
        assert_eq!(c.expand_third::<bool>(), AnyOfThree::with_second('b'));
        assert_eq!(c.expand::<bool>().contract_third(|_| unreachable!()), c);
        assert_eq!(c.expand_first::<bool>().contract_first(|_| unreachable!()), c);

        assert_eq!(c.contract_first(|_| unreachable!()), 'b');
        assert_eq!(c.contract_second(|ch| ch as u8), b'b');
    }

    #[test]
    fn can_coalesce() {
        let c: Either<String, String> = Either::with_second("x".to_string());
        assert_eq!(c.get().downcast_ref::<String>(), Some(&"x".to_string()));
        assert_eq!(c.as_ref().into_inner(), "x");
        assert_eq!(c.into_inner(), "x");
    }

    #[test]
    fn can_fold() {
        let c: Variant2<u8, char> = Variant2::with_first(None);
        assert!(c.fold(|a| a.is_none(), |b| b.is_none()));
        assert!(c.into_second().is_err());
        assert_eq!(c.into_first(), Ok(None));
    }
}
