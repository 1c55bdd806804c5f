//! Choices between three slots: [`AnyOfThree`](crate::AnyOfThree) and
//! [`Variant3`](crate::Variant3).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::error::{self, ChoiceError, ChoiceResult};
use crate::visit::Visit3;
use crate::{Choice, Choice2, Choice4, NullPolicy};

/// Represents a choice between three slots, exactly one of which is active.
///
/// Beyond the per-slot accessors and transforms shared with [`Choice2`], a three-slot choice can
/// grow into a [`Choice4`] by inserting an empty slot at any position, or shrink into a [`Choice2`]
/// by removing one.
///
/// ```rust
/// use anyof::{AnyOfFour, AnyOfThree, Either};
/// let c: AnyOfThree<u8, char, &str> = AnyOfThree::with_second('b');
///
/// // Inserting before the active slot shifts it up by one.
/// let grown: AnyOfFour<bool, u8, char, &str> = c.expand_first();
/// assert!(grown.has_third());
///
/// // Removing an inactive slot repositions the active one without calling the closure.
/// let shrunk: Either<char, &str> = c.contract_first(|_| unreachable!());
/// assert_eq!(shrunk, Either::with_first('b'));
/// ```
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(bound(
    serialize = "P::Slot<A>: serde::Serialize, P::Slot<B>: serde::Serialize,\
        P::Slot<C>: serde::Serialize",
    deserialize = "P::Slot<A>: serde::Deserialize<'de>, P::Slot<B>: serde::Deserialize<'de>,\
        P::Slot<C>: serde::Deserialize<'de>"
)))]
pub enum Choice3<P: NullPolicy, A, B, C> {
    /// The first slot is active.
    First(P::Slot<A>),
    /// The second slot is active.
    Second(P::Slot<B>),
    /// The third slot is active.
    Third(P::Slot<C>),
}

impl_choice!(Choice3, 3, {
    0 => First(A),
    1 => Second(B),
    2 => Third(C),
});

impl<P: NullPolicy, A, B, C> Choice3<P, A, B, C> {
    /// Constructs a choice whose first slot is active.
    pub fn with_first(value: P::Slot<A>) -> Self {
        Choice3::First(value)
    }

    /// Constructs a choice whose second slot is active.
    pub fn with_second(value: P::Slot<B>) -> Self {
        Choice3::Second(value)
    }

    /// Constructs a choice whose third slot is active.
    pub fn with_third(value: P::Slot<C>) -> Self {
        Choice3::Third(value)
    }

    /// Constructs a choice from the single present argument. See
    /// [`Choice2::of`](crate::Choice2::of) for how each family treats missing arguments.
    pub fn of(first: Option<A>, second: Option<B>, third: Option<C>) -> ChoiceResult<Self> {
        let index = P::select_of(&[first.is_some(), second.is_some(), third.is_some()])?;
        Self::build(index, first, second, third)
    }

    /// Constructs a choice from the first present argument, ignoring the rest.
    pub fn first_of(first: Option<A>, second: Option<B>, third: Option<C>) -> ChoiceResult<Self> {
        let index = P::select_first_of(&[first.is_some(), second.is_some(), third.is_some()])?;
        Self::build(index, first, second, third)
    }

    fn build(
        index: usize,
        first: Option<A>,
        second: Option<B>,
        third: Option<C>,
    ) -> ChoiceResult<Self> {
        let built = match index {
            0 => P::lift(first).map(Self::First),
            1 => P::lift(second).map(Self::Second),
            _ => P::lift(third).map(Self::Third),
        };
        built.ok_or(ChoiceError::NoneSet { arity: Self::ARITY })
    }

    /// Whether the first slot is active.
    pub fn has_first(&self) -> bool {
        matches!(self, Choice3::First(_))
    }

    /// Whether the second slot is active.
    pub fn has_second(&self) -> bool {
        matches!(self, Choice3::Second(_))
    }

    /// Whether the third slot is active.
    pub fn has_third(&self) -> bool {
        matches!(self, Choice3::Third(_))
    }

    /// Returns the first slot's value.
    ///
    /// # Panics
    ///
    /// Panics if the first slot is not active.
    pub fn get_first(&self) -> &P::Slot<A> {
        match self {
            Choice3::First(v) => v,
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
            Choice3::Second(v) => v,
            _ => panic!("{}", error::inactive(self, 1)),
        }
    }

    /// Returns the third slot's value.
    ///
    /// # Panics
    ///
    /// Panics if the third slot is not active.
    pub fn get_third(&self) -> &P::Slot<C> {
        match self {
            Choice3::Third(v) => v,
            _ => panic!("{}", error::inactive(self, 2)),
        }
    }

    /// Returns the first slot's value if that slot is active.
    pub fn try_first(&self) -> Option<&P::Slot<A>> {
        match self {
            Choice3::First(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the second slot's value if that slot is active.
    pub fn try_second(&self) -> Option<&P::Slot<B>> {
        match self {
            Choice3::Second(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the third slot's value if that slot is active.
    pub fn try_third(&self) -> Option<&P::Slot<C>> {
        match self {
            Choice3::Third(v) => Some(v),
            _ => None,
        }
    }

    /// Takes the first slot's value, or hands the choice back if another slot is active.
    pub fn into_first(self) -> Result<P::Slot<A>, Self> {
        match self {
            Choice3::First(v) => Ok(v),
            other => Err(other),
        }
    }

    /// Takes the second slot's value, or hands the choice back if another slot is active.
    pub fn into_second(self) -> Result<P::Slot<B>, Self> {
        match self {
            Choice3::Second(v) => Ok(v),
            other => Err(other),
        }
    }

    /// Takes the third slot's value, or hands the choice back if another slot is active.
    pub fn into_third(self) -> Result<P::Slot<C>, Self> {
        match self {
            Choice3::Third(v) => Ok(v),
            other => Err(other),
        }
    }

    /// Returns the active value with its type erased.
    pub fn get(&self) -> &dyn Any
    where
        P::Slot<A>: Any,
        P::Slot<B>: Any,
        P::Slot<C>: Any,
    {
        match self {
            Choice3::First(v) => v,
            Choice3::Second(v) => v,
            Choice3::Third(v) => v,
        }
    }

    /// Borrows the active value without consuming the choice.
    pub fn as_ref(&self) -> Choice3<P, &A, &B, &C> {
        match self {
            Choice3::First(v) => Choice3::First(P::slot_ref::<A>(v)),
            Choice3::Second(v) => Choice3::Second(P::slot_ref::<B>(v)),
            Choice3::Third(v) => Choice3::Third(P::slot_ref::<C>(v)),
        }
    }

    /// Applies `f` to the first slot's value if that slot is active, changing the slot's type.
    pub fn transform_first<A2, F>(self, f: F) -> Choice3<P, A2, B, C>
    where
        F: FnOnce(P::Slot<A>) -> P::Slot<A2>,
    {
        match self {
            Choice3::First(v) => Choice3::First(f(v)),
            Choice3::Second(v) => Choice3::Second(v),
            Choice3::Third(v) => Choice3::Third(v),
        }
    }

    /// Applies `f` to the second slot's value if that slot is active, changing the slot's type.
    pub fn transform_second<B2, F>(self, f: F) -> Choice3<P, A, B2, C>
    where
        F: FnOnce(P::Slot<B>) -> P::Slot<B2>,
    {
        match self {
            Choice3::First(v) => Choice3::First(v),
            Choice3::Second(v) => Choice3::Second(f(v)),
            Choice3::Third(v) => Choice3::Third(v),
        }
    }

    /// Applies `f` to the third slot's value if that slot is active, changing the slot's type.
    pub fn transform_third<C2, F>(self, f: F) -> Choice3<P, A, B, C2>
    where
        F: FnOnce(P::Slot<C>) -> P::Slot<C2>,
    {
        match self {
            Choice3::First(v) => Choice3::First(v),
            Choice3::Second(v) => Choice3::Second(v),
            Choice3::Third(v) => Choice3::Third(f(v)),
        }
    }

    /// Replaces the choice with `f(value)` if the first slot is active, and returns it unchanged
    /// otherwise.
    ///
    /// ```rust
    /// use anyof::AnyOfThree;
    /// type Parsed = AnyOfThree<i64, f64, String>;
    /// let reparse = |text: String| match text.parse::<i64>() {
    ///     Ok(n) => Parsed::with_first(n),
    ///     Err(_) => Parsed::with_third(text),
    /// };
    /// assert_eq!(Parsed::with_third("12".into()).flat_map_third(reparse), Parsed::with_first(12));
    /// assert_eq!(Parsed::with_second(0.5).flat_map_third(reparse), Parsed::with_second(0.5));
    /// ```
    pub fn flat_map_first<F>(self, f: F) -> Self
    where
        F: FnOnce(P::Slot<A>) -> Self,
    {
        match self {
            Choice3::First(v) => f(v),
            other => other,
        }
    }

    /// Replaces the choice with `f(value)` if the second slot is active.
    pub fn flat_map_second<F>(self, f: F) -> Self
    where
        F: FnOnce(P::Slot<B>) -> Self,
    {
        match self {
            Choice3::Second(v) => f(v),
            other => other,
        }
    }

    /// Replaces the choice with `f(value)` if the third slot is active.
    pub fn flat_map_third<F>(self, f: F) -> Self
    where
        F: FnOnce(P::Slot<C>) -> Self,
    {
        match self {
            Choice3::Third(v) => f(v),
            other => other,
        }
    }

    /// Inserts a new, inactive slot of type `X` in first position.
    pub fn expand_first<X>(self) -> Choice4<P, X, A, B, C> {
        match self {
            Choice3::First(v) => Choice4::Second(v),
            Choice3::Second(v) => Choice4::Third(v),
            Choice3::Third(v) => Choice4::Fourth(v),
        }
    }

    /// Inserts a new, inactive slot of type `X` in second position. An active second or third slot
    /// moves up by one; an active first slot stays put.
    pub fn expand_second<X>(self) -> Choice4<P, A, X, B, C> {
        match self {
            Choice3::First(v) => Choice4::First(v),
            Choice3::Second(v) => Choice4::Third(v),
            Choice3::Third(v) => Choice4::Fourth(v),
        }
    }

    /// Inserts a new, inactive slot of type `X` in third position.
    pub fn expand_third<X>(self) -> Choice4<P, A, B, X, C> {
        match self {
            Choice3::First(v) => Choice4::First(v),
            Choice3::Second(v) => Choice4::Second(v),
            Choice3::Third(v) => Choice4::Fourth(v),
        }
    }

    /// Inserts a new, inactive slot of type `X` in fourth position.
    pub fn expand_fourth<X>(self) -> Choice4<P, A, B, C, X> {
        match self {
            Choice3::First(v) => Choice4::First(v),
            Choice3::Second(v) => Choice4::Second(v),
            Choice3::Third(v) => Choice4::Third(v),
        }
    }

    /// Appends a new, inactive slot of type `X`. Same as [`Choice3::expand_fourth`].
    pub fn expand<X>(self) -> Choice4<P, A, B, C, X> {
        self.expand_fourth()
    }

    /// Removes the first slot. If it is active, `f` maps its value to a [`Choice2`]; otherwise the
    /// active slot moves down by one and `f` is not called.
    pub fn contract_first<F>(self, f: F) -> Choice2<P, B, C>
    where
        F: FnOnce(P::Slot<A>) -> Choice2<P, B, C>,
    {
        match self {
            Choice3::First(v) => f(v),
            Choice3::Second(v) => Choice2::First(v),
            Choice3::Third(v) => Choice2::Second(v),
        }
    }

    /// Removes the second slot, mapping its value through `f` if it is active. An active third slot
    /// moves down by one.
    pub fn contract_second<F>(self, f: F) -> Choice2<P, A, C>
    where
        F: FnOnce(P::Slot<B>) -> Choice2<P, A, C>,
    {
        match self {
            Choice3::First(v) => Choice2::First(v),
            Choice3::Second(v) => f(v),
            Choice3::Third(v) => Choice2::Second(v),
        }
    }

    /// Removes the third slot, mapping its value through `f` if it is active.
    pub fn contract_third<F>(self, f: F) -> Choice2<P, A, B>
    where
        F: FnOnce(P::Slot<C>) -> Choice2<P, A, B>,
    {
        match self {
            Choice3::First(v) => Choice2::First(v),
            Choice3::Second(v) => Choice2::Second(v),
            Choice3::Third(v) => f(v),
        }
    }

    /// Calls the visitor method matching the active slot.
    pub fn visit<V>(self, visitor: V) -> V::Output
    where
        V: Visit3<P::Slot<A>, P::Slot<B>, P::Slot<C>>,
    {
        match self {
            Choice3::First(v) => visitor.visit_first(v),
            Choice3::Second(v) => visitor.visit_second(v),
            Choice3::Third(v) => visitor.visit_third(v),
        }
    }

    /// Calls the closure matching the active slot.
    pub fn fold<R, F1, F2, F3>(self, first: F1, second: F2, third: F3) -> R
    where
        F1: FnOnce(P::Slot<A>) -> R,
        F2: FnOnce(P::Slot<B>) -> R,
        F3: FnOnce(P::Slot<C>) -> R,
    {
        match self {
            Choice3::First(v) => first(v),
            Choice3::Second(v) => second(v),
            Choice3::Third(v) => third(v),
        }
    }
}

impl<P: NullPolicy, T> Choice3<P, T, T, T> {
    /// Returns the active value when every slot shares a type.
    pub fn into_inner(self) -> P::Slot<T> {
        match self {
            Choice3::First(v) | Choice3::Second(v) | Choice3::Third(v) => v,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{AnyOfFour, AnyOfThree, Either, Variant3};

    type Abc = AnyOfThree<u8, char, &'static str>;

    fn all() -> Vec<Abc> {
        vec![Abc::with_first(1), Abc::with_second('2'), Abc::with_third("3")]
    }

    #[test]
    fn exactly_one_slot_is_active() {
        for (i, c) in all().iter().enumerate() {
            let flags = [c.has_first(), c.has_second(), c.has_third()];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1);
            assert!(flags[i]);
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn can_compare() {
        assert!(Abc::with_first(9) < Abc::with_second('0'));
        assert!(Abc::with_second('z') < Abc::with_third(""));
        assert_eq!(Abc::with_third("x"), Abc::with_third("x"));
        assert_ne!(AnyOfThree::<u8, u8, u8>::with_first(1), AnyOfThree::with_second(1));
    }

    #[test]
    fn can_hash() {
        use std::collections::HashSet;
        let set: HashSet<AnyOfThree<u8, u8, u8>> = vec![
            AnyOfThree::with_first(1),
            AnyOfThree::with_second(1),
            AnyOfThree::with_third(1),
            AnyOfThree::with_first(1),
        ].into_iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn can_debug_and_display() {
        assert_eq!(format!("{:?}", Abc::with_third("c")), "Third(\"c\")");
        assert_eq!(format!("{}", Abc::with_second('b')), "b");
    }

    #[test]
    fn can_access() {
        let c = Abc::with_second('b');
        assert_eq!(c.get_second(), &'b');
        assert_eq!(c.try_second(), Some(&'b'));
        assert_eq!(c.try_first(), None);
        assert_eq!(c.try_third(), None);
        assert_eq!(c.get().downcast_ref::<char>(), Some(&'b'));
        assert_eq!(c.into_third(), Err(c));
        assert_eq!(c.into_second(), Ok('b'));
    }

    #[test]
    #[should_panic(expected = "slot 2 of 3 is not active (slot 0 is)")]
    fn get_inactive_panics() {
        Abc::with_first(1).get_third();
    }

    #[test]
    fn of_requires_exactly_one() {
        assert_eq!(Abc::of(None, Some('b'), None), Ok(Abc::with_second('b')));
        assert_eq!(Abc::of(None, None, None), Err(ChoiceError::NoneSet { arity: 3 }));
        assert_eq!(
            Abc::of(Some(1), None, Some("c")),
            Err(ChoiceError::TooManySet { arity: 3, count: 2 }));
        assert_eq!(Abc::first_of(None, Some('b'), Some("c")), Ok(Abc::with_second('b')));
        assert_eq!(Abc::first_of(None, None, None), Err(ChoiceError::NoneSet { arity: 3 }));
    }

    #[test]
    fn variant_of_tolerates_absence() {
        type V = Variant3<u8, char, &'static str>;
        // No argument present still yields an active first slot.
        assert_eq!(V::of(None, None, None), Ok(V::with_first(None)));
        assert_eq!(V::of(None, None, Some("c")), Ok(V::with_third(Some("c"))));
        assert_eq!(
            V::of(Some(1), Some('b'), Some("c")),
            Err(ChoiceError::TooManySet { arity: 3, count: 3 }));

        let c = V::with_third(None);
        assert!(c.has_third());
        assert_eq!(c.get_third(), &None);
        assert_ne!(c, V::with_first(None));
    }

    #[test]
    fn can_transform() {
        let c = Abc::with_third("four");
        let t: AnyOfThree<u8, char, usize> = c.transform_third(str::len);
        assert_eq!(t, AnyOfThree::with_third(4));
        assert_eq!(c.transform_first(|n| n as u64 * 2), AnyOfThree::with_third("four"));
    }

    #[test]
    fn can_flat_map() {
        let c = Abc::with_first(3);
        let bound = c.flat_map_first(|n| {
            if n > 2 { Abc::with_third("big") } else { Abc::with_first(n) }
        });
        assert_eq!(bound, Abc::with_third("big"));
        assert_eq!(c.flat_map_second(|_| unreachable!()), c);
        assert_eq!(c.flat_map_third(|_| unreachable!()), c);
    }

    #[test]
    fn expand_shifts_later_slots() {
        let c = Abc::with_second('b');
        assert_eq!(c.expand_first::<bool>(), AnyOfFour::with_third('b'));
        assert_eq!(c.expand_second::<bool>(), AnyOfFour::with_third('b'));
        assert_eq!(c.expand_third::<bool>(), AnyOfFour::with_second('b'));
        assert_eq!(c.expand_fourth::<bool>(), AnyOfFour::with_second('b'));
        assert_eq!(c.expand::<bool>(), c.expand_fourth::<bool>());
    }

    #[test]
    fn expand_then_contract_is_identity() {
        for c in all() {
            assert_eq!(c.expand_first::<bool>().contract_first(|_| unreachable!()), c);
            assert_eq!(c.expand_second::<bool>().contract_second(|_| unreachable!()), c);
            assert_eq!(c.expand_third::<bool>().contract_third(|_| unreachable!()), c);
            assert_eq!(c.expand_fourth::<bool>().contract_fourth(|_| unreachable!()), c);
        }
    }

    #[test]
    fn can_contract() {
        let c = Abc::with_first(7);
        assert_eq!(
            c.contract_first(|n| Either::with_first(n as char)),
            Either::with_first('\u{7}'));
        assert_eq!(c.contract_second(|_| unreachable!()), Either::with_first(7));
        assert_eq!(c.contract_third(|_| unreachable!()), Either::with_first(7));

        let c = Abc::with_third("x");
        assert_eq!(c.contract_first(|_| unreachable!()), Either::with_second("x"));
        assert_eq!(c.contract_second(|_| unreachable!()), Either::with_second("x"));
        assert_eq!(c.contract_third(|s| Either::with_first(s.len() as u8)), Either::with_first(1));
    }

    #[test]
    fn can_coalesce() {
        let c: AnyOfThree<String, String, String> = AnyOfThree::with_third("c".to_string());
        assert_eq!(c.as_ref().transform_third(|s| s.len()).get_third(), &1);
        assert_eq!(c.fold(|a| a, |b| b, |c| c + "!"), "c!");
        assert_eq!(AnyOfThree::<u8, u8, u8>::with_second(5).into_inner(), 5);
    }
}
