//! Choices between five slots: [`AnyOfFive`](crate::AnyOfFive) and [`Variant5`](crate::Variant5).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::error::{self, ChoiceError, ChoiceResult};
use crate::visit::Visit5;
use crate::{Choice, Choice4, NullPolicy};

/// Represents a choice between five slots, exactly one of which is active.
///
/// Five is the largest arity, so unlike the smaller choices this one cannot be expanded; it can
/// only be contracted into a [`Choice4`].
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(bound(
    serialize = "P::Slot<A>: serde::Serialize, P::Slot<B>: serde::Serialize,\
        P::Slot<C>: serde::Serialize, P::Slot<D>: serde::Serialize,\
        P::Slot<E>: serde::Serialize",
    deserialize = "P::Slot<A>: serde::Deserialize<'de>, P::Slot<B>: serde::Deserialize<'de>,\
        P::Slot<C>: serde::Deserialize<'de>, P::Slot<D>: serde::Deserialize<'de>,\
        P::Slot<E>: serde::Deserialize<'de>"
)))]
pub enum Choice5<P: NullPolicy, A, B, C, D, E> {
    /// The first slot is active.
    First(P::Slot<A>),
    /// The second slot is active.
    Second(P::Slot<B>),
    /// The third slot is active.
    Third(P::Slot<C>),
    /// The fourth slot is active.
    Fourth(P::Slot<D>),
    /// The fifth slot is active.
    Fifth(P::Slot<E>),
}

impl_choice!(Choice5, 5, {
    0 => First(A),
    1 => Second(B),
    2 => Third(C),
    3 => Fourth(D),
    4 => Fifth(E),
});

impl<P: NullPolicy, A, B, C, D, E> Choice5<P, A, B, C, D, E> {
    /// Constructs a choice whose first slot is active.
    pub fn with_first(value: P::Slot<A>) -> Self {
        Choice5::First(value)
    }

    /// Constructs a choice whose second slot is active.
    pub fn with_second(value: P::Slot<B>) -> Self {
        Choice5::Second(value)
    }

    /// Constructs a choice whose third slot is active.
    pub fn with_third(value: P::Slot<C>) -> Self {
        Choice5::Third(value)
    }

    /// Constructs a choice whose fourth slot is active.
    pub fn with_fourth(value: P::Slot<D>) -> Self {
        Choice5::Fourth(value)
    }

    /// Constructs a choice whose fifth slot is active.
    pub fn with_fifth(value: P::Slot<E>) -> Self {
        Choice5::Fifth(value)
    }

    /// Constructs a choice from the single present argument. See
    /// [`Choice2::of`](crate::Choice2::of) for how each family treats missing arguments.
    pub fn of(
        first: Option<A>,
        second: Option<B>,
        third: Option<C>,
        fourth: Option<D>,
        fifth: Option<E>,
    ) -> ChoiceResult<Self> {
        let index = P::select_of(&[
            first.is_some(),
            second.is_some(),
            third.is_some(),
            fourth.is_some(),
            fifth.is_some(),
        ])?;
        Self::build(index, first, second, third, fourth, fifth)
    }

    /// Constructs a choice from the first present argument, ignoring the rest.
    pub fn first_of(
        first: Option<A>,
        second: Option<B>,
        third: Option<C>,
        fourth: Option<D>,
        fifth: Option<E>,
    ) -> ChoiceResult<Self> {
        let index = P::select_first_of(&[
            first.is_some(),
            second.is_some(),
            third.is_some(),
            fourth.is_some(),
            fifth.is_some(),
        ])?;
        Self::build(index, first, second, third, fourth, fifth)
    }

    fn build(
        index: usize,
        first: Option<A>,
        second: Option<B>,
        third: Option<C>,
        fourth: Option<D>,
        fifth: Option<E>,
    ) -> ChoiceResult<Self> {
        let built = match index {
            0 => P::lift(first).map(Self::First),
            1 => P::lift(second).map(Self::Second),
            2 => P::lift(third).map(Self::Third),
            3 => P::lift(fourth).map(Self::Fourth),
            _ => P::lift(fifth).map(Self::Fifth),
        };
        built.ok_or(ChoiceError::NoneSet { arity: Self::ARITY })
    }

    pub fn has_first(&self) -> bool {
        matches!(self, Choice5::First(_))
    }

    pub fn has_second(&self) -> bool {
        matches!(self, Choice5::Second(_))
    }

    pub fn has_third(&self) -> bool {
        matches!(self, Choice5::Third(_))
    }

    pub fn has_fourth(&self) -> bool {
        matches!(self, Choice5::Fourth(_))
    }

    pub fn has_fifth(&self) -> bool {
        matches!(self, Choice5::Fifth(_))
    }

    /// Returns the first slot's value, panicking if another slot is active.
    pub fn get_first(&self) -> &P::Slot<A> {
        match self {
            Choice5::First(v) => v,
            _ => panic!("{}", error::inactive(self, 0)),
        }
    }

    /// Returns the second slot's value, panicking if another slot is active.
    pub fn get_second(&self) -> &P::Slot<B> {
        match self {
            Choice5::Second(v) => v,
            _ => panic!("{}", error::inactive(self, 1)),
        }
    }

    /// Returns the third slot's value, panicking if another slot is active.
    pub fn get_third(&self) -> &P::Slot<C> {
        match self {
            Choice5::Third(v) => v,
            _ => panic!("{}", error::inactive(self, 2)),
        }
    }

    /// Returns the fourth slot's value, panicking if another slot is active.
    pub fn get_fourth(&self) -> &P::Slot<D> {
        match self {
            Choice5::Fourth(v) => v,
            _ => panic!("{}", error::inactive(self, 3)),
        }
    }

    /// Returns the fifth slot's value, panicking if another slot is active.
    pub fn get_fifth(&self) -> &P::Slot<E> {
        match self {
            Choice5::Fifth(v) => v,
            _ => panic!("{}", error::inactive(self, 4)),
        }
    }

    /// Returns the first slot's value if that slot is active.
    pub fn try_first(&self) -> Option<&P::Slot<A>> {
        match self {
            Choice5::First(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the second slot's value if that slot is active.
    pub fn try_second(&self) -> Option<&P::Slot<B>> {
        match self {
            Choice5::Second(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the third slot's value if that slot is active.
    pub fn try_third(&self) -> Option<&P::Slot<C>> {
        match self {
            Choice5::Third(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the fourth slot's value if that slot is active.
    pub fn try_fourth(&self) -> Option<&P::Slot<D>> {
        match self {
            Choice5::Fourth(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the fifth slot's value if that slot is active.
    pub fn try_fifth(&self) -> Option<&P::Slot<E>> {
        match self {
            Choice5::Fifth(v) => Some(v),
            _ => None,
        }
    }

    /// Takes the first slot's value, or hands the choice back if another slot is active.
    pub fn into_first(self) -> Result<P::Slot<A>, Self> {
        match self {
            Choice5::First(v) => Ok(v),
            other => Err(other),
        }
    }

    /// Takes the second slot's value, or hands the choice back if another slot is active.
    pub fn into_second(self) -> Result<P::Slot<B>, Self> {
        match self {
            Choice5::Second(v) => Ok(v),
            other => Err(other),
        }
    }

    /// Takes the third slot's value, or hands the choice back if another slot is active.
    pub fn into_third(self) -> Result<P::Slot<C>, Self> {
        match self {
            Choice5::Third(v) => Ok(v),
            other => Err(other),
        }
    }

    /// Takes the fourth slot's value, or hands the choice back if another slot is active.
    pub fn into_fourth(self) -> Result<P::Slot<D>, Self> {
        match self {
            Choice5::Fourth(v) => Ok(v),
            other => Err(other),
        }
    }

    /// Takes the fifth slot's value, or hands the choice back if another slot is active.
    pub fn into_fifth(self) -> Result<P::Slot<E>, Self> {
        match self {
            Choice5::Fifth(v) => Ok(v),
            other => Err(other),
        }
    }

    /// Returns the active value with its type erased.
    pub fn get(&self) -> &dyn Any
    where
        P::Slot<A>: Any,
        P::Slot<B>: Any,
        P::Slot<C>: Any,
        P::Slot<D>: Any,
        P::Slot<E>: Any,
    {
        match self {
            Choice5::First(v) => v,
            Choice5::Second(v) => v,
            Choice5::Third(v) => v,
            Choice5::Fourth(v) => v,
            Choice5::Fifth(v) => v,
        }
    }

    /// Borrows the active value without consuming the choice.
    pub fn as_ref(&self) -> Choice5<P, &A, &B, &C, &D, &E> {
        match self {
            Choice5::First(v) => Choice5::First(P::slot_ref::<A>(v)),
            Choice5::Second(v) => Choice5::Second(P::slot_ref::<B>(v)),
            Choice5::Third(v) => Choice5::Third(P::slot_ref::<C>(v)),
            Choice5::Fourth(v) => Choice5::Fourth(P::slot_ref::<D>(v)),
            Choice5::Fifth(v) => Choice5::Fifth(P::slot_ref::<E>(v)),
        }
    }

    /// Applies `f` to the first slot's value if that slot is active, changing the slot's type.
    pub fn transform_first<A2, F>(self, f: F) -> Choice5<P, A2, B, C, D, E>
    where
        F: FnOnce(P::Slot<A>) -> P::Slot<A2>,
    {
        match self {
            Choice5::First(v) => Choice5::First(f(v)),
            Choice5::Second(v) => Choice5::Second(v),
            Choice5::Third(v) => Choice5::Third(v),
            Choice5::Fourth(v) => Choice5::Fourth(v),
            Choice5::Fifth(v) => Choice5::Fifth(v),
        }
    }

    /// Applies `f` to the second slot's value if that slot is active, changing the slot's type.
    pub fn transform_second<B2, F>(self, f: F) -> Choice5<P, A, B2, C, D, E>
    where
        F: FnOnce(P::Slot<B>) -> P::Slot<B2>,
    {
        match self {
            Choice5::First(v) => Choice5::First(v),
            Choice5::Second(v) => Choice5::Second(f(v)),
            Choice5::Third(v) => Choice5::Third(v),
            Choice5::Fourth(v) => Choice5::Fourth(v),
            Choice5::Fifth(v) => Choice5::Fifth(v),
        }
    }

    /// Applies `f` to the third slot's value if that slot is active, changing the slot's type.
    pub fn transform_third<C2, F>(self, f: F) -> Choice5<P, A, B, C2, D, E>
    where
        F: FnOnce(P::Slot<C>) -> P::Slot<C2>,
    {
        match self {
            Choice5::First(v) => Choice5::First(v),
            Choice5::Second(v) => Choice5::Second(v),
            Choice5::Third(v) => Choice5::Third(f(v)),
            Choice5::Fourth(v) => Choice5::Fourth(v),
            Choice5::Fifth(v) => Choice5::Fifth(v),
        }
    }

    /// Applies `f` to the fourth slot's value if that slot is active, changing the slot's type.
    pub fn transform_fourth<D2, F>(self, f: F) -> Choice5<P, A, B, C, D2, E>
    where
        F: FnOnce(P::Slot<D>) -> P::Slot<D2>,
    {
        match self {
            Choice5::First(v) => Choice5::First(v),
            Choice5::Second(v) => Choice5::Second(v),
            Choice5::Third(v) => Choice5::Third(v),
            Choice5::Fourth(v) => Choice5::Fourth(f(v)),
            Choice5::Fifth(v) => Choice5::Fifth(v),
        }
    }

    /// Applies `f` to the fifth slot's value if that slot is active, changing the slot's type.
    pub fn transform_fifth<E2, F>(self, f: F) -> Choice5<P, A, B, C, D, E2>
    where
        F: FnOnce(P::Slot<E>) -> P::Slot<E2>,
    {
        match self {
            Choice5::First(v) => Choice5::First(v),
            Choice5::Second(v) => Choice5::Second(v),
            Choice5::Third(v) => Choice5::Third(v),
            Choice5::Fourth(v) => Choice5::Fourth(v),
            Choice5::Fifth(v) => Choice5::Fifth(f(v)),
        }
    }

    /// Replaces the choice with `f(value)` if the first slot is active.
    pub fn flat_map_first<F>(self, f: F) -> Self
    where
        F: FnOnce(P::Slot<A>) -> Self,
    {
        match self {
            Choice5::First(v) => f(v),
            other => other,
        }
    }

    /// Replaces the choice with `f(value)` if the second slot is active.
    pub fn flat_map_second<F>(self, f: F) -> Self
    where
        F: FnOnce(P::Slot<B>) -> Self,
    {
        match self {
            Choice5::Second(v) => f(v),
            other => other,
        }
    }

    /// Replaces the choice with `f(value)` if the third slot is active.
    pub fn flat_map_third<F>(self, f: F) -> Self
    where
        F: FnOnce(P::Slot<C>) -> Self,
    {
        match self {
            Choice5::Third(v) => f(v),
            other => other,
        }
    }

    /// Replaces the choice with `f(value)` if the fourth slot is active.
    pub fn flat_map_fourth<F>(self, f: F) -> Self
    where
        F: FnOnce(P::Slot<D>) -> Self,
    {
        match self {
            Choice5::Fourth(v) => f(v),
            other => other,
        }
    }

    /// Replaces the choice with `f(value)` if the fifth slot is active.
    pub fn flat_map_fifth<F>(self, f: F) -> Self
    where
        F: FnOnce(P::Slot<E>) -> Self,
    {
        match self {
            Choice5::Fifth(v) => f(v),
            other => other,
        }
    }

    /// Removes the first slot, mapping its value through `f` if it is active.
    pub fn contract_first<F>(self, f: F) -> Choice4<P, B, C, D, E>
    where
        F: FnOnce(P::Slot<A>) -> Choice4<P, B, C, D, E>,
    {
        match self {
            Choice5::First(v) => f(v),
            Choice5::Second(v) => Choice4::First(v),
            Choice5::Third(v) => Choice4::Second(v),
            Choice5::Fourth(v) => Choice4::Third(v),
            Choice5::Fifth(v) => Choice4::Fourth(v),
        }
    }

    /// Removes the second slot, mapping its value through `f` if it is active.
    pub fn contract_second<F>(self, f: F) -> Choice4<P, A, C, D, E>
    where
        F: FnOnce(P::Slot<B>) -> Choice4<P, A, C, D, E>,
    {
        match self {
            Choice5::First(v) => Choice4::First(v),
            Choice5::Second(v) => f(v),
            Choice5::Third(v) => Choice4::Second(v),
            Choice5::Fourth(v) => Choice4::Third(v),
            Choice5::Fifth(v) => Choice4::Fourth(v),
        }
    }

    /// Removes the third slot, mapping its value through `f` if it is active.
    pub fn contract_third<F>(self, f: F) -> Choice4<P, A, B, D, E>
    where
        F: FnOnce(P::Slot<C>) -> Choice4<P, A, B, D, E>,
    {
        match self {
            Choice5::First(v) => Choice4::First(v),
            Choice5::Second(v) => Choice4::Second(v),
            Choice5::Third(v) => f(v),
            Choice5::Fourth(v) => Choice4::Third(v),
            Choice5::Fifth(v) => Choice4::Fourth(v),
        }
    }

    /// Removes the fourth slot, mapping its value through `f` if it is active.
    pub fn contract_fourth<F>(self, f: F) -> Choice4<P, A, B, C, E>
    where
        F: FnOnce(P::Slot<D>) -> Choice4<P, A, B, C, E>,
    {
        match self {
            Choice5::First(v) => Choice4::First(v),
            Choice5::Second(v) => Choice4::Second(v),
            Choice5::Third(v) => Choice4::Third(v),
            Choice5::Fourth(v) => f(v),
            Choice5::Fifth(v) => Choice4::Fourth(v),
        }
    }

    /// Removes the fifth slot, mapping its value through `f` if it is active.
    pub fn contract_fifth<F>(self, f: F) -> Choice4<P, A, B, C, D>
    where
        F: FnOnce(P::Slot<E>) -> Choice4<P, A, B, C, D>,
    {
        match self {
            Choice5::First(v) => Choice4::First(v),
            Choice5::Second(v) => Choice4::Second(v),
            Choice5::Third(v) => Choice4::Third(v),
            Choice5::Fourth(v) => Choice4::Fourth(v),
            Choice5::Fifth(v) => f(v),
        }
    }

    /// Calls the visitor method matching the active slot.
    pub fn visit<V>(self, visitor: V) -> V::Output
    where
        V: Visit5<P::Slot<A>, P::Slot<B>, P::Slot<C>, P::Slot<D>, P::Slot<E>>,
    {
        match self {
            Choice5::First(v) => visitor.visit_first(v),
            Choice5::Second(v) => visitor.visit_second(v),
            Choice5::Third(v) => visitor.visit_third(v),
            Choice5::Fourth(v) => visitor.visit_fourth(v),
            Choice5::Fifth(v) => visitor.visit_fifth(v),
        }
    }

    /// Calls the closure matching the active slot.
    pub fn fold<R, F1, F2, F3, F4, F5>(
        self,
        first: F1,
        second: F2,
        third: F3,
        fourth: F4,
        fifth: F5,
    ) -> R
    where
        F1: FnOnce(P::Slot<A>) -> R,
        F2: FnOnce(P::Slot<B>) -> R,
        F3: FnOnce(P::Slot<C>) -> R,
        F4: FnOnce(P::Slot<D>) -> R,
        F5: FnOnce(P::Slot<E>) -> R,
    {
        match self {
            Choice5::First(v) => first(v),
            Choice5::Second(v) => second(v),
            Choice5::Third(v) => third(v),
            Choice5::Fourth(v) => fourth(v),
            Choice5::Fifth(v) => fifth(v),
        }
    }
}

impl<P: NullPolicy, T> Choice5<P, T, T, T, T, T> {
    /// Returns the active value when every slot shares a type.
    pub fn into_inner(self) -> P::Slot<T> {
        match self {
            Choice5::First(v)
            | Choice5::Second(v)
            | Choice5::Third(v)
            | Choice5::Fourth(v)
            | Choice5::Fifth(v) => v,
        }
    }
}
