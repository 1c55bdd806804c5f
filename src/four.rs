//! Choices between four slots: [`AnyOfFour`](crate::AnyOfFour) and [`Variant4`](crate::Variant4).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::error::{self, ChoiceError, ChoiceResult};
use crate::visit::Visit4;
use crate::{Choice, Choice3, Choice5, NullPolicy};

/// Represents a choice between four slots, exactly one of which is active.
///
/// See [`Choice3`] for an overview of how choices expand and contract between arities.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(bound(
    serialize = "P::Slot<A>: serde::Serialize, P::Slot<B>: serde::Serialize,\
        P::Slot<C>: serde::Serialize, P::Slot<D>: serde::Serialize",
    deserialize = "P::Slot<A>: serde::Deserialize<'de>, P::Slot<B>: serde::Deserialize<'de>,\
        P::Slot<C>: serde::Deserialize<'de>, P::Slot<D>: serde::Deserialize<'de>"
)))]
pub enum Choice4<P: NullPolicy, A, B, C, D> {
    /// The first slot is active.
    First(P::Slot<A>),
    /// The second slot is active.
    Second(P::Slot<B>),
    /// The third slot is active.
    Third(P::Slot<C>),
    /// The fourth slot is active.
    Fourth(P::Slot<D>),
}

impl_choice!(Choice4, 4, {
    0 => First(A),
    1 => Second(B),
    2 => Third(C),
    3 => Fourth(D),
});

impl<P: NullPolicy, A, B, C, D> Choice4<P, A, B, C, D> {
    /// Constructs a choice whose first slot is active.
    pub fn with_first(value: P::Slot<A>) -> Self {
        Choice4::First(value)
    }

    /// Constructs a choice whose second slot is active.
    pub fn with_second(value: P::Slot<B>) -> Self {
        Choice4::Second(value)
    }

    /// Constructs a choice whose third slot is active.
    pub fn with_third(value: P::Slot<C>) -> Self {
        Choice4::Third(value)
    }

    /// Constructs a choice whose fourth slot is active.
    pub fn with_fourth(value: P::Slot<D>) -> Self {
        Choice4::Fourth(value)
    }

    /// Constructs a choice from the single present argument. See
    /// [`Choice2::of`](crate::Choice2::of) for how each family treats missing arguments.
    pub fn of(
        first: Option<A>,
        second: Option<B>,
        third: Option<C>,
        fourth: Option<D>,
    ) -> ChoiceResult<Self> {
        let index = P::select_of(&[
            first.is_some(),
            second.is_some(),
            third.is_some(),
            fourth.is_some(),
        ])?;
        Self::build(index, first, second, third, fourth)
    }

    /// Constructs a choice from the first present argument, ignoring the rest.
    pub fn first_of(
        first: Option<A>,
        second: Option<B>,
        third: Option<C>,
        fourth: Option<D>,
    ) -> ChoiceResult<Self> {
        let index = P::select_first_of(&[
            first.is_some(),
            second.is_some(),
            third.is_some(),
            fourth.is_some(),
        ])?;
        Self::build(index, first, second, third, fourth)
    }

    fn build(
        index: usize,
        first: Option<A>,
        second: Option<B>,
        third: Option<C>,
        fourth: Option<D>,
    ) -> ChoiceResult<Self> {
        let built = match index {
            0 => P::lift(first).map(Self::First),
            1 => P::lift(second).map(Self::Second),
            2 => P::lift(third).map(Self::Third),
            _ => P::lift(fourth).map(Self::Fourth),
        };
        built.ok_or(ChoiceError::NoneSet { arity: Self::ARITY })
    }

    /// Whether the first slot is active.
    pub fn has_first(&self) -> bool {
        matches!(self, Choice4::First(_))
    }

    /// Whether the second slot is active.
    pub fn has_second(&self) -> bool {
        matches!(self, Choice4::Second(_))
    }

    /// Whether the third slot is active.
    pub fn has_third(&self) -> bool {
        matches!(self, Choice4::Third(_))
    }

    /// Whether the fourth slot is active.
    pub fn has_fourth(&self) -> bool {
        matches!(self, Choice4::Fourth(_))
    }

    /// Returns the first slot's value.
    ///
    /// # Panics
    ///
    /// Panics if the first slot is not active.
    pub fn get_first(&self) -> &P::Slot<A> {
        match self {
            Choice4::First(v) => v,
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
            Choice4::Second(v) => v,
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
            Choice4::Third(v) => v,
            _ => panic!("{}", error::inactive(self, 2)),
        }
    }

    /// Returns the fourth slot's value.
    ///
    /// # Panics
    ///
    /// Panics if the fourth slot is not active.
    pub fn get_fourth(&self) -> &P::Slot<D> {
        match self {
            Choice4::Fourth(v) => v,
            _ => panic!("{}", error::inactive(self, 3)),
        }
    }

    /// Returns the first slot's value if that slot is active.
    pub fn try_first(&self) -> Option<&P::Slot<A>> {
        match self {
            Choice4::First(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the second slot's value if that slot is active.
    pub fn try_second(&self) -> Option<&P::Slot<B>> {
        match self {
            Choice4::Second(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the third slot's value if that slot is active.
    pub fn try_third(&self) -> Option<&P::Slot<C>> {
        match self {
            Choice4::Third(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the fourth slot's value if that slot is active.
    pub fn try_fourth(&self) -> Option<&P::Slot<D>> {
        match self {
            Choice4::Fourth(v) => Some(v),
            _ => None,
        }
    }

    /// Takes the first slot's value, or hands the choice back if another slot is active.
    pub fn into_first(self) -> Result<P::Slot<A>, Self> {
        match self {
            Choice4::First(v) => Ok(v),
            other => Err(other),
        }
    }

    /// Takes the second slot's value, or hands the choice back if another slot is active.
    pub fn into_second(self) -> Result<P::Slot<B>, Self> {
        match self {
            Choice4::Second(v) => Ok(v),
            other => Err(other),
        }
    }

    /// Takes the third slot's value, or hands the choice back if another slot is active.
    pub fn into_third(self) -> Result<P::Slot<C>, Self> {
        match self {
            Choice4::Third(v) => Ok(v),
            other => Err(other),
        }
    }

    /// Takes the fourth slot's value, or hands the choice back if another slot is active.
    pub fn into_fourth(self) -> Result<P::Slot<D>, Self> {
        match self {
            Choice4::Fourth(v) => Ok(v),
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
    {
        match self {
            Choice4::First(v) => v,
            Choice4::Second(v) => v,
            Choice4::Third(v) => v,
            Choice4::Fourth(v) => v,
        }
    }

    /// Borrows the active value without consuming the choice.
    pub fn as_ref(&self) -> Choice4<P, &A, &B, &C, &D> {
        match self {
            Choice4::First(v) => Choice4::First(P::slot_ref::<A>(v)),
            Choice4::Second(v) => Choice4::Second(P::slot_ref::<B>(v)),
            Choice4::Third(v) => Choice4::Third(P::slot_ref::<C>(v)),
            Choice4::Fourth(v) => Choice4::Fourth(P::slot_ref::<D>(v)),
        }
    }

    /// Applies `f` to the first slot's value if that slot is active, changing the slot's type.
    pub fn transform_first<A2, F>(self, f: F) -> Choice4<P, A2, B, C, D>
    where
        F: FnOnce(P::Slot<A>) -> P::Slot<A2>,
    {
        match self {
            Choice4::First(v) => Choice4::First(f(v)),
            Choice4::Second(v) => Choice4::Second(v),
            Choice4::Third(v) => Choice4::Third(v),
            Choice4::Fourth(v) => Choice4::Fourth(v),
        }
    }

    /// Applies `f` to the second slot's value if that slot is active, changing the slot's type.
    pub fn transform_second<B2, F>(self, f: F) -> Choice4<P, A, B2, C, D>
    where
        F: FnOnce(P::Slot<B>) -> P::Slot<B2>,
    {
        match self {
            Choice4::First(v) => Choice4::First(v),
            Choice4::Second(v) => Choice4::Second(f(v)),
            Choice4::Third(v) => Choice4::Third(v),
            Choice4::Fourth(v) => Choice4::Fourth(v),
        }
    }

    /// Applies `f` to the third slot's value if that slot is active, changing the slot's type.
    pub fn transform_third<C2, F>(self, f: F) -> Choice4<P, A, B, C2, D>
    where
        F: FnOnce(P::Slot<C>) -> P::Slot<C2>,
    {
        match self {
            Choice4::First(v) => Choice4::First(v),
            Choice4::Second(v) => Choice4::Second(v),
            Choice4::Third(v) => Choice4::Third(f(v)),
            Choice4::Fourth(v) => Choice4::Fourth(v),
        }
    }

    /// Applies `f` to the fourth slot's value if that slot is active, changing the slot's type.
    pub fn transform_fourth<D2, F>(self, f: F) -> Choice4<P, A, B, C, D2>
    where
        F: FnOnce(P::Slot<D>) -> P::Slot<D2>,
    {
        match self {
            Choice4::First(v) => Choice4::First(v),
            Choice4::Second(v) => Choice4::Second(v),
            Choice4::Third(v) => Choice4::Third(v),
            Choice4::Fourth(v) => Choice4::Fourth(f(v)),
        }
    }

    /// Replaces the choice with `f(value)` if the first slot is active.
    pub fn flat_map_first<F>(self, f: F) -> Self
    where
        F: FnOnce(P::Slot<A>) -> Self,
    {
        match self {
            Choice4::First(v) => f(v),
            other => other,
        }
    }

    /// Replaces the choice with `f(value)` if the second slot is active.
    pub fn flat_map_second<F>(self, f: F) -> Self
    where
        F: FnOnce(P::Slot<B>) -> Self,
    {
        match self {
            Choice4::Second(v) => f(v),
            other => other,
        }
    }

    /// Replaces the choice with `f(value)` if the third slot is active.
    pub fn flat_map_third<F>(self, f: F) -> Self
    where
        F: FnOnce(P::Slot<C>) -> Self,
    {
        match self {
            Choice4::Third(v) => f(v),
            other => other,
        }
    }

    /// Replaces the choice with `f(value)` if the fourth slot is active.
    pub fn flat_map_fourth<F>(self, f: F) -> Self
    where
        F: FnOnce(P::Slot<D>) -> Self,
    {
        match self {
            Choice4::Fourth(v) => f(v),
            other => other,
        }
    }

    /// Inserts a new, inactive slot of type `X` in first position.
    pub fn expand_first<X>(self) -> Choice5<P, X, A, B, C, D> {
        match self {
            Choice4::First(v) => Choice5::Second(v),
            Choice4::Second(v) => Choice5::Third(v),
            Choice4::Third(v) => Choice5::Fourth(v),
            Choice4::Fourth(v) => Choice5::Fifth(v),
        }
    }

    /// Inserts a new, inactive slot of type `X` in second position.
    pub fn expand_second<X>(self) -> Choice5<P, A, X, B, C, D> {
        match self {
            Choice4::First(v) => Choice5::First(v),
            Choice4::Second(v) => Choice5::Third(v),
            Choice4::Third(v) => Choice5::Fourth(v),
            Choice4::Fourth(v) => Choice5::Fifth(v),
        }
    }

    /// Inserts a new, inactive slot of type `X` in third position.
    pub fn expand_third<X>(self) -> Choice5<P, A, B, X, C, D> {
        match self {
            Choice4::First(v) => Choice5::First(v),
            Choice4::Second(v) => Choice5::Second(v),
            Choice4::Third(v) => Choice5::Fourth(v),
            Choice4::Fourth(v) => Choice5::Fifth(v),
        }
    }

    /// Inserts a new, inactive slot of type `X` in fourth position.
    pub fn expand_fourth<X>(self) -> Choice5<P, A, B, C, X, D> {
        match self {
            Choice4::First(v) => Choice5::First(v),
            Choice4::Second(v) => Choice5::Second(v),
            Choice4::Third(v) => Choice5::Third(v),
            Choice4::Fourth(v) => Choice5::Fifth(v),
        }
    }

    /// Inserts a new, inactive slot of type `X` in fifth (last) position. Every existing slot keeps
    /// its index.
    pub fn expand_fifth<X>(self) -> Choice5<P, A, B, C, D, X> {
        match self {
            Choice4::First(v) => Choice5::First(v),
            Choice4::Second(v) => Choice5::Second(v),
            Choice4::Third(v) => Choice5::Third(v),
            Choice4::Fourth(v) => Choice5::Fourth(v),
        }
    }

    /// Appends a new, inactive slot of type `X`. Same as [`Choice4::expand_fifth`].
    pub fn expand<X>(self) -> Choice5<P, A, B, C, D, X> {
        self.expand_fifth()
    }

    /// Removes the first slot, mapping its value through `f` if it is active.
    pub fn contract_first<F>(self, f: F) -> Choice3<P, B, C, D>
    where
        F: FnOnce(P::Slot<A>) -> Choice3<P, B, C, D>,
    {
        match self {
            Choice4::First(v) => f(v),
            Choice4::Second(v) => Choice3::First(v),
            Choice4::Third(v) => Choice3::Second(v),
            Choice4::Fourth(v) => Choice3::Third(v),
        }
    }

    /// Removes the second slot, mapping its value through `f` if it is active.
    pub fn contract_second<F>(self, f: F) -> Choice3<P, A, C, D>
    where
        F: FnOnce(P::Slot<B>) -> Choice3<P, A, C, D>,
    {
        match self {
            Choice4::First(v) => Choice3::First(v),
            Choice4::Second(v) => f(v),
            Choice4::Third(v) => Choice3::Second(v),
            Choice4::Fourth(v) => Choice3::Third(v),
        }
    }

    /// Removes the third slot. If it is active, `f` maps its value to a [`Choice3`]; otherwise the
    /// active slot is repositioned and `f` is not called.
    ///
    /// ```rust
    /// use anyof::{AnyOfFour, AnyOfThree};
    /// let c: AnyOfFour<&str, u8, &str, char> = AnyOfFour::with_third("x");
    /// assert_eq!(c.contract_third(|_| AnyOfThree::with_first("y")), AnyOfThree::with_first("y"));
    ///
    /// let c: AnyOfFour<&str, u8, &str, char> = AnyOfFour::with_first("z");
    /// assert_eq!(c.contract_third(|_| AnyOfThree::with_first("y")), AnyOfThree::with_first("z"));
    /// ```
    pub fn contract_third<F>(self, f: F) -> Choice3<P, A, B, D>
    where
        F: FnOnce(P::Slot<C>) -> Choice3<P, A, B, D>,
    {
        match self {
            Choice4::First(v) => Choice3::First(v),
            Choice4::Second(v) => Choice3::Second(v),
            Choice4::Third(v) => f(v),
            Choice4::Fourth(v) => Choice3::Third(v),
        }
    }

    /// Removes the fourth slot, mapping its value through `f` if it is active.
    pub fn contract_fourth<F>(self, f: F) -> Choice3<P, A, B, C>
    where
        F: FnOnce(P::Slot<D>) -> Choice3<P, A, B, C>,
    {
        match self {
            Choice4::First(v) => Choice3::First(v),
            Choice4::Second(v) => Choice3::Second(v),
            Choice4::Third(v) => Choice3::Third(v),
            Choice4::Fourth(v) => f(v),
        }
    }

    /// Calls the visitor method matching the active slot.
    pub fn visit<V>(self, visitor: V) -> V::Output
    where
        V: Visit4<P::Slot<A>, P::Slot<B>, P::Slot<C>, P::Slot<D>>,
    {
        match self {
            Choice4::First(v) => visitor.visit_first(v),
            Choice4::Second(v) => visitor.visit_second(v),
            Choice4::Third(v) => visitor.visit_third(v),
            Choice4::Fourth(v) => visitor.visit_fourth(v),
        }
    }

    /// Calls the closure matching the active slot.
    pub fn fold<R, F1, F2, F3, F4>(self, first: F1, second: F2, third: F3, fourth: F4) -> R
    where
        F1: FnOnce(P::Slot<A>) -> R,
        F2: FnOnce(P::Slot<B>) -> R,
        F3: FnOnce(P::Slot<C>) -> R,
        F4: FnOnce(P::Slot<D>) -> R,
    {
        match self {
            Choice4::First(v) => first(v),
            Choice4::Second(v) => second(v),
            Choice4::Third(v) => third(v),
            Choice4::Fourth(v) => fourth(v),
        }
    }
}

impl<P: NullPolicy, T> Choice4<P, T, T, T, T> {
    /// Returns the active value when every slot shares a type.
    pub fn into_inner(self) -> P::Slot<T> {
        match self {
            Choice4::First(v) | Choice4::Second(v) | Choice4::Third(v) | Choice4::Fourth(v) => v,
        }
    }
}
