//! Null policies distinguishing the [`Any`](crate::Either) family from the
//! [`Variant`](crate::Variant2) family.
//!
//! Every choice type is generic over a policy `P`, and each slot stores a `P::Slot<T>` rather than
//! a bare `T`. [`NonNull`] stores the value itself, so an active slot always holds something.
//! [`Nullable`] stores an `Option<T>`, so an active slot may hold nothing at all. The policy also
//! decides how the validating `of` and `first_of` factories treat missing arguments.

use crate::error::{ChoiceError, ChoiceResult};

mod private {
    pub trait Sealed {}

    impl Sealed for super::NonNull {}

    impl Sealed for super::Nullable {}
}

/// Storage and validation rules shared by every arity of one choice family.
///
/// This trait is sealed: the two families are [`NonNull`] and [`Nullable`].
pub trait NullPolicy: private::Sealed {
    /// What an active slot declared as `T` actually stores.
    type Slot<T>;

    /// Converts an optional factory argument into slot storage, or `None` if the argument cannot
    /// occupy a slot under this policy.
    fn lift<T>(value: Option<T>) -> Option<Self::Slot<T>>;

    /// Borrows the payload of a slot.
    fn slot_ref<'a, T: 'a>(slot: &'a Self::Slot<T>) -> Self::Slot<&'a T>;

    /// Picks the slot for an `of` call, given which arguments were present.
    fn select_of(present: &[bool]) -> ChoiceResult<usize>;

    /// Picks the slot for a `first_of` call, given which arguments were present.
    fn select_first_of(present: &[bool]) -> ChoiceResult<usize>;
}

/// The policy of the `Either`/`AnyOf*` family: the active slot always holds a value.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NonNull {}

/// The policy of the `Variant*` family: the active slot may hold `None`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Nullable {}

impl NullPolicy for NonNull {
    type Slot<T> = T;

    fn lift<T>(value: Option<T>) -> Option<T> {
        value
    }

    fn slot_ref<'a, T: 'a>(slot: &'a T) -> &'a T {
        slot
    }

    fn select_of(present: &[bool]) -> ChoiceResult<usize> {
        match count(present) {
            0 => Err(ChoiceError::NoneSet { arity: present.len() }),
            1 => first_present(present).ok_or(ChoiceError::NoneSet { arity: present.len() }),
            count => Err(ChoiceError::TooManySet { arity: present.len(), count }),
        }
    }

    fn select_first_of(present: &[bool]) -> ChoiceResult<usize> {
        first_present(present).ok_or(ChoiceError::NoneSet { arity: present.len() })
    }
}

impl NullPolicy for Nullable {
    type Slot<T> = Option<T>;

    fn lift<T>(value: Option<T>) -> Option<Option<T>> {
        Some(value)
    }

    fn slot_ref<'a, T: 'a>(slot: &'a Option<T>) -> Option<&'a T> {
        slot.as_ref()
    }

    // With nothing present the first slot is chosen and holds `None`.
    fn select_of(present: &[bool]) -> ChoiceResult<usize> {
        match count(present) {
            0 | 1 => Ok(first_present(present).unwrap_or(0)),
            count => Err(ChoiceError::TooManySet { arity: present.len(), count }),
        }
    }

    fn select_first_of(present: &[bool]) -> ChoiceResult<usize> {
        Ok(first_present(present).unwrap_or(0))
    }
}

fn count(present: &[bool]) -> usize {
    present.iter().filter(|p| **p).count()
}

fn first_present(present: &[bool]) -> Option<usize> {
    present.iter().position(|p| *p)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn non_null_of_requires_exactly_one() {
        assert_eq!(NonNull::select_of(&[false, true, false]), Ok(1));
        assert_eq!(
            NonNull::select_of(&[false, false, false]),
            Err(ChoiceError::NoneSet { arity: 3 }));
        assert_eq!(
            NonNull::select_of(&[true, false, true, true]),
            Err(ChoiceError::TooManySet { arity: 4, count: 3 }));
    }

    #[test]
    fn non_null_first_of_requires_any() {
        assert_eq!(NonNull::select_first_of(&[false, true, true]), Ok(1));
        assert_eq!(
            NonNull::select_first_of(&[false, false]),
            Err(ChoiceError::NoneSet { arity: 2 }));
    }

    #[test]
    fn nullable_defaults_to_first_slot() {
        assert_eq!(Nullable::select_of(&[false, false, false]), Ok(0));
        assert_eq!(Nullable::select_of(&[false, false, true]), Ok(2));
        assert_eq!(
            Nullable::select_of(&[true, true]),
            Err(ChoiceError::TooManySet { arity: 2, count: 2 }));
        assert_eq!(Nullable::select_first_of(&[false, false]), Ok(0));
        assert_eq!(Nullable::select_first_of(&[false, true, true]), Ok(1));
    }

    #[test]
    fn can_lift() {
        assert_eq!(NonNull::lift(Some(1)), Some(1));
        assert_eq!(NonNull::lift::<u8>(None), None);
        assert_eq!(Nullable::lift(Some(1)), Some(Some(1)));
        assert_eq!(Nullable::lift::<u8>(None), Some(None));
    }

    #[test]
    fn can_borrow_slot() {
        let owned = String::from("x");
        assert_eq!(NonNull::slot_ref::<String>(&owned), "x");
        let nothing: Option<String> = None;
        assert_eq!(Nullable::slot_ref::<String>(&nothing), None);
    }
}
