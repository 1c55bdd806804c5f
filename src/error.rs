//! Errors raised by the validating factories and accessors.

use thiserror::Error;

use crate::Choice;

/// Why a choice could not be built or read.
///
/// Slot indices are zero-based, matching [`Choice::index`](crate::Choice::index).
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
pub enum ChoiceError {
    /// None of the candidate values was present, but one was required.
    #[error("expected one of {arity} slots to be set, but none were")]
    NoneSet { arity: usize },

    /// More than one candidate value was present.
    #[error("expected one of {arity} slots to be set, but {count} were")]
    TooManySet { arity: usize, count: usize },

    /// A slot accessor was used on a choice whose active slot differs.
    #[error("slot {requested} of {arity} is not active (slot {active} is)")]
    Inactive {
        arity: usize,
        requested: usize,
        active: usize,
    },
}

/// Result type for fallible choice construction.
pub type ChoiceResult<T> = Result<T, ChoiceError>;

/// The error describing an attempt to read slot `requested` of `choice`.
pub(crate) fn inactive<C: Choice>(choice: &C, requested: usize) -> ChoiceError {
    ChoiceError::Inactive {
        arity: C::ARITY,
        requested,
        active: choice.index(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn can_display() {
        assert_eq!(
            ChoiceError::NoneSet { arity: 3 }.to_string(),
            "expected one of 3 slots to be set, but none were");
        assert_eq!(
            ChoiceError::TooManySet { arity: 2, count: 2 }.to_string(),
            "expected one of 2 slots to be set, but 2 were");
        assert_eq!(
            ChoiceError::Inactive { arity: 4, requested: 1, active: 3 }.to_string(),
            "slot 1 of 4 is not active (slot 3 is)");
    }
}
