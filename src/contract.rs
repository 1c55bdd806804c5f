//! The capabilities every arity shares.

/// Implemented by every choice type, whatever its arity or null policy.
///
/// ```rust
/// use anyof::{AnyOfThree, Choice};
/// let c: AnyOfThree<u8, char, &str> = AnyOfThree::with_second('b');
/// assert_eq!(AnyOfThree::<u8, char, &str>::ARITY, 3);
/// assert_eq!(c.index(), 1);
/// assert!(c.has_slot(1));
/// assert!(!c.has_slot(0));
/// ```
pub trait Choice {
    /// Number of slots.
    const ARITY: usize;

    /// Zero-based index of the active slot, always less than [`Choice::ARITY`].
    fn index(&self) -> usize;

    /// Whether the slot at `index` is the active one.
    fn has_slot(&self, index: usize) -> bool {
        self.index() == index
    }
}

/// Implements [`Choice`] and the standard value traits for one arity.
///
/// Equality and hashing cover the active index as well as the value, so the same value in two
/// different slots never compares equal. Ordering puts lower indices first.
macro_rules! impl_choice {
    ($name:ident, $arity:expr, { $($index:expr => $variant:ident($ty:ident)),+ $(,)? }) => {
        impl<P: $crate::NullPolicy, $($ty),+> $crate::Choice for $name<P, $($ty),+> {
            const ARITY: usize = $arity;

            fn index(&self) -> usize {
                match self {
                    $($name::$variant(_) => $index,)+
                }
            }
        }

        impl<P: $crate::NullPolicy, $($ty),+> Clone for $name<P, $($ty),+>
        where $(P::Slot<$ty>: Clone),+
        {
            fn clone(&self) -> Self {
                match self {
                    $($name::$variant(v) => $name::$variant(v.clone()),)+
                }
            }
        }

        impl<P: $crate::NullPolicy, $($ty),+> Copy for $name<P, $($ty),+>
        where $(P::Slot<$ty>: Copy),+
        {}

        impl<P: $crate::NullPolicy, $($ty),+> PartialEq for $name<P, $($ty),+>
        where $(P::Slot<$ty>: PartialEq),+
        {
            fn eq(&self, other: &Self) -> bool {
                match (self, other) {
                    $(($name::$variant(a), $name::$variant(b)) => a == b,)+
                    _ => false,
                }
            }
        }

        impl<P: $crate::NullPolicy, $($ty),+> Eq for $name<P, $($ty),+>
        where $(P::Slot<$ty>: Eq),+
        {}

        impl<P: $crate::NullPolicy, $($ty),+> std::hash::Hash for $name<P, $($ty),+>
        where $(P::Slot<$ty>: std::hash::Hash),+
        {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&$crate::Choice::index(self), state);
                match self {
                    $($name::$variant(v) => std::hash::Hash::hash(v, state),)+
                }
            }
        }

        impl<P: $crate::NullPolicy, $($ty),+> PartialOrd for $name<P, $($ty),+>
        where $(P::Slot<$ty>: PartialOrd),+
        {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                match (self, other) {
                    $(($name::$variant(a), $name::$variant(b)) => a.partial_cmp(b),)+
                    _ => $crate::Choice::index(self).partial_cmp(&$crate::Choice::index(other)),
                }
            }
        }

        impl<P: $crate::NullPolicy, $($ty),+> Ord for $name<P, $($ty),+>
        where $(P::Slot<$ty>: Ord),+
        {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                match (self, other) {
                    $(($name::$variant(a), $name::$variant(b)) => a.cmp(b),)+
                    _ => $crate::Choice::index(self).cmp(&$crate::Choice::index(other)),
                }
            }
        }

        impl<P: $crate::NullPolicy, $($ty),+> std::fmt::Debug for $name<P, $($ty),+>
        where $(P::Slot<$ty>: std::fmt::Debug),+
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($name::$variant(v) => f.debug_tuple(stringify!($variant)).field(v).finish(),)+
                }
            }
        }

        impl<P: $crate::NullPolicy, $($ty),+> std::fmt::Display for $name<P, $($ty),+>
        where $(P::Slot<$ty>: std::fmt::Display),+
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($name::$variant(v) => std::fmt::Display::fmt(v, f),)+
                }
            }
        }
    };
}
