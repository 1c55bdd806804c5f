//! Rust's `enum` is the natural way to say "one of these types", but each one has to be declared
//! and named. This library provides ready-made choices between two to five slots, in two flavors,
//! along with the operations needed to move values between them: per-slot accessors and
//! transforms, and conversions that grow or shrink the number of slots.
//!
//! # Example
//!
//! ```rust
//! use anyof::AnyOfThree;
//!
//! // A "heterogeneous" `Vec` without a custom `enum`.
//! let readings: Vec<AnyOfThree<u16, f32, String>> = vec![
//!     AnyOfThree::with_first(7),
//!     AnyOfThree::with_second(0.5),
//!     AnyOfThree::with_third("offline".to_string()),
//! ];
//!
//! // Exactly one slot is active in each.
//! assert!(readings[1].has_second());
//! assert_eq!(readings[0].try_first(), Some(&7));
//! assert_eq!(readings[2].try_first(), None);
//!
//! // Plain pattern matching works too.
//! for r in &readings {
//!     match r {
//!         AnyOfThree::First(n) => assert_eq!(*n, 7),
//!         AnyOfThree::Second(x) => assert_eq!(*x, 0.5),
//!         AnyOfThree::Third(s) => assert_eq!(s, "offline"),
//!     }
//! }
//! ```
//!
//! # Two Families
//!
//! Each arity is a single generic `enum` ([`Choice2`] through [`Choice5`]) parameterized by a
//! [`NullPolicy`], which is instantiated twice:
//!
//! - [`Either`], [`AnyOfThree`], [`AnyOfFour`] and [`AnyOfFive`] use [`NonNull`]. The active slot
//!   always holds a value, so there is no way to construct one around a missing value.
//! - [`Variant2`] through [`Variant5`] use [`Nullable`]. The active slot holds an `Option`, so a
//!   `Variant3` whose third slot is active may still carry `None`.
//!
//! The families share every operation. They differ only in what a slot stores and in how the
//! validating factories treat missing arguments:
//!
//! ```rust
//! use anyof::{AnyOfThree, ChoiceError, Variant3};
//!
//! // `of` accepts exactly one present argument...
//! let any = AnyOfThree::<u8, char, &str>::of(None, Some('b'), None);
//! assert_eq!(any, Ok(AnyOfThree::with_second('b')));
//! assert_eq!(
//!     AnyOfThree::<u8, char, &str>::of(None, None, None),
//!     Err(ChoiceError::NoneSet { arity: 3 }));
//!
//! // ...while the nullable family falls back to an empty first slot.
//! assert_eq!(
//!     Variant3::<u8, char, &str>::of(None, None, None),
//!     Ok(Variant3::with_first(None)));
//!
//! // `first_of` takes the first present argument.
//! assert_eq!(
//!     AnyOfThree::<u8, char, &str>::first_of(None, Some('b'), Some("c")),
//!     Ok(AnyOfThree::with_second('b')));
//! ```
//!
//! # Changing Arity
//!
//! `expand_*` inserts a new, never-active slot at a chosen position; `contract_*` removes a slot,
//! calling a closure only if the removed slot was the active one. Contracting the slot that was
//! just inserted gives back the original choice.
//!
//! ```rust
//! use anyof::{AnyOfFour, AnyOfThree};
//!
//! let c: AnyOfThree<u8, char, &str> = AnyOfThree::with_third("c");
//! let wider: AnyOfFour<u8, bool, char, &str> = c.expand_second();
//! assert!(wider.has_fourth());
//! assert_eq!(wider.contract_second(|_| unreachable!()), c);
//! ```
//!
//! # Features
//!
//! Enable the `serde` feature for serialization/deserialization.

#[macro_use]
mod contract;

mod error;
mod five;
mod four;
mod policy;
mod three;
mod two;
mod visit;

pub use contract::Choice;
pub use error::{ChoiceError, ChoiceResult};
pub use five::Choice5;
pub use four::Choice4;
pub use policy::{NonNull, NullPolicy, Nullable};
pub use three::Choice3;
pub use two::Choice2;
pub use visit::{Visit2, Visit3, Visit4, Visit5};

/// Two slots, the active one always holding a value.
pub type Either<A, B> = Choice2<NonNull, A, B>;

/// Three slots, the active one always holding a value.
pub type AnyOfThree<A, B, C> = Choice3<NonNull, A, B, C>;

/// Four slots, the active one always holding a value.
pub type AnyOfFour<A, B, C, D> = Choice4<NonNull, A, B, C, D>;

/// Five slots, the active one always holding a value.
pub type AnyOfFive<A, B, C, D, E> = Choice5<NonNull, A, B, C, D, E>;

/// Two slots, the active one possibly holding `None`.
pub type Variant2<A, B> = Choice2<Nullable, A, B>;

/// Three slots, the active one possibly holding `None`.
pub type Variant3<A, B, C> = Choice3<Nullable, A, B, C>;

/// Four slots, the active one possibly holding `None`.
pub type Variant4<A, B, C, D> = Choice4<Nullable, A, B, C, D>;

/// Five slots, the active one possibly holding `None`.
pub type Variant5<A, B, C, D, E> = Choice5<Nullable, A, B, C, D, E>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn smoke_test() {
        let choices: Vec<AnyOfFour<u8, char, &'static str, String>> = vec![
            AnyOfFour::with_first(1),
            AnyOfFour::with_second('2'),
            AnyOfFour::with_third("3"),
            AnyOfFour::with_fourth("4".to_string()),
        ];
        assert_eq!(
            format!("{:?}", choices),
            r#"[First(1), Second('2'), Third("3"), Fourth("4")]"#);
        assert_eq!(
            choices.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            vec!["1", "2", "3", "4"]);
        assert_ne!(choices, vec![
            AnyOfFour::with_first(1),
            AnyOfFour::with_second('2'),
            AnyOfFour::with_third("three"),
            AnyOfFour::with_fourth("4".to_string()),
        ]);
    }

    #[test]
    fn families_walk_up_and_down() {
        let e: Either<u8, char> = Either::with_second('x');
        let five = e
            .expand::<&str>()
            .expand::<bool>()
            .expand::<i64>();
        assert!(five.has_second());
        let back = five
            .contract_fifth(|_| unreachable!())
            .contract_fourth(|_| unreachable!())
            .contract_third(|_| unreachable!());
        assert_eq!(back, e);

        let v: Variant2<u8, char> = Variant2::with_second(None);
        let five = v.expand_first::<()>().expand_first::<()>().expand_first::<()>();
        assert!(five.has_fifth());
        assert_eq!(five.get_fifth(), &None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn can_serialize() {
        let c: AnyOfThree<u8, char, String> = AnyOfThree::with_third("c".to_string());
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"Third":"c"}"#);
        let back: AnyOfThree<u8, char, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);

        let v: Variant2<u8, char> = Variant2::with_second(None);
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"Second":null}"#);
    }
}
