//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical implementation of the literal trait is the [ABLiteral] structure, made of an atom (the 'a') and a boolean (the 'b').
//!
//! ```rust
//! # use otter_exchange::structures::literal::{ABLiteral, Literal};
//! let literal = ABLiteral::new(4, false);
//!
//! assert!(!literal.polarity());
//! assert_eq!(literal.atom(), 4);
//! assert_eq!(literal.as_int(), -5);
//! assert!(literal.negate().polarity());
//! ```
//!
//! Implementation of the literal trait requires implementation of two additional traits:
//! - [Ord]
//!   + Literals should be ordered by atom and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.
//! - [Hash](std::hash::Hash)
//!   + Literals are hashable in order to allow for straightforward use of literals as indicies of maps, etc.

mod ab_literal;
pub use ab_literal::ABLiteral;

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in its integer (wire) form, with sign indicating polarity and magnitude one more than the atom.
    fn as_int(&self) -> i64;
}

/// The canonical implementation of a literal.
pub type CLiteral = ABLiteral;
