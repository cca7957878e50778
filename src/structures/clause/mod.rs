//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//! Order is significant when exchanging clauses, and is preserved from export to import.
//!
//! ```rust
//! # use otter_exchange::structures::literal::{ABLiteral, Literal};
//! # use otter_exchange::structures::clause::Clause;
//! let clause = vec![ABLiteral::new(22, true),
//!                   ABLiteral::new(40, false),
//!                   ABLiteral::new(2,  false)];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 0");
//! assert_eq!(clause.as_dimacs(false), "23 -41 -3");
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

mod kind;
pub use kind::ClauseKind;

mod tier;
pub use tier::Tier;

use crate::{codec, structures::literal::CLiteral};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    ///
    /// With the terminating `0` the string is the wire form of the clause.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = codec::encode_clause(self);
        if !zero {
            // Drop the terminating `0` and the separating space, if present.
            the_string.pop();
            the_string.pop();
        }
        the_string
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// The implementation of a clause as a vector of literals.
pub type VClause = Vec<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = VClause;
