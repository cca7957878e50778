/*!
Capabilities of a host solver, as used by an exchange.

An exchange never reaches into a solver.
Instead, each interaction is through a narrow trait:

- [Trail], for the decision level, the value of atoms, forced assignments, and the satisfiability flag.
- [LearnedClauseSink], to allocate, tier, and attach imported clauses.
- [LearnedClauseSource], to read clauses queued for export.
- [DuplicateTracker], for the count of copies of a clause seen.
- [BranchingHeuristics], for the bookkeeping a learnt clause would otherwise have triggered.

[Host] bundles the traits required for import, and is implemented for anything implementing each.

A complete host is given by [BasicHost], which holds a valuation at decision level zero and a tiered learnt clause database, without any search.
*/

mod basic;
pub use basic::{BasicHost, LearntKey, StoredLearnt};

pub mod duplicates;

use crate::{
    config::LBD,
    structures::{
        atom::Atom,
        clause::Tier,
        literal::{CLiteral, Literal},
    },
};

/// A decision level.
pub type DecisionLevel = u32;

/// The assignments of a host.
pub trait Trail {
    /// The current decision level.
    fn decision_level(&self) -> DecisionLevel;

    /// The value of `atom`, if the atom has a value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// Assigns the literal, as a consequence at the current level.
    ///
    /// Called only at decision level zero, for atoms without a value.
    fn enqueue_forced(&mut self, literal: CLiteral);

    /// Whether the formula of the host may be satisfiable.
    fn is_satisfiable(&self) -> bool;

    /// Notes the formula of the host is unsatisfiable.
    fn set_unsatisfiable(&mut self);
}

/// Storage of learnt clauses.
pub trait LearnedClauseSink {
    /// A key to a stored clause.
    type Key: Copy + std::fmt::Debug;

    /// Stores a clause as a learnt clause (and so a candidate for reduction), with the given lbd.
    fn allocate_learnt(&mut self, literals: &[CLiteral], lbd: LBD) -> Self::Key;

    /// Places the clause in a tier.
    fn mark_tier(&mut self, key: Self::Key, tier: Tier);

    /// Notes the clause was touched at the given count of conflicts.
    fn set_touched(&mut self, key: Self::Key, conflicts: u64);

    /// Bumps the activity of the clause.
    fn bump_clause_activity(&mut self, key: Self::Key);

    /// Attaches the clause to watch lists, so it takes part in propagation.
    fn attach(&mut self, key: Self::Key);

    /// Decays the activity of all clauses.
    fn decay_clause_activity(&mut self);
}

/// Read access to learnt clauses.
pub trait LearnedClauseSource {
    /// A key to a stored clause.
    type Key: Copy + std::fmt::Debug;

    /// The literals of the clause, or None if the clause has been removed.
    fn learnt_literals(&self, key: Self::Key) -> Option<&[CLiteral]>;
}

/// The key of a clause for duplicate detection: the wire form of each literal, sorted and without repetition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DuplicateKey(Vec<i64>);

impl DuplicateKey {
    pub fn from_literals(literals: &[CLiteral]) -> Self {
        let mut key = literals.iter().map(|literal| literal.as_int()).collect::<Vec<_>>();
        key.sort_unstable();
        key.dedup();
        DuplicateKey(key)
    }

    pub fn ints(&self) -> &[i64] {
        &self.0
    }
}

/// A count of copies of a clause seen by the host.
pub trait DuplicateTracker {
    /// Notes a copy of the clause with the given key, and returns the count of copies seen.
    ///
    /// A clause not seen before gives 0, and the count is capped at some maximum.
    fn duplicate_signal(&mut self, key: &DuplicateKey) -> u32;
}

/// Heuristics of the host influenced by learnt clauses.
pub trait BranchingHeuristics {
    /// Whether adaptive branching (VSIDS) is active, and so takes account of the lbd of learnt clauses.
    fn adaptive_branching(&self) -> bool;

    /// Notes the lbd of an imported clause, as if the clause had been learnt from a conflict.
    fn record_imported_lbd(&mut self, lbd: LBD);

    /// Decays the activity of all atoms.
    fn decay_atom_activity(&mut self);

    /// The count of conflicts seen by the host.
    fn conflicts(&self) -> u64;
}

/// Everything required of a host to import clauses.
pub trait Host: Trail + LearnedClauseSink + DuplicateTracker + BranchingHeuristics {}

impl<T: Trail + LearnedClauseSink + DuplicateTracker + BranchingHeuristics> Host for T {}
