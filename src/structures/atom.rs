//! Atoms, a.k.a. variables.
//!
//! Atoms are indexed from zero, as in the host solver.
//! Note, this differs from the wire representation of a literal, where atom *a* is written as *a + 1* so that `0` is free to terminate a clause.

/// An atom, represented by its index.
pub type Atom = u32;
