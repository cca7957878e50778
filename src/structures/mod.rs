//! Abstract elements exchanged between solvers, and their representation.

pub mod atom;
pub mod clause;
pub mod literal;
