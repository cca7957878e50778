use super::Clause;

/// A rough distinction between clauses, based on number of literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseKind {
    /// The clause is empty
    Empty,

    /// The clause is a single literal.
    Unit,

    /// The clause is exactly two literals.
    Binary,

    /// The clause has at least three literals.
    Long,
}

impl ClauseKind {
    /// Identifies the kind of a clause.
    pub fn identify(clause: &(impl Clause + ?Sized)) -> Self {
        match clause.size() {
            0 => Self::Empty,

            1 => Self::Unit,

            2 => Self::Binary,

            _long_clause => Self::Long,
        }
    }
}
