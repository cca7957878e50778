/// The retention class of a learnt clause.
///
/// When reducing a clause database, core clauses are kept, tier two clauses are kept while recently used, and local clauses are kept by activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Kept indefinitely.
    Core,

    /// Kept while recently touched.
    Tier2,

    /// Kept by activity.
    Local,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Core => write!(f, "core"),
            Self::Tier2 => write!(f, "tier2"),
            Self::Local => write!(f, "local"),
        }
    }
}
