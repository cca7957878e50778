/// Counts for the lifetime of an exchange.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Unit clauses published.
    pub units_published: usize,

    /// Clauses of at least two literals published.
    pub clauses_published: usize,

    /// Clauses not published as they exceeded the maximum length.
    pub clauses_skipped: usize,

    /// Records popped from the inbox.
    pub records_imported: usize,

    /// Imported units which assigned an atom without a value.
    pub units_useful: usize,

    /// Imported units which were already satisfied.
    pub units_redundant: usize,

    /// Imported units which conflicted with the valuation of the host.
    pub units_conflicting: usize,

    /// Imported clauses placed in the core.
    pub imported_core: usize,

    /// Imported clauses placed in tier two.
    pub imported_tier2: usize,

    /// Imported clauses placed in the local tier.
    pub imported_local: usize,

    /// Imported clauses whose count of copies reached the tier two threshold.
    pub duplicates_added_tier2: usize,
}
