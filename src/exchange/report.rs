//! Summaries of a single export or import.

/// A summary of an export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Unit clauses published.
    pub units: usize,

    /// Clauses of at least two literals published.
    pub clauses: usize,

    /// Clauses skipped for exceeding the maximum length.
    pub skipped: usize,

    /// Whether a connection to the store was opened.
    pub connected: bool,
}

impl ExportReport {
    /// The count of records published, and so of identifiers taken from the publish counter.
    pub fn published(&self) -> usize {
        self.units + self.clauses
    }
}

/// A summary of an import.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Records popped from the inbox.
    pub records: usize,

    /// Units assigned.
    pub units_useful: usize,

    /// Units already satisfied.
    pub units_redundant: usize,

    /// Clauses placed in the core.
    pub core: usize,

    /// Clauses placed in tier two.
    pub tier2: usize,

    /// Clauses placed in the local tier.
    pub local: usize,

    /// Whether some unit conflicted with the valuation of the host.
    ///
    /// If so, the host has been marked unsatisfiable.
    pub contradiction: bool,

    /// Records popped after a contradiction was found, and so not integrated.
    pub discarded: usize,
}
