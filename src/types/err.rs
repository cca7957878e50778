//! Error types used in the library.
//!
//! Every error returned by the library is fatal to the exchanging instance.
//! A broken channel to the shared store leaves an instance with no reason to continue as part of a portfolio, and any other error is a breach of the contract between the exchange and the host solver.
//! Still, errors are returned rather than acted on, so a harness may inspect the [class](ErrorKind::class) of an error and a binary may choose to terminate.
//!
//! Outcomes which are not errors (e.g. an imported unit which contradicts the valuation of the host) are noted in [reports](crate::exchange::report).
//!
//! Names of the error enums overlap with the corresponding structures.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The kind of an error, wrapping a specific error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Export(ExportError),
    Import(ImportError),
    Parse(ParseError),
    Store(StoreError),
}

/// A coarse classification of errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// The store was unreachable, or replied in some unexpected way.
    Connectivity,

    /// Some contract between the exchange, the host solver, or peers was broken.
    Consistency,
}

impl ErrorKind {
    /// The class of the error.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Store(_) => ErrorClass::Connectivity,

            Self::Config(_) | Self::Export(_) | Self::Import(_) | Self::Parse(_) => {
                ErrorClass::Consistency
            }
        }
    }
}

/// Errors when setting configuration options.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of the named option.
    OutOfBounds { name: &'static str },

    /// A value for the named option could not be parsed.
    Unparsable { name: &'static str },
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during export.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportError {
    /// The publish counter would pass the 32-bit limit.
    CounterExhausted,

    /// A clause queued for export has been removed from the clause database of the host.
    RemovedClause,

    /// A clause with fewer than two literals was queued as a clause.
    /// Units are exported from the unit queue only.
    ShortClause,

    /// An outgoing queue was not empty after an export claimed to have drained it.
    BufferNotDrained,
}

impl From<ExportError> for ErrorKind {
    fn from(e: ExportError) -> Self {
        ErrorKind::Export(e)
    }
}

/// Errors during import.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ImportError {
    /// Import was requested while the host was at the given (non-zero) decision level.
    DecisionLevel(u32),

    /// A record decoded to the empty clause.
    EmptyRecord,
}

impl From<ImportError> for ErrorKind {
    fn from(e: ImportError) -> Self {
        ErrorKind::Import(e)
    }
}

/// Errors when decoding a wire record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A token which is not a signed integer.
    Token(String),

    /// Some token follows the terminating `0`.
    TrailingToken,

    /// No terminating `0` was found.
    Unterminated,

    /// A literal whose atom does not fit an [Atom](crate::structures::atom::Atom).
    AtomOverflow(i64),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when speaking with the store.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreError {
    /// The store could not be reached, or refused the connection.
    Connection(String),

    /// The store reported an error in reply to a command.
    Command(String),

    /// Fewer replies than requests in a pipelined batch.
    MissingReply { requested: usize, received: usize },

    /// A reply of an unexpected type.
    UnexpectedReply(String),

    /// A pop returned some other number of records than requested.
    PopMismatch { requested: usize, returned: usize },

    /// The administrative reset of the namespace failed.
    Flush(String),
}

impl From<StoreError> for ErrorKind {
    fn from(e: StoreError) -> Self {
        ErrorKind::Store(e)
    }
}
