/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when tracing the flow of clauses between solvers.

Note, no log implementation is provided by the library.
The binary initialises [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [store](crate::store)
    pub const STORE: &str = "store";

    /// Logs related to [export](crate::exchange::Exchange::export_all)
    pub const EXPORT: &str = "export";

    /// Logs related to [import](crate::exchange::Exchange::import_all)
    pub const IMPORT: &str = "import";

    /// Logs related to the [wire codec](crate::codec)
    pub const CODEC: &str = "codec";

    /// Logs related to [duplicate tracking](crate::host::duplicates)
    pub const DUPLICATES: &str = "duplicates";
}
