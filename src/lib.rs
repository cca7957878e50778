//! A library for exchanging learnt clauses between conflict-driven clause-learning solvers, through a shared key-value store.
//!
//! otter_exchange lets a portfolio of solvers, each working on the same formula, share units and short clauses learnt during a solve.
//! Each solver instance publishes what it learns to a shared store (Redis, or anything speaking the same small set of commands), and pops what its peers have learnt from an inbox list in the same store.
//! Routing records from the keys written by one instance to the inbox of another is the job of some external process, and is not handled by the library.
//!
//! # Orientation
//!
//! The library is designed around an [exchange](crate::exchange::Exchange), owned by a single solver instance.
//!
//! During a solve, units assigned at decision level zero and learnt clauses are queued with the exchange.
//! At some convenient point (e.g. a restart) the queues are [exported](crate::exchange::Exchange::export_all), and the inbox is [imported](crate::exchange::Exchange::import_all).
//!
//! Useful starting points, then, may be:
//! - The [exchange] module, for export and import.
//! - The [host] module, for what an exchange requires of a solver.
//! - The [codec], for the wire form of a clause.
//! - The [store] module, for the (few) commands used with the store.
//! - The [configuration](crate::config) to see what may be adjusted.
//!
//! # Examples
//!
//! + Publish a unit, and then read back the published record.
//!
//! ```rust
//! # use otter_exchange::config::Config;
//! # use otter_exchange::exchange::Exchange;
//! # use otter_exchange::host::{BasicHost, LearntKey};
//! # use otter_exchange::store::memory::MemoryStore;
//! use otter_exchange::structures::literal::{CLiteral, Literal};
//!
//! let store = MemoryStore::default();
//! let config = Config::default();
//! let host = BasicHost::new(&config);
//! let mut exchange: Exchange<_, LearntKey> = Exchange::new(&config, store.clone());
//!
//! exchange.queue_unit(CLiteral::new(2, false));
//! let report = exchange.export_all(&host).expect("export");
//!
//! assert_eq!(report.units, 1);
//! assert_eq!(store.value_of("from_minisat:0"), Some("-3 0".to_string()));
//! assert_eq!(exchange.counter().peek(), 1);
//! ```
//!
//! # Errors
//!
//! Every [error](crate::types::err) returned by the library is fatal to the instance.
//! The binary exits with status 3 on any error, so a portfolio may distinguish a broken instance from one which has found a result.
//!
//! # Logs
//!
//! To help diagnose issues detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to import can be filtered with `RUST_LOG=import …` or,
//! - Counts of published records without details of each batch can be found with `RUST_LOG=export=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::derivable_impls)]

pub mod codec;
pub mod config;
pub mod exchange;
pub mod host;
pub mod store;
pub mod structures;
pub mod types;

pub mod misc;
