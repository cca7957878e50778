/*!
Clients of the shared store.

The store is an ordered key-value store offering, at least:
- A keyed write (`SET key value`).
- The length of a list (`LLEN key`).
- An atomic pop of some count of records from a list (`RPOP key count`).
- An administrative reset of the namespace (`FLUSHDB`).

A [StoreClient] knows how to reach a store, and opens a fresh [StoreConnection] for each exchange.
Connections are never pooled or held across calls, and are released when dropped.

Two clients are provided:
- [RedisStore](redis::RedisStore), for a (Redis protocol) server.
- [MemoryStore](memory::MemoryStore), an in-process store, useful for tests and for simulating a portfolio in a single process.

# Pipelining

Writes are made in batches through [set_pipelined](StoreConnection::set_pipelined).
Each write in a batch is sent without waiting for a reply, and replies are then drained in order.
So, the width of a batch bounds the requests in flight while amortising the round-trip to the store across the batch.
*/

pub mod memory;
pub mod redis;

use crate::types::err::{self};

/// Something which can open connections to a store.
pub trait StoreClient {
    /// The connection opened.
    type Connection: StoreConnection;

    /// Opens a connection to the store.
    ///
    /// An error is returned if the store is unreachable or refuses the connection.
    fn connect(&self) -> Result<Self::Connection, err::StoreError>;

    /// Resets the entire namespace of the store.
    ///
    /// Intended for the setup of tests and harnesses, not for use during a solve.
    fn flush_all(&self) -> Result<(), err::StoreError> {
        let mut connection = self.connect()?;
        let result = connection.flush_db();
        connection.close();
        result
    }
}

/// A connection to a store.
pub trait StoreConnection {
    /// Writes each `(key, value)` pair, with requests pipelined.
    ///
    /// Each reply must be an acknowledgement, and the number of replies must match the number of writes.
    fn set_pipelined(&mut self, writes: &[(String, String)]) -> Result<(), err::StoreError>;

    /// The length of the list at `key`, with a missing list having length zero.
    fn list_len(&mut self, key: &str) -> Result<usize, err::StoreError>;

    /// Pops (up to) `count` records from the tail of the list at `key`, in a single request.
    ///
    /// Fewer records may be returned if the list is shorter than `count`.
    fn pop_batch(&mut self, key: &str, count: usize) -> Result<Vec<String>, err::StoreError>;

    /// Pushes `values` to the head of the list at `key`, returning the length of the list.
    fn push(&mut self, key: &str, values: &[String]) -> Result<usize, err::StoreError>;

    /// Resets the entire namespace of the store.
    fn flush_db(&mut self) -> Result<(), err::StoreError>;

    /// Releases the connection.
    ///
    /// As connections are released on drop this is (only) a visible marker of release.
    fn close(self)
    where
        Self: Sized,
    {
        drop(self)
    }
}
