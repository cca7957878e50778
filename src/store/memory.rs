/*!
An in-process store.

The store is shared between clones, and so a collection of exchanges may be given clones of a single store to simulate a portfolio within one process.

```rust
# use otter_exchange::store::{memory::MemoryStore, StoreClient, StoreConnection};
let store = MemoryStore::default();
let peer = store.clone();

let mut connection = store.connect().unwrap();
connection.push("inbox", &["1 -2 0".to_string()]).unwrap();
drop(connection);

let mut connection = peer.connect().unwrap();
assert_eq!(connection.list_len("inbox"), Ok(1));
assert_eq!(connection.pop_batch("inbox", 1), Ok(vec!["1 -2 0".to_string()]));
```

In addition, the store counts connections and commands, and faults may be injected, so tests may observe the exact behaviour of an exchange.
*/

use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    misc::log::targets::{self},
    store::{StoreClient, StoreConnection},
    types::err::{self},
};

/// Counts of interactions with a [MemoryStore].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryStats {
    /// Every connection opened.
    pub connections_opened: usize,

    /// Connections opened and not yet released.
    pub connections_open: usize,

    /// Pipelined batches of writes.
    pub batches: usize,

    /// Individual keyed writes.
    pub writes: usize,

    /// Pops from a list.
    pub pops: usize,

    /// Length queries.
    pub length_queries: usize,
}

#[derive(Default)]
struct MemoryState {
    keys: HashMap<String, String>,
    lists: HashMap<String, VecDeque<String>>,
    stats: MemoryStats,

    unreachable: bool,
    reply_limit: Option<usize>,
    pop_limit: Option<usize>,
}

/// An in-process store, shared between clones.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

fn lock(state: &Mutex<MemoryState>) -> MutexGuard<'_, MemoryState> {
    // A panic while holding the lock leaves the maps intact.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryStore {
    /// Counts of interactions with the store.
    pub fn stats(&self) -> MemoryStats {
        lock(&self.state).stats
    }

    /// The value written to `key`, if some value has been written.
    pub fn value_of(&self, key: &str) -> Option<String> {
        lock(&self.state).keys.get(key).cloned()
    }

    /// All keys written, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = lock(&self.state).keys.keys().cloned().collect::<Vec<_>>();
        keys.sort_unstable();
        keys
    }

    /// The records of the list at `key`, from head to tail.
    pub fn list(&self, key: &str) -> Vec<String> {
        match lock(&self.state).lists.get(key) {
            Some(list) => list.iter().cloned().collect(),
            None => Vec::default(),
        }
    }

    /// Refuse (or accept) connections.
    pub fn set_unreachable(&self, unreachable: bool) {
        lock(&self.state).unreachable = unreachable;
    }

    /// Drop all but `limit` replies to a pipelined batch.
    pub fn set_reply_limit(&self, limit: Option<usize>) {
        lock(&self.state).reply_limit = limit;
    }

    /// Pop at most `limit` records at once.
    pub fn set_pop_limit(&self, limit: Option<usize>) {
        lock(&self.state).pop_limit = limit;
    }
}

impl StoreClient for MemoryStore {
    type Connection = MemoryConnection;

    fn connect(&self) -> Result<Self::Connection, err::StoreError> {
        let mut state = lock(&self.state);
        if state.unreachable {
            log::error!(target: targets::STORE, "Error during connection: store unreachable");
            return Err(err::StoreError::Connection("store unreachable".to_string()));
        }

        state.stats.connections_opened += 1;
        state.stats.connections_open += 1;

        Ok(MemoryConnection {
            state: self.state.clone(),
        })
    }
}

/// A connection to a [MemoryStore], released on drop.
pub struct MemoryConnection {
    state: Arc<Mutex<MemoryState>>,
}

impl Drop for MemoryConnection {
    fn drop(&mut self) {
        let mut state = lock(&self.state);
        state.stats.connections_open -= 1;
    }
}

impl StoreConnection for MemoryConnection {
    fn set_pipelined(&mut self, writes: &[(String, String)]) -> Result<(), err::StoreError> {
        let mut state = lock(&self.state);
        state.stats.batches += 1;

        let received = match state.reply_limit {
            Some(limit) => limit.min(writes.len()),
            None => writes.len(),
        };

        for (key, value) in writes {
            state.keys.insert(key.clone(), value.clone());
            state.stats.writes += 1;
        }

        if received != writes.len() {
            log::error!(target: targets::STORE, "Expected {} replies, received {received}", writes.len());
            return Err(err::StoreError::MissingReply {
                requested: writes.len(),
                received,
            });
        }
        Ok(())
    }

    fn list_len(&mut self, key: &str) -> Result<usize, err::StoreError> {
        let mut state = lock(&self.state);
        state.stats.length_queries += 1;
        Ok(state.lists.get(key).map_or(0, |list| list.len()))
    }

    fn pop_batch(&mut self, key: &str, count: usize) -> Result<Vec<String>, err::StoreError> {
        let mut state = lock(&self.state);
        state.stats.pops += 1;

        let count = match state.pop_limit {
            Some(limit) => limit.min(count),
            None => count,
        };

        let mut records = Vec::with_capacity(count);
        if let Some(list) = state.lists.get_mut(key) {
            while records.len() < count {
                match list.pop_back() {
                    Some(record) => records.push(record),
                    None => break,
                }
            }
        }
        Ok(records)
    }

    fn push(&mut self, key: &str, values: &[String]) -> Result<usize, err::StoreError> {
        let mut state = lock(&self.state);
        let list = state.lists.entry(key.to_string()).or_default();
        for value in values {
            list.push_front(value.clone());
        }
        Ok(list.len())
    }

    fn flush_db(&mut self) -> Result<(), err::StoreError> {
        let mut state = lock(&self.state);
        state.keys.clear();
        state.lists.clear();
        Ok(())
    }
}
