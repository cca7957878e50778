/*!
The exchange of clauses between a solver and a shared store.

An [Exchange] is owned by a single solver instance, and holds:
- Queues of units and clauses waiting to be published, filled during a solve.
- The [publish counter](PublishCounter), whose value suffixes the key of each published record.
- A client of the store, used to open a fresh connection for each export or import.

# Export

[export_all](Exchange::export_all) publishes every queued unit, and then every queued clause, with each record written to `prefix:id` for the next identifier of the publish counter.
Clauses longer than the [configured maximum](crate::config::dbs::ExchangeConfig::max_clause_length) are skipped.
If nothing is queued, no connection is made.

# Import

[import_all](Exchange::import_all) pops every record waiting in the inbox of the instance, in a single request, and integrates each clause into the host:
- A unit is assigned if the atom of the unit has no value, is ignored if the unit is already satisfied, and otherwise marks the host as unsatisfiable.
- Any other clause is stored as a learnt clause, in a [tier](crate::structures::clause::Tier) decided by lbd and by the count of copies of the clause seen.

Import is only possible at decision level zero.

# Example

Two instances sharing a store, with a harness moving published records to the inbox of a peer.

```rust
# use otter_exchange::config::Config;
# use otter_exchange::exchange::Exchange;
# use otter_exchange::host::{BasicHost, LearntKey, Trail};
# use otter_exchange::store::memory::MemoryStore;
# use otter_exchange::structures::literal::{CLiteral, Literal};
let store = MemoryStore::default();

let mut config_a = Config::default();
config_a.store.export_prefix = "a".to_string();
let mut a = BasicHost::new(&config_a);
let mut exchange_a = Exchange::new(&config_a, store.clone());

let mut config_b = Config::default();
config_b.store.inbox = "to_b".to_string();
let mut b = BasicHost::new(&config_b);
let mut exchange_b: Exchange<_, LearntKey> = Exchange::new(&config_b, store.clone());

exchange_a.queue_unit(CLiteral::new(4, true));
let clause = a.learn(&[CLiteral::new(1, true), CLiteral::new(2, false)], 2);
exchange_a.queue_clause(clause);
assert!(exchange_a.export_all(&a).is_ok());

let records = store.keys().iter().filter_map(|key| store.value_of(key)).collect::<Vec<_>>();
assert!(exchange_b.push_inbox(&records).is_ok());

let report = exchange_b.import_all(&mut b).unwrap();
assert_eq!(report.records, 2);
assert_eq!(b.value_of(4), Some(true));
```
*/

mod buffers;
pub use buffers::OutgoingBuffers;

mod counter;
pub use counter::PublishCounter;

mod counters;
pub use counters::Counters;

mod export;
mod import;
pub use import::classify;

pub mod report;

use crate::{
    config::Config,
    misc::log::targets::{self},
    store::{StoreClient, StoreConnection},
    structures::literal::CLiteral,
    types::err::{self},
};

/// The exchange of a single solver instance.
///
/// `K` is the type of key used by the host to identify a learnt clause.
pub struct Exchange<C: StoreClient, K> {
    /// Configuration, as given at creation.
    config: Config,

    /// A client of the store.
    client: C,

    counter: PublishCounter,

    buffers: OutgoingBuffers<K>,

    /// Counts for the lifetime of the exchange.
    pub counters: Counters,
}

impl<C: StoreClient, K: Copy + std::fmt::Debug> Exchange<C, K> {
    /// A new exchange, with configuration derived from `config`, and a publish counter starting at zero.
    pub fn new(config: &Config, client: C) -> Self {
        Exchange {
            config: config.clone(),
            client,
            counter: PublishCounter::default(),
            buffers: OutgoingBuffers::default(),
            counters: Counters::default(),
        }
    }

    /// Sets the identifier of the next published record.
    pub fn with_counter(mut self, counter: PublishCounter) -> Self {
        self.counter = counter;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// The publish counter.
    pub fn counter(&self) -> PublishCounter {
        self.counter
    }

    /// Units and clauses waiting to be published.
    pub fn pending(&self) -> &OutgoingBuffers<K> {
        &self.buffers
    }

    /// Queues a literal, assigned at decision level zero, for publication.
    pub fn queue_unit(&mut self, literal: CLiteral) {
        self.buffers.units.push(literal);
    }

    /// Queues a learnt clause of at least two literals for publication.
    ///
    /// The clause must remain in the clause database of the host until published.
    pub fn queue_clause(&mut self, key: K) {
        self.buffers.clauses.push(key);
    }

    /// Resets the entire namespace of the store.
    ///
    /// For the setup of tests and harnesses.
    pub fn flush_all(&self) -> Result<(), err::ErrorKind> {
        log::info!(target: targets::STORE, "Flushing the store");
        Ok(self.client.flush_all()?)
    }

    /// The count of records waiting in the inbox.
    pub fn inbox_len(&self) -> Result<usize, err::ErrorKind> {
        let mut connection = self.client.connect()?;
        let length = connection.list_len(&self.config.store.inbox);
        connection.close();
        Ok(length?)
    }

    /// Pushes records to the inbox, as a peer (or router) would.
    ///
    /// Records are popped in the order given.
    pub fn push_inbox(&self, records: &[String]) -> Result<usize, err::ErrorKind> {
        let mut connection = self.client.connect()?;
        let length = connection.push(&self.config.store.inbox, records);
        connection.close();
        Ok(length?)
    }
}
