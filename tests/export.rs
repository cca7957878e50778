use otter_exchange::{
    config::Config,
    exchange::{Exchange, PublishCounter},
    host::{BasicHost, LearntKey},
    store::memory::MemoryStore,
    structures::literal::{CLiteral, Literal},
    types::err::{self, ErrorClass, ErrorKind},
};

fn lit(int: i64) -> CLiteral {
    CLiteral::new(int.unsigned_abs() as u32 - 1, int > 0)
}

fn clause(ints: &[i64]) -> Vec<CLiteral> {
    ints.iter().map(|int| lit(*int)).collect()
}

fn setup(config: &Config) -> (MemoryStore, BasicHost, Exchange<MemoryStore, LearntKey>) {
    let store = MemoryStore::default();
    let host = BasicHost::new(config);
    let exchange = Exchange::new(config, store.clone());
    (store, host, exchange)
}

mod publication {
    use super::*;

    #[test]
    fn nothing_queued() {
        let (store, host, mut exchange) = setup(&Config::default());

        let report = exchange.export_all(&host).expect("export");

        assert!(!report.connected);
        assert_eq!(report.published(), 0);
        assert_eq!(exchange.counter().peek(), 0);
        assert_eq!(store.stats().connections_opened, 0);
    }

    #[test]
    fn units_then_clauses() {
        let (store, mut host, mut exchange) = setup(&Config::default());

        let key = host.learn(&clause(&[1, -2, 3]), 2);
        exchange.queue_clause(key);
        exchange.queue_unit(lit(-5));
        exchange.queue_unit(lit(7));

        let report = exchange.export_all(&host).expect("export");

        assert_eq!(report.units, 2);
        assert_eq!(report.clauses, 1);
        assert_eq!(store.value_of("from_minisat:0"), Some("-5 0".to_string()));
        assert_eq!(store.value_of("from_minisat:1"), Some("7 0".to_string()));
        assert_eq!(store.value_of("from_minisat:2"), Some("1 -2 3 0".to_string()));
        assert_eq!(exchange.counter().peek(), 3);
        assert!(exchange.pending().is_empty());
    }

    #[test]
    fn counter_continues_across_exports() {
        let (store, host, mut exchange) = setup(&Config::default());

        exchange.queue_unit(lit(1));
        assert!(exchange.export_all(&host).is_ok());

        exchange.queue_unit(lit(2));
        assert!(exchange.export_all(&host).is_ok());

        assert_eq!(
            store.keys(),
            vec!["from_minisat:0".to_string(), "from_minisat:1".to_string()]
        );
        assert_eq!(exchange.counter().peek(), 2);
    }

    #[test]
    fn custom_prefix_and_counter() {
        let mut config = Config::default();
        config.store.export_prefix = "solver_3".to_string();
        let (store, host, exchange) = setup(&config);
        let mut exchange = exchange.with_counter(PublishCounter::starting_at(40));

        exchange.queue_unit(lit(-1));
        assert!(exchange.export_all(&host).is_ok());

        assert_eq!(store.keys(), vec!["solver_3:40".to_string()]);
        assert_eq!(exchange.counter().peek(), 41);
    }

    #[test]
    fn long_clauses_skipped() {
        let mut config = Config::default();
        config.exchange.max_clause_length.value = 3;
        let (store, mut host, mut exchange) = setup(&config);

        let clauses: [&[i64]; 3] = [&[1, 2], &[1, 2, 3, 4, 5], &[-1, -2, -3]];
        for ints in clauses {
            let key = host.learn(&clause(ints), 2);
            exchange.queue_clause(key);
        }

        let report = exchange.export_all(&host).expect("export");

        assert_eq!(report.clauses, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(store.value_of("from_minisat:0"), Some("1 2 0".to_string()));
        assert_eq!(store.value_of("from_minisat:1"), Some("-1 -2 -3 0".to_string()));
        assert_eq!(store.value_of("from_minisat:2"), None);
        assert_eq!(exchange.counter().peek(), 2);
        assert_eq!(exchange.counters.clauses_skipped, 1);
        assert!(exchange.pending().is_empty());
    }

    #[test]
    fn batches_bounded_by_width() {
        let mut config = Config::default();
        config.exchange.batch_width.value = 2;
        let (store, mut host, mut exchange) = setup(&config);

        for int in 1..=5 {
            exchange.queue_unit(lit(int));
        }
        for int in 1..=3 {
            let key = host.learn(&clause(&[int, int + 1]), 2);
            exchange.queue_clause(key);
        }

        let report = exchange.export_all(&host).expect("export");

        assert_eq!(report.published(), 8);
        // Units in 2, 2, 1 and clauses in 2, 1.
        assert_eq!(store.stats().batches, 5);
        assert_eq!(store.stats().writes, 8);
        assert_eq!(store.stats().connections_opened, 1);
    }
}

mod failure {
    use super::*;

    #[test]
    fn short_clause() {
        let (_, mut host, mut exchange) = setup(&Config::default());

        let key = host.learn(&clause(&[4]), 1);
        exchange.queue_clause(key);

        assert_eq!(
            exchange.export_all(&host),
            Err(ErrorKind::Export(err::ExportError::ShortClause))
        );
    }

    #[test]
    fn removed_clause() {
        let (store, mut host, mut exchange) = setup(&Config::default());

        let key = host.learn(&clause(&[1, 2]), 2);
        exchange.queue_clause(key);
        host.remove_learnt(key);

        let result = exchange.export_all(&host);

        assert_eq!(result, Err(ErrorKind::Export(err::ExportError::RemovedClause)));
        assert_eq!(result.map_err(|e| e.class()), Err(ErrorClass::Consistency));
        assert_eq!(store.stats().connections_open, 0);
    }

    #[test]
    fn unreachable_store() {
        let (store, host, mut exchange) = setup(&Config::default());
        store.set_unreachable(true);

        exchange.queue_unit(lit(1));
        let result = exchange.export_all(&host);

        assert!(matches!(
            result,
            Err(ErrorKind::Store(err::StoreError::Connection(_)))
        ));
        assert_eq!(result.map_err(|e| e.class()), Err(ErrorClass::Connectivity));
        assert_eq!(exchange.pending().units().len(), 1);
        assert_eq!(exchange.counter().peek(), 0);
    }

    #[test]
    fn missing_reply() {
        let (store, host, mut exchange) = setup(&Config::default());
        store.set_reply_limit(Some(1));

        exchange.queue_unit(lit(1));
        exchange.queue_unit(lit(2));

        assert_eq!(
            exchange.export_all(&host),
            Err(ErrorKind::Store(err::StoreError::MissingReply {
                requested: 2,
                received: 1
            }))
        );
        assert_eq!(store.stats().connections_open, 0);
    }

    #[test]
    fn counter_exhausted() {
        let (store, host, exchange) = setup(&Config::default());
        let mut exchange = exchange.with_counter(PublishCounter::starting_at(u32::MAX - 1));

        exchange.queue_unit(lit(1));
        exchange.queue_unit(lit(2));

        assert_eq!(
            exchange.export_all(&host),
            Err(ErrorKind::Export(err::ExportError::CounterExhausted))
        );
        // No identifier is taken for a batch which cannot be published in full.
        assert_eq!(exchange.counter().peek(), u32::MAX - 1);
        assert!(store.keys().is_empty());
        assert_eq!(exchange.pending().units().len(), 2);
    }

    #[test]
    fn counter_exhausted_within_clause_batch() {
        let (store, mut host, exchange) = setup(&Config::default());
        let mut exchange = exchange.with_counter(PublishCounter::starting_at(u32::MAX - 2));

        for ints in [[1, 2], [3, 4], [5, 6]] {
            let key = host.learn(&clause(&ints), 2);
            exchange.queue_clause(key);
        }

        assert_eq!(
            exchange.export_all(&host),
            Err(ErrorKind::Export(err::ExportError::CounterExhausted))
        );

        // Every identifier taken is published.
        assert_eq!(exchange.counter().peek(), u32::MAX);
        assert_eq!(
            store.value_of(&format!("from_minisat:{}", u32::MAX - 2)),
            Some("1 2 0".to_string())
        );
        assert_eq!(
            store.value_of(&format!("from_minisat:{}", u32::MAX - 1)),
            Some("3 4 0".to_string())
        );
        assert_eq!(store.keys().len(), 2);
        assert_eq!(exchange.counters.clauses_published, 2);
        assert_eq!(store.stats().connections_open, 0);
    }
}
