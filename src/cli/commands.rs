use clap::ArgMatches;

use otter_exchange::{
    codec,
    config::{Config, LBD},
    exchange::{Exchange, PublishCounter},
    host::{BasicHost, LearntKey, Trail},
    store::StoreClient,
    structures::clause::{Clause, ClauseKind, Tier},
    types::err::{self},
};

pub fn flush(config: &Config, store: impl StoreClient) -> Result<(), err::ErrorKind> {
    let exchange: Exchange<_, LearntKey> = Exchange::new(config, store);
    exchange.flush_all()?;
    println!("c Store flushed");
    Ok(())
}

pub fn pending(config: &Config, store: impl StoreClient) -> Result<(), err::ErrorKind> {
    let exchange: Exchange<_, LearntKey> = Exchange::new(config, store);
    let length = exchange.inbox_len()?;
    println!("c {length} records waiting in {}", config.store.inbox);
    Ok(())
}

pub fn push(
    config: &Config,
    store: impl StoreClient,
    args: &ArgMatches,
) -> Result<(), err::ErrorKind> {
    let records = match args.get_many::<String>("records") {
        Some(records) => records.cloned().collect::<Vec<_>>(),
        None => Vec::default(),
    };

    // Records are checked before anything is pushed.
    for record in &records {
        codec::decode(record)?;
    }

    let exchange: Exchange<_, LearntKey> = Exchange::new(config, store);
    let length = exchange.push_inbox(&records)?;
    println!("c Pushed {} records, {length} waiting in {}", records.len(), config.store.inbox);
    Ok(())
}

/// Publishes the given units and clauses, with clauses first stored as learnt clauses of a fresh host.
pub fn publish(
    config: &Config,
    store: impl StoreClient,
    args: &ArgMatches,
) -> Result<(), err::ErrorKind> {
    let mut host = BasicHost::new(config);
    let mut exchange = Exchange::new(config, store);

    if let Ok(Some(id)) = args.try_get_one::<u32>("first_id") {
        exchange = exchange.with_counter(PublishCounter::starting_at(*id));
    }

    if let Some(units) = args.get_many::<i64>("unit") {
        for int in units {
            exchange.queue_unit(codec::literal_from_int(*int)?);
        }
    }

    if let Some(records) = args.get_many::<String>("clause") {
        for record in records {
            let clause = codec::decode(record)?;

            match ClauseKind::identify(clause.as_slice()) {
                ClauseKind::Empty => {
                    println!("c Skipped the empty clause");
                }

                ClauseKind::Unit => exchange.queue_unit(clause[0]),

                ClauseKind::Binary | ClauseKind::Long => {
                    let lbd = LBD::try_from(clause.size()).unwrap_or(LBD::MAX);
                    let key = host.learn(&clause, lbd);
                    exchange.queue_clause(key);
                }
            }
        }
    }

    let report = exchange.export_all(&host)?;

    println!(
        "c Published {} units and {} clauses, skipped {}",
        report.units, report.clauses, report.skipped
    );
    println!("c Next id: {}", exchange.counter().peek());
    Ok(())
}

/// Imports the inbox into a fresh host, with any given facts assigned before import.
pub fn import(
    config: &Config,
    store: impl StoreClient,
    args: &ArgMatches,
) -> Result<(), err::ErrorKind> {
    let mut host = BasicHost::new(config);
    let mut exchange: Exchange<_, LearntKey> = Exchange::new(config, store);

    if args.get_flag("no_adaptive") {
        host.set_adaptive_branching(false);
    }

    if let Some(facts) = args.get_many::<i64>("fact") {
        for int in facts {
            host.assign_fact(codec::literal_from_int(*int)?);
        }
    }

    let report = exchange.import_all(&mut host)?;

    println!("c Imported {} records", report.records);
    println!(
        "c Units: {} useful, {} redundant",
        report.units_useful, report.units_redundant
    );
    println!(
        "c Clauses: {} core, {} tier2, {} local",
        report.core, report.tier2, report.local
    );

    for tier in [Tier::Core, Tier::Tier2, Tier::Local] {
        for key in host.tier(tier) {
            if let Some(learnt) = host.learnt(*key) {
                println!("c {tier}: {}", learnt.literals().as_dimacs(true));
            }
        }
    }

    if report.contradiction {
        println!("c Contradiction, {} records discarded", report.discarded);
    }

    match host.is_satisfiable() {
        true => println!("c Host consistent"),
        false => println!("s UNSATISFIABLE"),
    }

    Ok(())
}
