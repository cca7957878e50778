use clap::{value_parser, Arg, ArgAction, Command};

use otter_exchange::config::{
    dbs::{ExchangeConfig, TierConfig},
    store::StoreConfig,
};

pub fn cli() -> Command {
    let store = StoreConfig::default();
    let exchange = ExchangeConfig::default();
    let tiers = TierConfig::default();

    Command::new("otter_exchange")
        .about("Moves learnt clauses between a solver instance and a shared store")
        .version("pup (it's still growing)")
        .subcommand_required(true)

        .arg(Arg::new("host")
            .long("host")
            .value_name("HOST")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .global(true)
            .help(format!("The host of the store.
Default: {}", store.host)))

        .arg(Arg::new("port")
            .long("port")
            .value_name("PORT")
            .value_parser(value_parser!(u16))
            .required(false)
            .num_args(1)
            .global(true)
            .help(format!("The port of the store.
Default: {}", store.port)))

        .arg(Arg::new("db")
            .long("db")
            .value_name("INDEX")
            .value_parser(value_parser!(i64))
            .required(false)
            .num_args(1)
            .global(true)
            .help(format!("The logical database within the store.
Default: {}", store.database)))

        .arg(Arg::new("prefix")
            .long("prefix")
            .value_name("PREFIX")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .global(true)
            .help(format!("The prefix of keys written on export, as prefix:id.
Default: {}", store.export_prefix)))

        .arg(Arg::new("inbox")
            .long("inbox")
            .value_name("KEY")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .global(true)
            .help(format!("The list popped on import.
Default: {}", store.inbox)))

        .arg(Arg::new("batch_width")
            .long("batch-width")
            .value_name("WIDTH")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .global(true)
            .help(format!("The most writes in flight at any time.
Default: {}

Records are written in pipelined batches of at most this width.", exchange.batch_width.value)))

        .arg(Arg::new("max_clause_length")
            .long("max-clause-length")
            .value_name("LENGTH")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .global(true)
            .help(format!("Clauses with more literals are not published.
Default: {}", exchange.max_clause_length.value)))

        .arg(Arg::new("core_lbd_cut")
            .long("core-lbd-cut")
            .value_name("LBD")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .global(true)
            .help(format!("Imported clauses with lbd at most this value are core clauses.
Default: {}", tiers.core_lbd_cut.value)))

        .arg(Arg::new("tier2_lbd_cut")
            .long("tier2-lbd-cut")
            .value_name("LBD")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .global(true)
            .help(format!("Imported clauses with lbd at most this value, which are not core clauses, are tier two clauses.
Default: {}", tiers.tier2_lbd_cut.value)))

        .arg(Arg::new("max_lbd_dup")
            .long("max-lbd-dup")
            .value_name("LBD")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .global(true)
            .help(format!("Copies are only counted for imported clauses with lbd at most this value.
Default: {}", tiers.max_lbd_dup.value)))

        .arg(Arg::new("min_learnt_copies")
            .long("min-learnt-copies")
            .value_name("COPIES")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .global(true)
            .help(format!("The count of copies of a clause which promotes the clause to tier two.
Default: {}

One more copy promotes the clause to the core.", tiers.min_learnt_copies.value)))

        .subcommand(Command::new("flush")
            .about("Resets the entire namespace of the store."))

        .subcommand(Command::new("pending")
            .about("Reports the count of records waiting in the inbox."))

        .subcommand(Command::new("push")
            .about("Pushes records to the inbox, as a peer would.")
            .arg(Arg::new("records")
                .required(true)
                .num_args(1..)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(String))
                .help("Records in wire form, e.g. \"1 -2 0\".")))

        .subcommand(Command::new("publish")
            .about("Publishes units and clauses under the prefix of the instance.")
            .arg(Arg::new("unit")
                .long("unit")
                .short('u')
                .value_name("LITERAL")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .action(ArgAction::Append)
                .num_args(1)
                .help("A unit, as a non-zero integer."))
            .arg(Arg::new("clause")
                .long("clause")
                .short('c')
                .value_name("RECORD")
                .value_parser(value_parser!(String))
                .allow_hyphen_values(true)
                .action(ArgAction::Append)
                .num_args(1)
                .help("A clause in wire form, e.g. \"1 -2 0\"."))
            .arg(Arg::new("first_id")
                .long("first-id")
                .value_name("ID")
                .value_parser(value_parser!(u32))
                .required(false)
                .num_args(1)
                .help("The identifier of the first record published.
Default: 0")))

        .subcommand(Command::new("import")
            .about("Pops the inbox and integrates each record into a fresh host at decision level zero.")
            .arg(Arg::new("no_adaptive")
                .long("no-adaptive")
                .action(ArgAction::SetTrue)
                .help("Import as a host without adaptive branching."))
            .arg(Arg::new("fact")
                .long("fact")
                .short('f')
                .value_name("LITERAL")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .action(ArgAction::Append)
                .num_args(1)
                .help("A literal assigned in the host before import, as a non-zero integer.")))
}
