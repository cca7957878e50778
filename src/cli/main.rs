#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use otter_exchange::store::redis::RedisStore;

mod commands;
mod parse;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = match parse::config::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            println!("c Configuration error: {e:?}");
            std::process::exit(1);
        }
    };

    println!("c Store at {}", config.store.url());

    let store = match RedisStore::new(&config.store) {
        Ok(store) => store,
        Err(e) => {
            println!("c Store error: {e:?}");
            std::process::exit(3);
        }
    };

    let result = match matches.subcommand() {
        Some(("flush", _)) => commands::flush(&config, store),

        Some(("pending", _)) => commands::pending(&config, store),

        Some(("push", args)) => commands::push(&config, store, args),

        Some(("publish", args)) => commands::publish(&config, store, args),

        Some(("import", args)) => commands::import(&config, store, args),

        _ => {
            println!("c A subcommand is required");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        println!("c Exchange error: {e:?} ({:?})", e.class());
        std::process::exit(3);
    }
}
