use std::{fmt::Display, str::FromStr};

use clap::ArgMatches;

use otter_exchange::{
    config::{Config, ConfigOption},
    types::err::{self},
};

/// A configuration built from the defaults, revised by any arguments given.
///
/// Bounded options are checked against their bounds.
pub fn config_from_args(args: &ArgMatches) -> Result<Config, err::ConfigError> {
    let mut the_config = Config::default();

    if let Ok(Some(host)) = args.try_get_one::<String>("host") {
        the_config.store.host = host.clone()
    };

    if let Ok(Some(port)) = args.try_get_one::<u16>("port") {
        the_config.store.port = *port
    };

    if let Ok(Some(database)) = args.try_get_one::<i64>("db") {
        the_config.store.database = *database
    };

    if let Ok(Some(prefix)) = args.try_get_one::<String>("prefix") {
        the_config.store.export_prefix = prefix.clone()
    };

    if let Ok(Some(inbox)) = args.try_get_one::<String>("inbox") {
        the_config.store.inbox = inbox.clone()
    };

    // The remaining options are bounded, and follow a common template.
    revise(&mut the_config.exchange.batch_width, args, "batch_width")?;
    revise(&mut the_config.exchange.max_clause_length, args, "max_clause_length")?;
    revise(&mut the_config.tiers.core_lbd_cut, args, "core_lbd_cut")?;
    revise(&mut the_config.tiers.tier2_lbd_cut, args, "tier2_lbd_cut")?;
    revise(&mut the_config.tiers.max_lbd_dup, args, "max_lbd_dup")?;
    revise(&mut the_config.tiers.min_learnt_copies, args, "min_learnt_copies")?;

    Ok(the_config)
}

/// If a value for `id` is present, may be parsed, and is within bounds, `option` is updated.
/// Otherwise, the bounds of the option are noted.
fn revise<T>(option: &mut ConfigOption<T>, args: &ArgMatches, id: &str) -> Result<(), err::ConfigError>
where
    T: Clone + PartialOrd + FromStr + Display,
{
    let Ok(Some(request)) = args.try_get_one::<String>(id) else {
        return Ok(());
    };

    match option.set_from_str(request) {
        Ok(()) => {
            println!("c {} set to: {}", option.name, option.value);
            Ok(())
        }

        Err(e) => {
            let (min, max) = option.min_max();
            println!("c {} requires a value between {min} and {max}", option.name);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::cli::cli;

    fn config_from(args: &[&str]) -> Result<Config, err::ConfigError> {
        let matches = cli()
            .try_get_matches_from(args.iter().copied())
            .expect("arguments");
        config_from_args(&matches)
    }

    #[test]
    fn tier_cuts() {
        let config = config_from(&[
            "otter_exchange",
            "--core-lbd-cut",
            "2",
            "--tier2-lbd-cut",
            "8",
            "--max-lbd-dup",
            "10",
            "pending",
        ])
        .expect("config");

        assert_eq!(config.tiers.core_lbd_cut.value, 2);
        assert_eq!(config.tiers.tier2_lbd_cut.value, 8);
        assert_eq!(config.tiers.max_lbd_dup.value, 10);
    }

    #[test]
    fn defaults_kept() {
        let config = config_from(&["otter_exchange", "pending"]).expect("config");
        let defaults = Config::default();

        assert_eq!(config.tiers.tier2_lbd_cut.value, defaults.tiers.tier2_lbd_cut.value);
        assert_eq!(config.tiers.max_lbd_dup.value, defaults.tiers.max_lbd_dup.value);
        assert_eq!(config.exchange.batch_width.value, defaults.exchange.batch_width.value);
    }

    #[test]
    fn out_of_bounds() {
        assert_eq!(
            config_from(&["otter_exchange", "--batch-width", "0", "pending"]).map(|_| ()),
            Err(err::ConfigError::OutOfBounds { name: "batch_width" })
        );

        assert_eq!(
            config_from(&["otter_exchange", "--max-lbd-dup", "300", "pending"]).map(|_| ()),
            Err(err::ConfigError::Unparsable { name: "max_lbd_dup" })
        );
    }
}
