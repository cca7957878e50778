/*!
Configuration of an exchange.

All configuration is contained within [Config], and parts of the configuration are cloned by the structures which use them.
Configuration is static for the lifetime of an exchange.
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;
use dbs::{ExchangeConfig, LearntDBConfig, TierConfig};

pub mod store;
use store::StoreConfig;

mod activity;
pub use activity::Activity;

mod lbd;
pub use lbd::LBD;

/// The primary configuration structure.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Where to find the store, and the names used within the store.
    pub store: StoreConfig,

    /// Configuration of export.
    pub exchange: ExchangeConfig,

    /// Configuration of the tiers of imported clauses.
    pub tiers: TierConfig,

    /// Configuration of the learnt clause database of the reference host.
    pub learnt_db: LearntDBConfig,
}
