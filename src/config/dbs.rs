//! Configuration of the exchange and of the (reference) learnt clause database.

use super::{Activity, ConfigOption, LBD};

/// Configuration of export.
#[derive(Clone, Debug)]
pub struct ExchangeConfig {
    /// The most writes in flight at any time, as a pipelined batch.
    pub batch_width: ConfigOption<usize>,

    /// Clauses with more literals are not exported.
    pub max_clause_length: ConfigOption<usize>,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        ExchangeConfig {
            batch_width: ConfigOption {
                name: "batch_width",
                min: 1,
                max: 65_536,
                value: 1024,
            },

            max_clause_length: ConfigOption {
                name: "max_clause_length",
                min: 2,
                max: usize::MAX,
                value: 30,
            },
        }
    }
}

/// Configuration of the tier given to an imported clause.
#[derive(Clone, Debug)]
pub struct TierConfig {
    /// Clauses with lbd within the bound (lbd ≤ bound) are core clauses.
    pub core_lbd_cut: ConfigOption<LBD>,

    /// Clauses with lbd within the bound (lbd ≤ bound), which are not core clauses, are tier two clauses.
    pub tier2_lbd_cut: ConfigOption<LBD>,

    /// Duplicates are only looked up for clauses with lbd within the bound (lbd ≤ bound).
    pub max_lbd_dup: ConfigOption<LBD>,

    /// The count of copies of a clause which promotes the clause to tier two.
    /// One more copy promotes the clause to the core.
    pub min_learnt_copies: ConfigOption<u32>,
}

impl Default for TierConfig {
    fn default() -> Self {
        TierConfig {
            core_lbd_cut: ConfigOption {
                name: "core_lbd_cut",
                min: LBD::MIN,
                max: LBD::MAX,
                value: 3,
            },

            tier2_lbd_cut: ConfigOption {
                name: "tier2_lbd_cut",
                min: LBD::MIN,
                max: LBD::MAX,
                value: 6,
            },

            max_lbd_dup: ConfigOption {
                name: "max_lbd_dup",
                min: LBD::MIN,
                max: LBD::MAX,
                value: 14,
            },

            min_learnt_copies: ConfigOption {
                name: "min_learnt_copies",
                min: 1,
                max: u32::MAX - 1,
                value: 2,
            },
        }
    }
}

/// Configuration for the learnt clause database of the [reference host](crate::host::BasicHost).
#[derive(Clone, Debug)]
pub struct LearntDBConfig {
    /// The activity with which the next clause bumped will be bumped by, dynamically adjusted.
    pub bump: ConfigOption<Activity>,

    /// The decay to the activity of a clause each conflict.
    pub decay: ConfigOption<Activity>,

    /// The activity with which the next atom bumped will be bumped by, dynamically adjusted.
    pub atom_bump: ConfigOption<Activity>,

    /// The decay to the activity of an atom each conflict.
    pub atom_decay: ConfigOption<Activity>,
}

impl Default for LearntDBConfig {
    fn default() -> Self {
        LearntDBConfig {
            bump: ConfigOption {
                name: "clause_bump",
                min: Activity::MIN,
                max: (2.0 as Activity).powi(512),
                value: 1.0,
            },

            decay: ConfigOption {
                name: "clause_decay",
                min: 0.0,
                max: 0.999,
                value: 50.0 * 1e-3,
            },

            atom_bump: ConfigOption {
                name: "atom_bump",
                min: Activity::MIN,
                max: (2.0 as Activity).powi(512),
                value: 1.0,
            },

            atom_decay: ConfigOption {
                name: "atom_decay",
                min: 0.0,
                max: 0.999,
                value: 50.0 * 1e-3,
            },
        }
    }
}
