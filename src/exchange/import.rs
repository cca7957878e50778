use crate::{
    codec,
    config::{dbs::TierConfig, LBD},
    exchange::{report::ImportReport, Exchange},
    host::{DuplicateKey, Host},
    misc::log::targets::{self},
    store::{StoreClient, StoreConnection},
    structures::{
        clause::{CClause, Clause, ClauseKind, Tier},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The tier of an imported clause, given the lbd of the clause and the count of copies of the clause seen.
///
/// In order of priority:
/// - Core, if the lbd is within the core cut, or the count of copies has just reached the count for promotion to the core.
/// - Tier two, if the lbd is within the tier two cut, or the count of copies is exactly the count for promotion to tier two.
/// - Local, otherwise.
pub fn classify(lbd: LBD, duplicate_signal: u32, config: &TierConfig) -> Tier {
    let min_copies = config.min_learnt_copies.value;

    if lbd <= config.core_lbd_cut.value || duplicate_signal == min_copies + 1 {
        Tier::Core
    } else if lbd <= config.tier2_lbd_cut.value || duplicate_signal == min_copies {
        Tier::Tier2
    } else {
        Tier::Local
    }
}

/// Methods for integrating clauses published by peers.
impl<C: StoreClient, K: Copy + std::fmt::Debug> Exchange<C, K> {
    /// Pops every record waiting in the inbox and integrates each clause into `host`.
    ///
    /// The host must be at decision level zero.
    ///
    /// If some imported unit conflicts with the valuation of the host, the host is marked unsatisfiable and any remaining records are discarded.
    /// So, after an import the satisfiability of the host should be checked.
    pub fn import_all<H: Host>(&mut self, host: &mut H) -> Result<ImportReport, err::ErrorKind> {
        let level = host.decision_level();
        if level != 0 {
            log::error!(target: targets::IMPORT, "Import requested at decision level {level}");
            return Err(err::ImportError::DecisionLevel(level).into());
        }

        let records = self.pop_inbox()?;
        let mut report = ImportReport {
            records: records.len(),
            ..Default::default()
        };
        self.counters.records_imported += records.len();

        let mut clause = CClause::default();
        for (index, record) in records.iter().enumerate() {
            clause.clear();
            codec::decode_into(record, &mut clause)?;

            self.integrate(host, &clause, &mut report)?;

            if report.contradiction {
                report.discarded = records.len() - (index + 1);
                if report.discarded > 0 {
                    log::warn!(target: targets::IMPORT, "Discarded {} records after a contradiction", report.discarded);
                }
                break;
            }
        }

        log::info!(target: targets::IMPORT,
            "Imported {} records: {} useful units, {} redundant units, {} core, {} tier2, {} local",
            report.records, report.units_useful, report.units_redundant, report.core, report.tier2, report.local);

        Ok(report)
    }

    /// Pops every record waiting in the inbox, in a single request.
    ///
    /// The connection is released before returning.
    fn pop_inbox(&self) -> Result<Vec<String>, err::ErrorKind> {
        let inbox = &self.config.store.inbox;
        let mut connection = self.client.connect()?;

        let pending = connection.list_len(inbox)?;
        if pending == 0 {
            log::trace!(target: targets::IMPORT, "Nothing to import");
            connection.close();
            return Ok(Vec::default());
        }

        let records = connection.pop_batch(inbox, pending)?;
        connection.close();

        if records.len() != pending {
            log::error!(target: targets::IMPORT, "Requested {pending} records, popped {}", records.len());
            return Err(err::StoreError::PopMismatch {
                requested: pending,
                returned: records.len(),
            }
            .into());
        }

        log::debug!(target: targets::IMPORT, "Popped {pending} records");
        Ok(records)
    }

    /// Integrates a single decoded clause into `host`.
    fn integrate<H: Host>(
        &mut self,
        host: &mut H,
        clause: &[CLiteral],
        report: &mut ImportReport,
    ) -> Result<(), err::ErrorKind> {
        // At level zero no literal has a meaningful decision level, so the size of the clause stands for the lbd.
        let lbd = LBD::try_from(clause.size()).unwrap_or(LBD::MAX);

        if host.adaptive_branching() {
            host.record_imported_lbd(lbd);
        }

        match ClauseKind::identify(clause) {
            ClauseKind::Empty => {
                log::error!(target: targets::IMPORT, "Empty record");
                Err(err::ImportError::EmptyRecord.into())
            }

            ClauseKind::Unit => {
                self.integrate_unit(host, clause[0], report);
                Ok(())
            }

            ClauseKind::Binary | ClauseKind::Long => {
                self.integrate_clause(host, clause, lbd, report);
                Ok(())
            }
        }
    }

    fn integrate_unit<H: Host>(&mut self, host: &mut H, literal: CLiteral, report: &mut ImportReport) {
        match host.value_of(literal.atom()) {
            None => {
                host.enqueue_forced(literal);
                log::info!(target: targets::IMPORT, "New useful unit: {literal}");
                report.units_useful += 1;
                self.counters.units_useful += 1;
            }

            Some(value) if value == literal.polarity() => {
                log::debug!(target: targets::IMPORT, "Unit {literal} already holds");
                report.units_redundant += 1;
                self.counters.units_redundant += 1;
            }

            Some(_) => {
                log::warn!(target: targets::IMPORT, "Unit {literal} conflicts with the valuation, unsatisfiable");
                host.set_unsatisfiable();
                report.contradiction = true;
                self.counters.units_conflicting += 1;
            }
        }
    }

    fn integrate_clause<H: Host>(
        &mut self,
        host: &mut H,
        clause: &[CLiteral],
        lbd: LBD,
        report: &mut ImportReport,
    ) {
        let tiers = &self.config.tiers;

        let key = host.allocate_learnt(clause, lbd);

        let duplicate_signal = match lbd <= tiers.max_lbd_dup.value {
            true => host.duplicate_signal(&DuplicateKey::from_literals(clause)),
            false => 0,
        };
        if duplicate_signal == tiers.min_learnt_copies.value {
            self.counters.duplicates_added_tier2 += 1;
        }

        let tier = classify(lbd, duplicate_signal, tiers);
        log::trace!(target: targets::IMPORT, "{} as {tier} (lbd {lbd}, copies {duplicate_signal})", clause.as_dimacs(true));
        host.mark_tier(key, tier);

        match tier {
            Tier::Core => {
                report.core += 1;
                self.counters.imported_core += 1;
            }

            Tier::Tier2 => {
                let conflicts = host.conflicts();
                host.set_touched(key, conflicts);
                report.tier2 += 1;
                self.counters.imported_tier2 += 1;
            }

            Tier::Local => {
                host.bump_clause_activity(key);
                report.local += 1;
                self.counters.imported_local += 1;
            }
        }

        host.attach(key);

        if host.adaptive_branching() {
            host.decay_atom_activity();
        }
        host.decay_clause_activity();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn tiers(core_lbd_cut: LBD, min_learnt_copies: u32) -> TierConfig {
        let mut config = Config::default().tiers;
        config.core_lbd_cut.value = core_lbd_cut;
        config.min_learnt_copies.value = min_learnt_copies;
        config
    }

    #[test]
    fn tiers_from_lbd_and_copies() {
        let config = tiers(2, 2);

        assert_eq!(classify(2, 3, &config), Tier::Core);
        assert_eq!(classify(4, 2, &config), Tier::Tier2);
        assert_eq!(classify(9, 0, &config), Tier::Local);
    }

    #[test]
    fn copies_promote() {
        let config = tiers(2, 2);

        assert_eq!(classify(12, 3, &config), Tier::Core);
        assert_eq!(classify(12, 2, &config), Tier::Tier2);
        assert_eq!(classify(12, 1, &config), Tier::Local);
    }

    #[test]
    fn lbd_cuts() {
        let config = tiers(2, 2);

        assert_eq!(classify(1, 0, &config), Tier::Core);
        assert_eq!(classify(3, 0, &config), Tier::Tier2);
        assert_eq!(classify(6, 0, &config), Tier::Tier2);
        assert_eq!(classify(7, 0, &config), Tier::Local);
    }
}
