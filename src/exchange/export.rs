use crate::{
    codec,
    exchange::{report::ExportReport, Exchange},
    host::LearnedClauseSource,
    misc::log::targets::{self},
    store::{StoreClient, StoreConnection},
    types::err::{self},
};

/// Methods for publishing queued units and clauses.
impl<C: StoreClient, K: Copy + std::fmt::Debug> Exchange<C, K> {
    /// Publishes every queued unit and clause, through a single connection.
    ///
    /// Units are published first, and then clauses, each taking the next identifier of the publish counter.
    /// Clauses are read from `source`, and so each queued clause must still be held by `source`.
    ///
    /// If nothing is queued no connection is opened.
    /// Otherwise, on success, both queues are empty.
    pub fn export_all(
        &mut self,
        source: &impl LearnedClauseSource<Key = K>,
    ) -> Result<ExportReport, err::ErrorKind> {
        if self.buffers.is_empty() {
            log::trace!(target: targets::EXPORT, "Nothing to export");
            return Ok(ExportReport::default());
        }

        let mut connection = self.client.connect()?;
        let mut report = ExportReport {
            connected: true,
            ..Default::default()
        };

        let result = self
            .export_units(&mut connection, &mut report)
            .and_then(|_| self.export_clauses(&mut connection, source, &mut report));
        connection.close();
        result?;

        log::info!(target: targets::EXPORT,
            "Published {} units and {} clauses, skipped {}, next id {}",
            report.units, report.clauses, report.skipped, self.counter.peek());

        Ok(report)
    }

    /// Publishes every queued unit, in batches.
    ///
    /// A batch is only built if an identifier remains for each unit of the batch, so every identifier taken is published.
    fn export_units(
        &mut self,
        connection: &mut C::Connection,
        report: &mut ExportReport,
    ) -> Result<(), err::ErrorKind> {
        let width = self.config.exchange.batch_width.value;
        let mut batch = Vec::with_capacity(width.min(self.buffers.units.len()));

        for chunk in self.buffers.units.chunks(width) {
            if (self.counter.remaining() as usize) < chunk.len() {
                log::error!(target: targets::EXPORT,
                    "Unit batch of {} exceeds the {} identifiers remaining", chunk.len(), self.counter.remaining());
                return Err(err::ExportError::CounterExhausted.into());
            }

            for literal in chunk {
                let id = self.counter.take()?;
                batch.push((
                    self.config.store.record_key(id),
                    codec::encode_unit(*literal),
                ));
            }

            log::debug!(target: targets::EXPORT, "Unit batch of {}", batch.len());
            connection.set_pipelined(&batch)?;
            report.units += batch.len();
            self.counters.units_published += batch.len();
            batch.clear();
        }

        self.buffers.drain_units(report.units)?;
        Ok(())
    }

    /// Publishes every queued clause, in batches, skipping clauses which exceed the maximum length.
    ///
    /// Skipped clauses take no identifier and no place in a batch.
    /// If the publish counter is exhausted part way through a batch, the clauses already given an identifier are published before returning the error.
    fn export_clauses(
        &mut self,
        connection: &mut C::Connection,
        source: &impl LearnedClauseSource<Key = K>,
        report: &mut ExportReport,
    ) -> Result<(), err::ErrorKind> {
        let width = self.config.exchange.batch_width.value;
        let max_length = self.config.exchange.max_clause_length.value;
        let mut batch = Vec::with_capacity(width.min(self.buffers.clauses.len()));
        let mut processed = 0;

        for key in &self.buffers.clauses {
            processed += 1;

            let Some(literals) = source.learnt_literals(*key) else {
                log::error!(target: targets::EXPORT, "Clause {key:?} has been removed");
                return Err(err::ExportError::RemovedClause.into());
            };

            if literals.len() <= 1 {
                log::error!(target: targets::EXPORT, "Clause {key:?} of length {} queued as a clause", literals.len());
                return Err(err::ExportError::ShortClause.into());
            }

            if literals.len() > max_length {
                log::trace!(target: targets::EXPORT, "Skipped {key:?} of length {}", literals.len());
                report.skipped += 1;
                continue;
            }

            let id = match self.counter.take() {
                Ok(id) => id,
                Err(e) => {
                    if !batch.is_empty() {
                        log::debug!(target: targets::EXPORT, "Clause batch of {} before exhaustion", batch.len());
                        connection.set_pipelined(&batch)?;
                        report.clauses += batch.len();
                        self.counters.clauses_published += batch.len();
                    }
                    return Err(e.into());
                }
            };
            batch.push((
                self.config.store.record_key(id),
                codec::encode_clause(literals),
            ));

            if batch.len() == width {
                log::debug!(target: targets::EXPORT, "Clause batch of {}", batch.len());
                connection.set_pipelined(&batch)?;
                report.clauses += batch.len();
                self.counters.clauses_published += batch.len();
                batch.clear();
            }
        }

        if !batch.is_empty() {
            log::debug!(target: targets::EXPORT, "Clause batch of {}", batch.len());
            connection.set_pipelined(&batch)?;
            report.clauses += batch.len();
            self.counters.clauses_published += batch.len();
        }

        self.counters.clauses_skipped += report.skipped;

        self.buffers.drain_clauses(processed)?;
        Ok(())
    }
}
