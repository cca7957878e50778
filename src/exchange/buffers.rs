use crate::{
    misc::log::targets::{self},
    structures::literal::CLiteral,
    types::err::{self},
};

/// Units and clauses waiting to be published.
///
/// Each queue is only ever cleared as a whole, after every entry has been published.
pub struct OutgoingBuffers<K> {
    /// Literals assigned at decision level zero.
    pub(super) units: Vec<CLiteral>,

    /// Keys to learnt clauses of at least two literals.
    pub(super) clauses: Vec<K>,
}

impl<K> Default for OutgoingBuffers<K> {
    fn default() -> Self {
        OutgoingBuffers {
            units: Vec::default(),
            clauses: Vec::default(),
        }
    }
}

impl<K> OutgoingBuffers<K> {
    pub fn units(&self) -> &[CLiteral] {
        &self.units
    }

    pub fn clauses(&self) -> &[K] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty() && self.clauses.is_empty()
    }

    /// Clears the unit queue, given `processed` entries were published (or skipped).
    ///
    /// An error is returned if fewer entries were processed than queued, or if the queue is not empty after clearing.
    pub(super) fn drain_units(&mut self, processed: usize) -> Result<(), err::ExportError> {
        drain(&mut self.units, processed, "unit")
    }

    /// Clears the clause queue, given `processed` entries were published (or skipped).
    pub(super) fn drain_clauses(&mut self, processed: usize) -> Result<(), err::ExportError> {
        drain(&mut self.clauses, processed, "clause")
    }
}

fn drain<T>(queue: &mut Vec<T>, processed: usize, name: &str) -> Result<(), err::ExportError> {
    if processed != queue.len() {
        log::error!(target: targets::EXPORT, "Processed {processed} of {} queued {name}s", queue.len());
        return Err(err::ExportError::BufferNotDrained);
    }

    queue.clear();

    if !queue.is_empty() {
        log::error!(target: targets::EXPORT, "The {name} queue is not empty after clearing");
        return Err(err::ExportError::BufferNotDrained);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Literal;

    #[test]
    fn whole_drain() {
        let mut buffers: OutgoingBuffers<usize> = OutgoingBuffers::default();
        buffers.units.push(CLiteral::new(1, true));
        buffers.clauses.extend([3, 4]);

        assert_eq!(buffers.drain_units(1), Ok(()));
        assert!(buffers.units().is_empty());

        assert_eq!(buffers.drain_clauses(1), Err(err::ExportError::BufferNotDrained));
        assert_eq!(buffers.clauses(), &[3, 4]);

        assert_eq!(buffers.drain_clauses(2), Ok(()));
        assert!(buffers.is_empty());
    }
}
