use crate::{
    misc::log::targets::{self},
    types::err::{self},
};

/// The identifier of the next record published by an instance.
///
/// Identifiers increase by one with each record published, and the counter never wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PublishCounter {
    next: u32,
}

impl PublishCounter {
    /// A counter whose first identifier is `next`.
    pub fn starting_at(next: u32) -> Self {
        PublishCounter { next }
    }

    /// The identifier of the next record published.
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// The count of identifiers which may still be taken.
    pub fn remaining(&self) -> u32 {
        u32::MAX - self.next
    }

    /// Takes the next identifier, advancing the counter.
    ///
    /// The greatest identifier is never taken, so the counter is always able to advance past a taken identifier.
    pub fn take(&mut self) -> Result<u32, err::ExportError> {
        match self.next.checked_add(1) {
            Some(following) => {
                let id = self.next;
                self.next = following;
                Ok(id)
            }
            None => {
                log::error!(target: targets::EXPORT, "Publish counter exhausted");
                Err(err::ExportError::CounterExhausted)
            }
        }
    }
}
