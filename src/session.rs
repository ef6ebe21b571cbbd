use log::debug;

use crate::model::RecipeRecord;

/// Identifies one load request; only the newest ticket may install a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// The recipe currently on display, if any
#[derive(Debug, Default)]
pub struct SessionState {
    current: Option<RecipeRecord>,
    issued: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally replace the held record
    pub fn set(&mut self, record: RecipeRecord) {
        self.current = Some(record);
    }

    pub fn get(&self) -> Option<&RecipeRecord> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Issue a ticket for a load that is about to start
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Install `record` if `ticket` is the most recently issued one.
    ///
    /// Returns false, leaving the session untouched, for results of loads
    /// that a later load has superseded.
    pub fn settle(&mut self, ticket: Ticket, record: RecipeRecord) -> bool {
        if ticket.0 != self.issued {
            debug!(
                "Discarding '{}' from superseded request {} (latest is {})",
                record.name, ticket.0, self.issued
            );
            return false;
        }
        self.set(record);
        true
    }
}
