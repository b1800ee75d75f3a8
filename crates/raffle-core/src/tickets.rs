//! Ticket pool: one entry per unit of attendance

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::model::Attendee;

/// Flat, weighted pool of attendee names.
///
/// Duplicates are intentional: an attendee with attendance 3 holds three
/// entries and is three times as likely to be drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPool {
    entries: Vec<String>,
}

impl TicketPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap entries that are already in the desired order
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of distinct names holding at least one ticket
    pub fn distinct_entrants(&self) -> usize {
        self.entries.iter().collect::<HashSet<_>>().len()
    }

    /// Tickets held by one name
    pub fn tickets_for(&self, name: &str) -> usize {
        self.entries.iter().filter(|e| e.as_str() == name).count()
    }

    /// Uniform in-place permutation (Fisher–Yates)
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.entries.shuffle(rng);
    }

    /// Consume the pool as a stack; the draw pops from the end
    pub fn into_stack(self) -> Vec<String> {
        self.entries
    }
}

/// Expand a roster into its ticket pool, in roster order
pub fn build_ticket_pool(attendees: &[Attendee]) -> TicketPool {
    let capacity = attendees.iter().map(|a| a.attendance as usize).sum();
    let mut entries = Vec::with_capacity(capacity);

    for attendee in attendees {
        entries.extend(std::iter::repeat_n(
            attendee.name.clone(),
            attendee.attendance as usize,
        ));
    }

    log::debug!(
        "Built ticket pool: {} tickets for {} attendees",
        entries.len(),
        attendees.len()
    );

    TicketPool { entries }
}
