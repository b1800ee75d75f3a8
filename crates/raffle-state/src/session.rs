//! Draw session state and the reveal sequencer
//!
//! Winners are stored in reveal order. `cursor` counts how many have been
//! announced and only ever moves forward.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use raffle_core::{Attendee, PrizeTier, WinnerRecord, build_ticket_pool, draw_seeded, reveal_order};

/// Snapshot format version
pub const SESSION_FORMAT_VERSION: u32 = 1;

// ═══════════════════════════════════════════════════════════════════════════════
// SESSION
// ═══════════════════════════════════════════════════════════════════════════════

/// Full state of one raffle: inventory, winners in reveal order, cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSession {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Seed used to shuffle the ticket pool, when known
    #[serde(default)]
    pub seed: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Prize inventory in operator input order; quantities fall as winners are revealed
    pub(crate) prize_tiers: Vec<PrizeTier>,
    /// Winners in reveal order (lowest prize first)
    pub(crate) winners: Vec<WinnerRecord>,
    pub(crate) cursor: usize,
}

fn default_version() -> u32 {
    SESSION_FORMAT_VERSION
}

/// Inventory effect of one reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryUpdate {
    /// Matching tier decremented, `remaining` left
    Decremented { remaining: u32 },
    /// No tier with this value had stock left
    Inconsistent,
}

/// One announced winner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revealed {
    pub winner: WinnerRecord,
    /// 1-based position in reveal order
    pub number: usize,
    pub total: usize,
    pub inventory: InventoryUpdate,
}

/// Result of `DrawSession::reveal`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealOutcome {
    Revealed(Revealed),
    /// Every winner has already been announced
    Exhausted,
}

impl DrawSession {
    /// Build a session from winners in draw order
    pub fn new(prize_tiers: Vec<PrizeTier>, draw_order: Vec<WinnerRecord>, seed: Option<u64>) -> Self {
        let now = Utc::now();
        Self {
            version: SESSION_FORMAT_VERSION,
            seed,
            created_at: now,
            updated_at: now,
            prize_tiers,
            winners: reveal_order(draw_order),
            cursor: 0,
        }
    }

    /// Expand the roster, draw with `seed`, and start a fresh session
    pub fn draw(attendees: &[Attendee], prize_tiers: Vec<PrizeTier>, seed: u64) -> Self {
        let pool = build_ticket_pool(attendees);
        let outcome = draw_seeded(pool, &prize_tiers, seed);
        Self::new(prize_tiers, outcome.winners, Some(seed))
    }

    /// Number of winners announced so far
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All winners in reveal order
    pub fn winners(&self) -> &[WinnerRecord] {
        &self.winners
    }

    pub fn prize_tiers(&self) -> &[PrizeTier] {
        &self.prize_tiers
    }

    pub fn total(&self) -> usize {
        self.winners.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.winners.len()
    }

    /// Winners still to be announced
    pub fn remaining(&self) -> usize {
        self.winners.len().saturating_sub(self.cursor)
    }

    /// Winners announced so far, in reveal order
    pub fn revealed(&self) -> &[WinnerRecord] {
        &self.winners[..self.cursor.min(self.winners.len())]
    }

    pub fn peek_next(&self) -> Option<&WinnerRecord> {
        self.winners.get(self.cursor)
    }

    /// Announce the next winner.
    ///
    /// Decrements the first tier with a matching value and stock left. A
    /// missing tier is logged and does not stop the reveal.
    pub fn reveal(&mut self) -> RevealOutcome {
        if self.is_exhausted() {
            return RevealOutcome::Exhausted;
        }

        let index = self.cursor;
        self.winners[index].revealed = true;
        let winner = self.winners[index].clone();

        let inventory = self.take_prize(winner.prize);
        if inventory == InventoryUpdate::Inconsistent {
            log::warn!(
                "Inventory inconsistency: no ${} prize left for winner '{}'",
                winner.prize,
                winner.name
            );
        }

        self.cursor += 1;
        self.updated_at = Utc::now();

        log::info!(
            "Revealed winner {}/{}: {} (${})",
            self.cursor,
            self.winners.len(),
            winner.name,
            winner.prize
        );

        RevealOutcome::Revealed(Revealed {
            winner,
            number: self.cursor,
            total: self.winners.len(),
            inventory,
        })
    }

    fn take_prize(&mut self, value: u64) -> InventoryUpdate {
        match self
            .prize_tiers
            .iter_mut()
            .find(|tier| tier.value == value && tier.quantity > 0)
        {
            Some(tier) => {
                tier.quantity -= 1;
                InventoryUpdate::Decremented {
                    remaining: tier.quantity,
                }
            }
            None => InventoryUpdate::Inconsistent,
        }
    }

    /// Toggle the acknowledged flag of a revealed winner (0-based reveal index).
    /// Returns the new flag value.
    pub fn acknowledge(&mut self, index: usize) -> Result<bool, SessionError> {
        if index >= self.winners.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.winners.len(),
            });
        }
        if index >= self.cursor {
            return Err(SessionError::NotRevealed(index));
        }

        let winner = &mut self.winners[index];
        winner.acknowledged = !winner.acknowledged;
        self.updated_at = Utc::now();
        Ok(winner.acknowledged)
    }

    /// Check a loaded snapshot for internal consistency
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.version > SESSION_FORMAT_VERSION {
            return Err(SessionError::UnsupportedVersion(self.version));
        }
        if self.cursor > self.winners.len() {
            return Err(SessionError::CursorOutOfRange {
                cursor: self.cursor,
                len: self.winners.len(),
            });
        }

        for (index, winner) in self.winners.iter().enumerate() {
            let announced = index < self.cursor;
            if winner.revealed != announced || (winner.acknowledged && !announced) {
                return Err(SessionError::RevealMismatch {
                    index,
                    cursor: self.cursor,
                });
            }
        }

        let mut seen = HashSet::new();
        for winner in &self.winners {
            if !seen.insert(winner.name.as_str()) {
                return Err(SessionError::DuplicateWinner(winner.name.clone()));
            }
        }

        Ok(())
    }
}

/// Session errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Cursor {cursor} is past the end of {len} winners")]
    CursorOutOfRange { cursor: usize, len: usize },

    #[error("Winner '{0}' appears more than once")]
    DuplicateWinner(String),

    #[error("Winner #{} has not been revealed yet", .0 + 1)]
    NotRevealed(usize),

    #[error("No winner #{} (session has {len})", .index + 1)]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unsupported session format version {0}")]
    UnsupportedVersion(u32),

    #[error("Winner #{} reveal flag disagrees with cursor {cursor}", .index + 1)]
    RevealMismatch { index: usize, cursor: usize },
}

// ============ Tests ============
