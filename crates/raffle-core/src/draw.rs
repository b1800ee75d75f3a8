//! Unique-winner draw
//!
//! Prize tiers are resolved highest value first, each slot drawing against the
//! whole remaining pool. An attendee wins at most once; once the pool runs dry
//! every remaining slot goes unfilled.

use std::collections::HashSet;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::model::{PrizeTier, WinnerRecord, total_prize_slots};
use crate::tickets::TicketPool;

/// Counts describing one draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSummary {
    pub tickets: usize,
    pub distinct_entrants: usize,
    pub prize_slots: u64,
    pub winners: usize,
}

impl DrawSummary {
    /// Slots left without a winner because the pool ran out
    pub fn unfilled_slots(&self) -> u64 {
        self.prize_slots.saturating_sub(self.winners as u64)
    }
}

/// Result of a draw, winners in draw order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    pub winners: Vec<WinnerRecord>,
    pub summary: DrawSummary,
}

/// Stable sort, highest value first. Equal values keep input order.
pub fn sort_tiers_by_value(tiers: &[PrizeTier]) -> Vec<PrizeTier> {
    let mut sorted = tiers.to_vec();
    sorted.sort_by(|a, b| b.value.cmp(&a.value));
    sorted
}

/// Draw from a stack that is already in random order.
///
/// Entries are popped from the end. Already-won names are discarded until an
/// unwon name turns up or the stack is empty.
pub fn draw_from_shuffled(mut stack: Vec<String>, tiers: &[PrizeTier]) -> Vec<WinnerRecord> {
    let mut winners = Vec::new();
    let mut won: HashSet<String> = HashSet::new();

    for tier in sort_tiers_by_value(tiers) {
        for _ in 0..tier.quantity {
            let mut found = None;
            while let Some(candidate) = stack.pop() {
                if !won.contains(&candidate) {
                    found = Some(candidate);
                    break;
                }
            }

            match found {
                Some(name) => {
                    won.insert(name.clone());
                    winners.push(WinnerRecord::new(name, tier.value));
                }
                None => {
                    log::debug!("Ticket pool exhausted while drawing ${} prize", tier.value);
                }
            }
        }
    }

    winners
}

/// Shuffle the pool with `rng` and draw unique winners for every tier
pub fn draw_unique_winners<R: Rng + ?Sized>(
    mut pool: TicketPool,
    tiers: &[PrizeTier],
    rng: &mut R,
) -> DrawOutcome {
    let tickets = pool.len();
    let distinct_entrants = pool.distinct_entrants();

    pool.shuffle_with(rng);
    let winners = draw_from_shuffled(pool.into_stack(), tiers);

    let summary = DrawSummary {
        tickets,
        distinct_entrants,
        prize_slots: total_prize_slots(tiers),
        winners: winners.len(),
    };

    log::info!(
        "Draw complete: {} winners from {} tickets ({} entrants, {} prize slots)",
        summary.winners,
        summary.tickets,
        summary.distinct_entrants,
        summary.prize_slots
    );
    if summary.unfilled_slots() > 0 {
        log::warn!(
            "{} prize slot(s) left unfilled: not enough distinct entrants",
            summary.unfilled_slots()
        );
    }

    DrawOutcome { winners, summary }
}

/// Draw with a ChaCha8 RNG seeded from `seed`. Same seed, same winners.
pub fn draw_seeded(pool: TicketPool, tiers: &[PrizeTier], seed: u64) -> DrawOutcome {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    draw_unique_winners(pool, tiers, &mut rng)
}

/// Fresh seed from the operating system
pub fn random_seed() -> u64 {
    ChaCha8Rng::from_os_rng().next_u64()
}

/// Announcement order: reverse of draw order, lowest prizes first
pub fn reveal_order(mut winners: Vec<WinnerRecord>) -> Vec<WinnerRecord> {
    winners.reverse();
    winners
}
