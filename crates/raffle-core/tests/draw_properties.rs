//! Draw invariants checked across many seeds and roster shapes

use std::collections::HashSet;

use raffle_core::{
    Attendee, PrizeTier, build_ticket_pool, draw_seeded, reveal_order, total_prize_slots,
};

// ═══════════════════════════════════════════════════════════════════════════════
// FIXTURES
// ═══════════════════════════════════════════════════════════════════════════════

fn roster(spec: &[(&str, i64)]) -> Vec<Attendee> {
    spec.iter()
        .map(|(name, attendance)| Attendee::new(*name, *attendance).unwrap())
        .collect()
}

fn office_party() -> Vec<Attendee> {
    roster(&[
        ("Ana", 5),
        ("Ben", 1),
        ("Chen", 3),
        ("Dara", 2),
        ("Eli", 4),
        ("Fay", 1),
        ("Gus", 6),
    ])
}

// ═══════════════════════════════════════════════════════════════════════════════
// INVARIANTS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn pool_size_equals_total_attendance() {
    let attendees = office_party();
    let pool = build_ticket_pool(&attendees);
    let total: u32 = attendees.iter().map(|a| a.attendance).sum();
    assert_eq!(pool.len(), total as usize);
}

#[test]
fn winners_are_unique_for_any_seed() {
    let tiers = [
        PrizeTier::new(100, 1),
        PrizeTier::new(50, 2),
        PrizeTier::new(25, 3),
    ];

    for seed in 0..500 {
        let outcome = draw_seeded(build_ticket_pool(&office_party()), &tiers, seed);
        let unique: HashSet<_> = outcome.winners.iter().map(|w| &w.name).collect();
        assert_eq!(unique.len(), outcome.winners.len(), "duplicate winner with seed {seed}");
    }
}

#[test]
fn winner_count_is_bounded() {
    let cases: Vec<Vec<PrizeTier>> = vec![
        vec![PrizeTier::new(10, 1)],
        vec![PrizeTier::new(50, 3), PrizeTier::new(10, 3)],
        vec![PrizeTier::new(20, 20)],
        vec![],
    ];

    for tiers in cases {
        for seed in 0..50 {
            let pool = build_ticket_pool(&office_party());
            let distinct = pool.distinct_entrants() as u64;
            let outcome = draw_seeded(pool, &tiers, seed);
            let bound = distinct.min(total_prize_slots(&tiers));
            assert!(outcome.winners.len() as u64 <= bound);
        }
    }
}

#[test]
fn oversubscribed_roster_fills_every_slot() {
    let tiers = [PrizeTier::new(25, 2)];
    let attendees = roster(&[("A", 1), ("B", 2), ("C", 1), ("D", 3), ("E", 1)]);

    for seed in 0..100 {
        let outcome = draw_seeded(build_ticket_pool(&attendees), &tiers, seed);
        assert_eq!(outcome.winners.len(), 2);
        assert_eq!(outcome.summary.unfilled_slots(), 0);
    }
}

#[test]
fn undersubscribed_roster_gives_everyone_one_prize() {
    let tiers = [PrizeTier::new(50, 2), PrizeTier::new(10, 5)];
    let attendees = roster(&[("A", 4), ("B", 1), ("C", 2)]);

    let outcome = draw_seeded(build_ticket_pool(&attendees), &tiers, 42);
    assert_eq!(outcome.winners.len(), 3);
    assert_eq!(outcome.summary.unfilled_slots(), 4);
    assert!(outcome.winners.iter().take(2).all(|w| w.prize == 50));
    assert_eq!(outcome.winners[2].prize, 10);
}

#[test]
fn draw_order_is_high_to_low_and_reveal_reverses_it() {
    let tiers = [
        PrizeTier::new(10, 2),
        PrizeTier::new(100, 1),
        PrizeTier::new(50, 2),
    ];
    let outcome = draw_seeded(build_ticket_pool(&office_party()), &tiers, 9);

    let prizes: Vec<u64> = outcome.winners.iter().map(|w| w.prize).collect();
    assert_eq!(prizes, vec![100, 50, 50, 10, 10]);

    let reveal: Vec<u64> = reveal_order(outcome.winners).iter().map(|w| w.prize).collect();
    assert_eq!(reveal, vec![10, 10, 50, 50, 100]);
}

#[test]
fn heavier_attendees_win_more_often() {
    let attendees = roster(&[("Regular", 9), ("Newcomer", 1)]);
    let tiers = [PrizeTier::new(10, 1)];

    let regular_wins = (0..2000)
        .filter(|seed| {
            let outcome = draw_seeded(build_ticket_pool(&attendees), &tiers, *seed);
            outcome.winners[0].name == "Regular"
        })
        .count();

    // expected around 1800
    assert!(regular_wins > 1650, "regular won {regular_wins} of 2000");
}
