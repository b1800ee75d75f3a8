//! Terminal presentation of inventory and winners

use std::io::{self, Write};

use raffle_core::{PrizeTier, WinnerRecord};
use raffle_state::{DrawSession, InventoryUpdate, Revealed};

pub fn render_inventory<W: Write>(out: &mut W, tiers: &[PrizeTier]) -> io::Result<()> {
    writeln!(out, "Prize inventory:")?;
    if tiers.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for tier in tiers {
        writeln!(out, "  Value: ${}, Remaining: {}", tier.value, tier.quantity)?;
    }
    Ok(())
}

/// Revealed winners, numbered from 1, `[x]` once acknowledged
pub fn render_winners<W: Write>(out: &mut W, revealed: &[WinnerRecord]) -> io::Result<()> {
    writeln!(out, "Winners:")?;
    if revealed.is_empty() {
        writeln!(out, "  (none revealed yet)")?;
    }
    for (i, winner) in revealed.iter().enumerate() {
        let mark = if winner.acknowledged { 'x' } else { ' ' };
        writeln!(
            out,
            "  {:>2}. [{}] {} - Prize: ${}",
            i + 1,
            mark,
            winner.name,
            winner.prize
        )?;
    }
    Ok(())
}

pub fn render_reveal<W: Write>(out: &mut W, revealed: &Revealed) -> io::Result<()> {
    writeln!(
        out,
        "Winner {}/{}: {}, Prize: ${}",
        revealed.number, revealed.total, revealed.winner.name, revealed.winner.prize
    )?;
    if revealed.inventory == InventoryUpdate::Inconsistent {
        writeln!(
            out,
            "  (inventory shows no ${} prize left; check the prize table)",
            revealed.winner.prize
        )?;
    }
    Ok(())
}

pub fn render_exhausted<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "All winners have been revealed!")
}

/// Inventory, progress line, revealed list
pub fn render_status<W: Write>(out: &mut W, session: &DrawSession) -> io::Result<()> {
    render_inventory(out, session.prize_tiers())?;
    writeln!(
        out,
        "Revealed {} of {} winners{}",
        session.cursor(),
        session.total(),
        session
            .seed
            .map(|s| format!(" (seed {s})"))
            .unwrap_or_default()
    )?;
    render_winners(out, session.revealed())
}
