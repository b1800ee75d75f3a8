//! Subcommand implementations

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use raffle_core::{PrizeTier, random_seed, total_prize_slots};
use raffle_roster::load_roster;
use raffle_state::{DrawSession, JsonFileStore, RaffleController, RevealOutcome, SessionStore};

use crate::config::RaffleConfig;
use crate::prompt::PrizeCollector;
use crate::render;

// ═══════════════════════════════════════════════════════════════════════════════
// SETUP
// ═══════════════════════════════════════════════════════════════════════════════

/// Load the roster, gather prizes, draw, and store a fresh session.
///
/// Nothing is written until the draw has succeeded, so a failed setup leaves
/// the previous session in place.
pub fn setup<R: BufRead, W: Write>(
    config: &RaffleConfig,
    roster_path: &Path,
    force: bool,
    input: R,
    out: &mut W,
) -> Result<()> {
    let store = JsonFileStore::new(config.store_path());
    guard_existing_session(&store, force)?;

    let roster = load_roster(roster_path, &config.roster)
        .with_context(|| format!("failed to load roster from {}", roster_path.display()))?;
    writeln!(
        out,
        "Loaded {} attendees holding {} tickets ({} rows skipped)",
        roster.attendees.len(),
        roster.total_tickets(),
        roster.stats.rows - roster.stats.accepted
    )?;

    let prizes = gather_prizes(config, input, out)?;
    let seed = config.seed.unwrap_or_else(random_seed);

    let session = DrawSession::draw(&roster.attendees, prizes, seed);
    let slots = total_prize_slots(session.prize_tiers());
    let controller = RaffleController::start(session, store)
        .context("failed to save the new raffle session")?;

    writeln!(out)?;
    render::render_inventory(out, controller.session().prize_tiers())?;
    writeln!(
        out,
        "Raffle setup is complete: {} winners drawn for {} prizes (seed {}).",
        controller.session().total(),
        slots,
        seed
    )?;
    if (controller.session().total() as u64) < slots {
        writeln!(
            out,
            "Not enough distinct attendees: {} prize(s) will go unawarded.",
            slots - controller.session().total() as u64
        )?;
    }
    writeln!(
        out,
        "Session saved to {}",
        controller.store().path().display()
    )?;
    Ok(())
}

fn guard_existing_session(store: &JsonFileStore, force: bool) -> Result<()> {
    if force {
        return Ok(());
    }
    match store.load() {
        Ok(Some(existing)) if !existing.is_exhausted() => bail!(
            "a raffle is still in progress ({} of {} winners revealed); use --force to replace it",
            existing.cursor(),
            existing.total()
        ),
        Ok(_) => Ok(()),
        Err(e) => Err(e).context("stored session is unreadable; use --force to replace it"),
    }
}

fn gather_prizes<R: BufRead, W: Write>(
    config: &RaffleConfig,
    input: R,
    out: &mut W,
) -> Result<Vec<PrizeTier>> {
    if !config.prizes.is_empty() {
        log::info!("Using {} prize tier(s) from config", config.prizes.len());
        return Ok(config.prizes.clone());
    }

    let prizes = PrizeCollector::new(input, &mut *out)
        .collect()
        .context("failed to read prize details")?;
    if prizes.is_empty() {
        bail!("no prizes entered");
    }
    Ok(prizes)
}

// ═══════════════════════════════════════════════════════════════════════════════
// REVEAL / PRESENT
// ═══════════════════════════════════════════════════════════════════════════════

/// Reveal a single winner and show the updated inventory
pub fn reveal_one<S: SessionStore, W: Write>(
    controller: &mut RaffleController<S>,
    out: &mut W,
) -> io::Result<()> {
    match controller.reveal_next() {
        RevealOutcome::Revealed(revealed) => {
            render::render_reveal(out, &revealed)?;
            render::render_inventory(out, controller.session().prize_tiers())
        }
        RevealOutcome::Exhausted => render::render_exhausted(out),
    }
}

/// Operator loop: Enter reveals the next winner, `a <n>` toggles
/// acknowledgement, `s` shows status, `q` quits.
pub fn present<S: SessionStore, R: BufRead, W: Write>(
    controller: &mut RaffleController<S>,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    render::render_status(out, controller.session())?;

    loop {
        if controller.session().is_exhausted() {
            write!(out, "\n[a <n>] acknowledge  [s] status  [q] quit > ")?;
        } else {
            write!(
                out,
                "\n[Enter] reveal next ({} left)  [a <n>] acknowledge  [s] status  [q] quit > ",
                controller.session().remaining()
            )?;
        }
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            None | Some("r") => reveal_one(controller, out)?,
            Some("q") | Some("quit") => return Ok(()),
            Some("s") | Some("status") => render::render_status(out, controller.session())?,
            Some("a") | Some("ack") => match parts.next().map(str::parse::<usize>) {
                Some(Ok(number)) => acknowledge(controller, number, out)?,
                _ => writeln!(out, "Usage: a <winner number>")?,
            },
            Some(other) => writeln!(out, "Unknown command '{other}'")?,
        }
    }
}

/// Toggle acknowledgement of winner `number` (1-based) and show the list
pub fn acknowledge<S: SessionStore, W: Write>(
    controller: &mut RaffleController<S>,
    number: usize,
    out: &mut W,
) -> io::Result<()> {
    let Some(index) = number.checked_sub(1) else {
        return writeln!(out, "Winner numbers start at 1");
    };
    match controller.acknowledge(index) {
        Ok(_) => render::render_winners(out, controller.session().revealed()),
        Err(e) => writeln!(out, "{e}"),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SESSION HELPERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Resume the stored session or explain that none exists
pub fn resume(config: &RaffleConfig) -> Result<RaffleController<JsonFileStore>> {
    let store = JsonFileStore::new(config.store_path());
    let path = store.path().to_path_buf();
    RaffleController::resume(store)
        .with_context(|| format!("failed to load session from {}", path.display()))?
        .with_context(|| {
            format!(
                "no raffle session at {}; run `raffle setup <roster>` first",
                path.display()
            )
        })
}

/// Delete the stored session
pub fn reset<W: Write>(config: &RaffleConfig, out: &mut W) -> Result<()> {
    let mut store = JsonFileStore::new(config.store_path());
    if store.clear()? {
        writeln!(out, "Removed session {}", store.path().display())?;
    } else {
        writeln!(out, "No session stored at {}", store.path().display())?;
    }
    Ok(())
}
