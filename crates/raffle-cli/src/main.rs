//! Raffle operator console
//!
//! Usage:
//!   raffle setup roster.xlsx     - Load attendees, enter prizes, draw winners
//!   raffle present               - Reveal winners one at a time
//!   raffle reveal                - Reveal the next winner and exit
//!   raffle status                - Show inventory and revealed winners
//!   raffle ack 3                 - Toggle "prize handed out" for winner #3
//!   raffle reset                 - Delete the stored session

mod commands;
mod config;
mod prompt;
mod render;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::config::RaffleConfig;

#[derive(Parser)]
#[command(
    name = "raffle",
    version,
    about = "Weighted raffle draws with resumable, one-at-a-time winner reveals"
)]
struct Cli {
    /// Config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Session snapshot file (overrides config)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the roster, collect prizes, and draw winners
    Setup {
        /// Roster workbook (xlsx, xls, ods)
        roster: PathBuf,
        /// Worksheet holding the roster
        #[arg(long)]
        sheet: Option<String>,
        /// Shuffle seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
        /// Replace a session that still has unrevealed winners
        #[arg(short, long)]
        force: bool,
    },
    /// Reveal the next winner
    Reveal,
    /// Interactive reveal loop
    Present,
    /// Show inventory and revealed winners
    Status,
    /// Toggle acknowledgement of a revealed winner
    Ack {
        /// Winner number as shown in the list
        number: usize,
    },
    /// Delete the stored session
    Reset,
    /// Print the effective configuration
    Config,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = RaffleConfig::load(cli.config.as_deref())?.with_store_path(cli.store);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match cli.command {
        Commands::Setup {
            roster,
            sheet,
            seed,
            force,
        } => {
            let config = config.with_sheet(sheet).with_seed(seed);
            config.validate()?;
            commands::setup(&config, &roster, force, stdin.lock(), &mut stdout)
        }
        Commands::Reveal => {
            let mut controller = commands::resume(&config)?;
            commands::reveal_one(&mut controller, &mut stdout)?;
            Ok(())
        }
        Commands::Present => {
            let mut controller = commands::resume(&config)?;
            commands::present(&mut controller, stdin.lock(), &mut stdout)?;
            Ok(())
        }
        Commands::Status => {
            let controller = commands::resume(&config)?;
            render::render_status(&mut stdout, controller.session())?;
            Ok(())
        }
        Commands::Ack { number } => {
            let mut controller = commands::resume(&config)?;
            commands::acknowledge(&mut controller, number, &mut stdout)?;
            Ok(())
        }
        Commands::Reset => commands::reset(&config, &mut stdout),
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
