//! CLI argument definitions for ongeki.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use ongeki_core::Lamp;

#[derive(Parser)]
#[command(name = "ongeki")]
#[command(about = "ONGEKI rating calculator", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Calculate the rate a score is worth
    Rate {
        /// Chart constant (1.0-15.7)
        #[arg(short, long)]
        constant: f64,
        /// Technical score (0-1010000)
        #[arg(short, long)]
        score: u32,
        /// Clear lamp
        #[arg(short, long, value_enum, default_value = "none")]
        lamp: LampArg,
        /// Full bell combo
        #[arg(long)]
        full_bell: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find the smallest score reaching a target rate
    Score {
        /// Chart constant (1.0-15.7)
        #[arg(short, long)]
        constant: f64,
        /// Target rate
        #[arg(short, long)]
        target: f64,
        /// Clear lamp
        #[arg(short, long, value_enum, default_value = "none")]
        lamp: LampArg,
        /// Full bell combo
        #[arg(long)]
        full_bell: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search the song catalog by title or chart constant
    Search {
        /// Title fragment or one-decimal constant (e.g. "13.7")
        query: String,
        /// Path to the catalog JSON file
        #[arg(long, default_value = "ongeki_all.json")]
        catalog: PathBuf,
        /// Maximum number of results
        #[arg(long, default_value = "30")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Clear lamp selection: each lamp maps to a fixed rating bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LampArg {
    /// No lamp bonus
    None,
    /// FULL COMBO (+0.100)
    Fc,
    /// ALL BREAK (+0.300)
    Ab,
    /// ALL BREAK+ (+0.350)
    AbPlus,
}

impl From<LampArg> for Lamp {
    fn from(arg: LampArg) -> Self {
        match arg {
            LampArg::None => Lamp::None,
            LampArg::Fc => Lamp::FullCombo,
            LampArg::Ab => Lamp::AllBreak,
            LampArg::AbPlus => Lamp::AllBreakPlus,
        }
    }
}
