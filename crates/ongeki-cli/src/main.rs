mod cli;
mod commands;
mod format;
mod validation;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ongeki_cli=warn,ongeki_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match args.command {
        Command::Rate {
            constant,
            score,
            lamp,
            full_bell,
            json,
        } => commands::rate::run(constant, score, lamp.into(), full_bell, json),
        Command::Score {
            constant,
            target,
            lamp,
            full_bell,
            json,
        } => commands::score::run(constant, target, lamp.into(), full_bell, json),
        Command::Search {
            query,
            catalog,
            limit,
            json,
        } => commands::search::run(&query, &catalog, limit, json),
    }
}
