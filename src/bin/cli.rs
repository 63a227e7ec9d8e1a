// src/bin/cli.rs
use candidate_sentiment::cli;
use color_eyre::eyre::{eyre, Result};

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run().map_err(|e| eyre!("{e}"))
}
