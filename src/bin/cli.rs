// src/bin/cli.rs
use clap::Parser;
use disaster_dash::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    disaster_dash::log::init(None);
    cli::run(Cli::parse())
}
