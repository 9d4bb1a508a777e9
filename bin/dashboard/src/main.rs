//! Terminal dashboard.
//!
//! With no subcommand, opens the guided session.
use clap::Parser;

fn main() -> anyhow::Result<()> {
    ttev_core::log();
    ttev_terminal::run(ttev_terminal::Args::parse())
}
