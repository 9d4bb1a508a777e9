//! Terminal front-end for the EV dashboard.
//!
//! `dashboard` with no subcommand opens a guided [`Session`]; the other
//! subcommands list choices or render one selection non-interactively.
mod args;
mod session;
mod text;

pub use args::*;
pub use session::*;
pub use text::*;

use std::path::PathBuf;
use ttev_analysis::API;

pub fn run(args: Args) -> anyhow::Result<()> {
    let api = API::from_dir(args.data.unwrap_or_else(ttev_core::data_dir));
    let command = args.command.unwrap_or(Command::Session {
        out: PathBuf::from("charts"),
    });
    match command {
        Command::Session { out } => Session::new(api, out).run(),
        Command::Scenarios => {
            for config in api.scenarios() {
                println!("{}", text::scenario(config));
            }
            Ok(())
        }
        Command::Actions { scenario } => {
            for action in api.actions(scenario) {
                println!("{:>3}  {}", action.code(), action);
            }
            Ok(())
        }
        Command::Spins { scenario, action } => {
            let spins = api.spins(scenario, action)?;
            if spins.is_empty() {
                println!("{}", ttev_core::SPINLESS);
            }
            for spin in spins {
                println!("{:>3}  {}", spin.code(), spin);
            }
            Ok(())
        }
        Command::Render(flags) => render(&api, &flags),
    }
}

fn render(api: &API, flags: &Render) -> anyhow::Result<()> {
    let report = api.render(&flags.selection())?;
    match flags.json {
        true => println!("{}", serde_json::to_string_pretty(&report)?),
        false => println!("{}", text::report(&report)),
    }
    if let (Some(path), Some(chart)) = (&flags.svg, report.chart.as_ref()) {
        ttev_charts::write(chart, path)?;
    }
    Ok(())
}
