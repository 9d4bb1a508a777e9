use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;
use ttev_analysis::Follow;
use ttev_analysis::Selection;
use ttev_core::TOP_K_DEFAULT;
use ttev_labels::Action;
use ttev_labels::Spin;
use ttev_scenario::Scenario;

#[derive(Debug, Parser)]
#[command(author, version, about = "Table tennis strategy EV dashboard", long_about = None)]
pub struct Args {
    /// Directory the scenario tables live under (overrides DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Guided interactive session", alias = "s")]
    Session {
        /// Directory rendered charts are written to
        #[arg(long, default_value = "charts", value_name = "DIR")]
        out: PathBuf,
    },
    #[command(about = "List the analysis scenarios")]
    Scenarios,
    #[command(about = "List the first actions a scenario offers")]
    Actions {
        #[arg(long, value_parser = scenario)]
        scenario: Scenario,
    },
    #[command(about = "List the first spins present for an action")]
    Spins {
        #[arg(long, value_parser = scenario)]
        scenario: Scenario,
        #[arg(long, value_parser = action)]
        action: Action,
    },
    #[command(about = "Render one selection", alias = "r")]
    Render(Render),
}

#[derive(Debug, clap::Args)]
pub struct Render {
    #[arg(long, value_parser = scenario)]
    pub scenario: Scenario,
    #[arg(long, value_parser = action)]
    pub action: Action,
    #[arg(long, value_parser = spin)]
    pub spin: Option<Spin>,
    #[arg(long, default_value_t = TOP_K_DEFAULT)]
    pub top_k: usize,
    /// Follow-up reply to break down by player, as `13` or `13:2`
    #[arg(long, value_parser = follow)]
    pub follow: Option<Follow>,
    /// Write the chart as SVG to this path
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Render {
    pub fn selection(&self) -> Selection {
        Selection::new(self.scenario, self.action)
            .with_spin(self.spin)
            .with_top_k(self.top_k)
            .with_follow(self.follow)
    }
}

fn scenario(s: &str) -> Result<Scenario, String> {
    Scenario::try_from(s)
}
fn action(s: &str) -> Result<Action, String> {
    Action::try_from(s)
}
fn spin(s: &str) -> Result<Spin, String> {
    Spin::try_from(s)
}
fn follow(s: &str) -> Result<Follow, String> {
    Follow::try_from(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_has_no_command() {
        let args = Args::try_parse_from(["dashboard"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.data.is_none());
    }

    #[test]
    fn render_flags() {
        let args = Args::try_parse_from([
            "dashboard", "render", "--scenario", "s3", "--action", "15", "--spin", "2",
            "--follow", "11:3", "--data", "fixtures",
        ])
        .unwrap();
        assert_eq!(args.data, Some(PathBuf::from("fixtures")));
        let Some(Command::Render(render)) = args.command else {
            panic!("expected a render command");
        };
        assert!(!render.json);
        let selection = render.selection();
        assert_eq!(selection.scenario, Scenario::S3);
        assert_eq!(selection.action, Action::Traditional);
        assert_eq!(selection.spin, Some(Spin::Back));
        assert_eq!(selection.top_k, TOP_K_DEFAULT);
        assert_eq!(
            selection.follow,
            Some(Follow {
                action: Action::DropShot,
                spin: Some(Spin::Flat)
            })
        );
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!(Args::try_parse_from(["dashboard", "actions", "--scenario", "S9"]).is_err());
        assert!(
            Args::try_parse_from(["dashboard", "spins", "--scenario", "S1", "--action", "19"])
                .is_err()
        );
    }
}
