use super::*;
use dialoguer::Input;
use dialoguer::Select;
use std::path::PathBuf;
use ttev_analysis::API;
use ttev_analysis::Follow;
use ttev_analysis::Notice;
use ttev_analysis::Report;
use ttev_analysis::Selection;
use ttev_core::SELECTION_TITLE;
use ttev_core::TOP_K_DEFAULT;
use ttev_core::TOP_K_MAX;
use ttev_core::TOP_K_MIN;
use ttev_labels::Action;
use ttev_labels::Spin;
use ttev_scenario::Scenario;

/// Guided dashboard session.
///
/// Walks scenario, first action, spin, and Top-K in order, then offers the
/// ranked replies for a player drill-down. Every pass starts over from the
/// scenario, so an earlier choice always resets the later ones.
pub struct Session {
    api: API,
    out: PathBuf,
}

impl Session {
    pub fn new(api: API, out: PathBuf) -> Self {
        Self { api, out }
    }
    pub fn run(&self) -> anyhow::Result<()> {
        log::info!("entering session");
        while let Some(scenario) = self.scenario()? {
            let action = self.action(scenario)?;
            let spin = self.spin(scenario, action)?;
            let top_k = self.top_k()?;
            let selection = Selection::new(scenario, action)
                .with_spin(spin)
                .with_top_k(top_k);
            match self.api.render(&selection) {
                Err(e) => {
                    log::error!("render failed: {}", e);
                    eprintln!("{}", e);
                }
                Ok(report) => {
                    self.show(&selection, &report)?;
                    self.drill(&selection, &report)?;
                }
            }
        }
        Ok(())
    }

    fn scenario(&self) -> anyhow::Result<Option<Scenario>> {
        let labels = self
            .api
            .scenarios()
            .iter()
            .map(|c| c.to_string())
            .chain(std::iter::once(String::from("Quit")))
            .collect::<Vec<String>>();
        let choice = Select::new()
            .with_prompt(SELECTION_TITLE)
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(Scenario::all().get(choice).copied())
    }
    fn action(&self, scenario: Scenario) -> anyhow::Result<Action> {
        let actions = self.api.actions(scenario);
        let labels = actions.iter().map(Action::label).collect::<Vec<&str>>();
        let choice = Select::new()
            .with_prompt("A_action")
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(actions[choice])
    }
    /// Only asked when the scenario tracks spin and the table has any.
    fn spin(&self, scenario: Scenario, action: Action) -> anyhow::Result<Option<Spin>> {
        if !scenario.config().use_spin {
            return Ok(None);
        }
        let spins = self.api.spins(scenario, action)?;
        if spins.is_empty() {
            return Ok(None);
        }
        let labels = spins.iter().map(Spin::label).collect::<Vec<&str>>();
        let choice = Select::new()
            .with_prompt("A_spin")
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(Some(spins[choice]))
    }
    fn top_k(&self) -> anyhow::Result<usize> {
        Ok(Input::<usize>::new()
            .with_prompt(format!("Top-K [{}-{}]", TOP_K_MIN, TOP_K_MAX))
            .default(TOP_K_DEFAULT)
            .validate_with(|k: &usize| -> Result<(), String> {
                match (TOP_K_MIN..=TOP_K_MAX).contains(k) {
                    true => Ok(()),
                    false => Err(format!("Choose between {} and {}", TOP_K_MIN, TOP_K_MAX)),
                }
            })
            .interact_text()?)
    }

    fn show(&self, selection: &Selection, report: &Report) -> anyhow::Result<()> {
        println!("{}", text::report(report));
        if let Some(ref chart) = report.chart {
            std::fs::create_dir_all(&self.out)
                .map_err(|e| anyhow::anyhow!("create {}: {}", self.out.display(), e))?;
            let path = self.out.join(chart_name(selection));
            ttev_charts::write(chart, &path)?;
            println!("chart: {}", path.display());
        }
        Ok(())
    }
    /// Offer ranked replies until the user goes back.
    fn drill(&self, selection: &Selection, report: &Report) -> anyhow::Result<()> {
        let Some(ref ranking) = report.ranking else {
            return Ok(());
        };
        if !selection.config().has_player_breakdown() {
            println!("{}", text::notice(&Notice::UnavailableBreakdown));
            return Ok(());
        }
        let follows = ranking.follows();
        let labels = ranking
            .rows
            .iter()
            .map(|r| match r.spin {
                Some(spin) => format!("{} + {}", r.action, spin),
                None => r.action.to_string(),
            })
            .chain(std::iter::once(String::from("Back")))
            .collect::<Vec<String>>();
        loop {
            let choice = Select::new()
                .with_prompt("選手分布")
                .items(&labels)
                .default(0)
                .interact()?;
            let Some(follow) = follows.get(choice).copied() else {
                return Ok(());
            };
            self.breakdown(selection, follow)?;
        }
    }
    fn breakdown(&self, selection: &Selection, follow: Follow) -> anyhow::Result<()> {
        let report = self.api.render(&selection.clone().with_follow(Some(follow)))?;
        if let Some(ref table) = report.players {
            println!("{}", text::players(table));
        }
        for notice in report.notices.iter() {
            println!("{}", text::notice(notice));
        }
        Ok(())
    }
}

/// `S3-15-2.svg`, or `S4-15.svg` without spin.
fn chart_name(selection: &Selection) -> String {
    match selection.opening() {
        (action, Some(spin)) => format!("{}-{}-{}.svg", selection.scenario, action.code(), spin.code()),
        (action, None) => format!("{}-{}.svg", selection.scenario, action.code()),
    }
}
