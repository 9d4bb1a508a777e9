use super::*;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use ttev_core::PLAYER_NAMES;
use ttev_labels::Action;
use ttev_labels::Spin;
use ttev_scenario::Config;
use ttev_scenario::Scenario;
use ttev_tables::Cache;
use ttev_tables::Disk;
use ttev_tables::Source;
use ttev_tables::Strategy;

pub struct API(Arc<dyn Source>);

impl From<Arc<dyn Source>> for API {
    fn from(source: Arc<dyn Source>) -> Self {
        Self(source)
    }
}

impl API {
    pub fn new(source: Arc<dyn Source>) -> Self {
        Self(source)
    }
    /// Memoized disk reads rooted at `root`.
    pub fn from_dir(root: PathBuf) -> Self {
        log::info!("reading tables under {}", root.display());
        Self(Arc::new(Cache::from(Disk::from(root))))
    }
    pub fn source(&self) -> &Arc<dyn Source> {
        &self.0
    }
}

// choices
impl API {
    pub fn scenarios(&self) -> Vec<&'static Config> {
        Scenario::all().iter().map(Scenario::config).collect()
    }
    pub fn actions(&self, scenario: Scenario) -> &'static [Action] {
        scenario.config().actions()
    }
    /// Spin options for a first action, read from the scenario's table.
    /// Empty for scenarios that do not track spin.
    pub fn spins(&self, scenario: Scenario, action: Action) -> anyhow::Result<Vec<Spin>> {
        let config = scenario.config();
        if !config.offers(action) {
            anyhow::bail!("action {} is not offered by scenario {}", action.code(), scenario);
        }
        match config.use_spin {
            false => Ok(Vec::new()),
            true => Ok(spins(&self.strategies(config)?, action)),
        }
    }
}

// rendering
impl API {
    pub fn render(&self, selection: &Selection) -> anyhow::Result<Report> {
        selection.check()?;
        let config = selection.config();
        let (action, spin) = selection.opening();
        let header = Header::new(config, action, spin);
        let rows = self.strategies(config)?;
        let entries = filter(&rows, config, action, spin);
        if entries.is_empty() {
            log::warn!("{} {:?}/{:?}: {}", config.key, action, spin, Notice::EmptySelection);
            return Ok(Report::empty(header));
        }
        let caption = format!("{}｜{}｜{}", header.name, header.action, header.spin);
        let chart = Chart::new(caption, &entries);
        let ranking = Ranking::new(&entries, selection.top_k, config.use_spin);
        let mut notices = Vec::new();
        let players = match selection.follow {
            None => None,
            Some(follow) => match self.breakdown(config, (action, spin), follow)? {
                Some(table) if table.is_empty() => {
                    log::warn!("{} follow {}: {}", config.key, follow, Notice::InsufficientPlayerSample);
                    notices.push(Notice::InsufficientPlayerSample);
                    None
                }
                Some(table) => Some(table),
                None => {
                    log::info!("{} follow {}: {}", config.key, follow, Notice::UnavailableBreakdown);
                    notices.push(Notice::UnavailableBreakdown);
                    None
                }
            },
        };
        Ok(Report {
            header,
            chart: Some(chart),
            ranking: Some(ranking),
            players,
            notices,
        })
    }
    /// Player table for one follow-up reply, or `None` when the scenario
    /// carries no per-player data.
    pub fn breakdown(
        &self,
        config: &Config,
        opening: (Action, Option<Spin>),
        follow: Follow,
    ) -> anyhow::Result<Option<Breakdown>> {
        let Some(path) = config.players else {
            return Ok(None);
        };
        let shares = self
            .0
            .shares(Path::new(path))
            .map_err(|e| anyhow::anyhow!("load player shares {}: {}", path, e))?;
        let roster = self
            .0
            .roster(Path::new(PLAYER_NAMES))
            .map_err(|e| anyhow::anyhow!("load player names {}: {}", PLAYER_NAMES, e))?;
        Ok(Some(Breakdown::new(
            &shares,
            &roster,
            config.use_spin,
            opening,
            follow,
        )))
    }
    fn strategies(&self, config: &Config) -> anyhow::Result<Arc<[Strategy]>> {
        self.0
            .strategies(Path::new(config.strategies))
            .map_err(|e| anyhow::anyhow!("load strategies {}: {}", config.strategies, e))
    }
}
