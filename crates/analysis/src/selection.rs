use serde::Deserialize;
use serde::Serialize;
use ttev_core::TOP_K_DEFAULT;
use ttev_core::TOP_K_MAX;
use ttev_core::TOP_K_MIN;
use ttev_labels::Action;
use ttev_labels::Spin;
use ttev_scenario::Config;
use ttev_scenario::Scenario;

/// Everything a user has picked for one request.
///
/// Each field gates the next: scenario, first action, spin (only in
/// spin-tracking scenarios), Top-K, and finally an optional follow-up reply
/// for the player drill-down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub scenario: Scenario,
    pub action: Action,
    #[serde(default)]
    pub spin: Option<Spin>,
    #[serde(default = "top_k")]
    pub top_k: usize,
    #[serde(default)]
    pub follow: Option<Follow>,
}

fn top_k() -> usize {
    TOP_K_DEFAULT
}

impl Selection {
    pub fn new(scenario: Scenario, action: Action) -> Self {
        Self {
            scenario,
            action,
            spin: None,
            top_k: TOP_K_DEFAULT,
            follow: None,
        }
    }
    pub fn with_spin(self, spin: Option<Spin>) -> Self {
        Self { spin, ..self }
    }
    pub fn with_top_k(self, top_k: usize) -> Self {
        Self { top_k, ..self }
    }
    pub fn with_follow(self, follow: Option<Follow>) -> Self {
        Self { follow, ..self }
    }
    pub fn config(&self) -> &'static Config {
        self.scenario.config()
    }
    /// First action and the spin that takes part in filtering.
    /// Spin is dropped for scenarios that do not track it.
    pub fn opening(&self) -> (Action, Option<Spin>) {
        match self.config().use_spin {
            true => (self.action, self.spin),
            false => (self.action, None),
        }
    }
    /// Guard rails: the first action must be one the scenario offers and
    /// Top-K must lie within the offered bounds.
    pub fn check(&self) -> anyhow::Result<()> {
        let config = self.config();
        if !config.offers(self.action) {
            anyhow::bail!(
                "action {} ({}) is not offered by scenario {}",
                self.action.code(),
                self.action,
                config.key
            );
        }
        if !(TOP_K_MIN..=TOP_K_MAX).contains(&self.top_k) {
            anyhow::bail!(
                "top-k {} outside {}..={}",
                self.top_k,
                TOP_K_MIN,
                TOP_K_MAX
            );
        }
        Ok(())
    }
}

/// A follow-up reply picked from the ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Follow {
    pub action: Action,
    #[serde(default)]
    pub spin: Option<Spin>,
}

impl Follow {
    pub fn pair(&self) -> (Action, Option<Spin>) {
        (self.action, self.spin)
    }
}

/// str isomorphism: `13` or `13:2`
impl TryFrom<&str> for Follow {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.split_once(':') {
            None => Ok(Self {
                action: Action::try_from(s)?,
                spin: None,
            }),
            Some((action, spin)) => Ok(Self {
                action: Action::try_from(action)?,
                spin: Some(Spin::try_from(spin)?),
            }),
        }
    }
}

impl std::fmt::Display for Follow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.spin {
            Some(spin) => write!(f, "{}:{}", self.action.code(), spin.code()),
            None => write!(f, "{}", self.action.code()),
        }
    }
}
