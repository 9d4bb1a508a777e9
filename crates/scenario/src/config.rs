use super::Scenario;
use serde::Serialize;
use ttev_labels::Action;

static STROKES: [Action; 15] = Action::strokes();
static SERVES: [Action; 4] = Action::serves();

/// Fixed scenario table, indexed by `Scenario as usize`.
pub(crate) static REGISTRY: [Config; 4] = [
    Config {
        key: Scenario::S1,
        name: "終局策略（後四拍・含旋轉）",
        strategies: "data/last4_action_spin.csv",
        serve_only: false,
        use_spin: true,
        players: None,
    },
    Config {
        key: Scenario::S2,
        name: "終局策略（後四拍・不含旋轉）",
        strategies: "data/last4_action.csv",
        serve_only: false,
        use_spin: false,
        players: None,
    },
    Config {
        key: Scenario::S3,
        name: "發球策略（前三拍・含旋轉）",
        strategies: "data/serve3_action_spin.csv",
        serve_only: true,
        use_spin: true,
        players: Some("data/serve3_player_action_spin.csv"),
    },
    Config {
        key: Scenario::S4,
        name: "發球策略（前三拍・不含旋轉）",
        strategies: "data/serve3_action.csv",
        serve_only: true,
        use_spin: false,
        players: Some("data/serve3_player_action.csv"),
    },
];

/// Immutable description of one scenario.
///
/// Table paths are relative to the data directory.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Config {
    pub key: Scenario,
    pub name: &'static str,
    pub strategies: &'static str,
    pub serve_only: bool,
    pub use_spin: bool,
    pub players: Option<&'static str>,
}

impl Config {
    /// First actions a front-end may offer: serves for serve scenarios,
    /// rally strokes otherwise.
    pub fn actions(&self) -> &'static [Action] {
        match self.serve_only {
            true => &SERVES,
            false => &STROKES,
        }
    }
    pub fn offers(&self, action: Action) -> bool {
        self.actions().contains(&action)
    }
    pub fn has_player_breakdown(&self) -> bool {
        self.players.is_some()
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.key, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_scenarios_offer_only_serves() {
        for scenario in Scenario::all() {
            let config = scenario.config();
            let codes = config.actions().iter().map(Action::code).collect::<Vec<_>>();
            match config.serve_only {
                true => assert_eq!(codes, vec![15, 16, 17, 18]),
                false => assert_eq!(codes, (0..=14).collect::<Vec<_>>()),
            }
        }
    }

    #[test]
    fn guard_rejects_other_partition() {
        assert!(Scenario::S1.config().offers(Action::Drive));
        assert!(!Scenario::S1.config().offers(Action::Hook));
        assert!(Scenario::S4.config().offers(Action::Traditional));
        assert!(!Scenario::S4.config().offers(Action::Zero));
    }

    #[test]
    fn player_tables_only_for_serves() {
        assert!(!Scenario::S1.config().has_player_breakdown());
        assert!(!Scenario::S2.config().has_player_breakdown());
        assert!(Scenario::S3.config().has_player_breakdown());
        assert!(Scenario::S4.config().has_player_breakdown());
    }

    #[test]
    fn spin_tracking() {
        assert!(Scenario::S1.config().use_spin);
        assert!(!Scenario::S2.config().use_spin);
        assert!(Scenario::S3.config().use_spin);
        assert!(!Scenario::S4.config().use_spin);
    }
}
