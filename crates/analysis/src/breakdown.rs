use super::Follow;
use super::label;
use serde::Serialize;
use ttev_core::Count;
use ttev_core::PLAYER_TOP_N;
use ttev_core::PlayerId;
use ttev_core::USAGE_DECIMALS;
use ttev_core::WIN_DECIMALS;
use ttev_core::percent;
use ttev_labels::Action;
use ttev_labels::Spin;
use ttev_tables::Roster;
use ttev_tables::Share;

/// One player's use of the selected reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    #[serde(rename = "A1_playerId")]
    pub player: PlayerId,
    #[serde(rename = "player_name")]
    pub name: Option<String>,
    #[serde(rename = "use_count")]
    pub uses: Count,
    #[serde(rename = "Usage Share (%)")]
    pub share: f64,
    #[serde(rename = "Win Rate (%)")]
    pub wins: f64,
}

/// Top players choosing one follow-up reply after a given opening.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub follow: Follow,
    pub title: String,
    pub rows: Vec<Standing>,
}

impl Breakdown {
    /// Left-joins player shares to names, keeps rows matching the opening and
    /// reply (spins only when `use_spin`), and keeps the top players by
    /// usage share. Ids missing from the roster keep their row, unnamed.
    pub fn new(
        shares: &[Share],
        roster: &Roster,
        use_spin: bool,
        opening: (Action, Option<Spin>),
        follow: Follow,
    ) -> Self {
        let reply = (follow.action, follow.spin.filter(|_| use_spin));
        let mut matched = shares
            .iter()
            .filter(|s| s.matches(opening, reply, use_spin))
            .collect::<Vec<&Share>>();
        matched.sort_by(|a, b| b.share.total_cmp(&a.share).then(a.player.cmp(&b.player)));
        Self {
            follow,
            title: format!("選手分布：{}", label(reply.0, reply.1)),
            rows: matched
                .into_iter()
                .take(PLAYER_TOP_N)
                .map(|s| Standing {
                    player: s.player,
                    name: roster.name(s.player).map(String::from),
                    uses: s.uses,
                    share: percent(s.share, USAGE_DECIMALS),
                    wins: percent(s.wins, WIN_DECIMALS),
                })
                .collect(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
