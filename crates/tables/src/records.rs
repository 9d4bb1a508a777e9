use serde::Deserialize;
use serde::Serialize;
use ttev_core::Count;
use ttev_core::PlayerId;
use ttev_core::Probability;
use ttev_core::Utility;
use ttev_labels::Action;
use ttev_labels::Spin;

/// One precomputed strategy: the first action (and spin) of a sequence, a
/// follow-up reply (and spin), and the statistics of that reply.
///
/// Spin columns are absent from tables of scenarios that do not track spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    #[serde(rename = "A1_actionId")]
    pub first: Action,
    #[serde(rename = "A1_spinId", default)]
    pub first_spin: Option<Spin>,
    #[serde(rename = "C_actionId")]
    pub reply: Action,
    #[serde(rename = "C_spinId", default)]
    pub reply_spin: Option<Spin>,
    #[serde(rename = "EV")]
    pub ev: Utility,
    #[serde(rename = "usage_rate")]
    pub usage: Probability,
    #[serde(rename = "count")]
    pub count: Count,
}

impl Strategy {
    /// Exact match on first action, and on first spin when one is given.
    pub fn opens(&self, action: Action, spin: Option<Spin>) -> bool {
        self.first == action && spin.is_none_or(|s| self.first_spin == Some(s))
    }
}

/// How often one player chose a reply in a given opening, and how often
/// that choice won the point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    #[serde(rename = "A1_playerId")]
    pub player: PlayerId,
    #[serde(rename = "A1_actionId")]
    pub first: Action,
    #[serde(rename = "A1_spinId", default)]
    pub first_spin: Option<Spin>,
    #[serde(rename = "C_actionId")]
    pub reply: Action,
    #[serde(rename = "C_spinId", default)]
    pub reply_spin: Option<Spin>,
    #[serde(rename = "use_count")]
    pub uses: Count,
    #[serde(rename = "usage_share")]
    pub share: Probability,
    #[serde(rename = "win_rate")]
    pub wins: Probability,
}

impl Share {
    /// Exact match on opening and reply. Spins take part only when `spin` is set.
    pub fn matches(&self, first: (Action, Option<Spin>), reply: (Action, Option<Spin>), spin: bool) -> bool {
        self.first == first.0
            && self.reply == reply.0
            && (!spin || (self.first_spin == first.1 && self.reply_spin == reply.1))
    }
}

/// One row of the player-id mapping table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Name {
    #[serde(rename = "player_id")]
    pub id: PlayerId,
    #[serde(rename = "player_name")]
    pub name: String,
}
