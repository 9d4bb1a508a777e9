use super::Entry;
use super::Follow;
use serde::Serialize;
use ttev_core::Count;
use ttev_core::USAGE_DECIMALS;
use ttev_core::Utility;
use ttev_core::percent;
use ttev_labels::Action;
use ttev_labels::Spin;

/// One row of the Top-K table, with display columns named as shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked {
    #[serde(rename = "C_actionId")]
    pub reply: Action,
    #[serde(rename = "C_spinId", skip_serializing_if = "Option::is_none")]
    pub reply_spin: Option<Spin>,
    #[serde(rename = "C_action")]
    pub action: &'static str,
    #[serde(rename = "C_spin", skip_serializing_if = "Option::is_none")]
    pub spin: Option<&'static str>,
    #[serde(rename = "Expected Value")]
    pub ev: Utility,
    #[serde(rename = "Usage Rate (%)")]
    pub usage: f64,
    #[serde(rename = "Count")]
    pub count: Count,
}

impl Ranked {
    /// The drill-down target this row stands for.
    pub fn follow(&self) -> Follow {
        Follow {
            action: self.reply,
            spin: self.reply_spin,
        }
    }
}

/// The K best replies by EV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub k: usize,
    pub title: String,
    pub use_spin: bool,
    pub rows: Vec<Ranked>,
}

impl Ranking {
    /// `entries` must already be in EV-descending order.
    pub fn new(entries: &[Entry], k: usize, use_spin: bool) -> Self {
        Self {
            k,
            use_spin,
            title: format!("Top-{} 策略", k),
            rows: entries
                .iter()
                .take(k)
                .map(|e| &e.strategy)
                .map(|s| {
                    let spin = s.reply_spin.filter(|_| use_spin);
                    Ranked {
                        reply: s.reply,
                        reply_spin: spin,
                        action: s.reply.label(),
                        spin: spin.map(|s| s.label()),
                        ev: s.ev,
                        usage: percent(s.usage, USAGE_DECIMALS),
                        count: s.count,
                    }
                })
                .collect(),
        }
    }
    pub fn follows(&self) -> Vec<Follow> {
        self.rows.iter().map(Ranked::follow).collect()
    }
}
