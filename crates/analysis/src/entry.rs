use std::cmp::Ordering;
use std::collections::BTreeSet;
use ttev_labels::Action;
use ttev_labels::Spin;
use ttev_scenario::Config;
use ttev_tables::Strategy;

/// Display string for a reply: the action label, joined with the spin
/// label when spin is tracked.
pub fn label(action: Action, spin: Option<Spin>) -> String {
    match spin {
        Some(spin) => format!("{} + {}", action.label(), spin.label()),
        None => action.label().to_string(),
    }
}

/// Spins offered for a first action: the distinct first spins present among
/// rows with that action, ascending. Never a spin without matching rows.
pub fn spins(rows: &[Strategy], action: Action) -> Vec<Spin> {
    rows.iter()
        .filter(|r| r.first == action)
        .filter_map(|r| r.first_spin)
        .collect::<BTreeSet<Spin>>()
        .into_iter()
        .collect()
}

/// Rows opening with `action` (and `spin`, when the scenario tracks it),
/// labeled and ordered by EV descending.
///
/// A spin-tracking scenario without a chosen spin has nothing to show.
pub fn filter(rows: &[Strategy], config: &Config, action: Action, spin: Option<Spin>) -> Vec<Entry> {
    if config.use_spin && spin.is_none() {
        return Vec::new();
    }
    let spin = spin.filter(|_| config.use_spin);
    let mut entries = rows
        .iter()
        .filter(|r| r.opens(action, spin))
        .map(|r| Entry::new(r, config.use_spin))
        .collect::<Vec<Entry>>();
    entries.sort_by(Entry::order);
    log::debug!("{} rows open with {:?}/{:?}", entries.len(), action, spin);
    entries
}

/// A filtered strategy row and its composite reply label.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub strategy: Strategy,
    pub label: String,
}

impl Entry {
    pub fn new(strategy: &Strategy, use_spin: bool) -> Self {
        let spin = strategy.reply_spin.filter(|_| use_spin);
        Self {
            label: label(strategy.reply, spin),
            strategy: strategy.clone(),
        }
    }
    /// EV descending; ties broken by reply code, then reply spin code.
    pub fn order(a: &Self, b: &Self) -> Ordering {
        b.strategy
            .ev
            .total_cmp(&a.strategy.ev)
            .then(a.strategy.reply.cmp(&b.strategy.reply))
            .then(a.strategy.reply_spin.cmp(&b.strategy.reply_spin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttev_scenario::Scenario;

    fn row(first: (Action, Option<Spin>), reply: (Action, Option<Spin>), ev: f64) -> Strategy {
        Strategy {
            first: first.0,
            first_spin: first.1,
            reply: reply.0,
            reply_spin: reply.1,
            ev,
            usage: 0.1,
            count: 1,
        }
    }

    fn table() -> Vec<Strategy> {
        vec![
            row((Action::Drive, Some(Spin::Top)), (Action::Block, Some(Spin::Back)), 0.612),
            row((Action::Drive, Some(Spin::Top)), (Action::Counter, Some(Spin::Top)), 0.701),
            row((Action::Drive, Some(Spin::Back)), (Action::Rub, Some(Spin::Back)), 0.455),
            row((Action::Drive, Some(Spin::Top)), (Action::Chop, Some(Spin::Back)), 0.480),
            row((Action::Smash, Some(Spin::SideTop)), (Action::Block, Some(Spin::SideTop)), 0.3),
        ]
    }

    #[test]
    fn composite_labels() {
        assert_eq!(label(Action::Block, Some(Spin::Back)), "擋球(Block) + 下旋(Back)");
        assert_eq!(label(Action::Block, None), "擋球(Block)");
    }

    #[test]
    fn spins_are_data_driven() {
        let rows = table();
        assert_eq!(spins(&rows, Action::Drive), vec![Spin::Top, Spin::Back]);
        assert_eq!(spins(&rows, Action::Smash), vec![Spin::SideTop]);
        assert!(spins(&rows, Action::Lob).is_empty());
    }

    #[test]
    fn filter_is_exact_and_sorted() {
        let rows = table();
        let config = Scenario::S1.config();
        let entries = filter(&rows, config, Action::Drive, Some(Spin::Top));
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.strategy.first_spin == Some(Spin::Top)));
        assert!(entries.windows(2).all(|w| w[0].strategy.ev >= w[1].strategy.ev));
        assert_eq!(entries[1].label, "擋球(Block) + 下旋(Back)");
    }

    #[test]
    fn filter_is_idempotent() {
        let rows = table();
        let config = Scenario::S1.config();
        let once = filter(&rows, config, Action::Drive, Some(Spin::Top));
        let twice = filter(&rows, config, Action::Drive, Some(Spin::Top));
        assert_eq!(once, twice);
        let refiltered = filter(
            &once.iter().map(|e| e.strategy.clone()).collect::<Vec<_>>(),
            config,
            Action::Drive,
            Some(Spin::Top),
        );
        assert_eq!(once, refiltered);
    }

    #[test]
    fn filter_without_spin_tracking() {
        let rows = table();
        let config = Scenario::S2.config();
        let entries = filter(&rows, config, Action::Drive, Some(Spin::Back));
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|e| !e.label.contains('+')));
    }

    #[test]
    fn missing_spin_in_spin_scenario_is_empty() {
        let rows = table();
        assert!(filter(&rows, Scenario::S1.config(), Action::Drive, None).is_empty());
    }

    #[test]
    fn ties_break_by_reply_code() {
        let rows = vec![
            row((Action::Counter, None), (Action::Lob, None), 0.5),
            row((Action::Counter, None), (Action::Block, None), 0.5),
            row((Action::Counter, None), (Action::Drive, None), 0.4),
        ];
        let entries = filter(&rows, Scenario::S2.config(), Action::Counter, None);
        let replies = entries.iter().map(|e| e.strategy.reply).collect::<Vec<_>>();
        assert_eq!(replies, vec![Action::Block, Action::Lob, Action::Drive]);
    }
}
