use super::*;
use serde::Serialize;
use ttev_core::SPINLESS;
use ttev_labels::Action;
use ttev_labels::Spin;
use ttev_scenario::Config;
use ttev_scenario::Scenario;

/// Summary of what is being shown: scenario, first action, and spin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub scenario: Scenario,
    pub name: &'static str,
    pub action: &'static str,
    pub spin: &'static str,
}

impl Header {
    pub fn new(config: &Config, action: Action, spin: Option<Spin>) -> Self {
        Self {
            scenario: config.key,
            name: config.name,
            action: action.label(),
            spin: spin.map(|s| s.label()).unwrap_or(SPINLESS),
        }
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Scenario：{}", self.name)?;
        writeln!(f, "A_action：{}", self.action)?;
        write!(f, "A_spin：{}", self.spin)
    }
}

/// Everything rendered for one request.
///
/// An empty selection yields a report with only the header and one notice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub header: Header,
    pub chart: Option<Chart>,
    pub ranking: Option<Ranking>,
    pub players: Option<Breakdown>,
    pub notices: Vec<Notice>,
}

impl Report {
    pub fn empty(header: Header) -> Self {
        Self {
            header,
            chart: None,
            ranking: None,
            players: None,
            notices: vec![Notice::EmptySelection],
        }
    }
    pub fn is_empty(&self) -> bool {
        self.chart.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_spin_text() {
        let header = Header::new(Scenario::S4.config(), Action::Traditional, None);
        assert_eq!(header.spin, "未區分旋轉");
        let header = Header::new(Scenario::S1.config(), Action::Drive, Some(Spin::Top));
        assert_eq!(header.spin, "上旋(Top)");
        assert!(header.to_string().contains("A_action：拉球(Drive)"));
    }

    #[test]
    fn empty_report_has_one_notice() {
        let header = Header::new(Scenario::S2.config(), Action::Lob, None);
        let report = Report::empty(header);
        assert!(report.is_empty());
        assert!(report.ranking.is_none());
        assert_eq!(report.notices, vec![Notice::EmptySelection]);
    }
}
