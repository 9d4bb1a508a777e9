use colored::Colorize;
use ttev_analysis::Breakdown;
use ttev_analysis::Header;
use ttev_analysis::Notice;
use ttev_analysis::Ranking;
use ttev_analysis::Report;
use ttev_analysis::Severity;
use ttev_core::DASHBOARD_TITLE;
use ttev_scenario::Config;

const UNNAMED: &str = "—";

pub fn header(header: &Header) -> String {
    format!("{}\n{}\n", DASHBOARD_TITLE.bold(), header)
}

pub fn notice(notice: &Notice) -> String {
    match notice.severity() {
        Severity::Warning => format!("{} {}", "!".yellow(), notice.message().yellow()),
        Severity::Info => format!("{} {}", "i".cyan(), notice.message().cyan()),
    }
}

pub fn ranking(ranking: &Ranking) -> String {
    let mut lines = vec![ranking.title.bold().to_string()];
    lines.push(match ranking.use_spin {
        true => format!(
            "{:>3}  {:<24} {:<20} {:>14} {:>14} {:>6}",
            "#", "C_action", "C_spin", "Expected Value", "Usage Rate (%)", "Count"
        ),
        false => format!(
            "{:>3}  {:<24} {:>14} {:>14} {:>6}",
            "#", "C_action", "Expected Value", "Usage Rate (%)", "Count"
        ),
    });
    for (i, row) in ranking.rows.iter().enumerate() {
        lines.push(match (ranking.use_spin, row.spin) {
            (true, spin) => format!(
                "{:>3}. {:<24} {:<20} {:>14.3} {:>14.2} {:>6}",
                i + 1,
                row.action,
                spin.unwrap_or(UNNAMED),
                row.ev,
                row.usage,
                row.count
            ),
            (false, _) => format!(
                "{:>3}. {:<24} {:>14.3} {:>14.2} {:>6}",
                i + 1,
                row.action,
                row.ev,
                row.usage,
                row.count
            ),
        });
    }
    lines.join("\n")
}

pub fn players(breakdown: &Breakdown) -> String {
    let mut lines = vec![breakdown.title.bold().to_string()];
    lines.push(format!(
        "{:>6}  {:<16} {:>9} {:>16} {:>12}",
        "id", "player_name", "use_count", "Usage Share (%)", "Win Rate (%)"
    ));
    for row in breakdown.rows.iter() {
        lines.push(format!(
            "{:>6}  {:<16} {:>9} {:>16.2} {:>12.1}",
            row.player,
            row.name.as_deref().unwrap_or(UNNAMED),
            row.uses,
            row.share,
            row.wins
        ));
    }
    lines.join("\n")
}

pub fn report(report: &Report) -> String {
    let mut blocks = vec![header(&report.header)];
    if let Some(ref table) = report.ranking {
        blocks.push(ranking(table));
    }
    if let Some(ref table) = report.players {
        blocks.push(players(table));
    }
    blocks.extend(report.notices.iter().map(notice));
    blocks.join("\n")
}

pub fn scenario(config: &Config) -> String {
    let flag = |on: bool| if on { "yes".green() } else { "no".dimmed() };
    format!(
        "{}  {:<28} spin:{:<4} players:{}",
        config.key.to_string().bold(),
        config.name,
        flag(config.use_spin),
        flag(config.has_player_breakdown())
    )
}
