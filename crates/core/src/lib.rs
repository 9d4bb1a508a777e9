//! Core type aliases, constants, and runtime helpers for the EV dashboard.
//!
//! Everything here is shared by the pipeline crates and both front-ends:
//! numeric aliases for the precomputed statistics, the fixed display
//! constants of the dashboard, environment configuration, and logger setup.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Precomputed expected point-scoring value of a strategy, in [0, 1].
pub type Utility = f64;
/// Usage rates, usage shares, and win rates, in [0, 1].
pub type Probability = f64;
/// Observation counts.
pub type Count = u32;
/// Player identifier shared by player-share tables and the name mapping.
pub type PlayerId = u32;

// ============================================================================
// CHART LAYOUT
// Fixed EV range keeps charts comparable across scenarios.
// ============================================================================
/// Upper bound of the EV axis.
pub const EV_CEILING: Utility = 1.05;
/// Vertical gap between a bar top and its EV annotation.
pub const EV_LABEL_OFFSET: Utility = 0.015;
/// Gap between a usage point and its annotation, as a fraction of max usage.
pub const USAGE_LABEL_OFFSET: Probability = 0.03;
/// Headroom above the largest usage value on the secondary axis.
pub const USAGE_HEADROOM: Probability = 1.15;

// ============================================================================
// RANKING
// ============================================================================
/// Smallest Top-K the front-ends offer.
pub const TOP_K_MIN: usize = 3;
/// Largest Top-K the front-ends offer.
pub const TOP_K_MAX: usize = 15;
/// Top-K preselected by the front-ends.
pub const TOP_K_DEFAULT: usize = 5;
/// Rows shown in a player breakdown.
pub const PLAYER_TOP_N: usize = 5;
/// Decimal places of usage percentages.
pub const USAGE_DECIMALS: i32 = 2;
/// Decimal places of win-rate percentages.
pub const WIN_DECIMALS: i32 = 1;

// ============================================================================
// DISPLAY TEXT
// ============================================================================
/// Window / document title.
pub const PAGE_TITLE: &str = "Table Tennis Strategy EV Dashboard";
/// Main heading above the summary block.
pub const DASHBOARD_TITLE: &str = "桌球策略期望值（EV）Dashboard";
/// Heading of the selection panel.
pub const SELECTION_TITLE: &str = "EV 評估視角";
/// Spin text for scenarios that do not track spin.
pub const SPINLESS: &str = "未區分旋轉";
/// Player-id to display-name table, relative to the data directory.
pub const PLAYER_NAMES: &str = "data/player_id_map.csv";

// ============================================================================
// NUMERIC HELPERS
// ============================================================================
/// Scale a fraction to a percentage rounded to `places` decimals.
/// Halves round to even, matching dataframe rounding.
pub fn percent(x: Probability, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (x * 100.0 * scale).round_ties_even() / scale
}

// ============================================================================
// CONFIGURATION
// ============================================================================
/// Root directory that scenario table paths resolve against (`DATA_DIR`, default `.`).
pub fn data_dir() -> std::path::PathBuf {
    std::env::var("DATA_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
}

/// HTTP bind address (`BIND_ADDR`, default `127.0.0.1:8080`).
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("127.0.0.1:8080"))
}

/// HTTP worker count (`WORKERS`, default 2).
pub fn workers() -> usize {
    std::env::var("WORKERS")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|n| *n > 0)
        .unwrap_or(2)
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "runtime")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
#[cfg(feature = "runtime")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
