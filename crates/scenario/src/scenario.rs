use super::Config;
use super::REGISTRY;
use serde::Deserialize;
use serde::Serialize;

/// Key of one of the four precomputed scenarios.
///
/// - `S1` end-game (last four shots), with spin
/// - `S2` end-game (last four shots), without spin
/// - `S3` serve (first three shots), with spin
/// - `S4` serve (first three shots), without spin
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize)]
pub enum Scenario {
    #[default]
    S1,
    S2,
    S3,
    S4,
}

impl Scenario {
    /// All four keys in registry order.
    pub const fn all() -> [Self; 4] {
        [Self::S1, Self::S2, Self::S3, Self::S4]
    }
    /// The immutable configuration registered under this key.
    pub fn config(&self) -> &'static Config {
        &REGISTRY[*self as usize]
    }
    pub const fn key(&self) -> &'static str {
        match self {
            Self::S1 => "S1",
            Self::S2 => "S2",
            Self::S3 => "S3",
            Self::S4 => "S4",
        }
    }
}

/// str isomorphism, case-insensitive
impl TryFrom<&str> for Scenario {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|k| k.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("invalid scenario str: {}", s))
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
