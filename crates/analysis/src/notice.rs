use serde::Serialize;
use serde::ser::SerializeStruct;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// User-facing message for a request whose data is absent.
/// These are outcomes, not failures: the request completes with a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The chosen opening has no rows. Nothing else is rendered.
    EmptySelection,
    /// The scenario has no per-player table.
    UnavailableBreakdown,
    /// The per-player table has no rows for the chosen reply.
    InsufficientPlayerSample,
}

impl Notice {
    pub const fn severity(&self) -> Severity {
        match self {
            Self::EmptySelection => Severity::Warning,
            Self::UnavailableBreakdown => Severity::Info,
            Self::InsufficientPlayerSample => Severity::Warning,
        }
    }
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptySelection => "EmptySelection",
            Self::UnavailableBreakdown => "UnavailableBreakdown",
            Self::InsufficientPlayerSample => "InsufficientPlayerSample",
        }
    }
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptySelection => "此條件下沒有資料 (No data under this condition)",
            Self::UnavailableBreakdown => "此情境沒有選手層級資料 (No player-level data for this scenario)",
            Self::InsufficientPlayerSample => "樣本不足，無法顯示選手分布 (Insufficient player sample)",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Serialize for Notice {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Notice", 3)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("severity", &self.severity())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}
