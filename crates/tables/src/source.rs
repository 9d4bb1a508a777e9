use super::Roster;
use super::Share;
use super::Strategy;
use std::path::Path;
use std::sync::Arc;

/// Source defines the read interface over precomputed tables.
/// Paths are the relative table paths named by scenario configs.
pub trait Source: Send + Sync {
    fn strategies(&self, path: &Path) -> anyhow::Result<Arc<[Strategy]>>;
    fn shares(&self, path: &Path) -> anyhow::Result<Arc<[Share]>>;
    fn roster(&self, path: &Path) -> anyhow::Result<Arc<Roster>>;
}
