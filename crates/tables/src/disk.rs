use super::*;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

/// Reads tables from files under a data directory. Every call hits the disk.
#[derive(Debug, Clone)]
pub struct Disk {
    root: PathBuf,
}

impl From<PathBuf> for Disk {
    fn from(root: PathBuf) -> Self {
        Self { root }
    }
}

impl Disk {
    pub fn root(&self) -> &Path {
        &self.root
    }
    fn read<T: DeserializeOwned>(&self, path: &Path) -> anyhow::Result<Vec<T>> {
        let full = self.root.join(path);
        let file = std::fs::File::open(&full)
            .map_err(|e| anyhow::anyhow!("open {}: {}", full.display(), e))?;
        let rows = decode(std::io::BufReader::new(file))
            .map_err(|e| anyhow::anyhow!("load {}: {}", full.display(), e))?;
        log::info!("loaded {:>5} rows from {}", rows.len(), full.display());
        Ok(rows)
    }
}

impl Source for Disk {
    fn strategies(&self, path: &Path) -> anyhow::Result<Arc<[Strategy]>> {
        self.read::<Strategy>(path).map(Arc::from)
    }
    fn shares(&self, path: &Path) -> anyhow::Result<Arc<[Share]>> {
        self.read::<Share>(path).map(Arc::from)
    }
    fn roster(&self, path: &Path) -> anyhow::Result<Arc<Roster>> {
        self.read::<Name>(path)
            .map(|names| names.into_iter().collect::<Roster>())
            .map(Arc::new)
    }
}
