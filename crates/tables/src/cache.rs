use super::*;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

type Memo<T> = RwLock<HashMap<PathBuf, Arc<T>>>;

/// Memoizes an inner [`Source`] by table path.
///
/// Tables are immutable for the life of the process, so entries are never
/// invalidated. The first load of a path reads through; later loads share
/// the same `Arc`.
pub struct Cache<S> {
    inner: S,
    strategies: Memo<[Strategy]>,
    shares: Memo<[Share]>,
    rosters: Memo<Roster>,
}

impl<S: Source> From<S> for Cache<S> {
    fn from(inner: S) -> Self {
        Self {
            inner,
            strategies: Memo::default(),
            shares: Memo::default(),
            rosters: Memo::default(),
        }
    }
}

impl<S> Cache<S> {
    pub fn inner(&self) -> &S {
        &self.inner
    }
    /// load or return cached
    fn memo<T, F>(memo: &Memo<T>, path: &Path, load: F) -> anyhow::Result<Arc<T>>
    where
        T: ?Sized,
        F: FnOnce() -> anyhow::Result<Arc<T>>,
    {
        if let Some(hit) = memo
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
        {
            log::debug!("cache hit  {}", path.display());
            return Ok(hit);
        }
        log::debug!("cache miss {}", path.display());
        let table = load()?;
        Ok(memo
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(path.to_path_buf())
            .or_insert(table)
            .clone())
    }
}

impl<S: Source> Source for Cache<S> {
    fn strategies(&self, path: &Path) -> anyhow::Result<Arc<[Strategy]>> {
        Self::memo(&self.strategies, path, || self.inner.strategies(path))
    }
    fn shares(&self, path: &Path) -> anyhow::Result<Arc<[Share]>> {
        Self::memo(&self.shares, path, || self.inner.shares(path))
    }
    fn roster(&self, path: &Path) -> anyhow::Result<Arc<Roster>> {
        Self::memo(&self.rosters, path, || self.inner.roster(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use ttev_labels::Action;

    /// Counts reads that reach the underlying source.
    #[derive(Default)]
    struct Counting(AtomicUsize);

    impl Source for Counting {
        fn strategies(&self, path: &Path) -> anyhow::Result<Arc<[Strategy]>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            match path.to_str() {
                Some("broken") => Err(anyhow::anyhow!("unreadable")),
                _ => Ok(Arc::from(vec![Strategy {
                    first: Action::Drive,
                    first_spin: None,
                    reply: Action::Block,
                    reply_spin: None,
                    ev: 0.5,
                    usage: 1.0,
                    count: 1,
                }])),
            }
        }
        fn shares(&self, _: &Path) -> anyhow::Result<Arc<[Share]>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::from(Vec::new()))
        }
        fn roster(&self, _: &Path) -> anyhow::Result<Arc<Roster>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Roster::default()))
        }
    }

    #[test]
    fn repeated_loads_share_one_read() {
        let cache = Cache::from(Counting::default());
        let a = cache.strategies(Path::new("a.csv")).unwrap();
        let b = cache.strategies(Path::new("a.csv")).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.inner().0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn paths_are_cached_independently() {
        let cache = Cache::from(Counting::default());
        cache.strategies(Path::new("a.csv")).unwrap();
        cache.strategies(Path::new("b.csv")).unwrap();
        cache.shares(Path::new("a.csv")).unwrap();
        cache.roster(Path::new("a.csv")).unwrap();
        cache.roster(Path::new("a.csv")).unwrap();
        assert_eq!(cache.inner().0.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn failures_are_not_cached() {
        let cache = Cache::from(Counting::default());
        assert!(cache.strategies(Path::new("broken")).is_err());
        assert!(cache.strategies(Path::new("broken")).is_err());
        assert_eq!(cache.inner().0.load(Ordering::SeqCst), 2);
    }
}
