//! Load-once holders for the pre-trained artifacts.
//!
//! Artifacts are read on first use (or explicitly at startup), on the
//! blocking pool, and shared read-only afterwards. A failed load is cached:
//! later requests fail fast with the original reason instead of re-reading
//! the files.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::OnceCell;
use utoipa::ToSchema;

use crate::error::{Result, RiftmapError};

type Loader<T> = Arc<dyn Fn() -> Result<Arc<T>> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactStatus {
    NotLoaded,
    Ready,
    Failed,
}

pub struct LazyArtifact<T: ?Sized> {
    name: &'static str,
    cell: Arc<OnceCell<std::result::Result<Arc<T>, String>>>,
    loader: Loader<T>,
}

impl<T: ?Sized> Clone for LazyArtifact<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            cell: Arc::clone(&self.cell),
            loader: Arc::clone(&self.loader),
        }
    }
}

impl<T: ?Sized + Send + Sync + 'static> LazyArtifact<T> {
    pub fn new<F>(name: &'static str, loader: F) -> Self
    where
        F: Fn() -> Result<Arc<T>> + Send + Sync + 'static,
    {
        Self {
            name,
            cell: Arc::new(OnceCell::new()),
            loader: Arc::new(loader),
        }
    }

    /// An artifact that is already in memory.
    pub fn ready(name: &'static str, value: Arc<T>) -> Self {
        Self {
            name,
            cell: Arc::new(OnceCell::new_with(Some(Ok(value)))),
            loader: Arc::new(move || {
                Err(RiftmapError::Internal(format!("{name} is already loaded")))
            }),
        }
    }

    /// Returns the artifact, running the loader exactly once across all
    /// concurrent callers.
    ///
    /// Initialization runs on its own task, so a caller dropped mid-load
    /// leaves the load in flight for the next caller to await.
    pub async fn get(&self) -> Result<Arc<T>> {
        if let Some(outcome) = self.cell.get() {
            return outcome.clone().map_err(RiftmapError::ArtifactLoad);
        }

        let cell = Arc::clone(&self.cell);
        let loader = Arc::clone(&self.loader);
        let name = self.name;
        let outcome = tokio::spawn(async move {
            cell.get_or_init(|| load(name, loader)).await.clone()
        })
        .await
        .map_err(|e| RiftmapError::ArtifactLoad(format!("{name} load task failed: {e}")))?;

        outcome.map_err(RiftmapError::ArtifactLoad)
    }

    pub fn status(&self) -> ArtifactStatus {
        match self.cell.get() {
            None => ArtifactStatus::NotLoaded,
            Some(Ok(_)) => ArtifactStatus::Ready,
            Some(Err(_)) => ArtifactStatus::Failed,
        }
    }
}

async fn load<T: ?Sized + Send + Sync + 'static>(
    name: &'static str,
    loader: Loader<T>,
) -> std::result::Result<Arc<T>, String> {
    match tokio::task::spawn_blocking(move || loader()).await {
        Ok(Ok(value)) => {
            tracing::info!(artifact = name, "Artifact loaded");
            Ok(value)
        }
        Ok(Err(e)) => {
            tracing::error!(artifact = name, error = %e, "Artifact failed to load");
            Err(e.to_string())
        }
        Err(e) => {
            tracing::error!(artifact = name, error = %e, "Artifact loader panicked");
            Err(format!("{name} loader task failed: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_loader_runs_once_under_concurrency() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let artifact = LazyArtifact::new("answer", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(50));
            Ok(Arc::new(42u32))
        });

        assert_eq!(artifact.status(), ArtifactStatus::NotLoaded);

        let results =
            futures::future::join_all((0..8).map(|_| artifact.get())).await;
        for result in results {
            assert_eq!(*result.unwrap(), 42);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(artifact.status(), ArtifactStatus::Ready);
    }

    #[tokio::test]
    async fn test_abandoned_first_load_is_not_repeated() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let artifact = LazyArtifact::new("slow", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(300));
            Ok(Arc::new(7u32))
        });

        // The first caller gives up while the loader is still running.
        let abandoned = tokio::time::timeout(Duration::from_millis(50), artifact.get()).await;
        assert!(abandoned.is_err());

        assert_eq!(*artifact.get().await.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(artifact.status(), ArtifactStatus::Ready);
    }

    #[tokio::test]
    async fn test_failure_is_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let artifact: LazyArtifact<u32> = LazyArtifact::new("broken", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(RiftmapError::ArtifactLoad("file missing".to_string()))
        });

        let first = artifact.get().await.unwrap_err();
        let second = artifact.clone().get().await.unwrap_err();

        assert!(matches!(first, RiftmapError::ArtifactLoad(ref m) if m.contains("file missing")));
        assert!(matches!(second, RiftmapError::ArtifactLoad(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(artifact.status(), ArtifactStatus::Failed);
    }

    #[tokio::test]
    async fn test_ready_artifact_skips_loader() {
        let artifact = LazyArtifact::ready("preloaded", Arc::new("value".to_string()));
        assert_eq!(artifact.status(), ArtifactStatus::Ready);
        assert_eq!(artifact.get().await.unwrap().as_str(), "value");
    }
}
