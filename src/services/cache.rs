use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::models::Candidate;
use crate::services::repository::{CustomerRepository, RepositoryError};

/// Candidate snapshot cache
///
/// Wraps another `CustomerRepository` and keeps the last snapshot per
/// company scope for `ttl`. A snapshot may be up to `ttl` stale; callers
/// that need fresh reads should run without the cache.
pub struct CachedCustomerRepository {
    inner: Arc<dyn CustomerRepository>,
    snapshots: moka::future::Cache<Option<Uuid>, Arc<Vec<Candidate>>>,
}

impl CachedCustomerRepository {
    pub fn new(inner: Arc<dyn CustomerRepository>, max_entries: u64, ttl: Duration) -> Self {
        let snapshots = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(ttl)
            .build();

        Self { inner, snapshots }
    }

    /// Drop every cached snapshot
    pub fn invalidate_all(&self) {
        self.snapshots.invalidate_all();
    }
}

#[async_trait]
impl CustomerRepository for CachedCustomerRepository {
    async fn candidates(&self, company_id: Option<Uuid>) -> Result<Vec<Candidate>, RepositoryError> {
        if let Some(snapshot) = self.snapshots.get(&company_id).await {
            tracing::trace!("Snapshot cache hit: {:?}", company_id);
            return Ok(snapshot.as_ref().clone());
        }

        tracing::trace!("Snapshot cache miss: {:?}", company_id);
        let fresh = self.inner.candidates(company_id).await?;
        self.snapshots
            .insert(company_id, Arc::new(fresh.clone()))
            .await;

        Ok(fresh)
    }

    async fn health_check(&self) -> Result<bool, RepositoryError> {
        self.inner.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory::InMemoryRepository;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingRepository {
        inner: InMemoryRepository,
        loads: AtomicUsize,
    }

    #[async_trait]
    impl CustomerRepository for CountingRepository {
        async fn candidates(&self, company_id: Option<Uuid>) -> Result<Vec<Candidate>, RepositoryError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.inner.candidates(company_id).await
        }

        async fn health_check(&self) -> Result<bool, RepositoryError> {
            Ok(true)
        }
    }

    fn counting() -> Arc<CountingRepository> {
        Arc::new(CountingRepository {
            inner: InMemoryRepository::with_sample_data(),
            loads: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn test_snapshot_reused_within_ttl() {
        let inner = counting();
        let cache = CachedCustomerRepository::new(inner.clone(), 16, Duration::from_secs(60));

        let first = cache.candidates(None).await.unwrap();
        let second = cache.candidates(None).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(inner.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_scopes_cached_separately() {
        let inner = counting();
        let cache = CachedCustomerRepository::new(inner.clone(), 16, Duration::from_secs(60));

        cache.candidates(None).await.unwrap();
        cache.candidates(Some(Uuid::new_v4())).await.unwrap();

        assert_eq!(inner.loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let inner = counting();
        let cache = CachedCustomerRepository::new(inner.clone(), 16, Duration::from_secs(60));

        cache.candidates(None).await.unwrap();
        cache.invalidate_all();
        cache.candidates(None).await.unwrap();

        assert_eq!(inner.loads.load(Ordering::SeqCst), 2);
    }
}
