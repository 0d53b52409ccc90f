use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Campaign, Candidate, TargetingLocation};

/// Errors that can occur when reading from a candidate source
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Source of customers that can be scanned by a radius query
///
/// Only customers with both coordinates present are returned. Range
/// checking is left to the radius query, which skips bad rows.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Snapshot of all locatable customers, optionally scoped to one company
    async fn candidates(&self, company_id: Option<Uuid>) -> Result<Vec<Candidate>, RepositoryError>;

    async fn health_check(&self) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait TargetingLocationRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TargetingLocation>, RepositoryError>;
}

#[async_trait]
pub trait CampaignRepository: Send + Sync {
    async fn find_campaign(&self, id: Uuid) -> Result<Option<Campaign>, RepositoryError>;
}
