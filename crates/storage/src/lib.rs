use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use shared::domain::{Inquiry, NewInquiry, StoreMode};
use thiserror::Error;
use tracing::info;

mod mock;
mod sqlite;

pub use mock::MockInquiryStore;
pub use sqlite::SqliteInquiryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("inquiry store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
    #[error("inquiry store rejected the write: {0}")]
    Write(#[source] sqlx::Error),
}

impl StoreError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolClosed
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => Self::Unavailable(error),
            other => Self::Write(other),
        }
    }
}

/// Append-only persistence for contact-form submissions.
///
/// There is deliberately no read, update or delete: the site only ever
/// records inquiries.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    fn mode(&self) -> StoreMode;

    /// Appends exactly one record and returns it with its id and timestamp.
    async fn create_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Picks the backing store once at startup. A configured database URL selects
/// SQLite; anything else falls back to the in-memory demo store.
///
/// The database is not opened here. If it cannot be reached, each store call
/// reports [`StoreError::Unavailable`] and startup still succeeds; only a
/// malformed URL is an error.
pub async fn select_store(database_url: Option<&str>) -> Result<Arc<dyn InquiryStore>> {
    match database_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => {
            let store = SqliteInquiryStore::connect_lazy(url)?;
            info!(mode = StoreMode::Database.as_str(), "inquiry store selected");
            Ok(Arc::new(store))
        }
        None => {
            info!(
                mode = StoreMode::Mock.as_str(),
                "no database configured; inquiries will not be persisted"
            );
            Ok(Arc::new(MockInquiryStore::new()))
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
