use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::domain::{Inquiry, InquiryId, NewInquiry, StoreMode};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Row, Sqlite,
};
use tokio::sync::OnceCell;
use tracing::warn;

use crate::{InquiryStore, StoreError};

/// SQLite-backed store. Connections are opened lazily and the schema is
/// migrated on first use, so a missing or unwritable database surfaces as
/// [`StoreError::Unavailable`] on each call rather than at startup.
#[derive(Clone)]
pub struct SqliteInquiryStore {
    pool: Pool<Sqlite>,
    database_url: String,
    ready: Arc<OnceCell<()>>,
}

impl SqliteInquiryStore {
    /// Opens the database and migrates it up front. Fails if either step does.
    pub async fn new(database_url: &str) -> Result<Self> {
        let store = Self::connect_lazy(database_url)?;
        store
            .ready()
            .await
            .with_context(|| format!("failed to open database '{database_url}'"))?;
        Ok(store)
    }

    /// Builds the pool without touching the database. Only a malformed URL
    /// is rejected here.
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let connect_options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("invalid database url '{database_url}'"))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_lazy_with(connect_options);
        Ok(Self {
            pool,
            database_url: database_url.to_string(),
            ready: Arc::new(OnceCell::new()),
        })
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Creates the parent directory and runs migrations once. A failed
    /// attempt is retried on the next call.
    async fn ready(&self) -> Result<(), StoreError> {
        self.ready
            .get_or_try_init(|| async {
                ensure_sqlite_parent_dir_exists(&self.database_url)
                    .map_err(|e| StoreError::Unavailable(sqlx::Error::Io(e)))?;
                sqlx::migrate!("./migrations")
                    .run(&self.pool)
                    .await
                    .map_err(|e| StoreError::Unavailable(sqlx::Error::Migrate(Box::new(e))))
            })
            .await
            .map(|_| ())
            .inspect_err(|error| warn!(%error, "inquiry database not ready"))
    }
}

#[async_trait]
impl InquiryStore for SqliteInquiryStore {
    fn mode(&self) -> StoreMode {
        StoreMode::Database
    }

    async fn create_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry, StoreError> {
        self.ready().await?;
        let created_at = Utc::now();
        let row = sqlx::query(
            "INSERT INTO inquiries (name, email, message, created_at) VALUES (?, ?, ?, ?)
             RETURNING id, created_at",
        )
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(&inquiry.message)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        let id = InquiryId(row.try_get::<i64, _>("id")?);
        let created_at: DateTime<Utc> = row.try_get("created_at")?;
        Ok(Inquiry::from_new(id, inquiry, created_at))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.ready().await?;
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}

fn ensure_sqlite_parent_dir_exists(database_url: &str) -> io::Result<()> {
    let Some(path) = sqlite_path(database_url) else {
        return Ok(());
    };

    let Some(parent) = path.parent() else {
        return Ok(());
    };

    fs::create_dir_all(parent)
}

fn sqlite_path(database_url: &str) -> Option<PathBuf> {
    if database_url.starts_with("sqlite::memory:") || !database_url.starts_with("sqlite:") {
        return None;
    }

    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() {
        return None;
    }

    Some(Path::new(path).to_path_buf())
}
