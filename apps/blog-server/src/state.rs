//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::error::RepoError;
use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::PostgresPostRepository;

/// Which store backs the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    Memory,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Postgres => "postgres",
            StorageKind::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub storage: StorageKind,
}

impl AppState {
    /// State over an injected store.
    pub fn new(posts: Arc<dyn PostRepository>, storage: StorageKind) -> Self {
        Self { posts, storage }
    }

    /// State over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPostRepository::new()), StorageKind::Memory)
    }

    /// Build the state for the given connection target.
    ///
    /// Without a target the in-memory store is used. A target that cannot be
    /// reached is an error.
    pub async fn connect(db_config: Option<&DatabaseConfig>) -> Result<Self, RepoError> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::in_memory());
        };

        Self::connect_postgres(config).await
    }

    #[cfg(feature = "postgres")]
    async fn connect_postgres(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let db = blog_infra::database::connect(config).await.map_err(|e| {
            tracing::error!("Failed to connect to database: {}", e);
            RepoError::Connection(e.to_string())
        })?;

        tracing::info!("Application state initialized");
        Ok(Self::new(
            Arc::new(PostgresPostRepository::new(db)),
            StorageKind::Postgres,
        ))
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect_postgres(_config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!("Running without postgres feature - using in-memory repository");
        Ok(Self::in_memory())
    }
}
