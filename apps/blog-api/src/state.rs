//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use anyhow::Context;
#[cfg(feature = "postgres")]
use blog_infra::PostgresPostRepository;
#[cfg(feature = "postgres")]
use blog_infra::database::{connect, ensure_schema};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Build the application state with the configured post store.
    ///
    /// A configured database that cannot be reached is a startup error.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                let conn = connect(config)
                    .await
                    .context("failed to connect to database")?;
                ensure_schema(&conn)
                    .await
                    .context("failed to prepare blog_posts table")?;

                tracing::info!("Application state initialized (postgres store)");
                return Ok(Self::with_repository(Arc::new(
                    PostgresPostRepository::new(conn),
                )));
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
        }

        tracing::warn!("No database configured. Posts are kept in memory and lost on restart.");
        Ok(Self::with_repository(Arc::new(InMemoryPostRepository::new())))
    }
}
