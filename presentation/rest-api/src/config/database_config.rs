use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Optional database settings.
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (optional; persistence is off without it)
#[derive(Debug, Clone, Default)]
pub struct DatabaseSettings {
    pub url: Option<String>,
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        }
    }

    /// Builds the pool used by the audit log, or `None` when persistence is off.
    ///
    /// Never fails startup: a bad URL disables persistence, failed migrations
    /// are logged and left to surface on each write.
    pub async fn init_pool(&self) -> Option<PgPool> {
        let url = self.url.as_ref()?;

        let pool = match create_postgres_pool(&DatabaseConfig::new(url.clone())) {
            Ok(pool) => pool,
            Err(err) => {
                tracing::error!(error = %err, "persistence disabled");
                return None;
            }
        };

        match run_migrations(&pool).await {
            Ok(()) => tracing::info!("database migrations applied"),
            Err(err) => tracing::warn!(error = %err, "database migrations not applied"),
        }

        Some(pool)
    }
}
