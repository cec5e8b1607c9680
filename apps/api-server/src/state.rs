//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use migration::{Migrator, MigratorTrait};

use anipulse_core::ports::ContentStore;
use anipulse_infra::SqliteContentStore;
use anipulse_infra::database::{connect, seed};

use crate::config::AppConfig;

/// Shared application state.
///
/// The content store is injected here rather than reached through any
/// process-wide handle, so handlers can be exercised against a throwaway
/// in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
}

impl AppState {
    /// Connect to the database, bring the schema up to date, seed the
    /// demonstration content if empty, and build the state.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let db = connect(&config.database)
            .await
            .context("failed to connect to database")?;

        Migrator::up(&db, None)
            .await
            .context("failed to run schema migrations")?;

        seed::seed_demo_content(&db)
            .await
            .context("failed to seed demonstration content")?;

        tracing::info!("Application state initialized");

        Ok(Self {
            store: Arc::new(SqliteContentStore::new(db)),
        })
    }
}
