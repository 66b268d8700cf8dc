//! Schema bootstrap through embedded Diesel migrations.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::domain::ports::PlayerRepositoryError;

/// Migrations from the `backend/migrations` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Connect once with a blocking connection and apply pending migrations.
///
/// Blocking; call from `spawn_blocking` inside an async runtime.
///
/// # Errors
/// `Connection` when the store is unreachable, `Query` when a migration
/// fails.
pub fn run_migrations(database_url: &str) -> Result<usize, PlayerRepositoryError> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|err| PlayerRepositoryError::connection(err.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| PlayerRepositoryError::query(format!("migration: {err}")))?;
    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(applied.len())
}
