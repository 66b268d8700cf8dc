//! Store connection and service wiring performed before any listener opens.

use std::sync::Arc;

use tracing::{Span, debug};

use crate::domain::ports::{PlayerRepository, PlayerRepositoryError, PlayersService};
use crate::domain::{LoggingPlayersService, PlayersServiceImpl};
use crate::outbound::persistence::{DbPool, PoolConfig, PoolError, run_migrations};

/// Fatal failures while preparing the store.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to connect to database: {0}")]
    Store(#[from] PlayerRepositoryError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("schema bootstrap task failed: {0}")]
    Bootstrap(#[from] tokio::task::JoinError),
}

/// Apply pending migrations, then build the connection pool.
///
/// The migration step opens a real connection, so an unreachable store fails
/// here rather than on the first request.
///
/// # Errors
/// [`StartupError::Store`] when the store is unreachable or a migration
/// fails; [`StartupError::Pool`] when the pool cannot be built.
pub async fn connect_store(database_url: String, pool_size: u32) -> Result<DbPool, StartupError> {
    let url = database_url.clone();
    let applied = tokio::task::spawn_blocking(move || run_migrations(&url)).await??;
    debug!(applied, "schema up to date");
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(pool_size)).await?;
    Ok(pool)
}

/// The store-backed service wrapped in the logging decorator.
///
/// `log` is the decorator's logging handle; every call is recorded against
/// it.
pub fn build_players_service(
    repository: Arc<dyn PlayerRepository>,
    log: Span,
) -> Arc<dyn PlayersService> {
    let base = PlayersServiceImpl::new(repository);
    Arc::new(LoggingPlayersService::new(base, log))
}
