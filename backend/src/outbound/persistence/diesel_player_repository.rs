//! PostgreSQL-backed `PlayerRepository` implementation using Diesel ORM.
//!
//! Thin adapter: it translates between Diesel rows and domain players and
//! maps failures onto [`PlayerRepositoryError`]. Concurrent callers are
//! serialized by the connection pool and PostgreSQL itself.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{PlayerRepository, PlayerRepositoryError};
use crate::domain::{Player, PlayerFields, PlayerId};

use super::models::{PlayerFieldsRow, PlayerRow};
use super::pool::{DbPool, PoolError};
use super::schema::players;

/// Diesel-backed implementation of the [`PlayerRepository`] port.
#[derive(Clone)]
pub struct DieselPlayerRepository {
    pool: DbPool,
}

impl DieselPlayerRepository {
    /// Store players through `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PlayerRepositoryError {
    PlayerRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> PlayerRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            PlayerRepositoryError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => PlayerRepositoryError::query("database query error"),
        _ => PlayerRepositoryError::query("database error"),
    }
}

#[async_trait]
impl PlayerRepository for DieselPlayerRepository {
    async fn create(&self, fields: &PlayerFields) -> Result<PlayerId, PlayerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id: i64 = diesel::insert_into(players::table)
            .values(PlayerFieldsRow::from(fields))
            .returning(players::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(PlayerId::new(id))
    }

    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, PlayerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = players::table
            .find(id.get())
            .select(PlayerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Player::from))
    }

    async fn update(
        &self,
        id: PlayerId,
        fields: &PlayerFields,
    ) -> Result<bool, PlayerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(players::table.find(id.get()))
            .set(PlayerFieldsRow::from(fields))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: PlayerId) -> Result<bool, PlayerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(players::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }

    async fn list(&self) -> Result<Vec<Player>, PlayerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = players::table
            .order(players::id.asc())
            .select(PlayerRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Player::from).collect())
    }
}
