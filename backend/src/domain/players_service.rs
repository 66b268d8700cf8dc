//! Store-backed players service.
//!
//! Implements the [`PlayersService`] driving port by validating input and
//! delegating to a [`PlayerRepository`]. Holds no mutable state of its own;
//! concurrency safety is the repository's concern.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{PlayerRepository, PlayerRepositoryError, PlayersService};
use crate::domain::{Error, Player, PlayerFields, PlayerId, PlayerValidationError};

fn map_repository_error(error: PlayerRepositoryError) -> Error {
    match error {
        PlayerRepositoryError::Connection { message } => {
            Error::store(format!("player store unavailable: {message}"))
        }
        PlayerRepositoryError::Query { message } => {
            Error::store(format!("player store error: {message}"))
        }
    }
}

fn map_validation_error(error: PlayerValidationError) -> Error {
    Error::validation(error.to_string())
}

fn not_found(id: PlayerId) -> Error {
    Error::not_found(format!("player {id} not found"))
}

/// Players service implementing the driving port over a repository.
#[derive(Clone)]
pub struct PlayersServiceImpl<R: ?Sized> {
    player_repo: Arc<R>,
}

impl<R: ?Sized> PlayersServiceImpl<R> {
    /// Create a new service over the given player repository.
    pub fn new(player_repo: Arc<R>) -> Self {
        Self { player_repo }
    }
}

#[async_trait]
impl<R> PlayersService for PlayersServiceImpl<R>
where
    R: PlayerRepository + ?Sized,
{
    async fn create_player(&self, fields: PlayerFields) -> Result<PlayerId, Error> {
        fields.validate().map_err(map_validation_error)?;
        self.player_repo
            .create(&fields)
            .await
            .map_err(map_repository_error)
    }

    async fn get_player(&self, id: PlayerId) -> Result<Player, Error> {
        self.player_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    async fn update_player(&self, id: PlayerId, fields: PlayerFields) -> Result<(), Error> {
        fields.validate().map_err(map_validation_error)?;
        let updated = self
            .player_repo
            .update(id, &fields)
            .await
            .map_err(map_repository_error)?;
        if updated { Ok(()) } else { Err(not_found(id)) }
    }

    async fn delete_player(&self, id: PlayerId) -> Result<(), Error> {
        let deleted = self
            .player_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if deleted { Ok(()) } else { Err(not_found(id)) }
    }

    async fn list_players(&self) -> Result<Vec<Player>, Error> {
        self.player_repo.list().await.map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "players_service_tests.rs"]
mod tests;
