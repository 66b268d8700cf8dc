//! Driving port for the players capability.
//!
//! Both inbound transports reach this port through the endpoint layer, so
//! every implementation (the store-backed service and its decorators) sees
//! the same calls regardless of wire protocol.

use async_trait::async_trait;

use crate::domain::{Error, Player, PlayerFields, PlayerId};

/// Business operations over players records.
///
/// Implementations hold no per-request mutable state and are shared across
/// concurrent callers behind an `Arc`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayersService: Send + Sync {
    /// Create a player, returning the store-assigned identifier.
    ///
    /// Fails with `Validation` when required fields are absent and with
    /// `Store` on persistence failure.
    async fn create_player(&self, fields: PlayerFields) -> Result<PlayerId, Error>;

    /// Fetch a player. Fails with `NotFound` for an unknown identifier.
    async fn get_player(&self, id: PlayerId) -> Result<Player, Error>;

    /// Replace a player's attributes. Fails with `NotFound` for an unknown
    /// identifier.
    async fn update_player(&self, id: PlayerId, fields: PlayerFields) -> Result<(), Error>;

    /// Delete a player. Fails with `NotFound` for an unknown identifier,
    /// including one that was already deleted.
    async fn delete_player(&self, id: PlayerId) -> Result<(), Error>;

    /// List every player. An empty store yields an empty vector.
    async fn list_players(&self) -> Result<Vec<Player>, Error>;
}
