//! Port for player persistence.
//!
//! The store owns identity assignment and connection lifecycle. Lookups
//! report absence as `None`/`false` rather than as an error so the service
//! decides what "not found" means for each operation.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{Player, PlayerFields, PlayerId};

/// Errors raised by player repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerRepositoryError {
    /// The store could not be reached.
    #[error("player repository connection failed: {message}")]
    Connection { message: String },
    /// A statement failed while executing.
    #[error("player repository query failed: {message}")]
    Query { message: String },
}

impl PlayerRepositoryError {
    /// Construct a connection failure.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Construct a statement failure.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for creating, reading, updating, deleting and listing players.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Persist a new player and return its store-assigned identifier.
    async fn create(&self, fields: &PlayerFields) -> Result<PlayerId, PlayerRepositoryError>;

    /// Find a player by identifier.
    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, PlayerRepositoryError>;

    /// Replace a player's attributes. Returns `false` when no player matched.
    async fn update(
        &self,
        id: PlayerId,
        fields: &PlayerFields,
    ) -> Result<bool, PlayerRepositoryError>;

    /// Remove a player. Returns `false` when no player matched.
    async fn delete(&self, id: PlayerId) -> Result<bool, PlayerRepositoryError>;

    /// Return every stored player ordered by identifier.
    async fn list(&self) -> Result<Vec<Player>, PlayerRepositoryError>;
}

#[derive(Debug)]
struct InMemoryState {
    next_id: i64,
    players: BTreeMap<PlayerId, PlayerFields>,
}

/// Process-local store with deterministic sequential identifiers.
///
/// Identifiers start at 1 and are never reused, even after deletion, which
/// matches the `BIGSERIAL` behaviour of the PostgreSQL adapter.
///
/// # Examples
/// ```
/// use roster::domain::PlayerFields;
/// use roster::domain::ports::{InMemoryPlayerRepository, PlayerRepository};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryPlayerRepository::new();
/// let id = store.create(&PlayerFields::named("Alice")).await.unwrap();
/// assert_eq!(id.get(), 1);
/// # });
/// ```
#[derive(Debug)]
pub struct InMemoryPlayerRepository {
    state: Mutex<InMemoryState>,
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self {
            state: Mutex::new(InMemoryState {
                next_id: 1,
                players: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryPlayerRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, InMemoryState>, PlayerRepositoryError> {
        self.state
            .lock()
            .map_err(|_| PlayerRepositoryError::connection("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn create(&self, fields: &PlayerFields) -> Result<PlayerId, PlayerRepositoryError> {
        let mut state = self.lock()?;
        let id = PlayerId::new(state.next_id);
        state.next_id += 1;
        state.players.insert(id, fields.clone());
        Ok(id)
    }

    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, PlayerRepositoryError> {
        let state = self.lock()?;
        Ok(state
            .players
            .get(&id)
            .map(|fields| Player::new(id, fields.clone())))
    }

    async fn update(
        &self,
        id: PlayerId,
        fields: &PlayerFields,
    ) -> Result<bool, PlayerRepositoryError> {
        let mut state = self.lock()?;
        match state.players.get_mut(&id) {
            Some(stored) => {
                *stored = fields.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: PlayerId) -> Result<bool, PlayerRepositoryError> {
        let mut state = self.lock()?;
        Ok(state.players.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Player>, PlayerRepositoryError> {
        let state = self.lock()?;
        Ok(state
            .players
            .iter()
            .map(|(id, fields)| Player::new(*id, fields.clone()))
            .collect())
    }
}
