//! Domain ports and supporting types for the hexagonal boundary.
//!
//! - [`PlayersService`] is the driving port reached by the endpoint layer.
//! - [`PlayerRepository`] is the driven port implemented by the store
//!   adapters in `outbound::persistence`, plus the in-memory store used by
//!   tests and local runs.

mod player_repository;
mod players_service;

#[cfg(test)]
pub use player_repository::MockPlayerRepository;
pub use player_repository::{InMemoryPlayerRepository, PlayerRepository, PlayerRepositoryError};
#[cfg(test)]
pub use players_service::MockPlayersService;
pub use players_service::PlayersService;
