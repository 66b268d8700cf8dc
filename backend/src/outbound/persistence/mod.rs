//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the store behind the [`PlayerRepository`] port with async
//! support through `diesel-async` and `bb8` connection pooling. Row structs
//! and schema definitions stay private to this module.
//!
//! [`PlayerRepository`]: crate::domain::ports::PlayerRepository

mod diesel_player_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_player_repository::DieselPlayerRepository;
pub use migrations::{MIGRATIONS, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
