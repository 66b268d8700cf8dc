//! Domain primitives, ports and services for players records.
//!
//! Purpose: define the transport-agnostic player model, the error taxonomy
//! shared by every adapter, and the business-logic service (plus its
//! decorators) that both inbound transports reach through the endpoint layer.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure value.
//! - ErrorCode (alias to `error::ErrorCode`): stable failure category.
//! - Player, PlayerId, PlayerFields: the players record and its parts.
//! - PlayersServiceImpl: store-backed implementation of `ports::PlayersService`.
//! - LoggingPlayersService: decorator recording every service call.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod logging_service;
pub mod player;
pub mod players_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::logging_service::LoggingPlayersService;
pub use self::player::{Player, PlayerFields, PlayerId, PlayerValidationError};
pub use self::players_service::PlayersServiceImpl;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use roster::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<()> {
///     Err(Error::not_found("player 7 not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
