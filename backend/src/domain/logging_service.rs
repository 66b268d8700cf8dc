//! Logging decorator for the players service.
//!
//! [`LoggingPlayersService`] wraps any [`PlayersService`] and records every
//! call against the `tracing::Span` it was constructed with. The span is the
//! logging handle: it carries the key/value context accumulated by the
//! caller (for example `tag = "players"`), and every event emitted here is
//! parented to it. The wrapped result is returned untouched.

use std::fmt;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{Span, debug, field, info, warn};

use crate::domain::ports::PlayersService;
use crate::domain::{Error, Player, PlayerFields, PlayerId, TraceId};

/// A single in-flight call, captured before delegation.
struct Call {
    method: &'static str,
    input: String,
    started: Instant,
}

/// Decorator recording method, input summary, outcome and elapsed time.
///
/// Decorators compose: a `LoggingPlayersService` may wrap another one.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use roster::domain::ports::{InMemoryPlayerRepository, PlayersService};
/// use roster::domain::{LoggingPlayersService, PlayersServiceImpl};
///
/// let base = PlayersServiceImpl::new(Arc::new(InMemoryPlayerRepository::new()));
/// let span = tracing::info_span!("players", tag = "players");
/// let service: Arc<dyn PlayersService> = Arc::new(LoggingPlayersService::new(base, span));
/// # let _ = service;
/// ```
pub struct LoggingPlayersService<S> {
    inner: S,
    span: Span,
}

impl<S> LoggingPlayersService<S> {
    /// Wrap `inner`, parenting every event to `span`.
    pub fn new(inner: S, span: Span) -> Self {
        Self { inner, span }
    }

    fn start(&self, method: &'static str, input: String) -> Call {
        debug!(
            parent: &self.span,
            method,
            input = %input,
            trace_id = TraceId::current().map(field::display),
            "call started"
        );
        Call {
            method,
            input,
            started: Instant::now(),
        }
    }

    fn finish<T>(&self, call: Call, result: &Result<T, Error>, summarise: impl FnOnce(&T) -> String) {
        let took = call.started.elapsed();
        let trace_id = TraceId::current().map(field::display);
        match result {
            Ok(value) => info!(
                parent: &self.span,
                method = call.method,
                input = %call.input,
                output = %summarise(value),
                ?took,
                trace_id,
                "call completed"
            ),
            Err(error) => warn!(
                parent: &self.span,
                method = call.method,
                input = %call.input,
                error = %error,
                code = %error.code(),
                ?took,
                trace_id,
                "call failed"
            ),
        }
    }
}

fn describe_fields(fields: &PlayerFields) -> String {
    let mut summary = format!("name={:?}", fields.name);
    if let Some(team) = &fields.team {
        summary.push_str(&format!(" team={team:?}"));
    }
    if let Some(position) = &fields.position {
        summary.push_str(&format!(" position={position:?}"));
    }
    summary
}

fn describe_id(id: impl fmt::Display) -> String {
    format!("id={id}")
}

#[async_trait]
impl<S> PlayersService for LoggingPlayersService<S>
where
    S: PlayersService,
{
    async fn create_player(&self, fields: PlayerFields) -> Result<PlayerId, Error> {
        let call = self.start("create_player", describe_fields(&fields));
        let result = self.inner.create_player(fields).await;
        self.finish(call, &result, |id| describe_id(id));
        result
    }

    async fn get_player(&self, id: PlayerId) -> Result<Player, Error> {
        let call = self.start("get_player", describe_id(id));
        let result = self.inner.get_player(id).await;
        self.finish(call, &result, |player| describe_fields(&player.fields));
        result
    }

    async fn update_player(&self, id: PlayerId, fields: PlayerFields) -> Result<(), Error> {
        let call = self.start(
            "update_player",
            format!("{} {}", describe_id(id), describe_fields(&fields)),
        );
        let result = self.inner.update_player(id, fields).await;
        self.finish(call, &result, |()| "updated".to_owned());
        result
    }

    async fn delete_player(&self, id: PlayerId) -> Result<(), Error> {
        let call = self.start("delete_player", describe_id(id));
        let result = self.inner.delete_player(id).await;
        self.finish(call, &result, |()| "deleted".to_owned());
        result
    }

    async fn list_players(&self) -> Result<Vec<Player>, Error> {
        let call = self.start("list_players", String::new());
        let result = self.inner.list_players().await;
        self.finish(call, &result, |players| format!("count={}", players.len()));
        result
    }
}
