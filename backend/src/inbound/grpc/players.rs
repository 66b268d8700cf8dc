//! Translation between `roster.v1.Players` messages and the endpoint layer.
//!
//! Each method builds the endpoint request from the wire message, invokes the
//! shared [`Endpoints`] and copies the outcome into the reply. Service errors
//! travel in the reply's `error` field; only decoding and wiring failures
//! become a gRPC [`Status`].

use tonic::metadata::MetadataValue;
use tonic::{Request, Response, Status};
use tracing::error;

use super::proto::{self, players_server::Players, players_server::PlayersServer};
use crate::domain::{Error, ErrorCode, Player, PlayerFields, PlayerId, TRACE_ID_HEADER, TraceId};
use crate::endpoints::{
    CreatePlayerRequest, DeletePlayerRequest, EndpointError, Endpoints, GetPlayerRequest,
    RequestContext, UpdatePlayerRequest,
};

/// gRPC face of the players endpoints.
#[derive(Clone)]
pub struct PlayersGrpcTransport {
    endpoints: Endpoints,
}

impl PlayersGrpcTransport {
    /// Serve `endpoints` over gRPC.
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    /// Wrap the transport in the generated tonic service.
    pub fn into_server(self) -> PlayersServer<Self> {
        PlayersServer::new(self)
    }
}

impl From<ErrorCode> for proto::ErrorCode {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::Validation => Self::Validation,
            ErrorCode::NotFound => Self::NotFound,
            ErrorCode::Store => Self::Store,
            ErrorCode::Transport => Self::Transport,
            ErrorCode::Internal => Self::Internal,
        }
    }
}

impl From<&Error> for proto::ServiceError {
    fn from(error: &Error) -> Self {
        Self {
            code: proto::ErrorCode::from(error.code()) as i32,
            message: error.message().to_owned(),
        }
    }
}

impl From<proto::PlayerFields> for PlayerFields {
    fn from(fields: proto::PlayerFields) -> Self {
        Self {
            name: fields.name,
            team: fields.team,
            position: fields.position,
        }
    }
}

impl From<Player> for proto::Player {
    fn from(player: Player) -> Self {
        let Player { id, fields } = player;
        Self {
            id: id.get(),
            name: fields.name,
            team: fields.team,
            position: fields.position,
        }
    }
}

fn required_player(player: Option<proto::PlayerFields>) -> Result<PlayerFields, Status> {
    player
        .map(PlayerFields::from)
        .ok_or_else(|| Status::invalid_argument("player is required"))
}

fn wiring_failure(err: EndpointError) -> Status {
    error!(error = %err, "players endpoint wiring failure");
    Status::internal("Internal server error")
}

/// Wrap `reply`, echoing the trace identifier in response metadata.
fn traced<T>(ctx: RequestContext, reply: T) -> Response<T> {
    let mut response = Response::new(reply);
    let trace_id = ctx.trace_id();
    match MetadataValue::try_from(trace_id.to_string()) {
        Ok(value) => {
            response.metadata_mut().insert(TRACE_ID_HEADER, value);
        }
        Err(err) => {
            error!(error = %err, %trace_id, "failed to encode trace identifier metadata");
        }
    }
    response
}

fn new_context() -> RequestContext {
    RequestContext::new(TraceId::generate())
}

#[tonic::async_trait]
impl Players for PlayersGrpcTransport {
    async fn create_player(
        &self,
        request: Request<proto::CreatePlayerRequest>,
    ) -> Result<Response<proto::CreatePlayerReply>, Status> {
        let player = required_player(request.into_inner().player)?;
        let ctx = new_context();
        let response = self
            .endpoints
            .create_player(ctx, CreatePlayerRequest { player })
            .await
            .map_err(wiring_failure)?;
        let reply = match response.outcome {
            Ok(id) => proto::CreatePlayerReply {
                id: id.get(),
                error: None,
            },
            Err(err) => proto::CreatePlayerReply {
                id: 0,
                error: Some((&err).into()),
            },
        };
        Ok(traced(ctx, reply))
    }

    async fn get_player(
        &self,
        request: Request<proto::GetPlayerRequest>,
    ) -> Result<Response<proto::GetPlayerReply>, Status> {
        let id = PlayerId::new(request.into_inner().id);
        let ctx = new_context();
        let response = self
            .endpoints
            .get_player(ctx, GetPlayerRequest { id })
            .await
            .map_err(wiring_failure)?;
        let reply = match response.outcome {
            Ok(player) => proto::GetPlayerReply {
                player: Some(player.into()),
                error: None,
            },
            Err(err) => proto::GetPlayerReply {
                player: None,
                error: Some((&err).into()),
            },
        };
        Ok(traced(ctx, reply))
    }

    async fn update_player(
        &self,
        request: Request<proto::UpdatePlayerRequest>,
    ) -> Result<Response<proto::UpdatePlayerReply>, Status> {
        let proto::UpdatePlayerRequest { id, player } = request.into_inner();
        let player = required_player(player)?;
        let ctx = new_context();
        let response = self
            .endpoints
            .update_player(
                ctx,
                UpdatePlayerRequest {
                    id: PlayerId::new(id),
                    player,
                },
            )
            .await
            .map_err(wiring_failure)?;
        let reply = proto::UpdatePlayerReply {
            error: response.outcome.err().as_ref().map(Into::into),
        };
        Ok(traced(ctx, reply))
    }

    async fn delete_player(
        &self,
        request: Request<proto::DeletePlayerRequest>,
    ) -> Result<Response<proto::DeletePlayerReply>, Status> {
        let id = PlayerId::new(request.into_inner().id);
        let ctx = new_context();
        let response = self
            .endpoints
            .delete_player(ctx, DeletePlayerRequest { id })
            .await
            .map_err(wiring_failure)?;
        let reply = proto::DeletePlayerReply {
            error: response.outcome.err().as_ref().map(Into::into),
        };
        Ok(traced(ctx, reply))
    }

    async fn list_players(
        &self,
        _request: Request<proto::ListPlayersRequest>,
    ) -> Result<Response<proto::ListPlayersReply>, Status> {
        let ctx = new_context();
        let response = self
            .endpoints
            .list_players(ctx)
            .await
            .map_err(wiring_failure)?;
        let reply = match response.outcome {
            Ok(players) => proto::ListPlayersReply {
                players: players.into_iter().map(Into::into).collect(),
                error: None,
            },
            Err(err) => proto::ListPlayersReply {
                players: Vec::new(),
                error: Some((&err).into()),
            },
        };
        Ok(traced(ctx, reply))
    }
}

#[cfg(test)]
#[path = "players_tests.rs"]
mod tests;
