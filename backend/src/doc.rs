//! OpenAPI documentation for the HTTP transport.
//!
//! Served by Swagger UI at `/docs` in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::players::{
    CreatedBody, EmptyBody, PlayerBody, PlayerListBody, PlayerResponse,
};

/// OpenAPI document for the players routes and health probes.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster players API",
        description = "JSON interface to players records. The same operations are served over gRPC as roster.v1.Players."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::players::create_player,
        crate::inbound::http::players::get_player,
        crate::inbound::http::players::update_player,
        crate::inbound::http::players::delete_player,
        crate::inbound::http::players::list_players,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PlayerBody,
        PlayerResponse,
        CreatedBody,
        PlayerListBody,
        EmptyBody,
        ErrorBody
    )),
    tags(
        (name = "players", description = "Players records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
