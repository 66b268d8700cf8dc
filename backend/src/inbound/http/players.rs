//! Players API handlers.
//!
//! ```text
//! POST   /players        {"name":"Alice","team":"Lions"}  -> 201 {"id":1}
//! GET    /players/{id}                                    -> 200 {"id":1,"name":"Alice",...}
//! PUT    /players/{id}   {"name":"Alicia"}                -> 200 {}
//! DELETE /players/{id}                                    -> 200 {}
//! GET    /players                                         -> 200 {"players":[...]}
//! ```
//!
//! Handlers decode the wire shape themselves so that malformed JSON and
//! non-numeric identifiers are answered with a `{"error": ...}` body before
//! any endpoint runs.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Player, PlayerFields, PlayerId};
use crate::endpoints::{
    CreatePlayerRequest, DeletePlayerRequest, Endpoints, GetPlayerRequest, RequestContext,
    UpdatePlayerRequest,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;

/// Request body for `POST /players` and `PUT /players/{id}`.
///
/// A missing `name` decodes as empty and is rejected by the service as a
/// validation failure, exactly as over gRPC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct PlayerBody {
    #[serde(default)]
    #[schema(example = "Alice")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl From<PlayerBody> for PlayerFields {
    fn from(body: PlayerBody) -> Self {
        Self {
            name: body.name,
            team: body.team,
            position: body.position,
        }
    }
}

/// A stored player as returned by `GET /players/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
    pub team: Option<String>,
    pub position: Option<String>,
}

impl From<Player> for PlayerResponse {
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

/// Body of `201 Created`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct CreatedBody {
    pub id: i64,
}

/// Body of `GET /players`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct PlayerListBody {
    pub players: Vec<PlayerResponse>,
}

/// Empty JSON object returned by update and delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct EmptyBody {}

fn decode_body(bytes: &[u8]) -> Result<PlayerFields, Error> {
    serde_json::from_slice::<PlayerBody>(bytes)
        .map(PlayerFields::from)
        .map_err(|err| Error::transport(format!("invalid player body: {err}")))
}

fn parse_id(raw: &str) -> Result<PlayerId, Error> {
    raw.parse::<i64>()
        .map(PlayerId::new)
        .map_err(|_| Error::transport(format!("invalid player id: {raw:?}")))
}

/// Create a player.
#[utoipa::path(
    post,
    path = "/players",
    request_body = PlayerBody,
    responses(
        (status = 201, description = "Player created", body = CreatedBody),
        (status = 400, description = "Malformed body or blank name", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["players"],
    operation_id = "createPlayer"
)]
#[post("/players")]
pub async fn create_player(
    endpoints: web::Data<Endpoints>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let player = decode_body(&body)?;
    let response = endpoints
        .create_player(RequestContext::current_or_new(), CreatePlayerRequest { player })
        .await?;
    let id = response.outcome?;
    Ok(HttpResponse::Created().json(CreatedBody { id: id.get() }))
}

/// Fetch one player.
#[utoipa::path(
    get,
    path = "/players/{id}",
    params(("id" = i64, Path, description = "Player identifier")),
    responses(
        (status = 200, description = "Player", body = PlayerResponse),
        (status = 400, description = "Non-numeric identifier", body = ErrorBody),
        (status = 404, description = "Unknown player", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["players"],
    operation_id = "getPlayer"
)]
#[get("/players/{id}")]
pub async fn get_player(
    endpoints: web::Data<Endpoints>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PlayerResponse>> {
    let id = parse_id(&path)?;
    let response = endpoints
        .get_player(RequestContext::current_or_new(), GetPlayerRequest { id })
        .await?;
    Ok(web::Json(response.outcome?.into()))
}

/// Replace a player's attributes.
#[utoipa::path(
    put,
    path = "/players/{id}",
    params(("id" = i64, Path, description = "Player identifier")),
    request_body = PlayerBody,
    responses(
        (status = 200, description = "Player updated", body = EmptyBody),
        (status = 400, description = "Malformed request or blank name", body = ErrorBody),
        (status = 404, description = "Unknown player", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["players"],
    operation_id = "updatePlayer"
)]
#[put("/players/{id}")]
pub async fn update_player(
    endpoints: web::Data<Endpoints>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<EmptyBody>> {
    let id = parse_id(&path)?;
    let player = decode_body(&body)?;
    let response = endpoints
        .update_player(
            RequestContext::current_or_new(),
            UpdatePlayerRequest { id, player },
        )
        .await?;
    response.outcome?;
    Ok(web::Json(EmptyBody {}))
}

/// Delete a player. A second delete of the same id is a 404.
#[utoipa::path(
    delete,
    path = "/players/{id}",
    params(("id" = i64, Path, description = "Player identifier")),
    responses(
        (status = 200, description = "Player deleted", body = EmptyBody),
        (status = 400, description = "Non-numeric identifier", body = ErrorBody),
        (status = 404, description = "Unknown player", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["players"],
    operation_id = "deletePlayer"
)]
#[delete("/players/{id}")]
pub async fn delete_player(
    endpoints: web::Data<Endpoints>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EmptyBody>> {
    let id = parse_id(&path)?;
    let response = endpoints
        .delete_player(RequestContext::current_or_new(), DeletePlayerRequest { id })
        .await?;
    response.outcome?;
    Ok(web::Json(EmptyBody {}))
}

/// List every player, ordered by identifier.
#[utoipa::path(
    get,
    path = "/players",
    responses(
        (status = 200, description = "Players", body = PlayerListBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["players"],
    operation_id = "listPlayers"
)]
#[get("/players")]
pub async fn list_players(endpoints: web::Data<Endpoints>) -> ApiResult<web::Json<PlayerListBody>> {
    let response = endpoints
        .list_players(RequestContext::current_or_new())
        .await?;
    let players = response.outcome?.into_iter().map(PlayerResponse::from).collect();
    Ok(web::Json(PlayerListBody { players }))
}

#[cfg(test)]
#[path = "players_tests.rs"]
mod tests;
