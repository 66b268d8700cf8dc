//! Wire messages of the `roster.v1.Players` service.
//!
//! Hand-maintained prost structs matching `proto/players.proto`. The server
//! and client stubs are generated by `build.rs` and included below; they
//! refer to these messages through `super::`.

#![allow(clippy::derive_partial_eq_without_eq)]

/// Kind of service failure carried in a reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum ErrorCode {
    Unspecified = 0,
    Validation = 1,
    NotFound = 2,
    Store = 3,
    Transport = 4,
    Internal = 5,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ServiceError {
    #[prost(enumeration = "ErrorCode", tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Player {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, optional, tag = "3")]
    pub team: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub position: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PlayerFields {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, optional, tag = "2")]
    pub team: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub position: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreatePlayerRequest {
    #[prost(message, optional, tag = "1")]
    pub player: Option<PlayerFields>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreatePlayerReply {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(message, optional, tag = "2")]
    pub error: Option<ServiceError>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetPlayerRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetPlayerReply {
    #[prost(message, optional, tag = "1")]
    pub player: Option<Player>,
    #[prost(message, optional, tag = "2")]
    pub error: Option<ServiceError>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdatePlayerRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(message, optional, tag = "2")]
    pub player: Option<PlayerFields>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdatePlayerReply {
    #[prost(message, optional, tag = "1")]
    pub error: Option<ServiceError>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeletePlayerRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeletePlayerReply {
    #[prost(message, optional, tag = "1")]
    pub error: Option<ServiceError>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListPlayersRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListPlayersReply {
    #[prost(message, repeated, tag = "1")]
    pub players: Vec<Player>,
    #[prost(message, optional, tag = "2")]
    pub error: Option<ServiceError>,
}

include!(concat!(env!("OUT_DIR"), "/roster.v1.Players.rs"));
