//! Generates the `roster.v1.Players` gRPC server and client stubs.
//!
//! Message types are hand-maintained prost structs in
//! `src/inbound/grpc/proto.rs` mirroring `proto/players.proto`; only the
//! service plumbing is generated here.

use tonic_build::manual::{Builder, Method, Service};

const CODEC: &str = "tonic::codec::ProstCodec";

fn method(name: &str, route: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route)
        .input_type(format!("super::{input}"))
        .output_type(format!("super::{output}"))
        .codec_path(CODEC)
        .build()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let players = Service::builder()
        .name("Players")
        .package("roster.v1")
        .method(method(
            "create_player",
            "CreatePlayer",
            "CreatePlayerRequest",
            "CreatePlayerReply",
        ))
        .method(method(
            "get_player",
            "GetPlayer",
            "GetPlayerRequest",
            "GetPlayerReply",
        ))
        .method(method(
            "update_player",
            "UpdatePlayer",
            "UpdatePlayerRequest",
            "UpdatePlayerReply",
        ))
        .method(method(
            "delete_player",
            "DeletePlayer",
            "DeletePlayerRequest",
            "DeletePlayerReply",
        ))
        .method(method(
            "list_players",
            "ListPlayers",
            "ListPlayersRequest",
            "ListPlayersReply",
        ))
        .build();

    Builder::new().compile(&[players]);
}
