//! gRPC inbound adapter for the `roster.v1.Players` service.

pub mod players;
pub mod proto;

pub use players::PlayersGrpcTransport;
