//! Request and response envelopes exchanged with endpoints.
//!
//! Every operation has a request struct and a response struct. The response
//! carries `outcome: Result<_, Error>` so success and failure can never both
//! be populated. The tagged [`EndpointRequest`] and [`EndpointResponse`]
//! enums are the generic shapes every [`Endpoint`](super::Endpoint) accepts
//! and produces.

use std::fmt;

use crate::domain::{Error, Player, PlayerFields, PlayerId};

/// The operations offered by the players capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreatePlayer,
    GetPlayer,
    UpdatePlayer,
    DeletePlayer,
    ListPlayers,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::CreatePlayer,
        Self::GetPlayer,
        Self::UpdatePlayer,
        Self::DeletePlayer,
        Self::ListPlayers,
    ];

    /// Stable snake_case name, matching the service method.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatePlayer => "create_player",
            Self::GetPlayer => "get_player",
            Self::UpdatePlayer => "update_player",
            Self::DeletePlayer => "delete_player",
            Self::ListPlayers => "list_players",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePlayerRequest {
    pub player: PlayerFields,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePlayerResponse {
    pub outcome: Result<PlayerId, Error>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetPlayerRequest {
    pub id: PlayerId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPlayerResponse {
    pub outcome: Result<Player, Error>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlayerRequest {
    pub id: PlayerId,
    pub player: PlayerFields,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlayerResponse {
    pub outcome: Result<(), Error>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePlayerRequest {
    pub id: PlayerId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePlayerResponse {
    pub outcome: Result<(), Error>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListPlayersRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPlayersResponse {
    pub outcome: Result<Vec<Player>, Error>,
}

/// Generic request accepted by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointRequest {
    CreatePlayer(CreatePlayerRequest),
    GetPlayer(GetPlayerRequest),
    UpdatePlayer(UpdatePlayerRequest),
    DeletePlayer(DeletePlayerRequest),
    ListPlayers(ListPlayersRequest),
}

/// Generic response produced by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointResponse {
    CreatePlayer(CreatePlayerResponse),
    GetPlayer(GetPlayerResponse),
    UpdatePlayer(UpdatePlayerResponse),
    DeletePlayer(DeletePlayerResponse),
    ListPlayers(ListPlayersResponse),
}

/// Generate the `From`/`TryFrom` conversions between an envelope and its
/// per-operation payloads, plus an `operation()` accessor.
///
/// `TryFrom` hands the envelope back untouched when the variant does not
/// match so callers can report what they actually received.
macro_rules! envelope_variants {
    ($envelope:ident { $($variant:ident($payload:ty)),+ $(,)? }) => {
        $(
            impl From<$payload> for $envelope {
                fn from(payload: $payload) -> Self {
                    Self::$variant(payload)
                }
            }

            impl TryFrom<$envelope> for $payload {
                type Error = $envelope;

                fn try_from(envelope: $envelope) -> Result<Self, Self::Error> {
                    match envelope {
                        $envelope::$variant(payload) => Ok(payload),
                        other => Err(other),
                    }
                }
            }
        )+

        impl $envelope {
            /// The operation this envelope belongs to.
            pub fn operation(&self) -> Operation {
                match self {
                    $(Self::$variant(_) => Operation::$variant,)+
                }
            }
        }
    };
}

envelope_variants!(EndpointRequest {
    CreatePlayer(CreatePlayerRequest),
    GetPlayer(GetPlayerRequest),
    UpdatePlayer(UpdatePlayerRequest),
    DeletePlayer(DeletePlayerRequest),
    ListPlayers(ListPlayersRequest),
});

envelope_variants!(EndpointResponse {
    CreatePlayer(CreatePlayerResponse),
    GetPlayer(GetPlayerResponse),
    UpdatePlayer(UpdatePlayerResponse),
    DeletePlayer(DeletePlayerResponse),
    ListPlayers(ListPlayersResponse),
});
