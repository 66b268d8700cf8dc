//! Endpoint layer between the transports and the players service.
//!
//! An [`Endpoint`] is a uniform async function from a generic
//! [`EndpointRequest`] to a generic [`EndpointResponse`]. Each operation gets
//! one endpoint that unwraps its request variant, calls the shared
//! [`PlayersService`] and wraps the outcome. Service errors travel inside the
//! response envelope; an [`EndpointError`] only signals that the layers were
//! wired together incorrectly.
//!
//! Transports use [`Endpoints`], whose typed helpers keep compile-time shape
//! checking while routing through the generic envelopes.

mod envelopes;

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::PlayersService;
use crate::domain::{Error, TraceId};

pub use envelopes::{
    CreatePlayerRequest, CreatePlayerResponse, DeletePlayerRequest, DeletePlayerResponse,
    EndpointRequest, EndpointResponse, GetPlayerRequest, GetPlayerResponse, ListPlayersRequest,
    ListPlayersResponse, Operation, UpdatePlayerRequest, UpdatePlayerResponse,
};

/// Wiring failures between a transport and an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    /// The request variant does not belong to the endpoint's operation.
    #[error("{endpoint} endpoint received a {received} request")]
    MalformedRequest {
        endpoint: Operation,
        received: Operation,
    },
    /// The endpoint answered with a response for a different operation.
    #[error("{expected} request produced a {received} response")]
    UnexpectedResponse {
        expected: Operation,
        received: Operation,
    },
}

impl From<EndpointError> for Error {
    fn from(err: EndpointError) -> Self {
        Error::internal(err.to_string())
    }
}

/// Per-request context handed to endpoints by the transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    trace_id: TraceId,
}

impl RequestContext {
    /// Context for a request correlated by `trace_id`.
    pub fn new(trace_id: TraceId) -> Self {
        Self { trace_id }
    }

    /// Reuse the trace identifier in scope, or mint a fresh one.
    ///
    /// HTTP requests already run inside the `Trace` middleware scope; other
    /// callers get a new identifier.
    pub fn current_or_new() -> Self {
        Self::new(TraceId::current_or_generate())
    }

    /// The request's trace identifier.
    pub fn trace_id(&self) -> TraceId {
        self.trace_id
    }
}

/// Uniform async entry point for one operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Endpoint: Send + Sync {
    /// The operation whose requests this endpoint accepts.
    fn operation(&self) -> Operation;

    /// Handle `request`, returning the wrapped service outcome.
    ///
    /// # Errors
    /// [`EndpointError::MalformedRequest`] when `request` belongs to another
    /// operation. Service failures are carried in the response instead.
    async fn call(
        &self,
        ctx: RequestContext,
        request: EndpointRequest,
    ) -> Result<EndpointResponse, EndpointError>;
}

/// Declare an endpoint struct for one operation.
///
/// The generated `call` unwraps the operation's request variant into
/// `$request`, binds the service to `$service`, evaluates `$call` with the
/// context's trace identifier in scope and wraps the result as the response
/// outcome.
macro_rules! player_endpoint {
    (
        $(#[$meta:meta])*
        $name:ident => $op:ident, |$service:ident, $request:ident| $call:expr
    ) => {
        paste::paste! {
            $(#[$meta])*
            #[derive(Clone)]
            pub struct $name {
                service: Arc<dyn PlayersService>,
            }

            impl $name {
                pub fn new(service: Arc<dyn PlayersService>) -> Self {
                    Self { service }
                }
            }

            #[async_trait]
            impl Endpoint for $name {
                fn operation(&self) -> Operation {
                    Operation::$op
                }

                async fn call(
                    &self,
                    ctx: RequestContext,
                    request: EndpointRequest,
                ) -> Result<EndpointResponse, EndpointError> {
                    let $request = [<$op Request>]::try_from(request).map_err(|other| {
                        EndpointError::MalformedRequest {
                            endpoint: Operation::$op,
                            received: other.operation(),
                        }
                    })?;
                    let $service = self.service.as_ref();
                    let outcome = ctx.trace_id().scope(async move { $call }).await;
                    Ok([<$op Response>] { outcome }.into())
                }
            }
        }
    };
}

player_endpoint!(
    /// Endpoint for `create_player`.
    CreatePlayerEndpoint => CreatePlayer,
    |service, request| service.create_player(request.player).await
);

player_endpoint!(
    /// Endpoint for `get_player`.
    GetPlayerEndpoint => GetPlayer,
    |service, request| service.get_player(request.id).await
);

player_endpoint!(
    /// Endpoint for `update_player`.
    UpdatePlayerEndpoint => UpdatePlayer,
    |service, request| service.update_player(request.id, request.player).await
);

player_endpoint!(
    /// Endpoint for `delete_player`.
    DeletePlayerEndpoint => DeletePlayer,
    |service, request| service.delete_player(request.id).await
);

player_endpoint!(
    /// Endpoint for `list_players`.
    ListPlayersEndpoint => ListPlayers,
    |service, _request| service.list_players().await
);

/// The five player endpoints, shared by every transport.
///
/// Cloning is cheap; all clones route to the same endpoint instances and so
/// to the same service.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use roster::domain::PlayersServiceImpl;
/// use roster::domain::ports::InMemoryPlayerRepository;
/// use roster::endpoints::{Endpoints, GetPlayerRequest, RequestContext};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let service = PlayersServiceImpl::new(Arc::new(InMemoryPlayerRepository::new()));
/// let endpoints = Endpoints::new(Arc::new(service));
/// let response = endpoints
///     .get_player(RequestContext::current_or_new(), GetPlayerRequest { id: 7.into() })
///     .await
///     .expect("endpoints are wired");
/// assert!(response.outcome.is_err());
/// # });
/// ```
#[derive(Clone)]
pub struct Endpoints {
    create: Arc<dyn Endpoint>,
    get: Arc<dyn Endpoint>,
    update: Arc<dyn Endpoint>,
    delete: Arc<dyn Endpoint>,
    list: Arc<dyn Endpoint>,
}

impl Endpoints {
    /// Build one endpoint per operation over the same `service`.
    pub fn new(service: Arc<dyn PlayersService>) -> Self {
        Self {
            create: Arc::new(CreatePlayerEndpoint::new(Arc::clone(&service))),
            get: Arc::new(GetPlayerEndpoint::new(Arc::clone(&service))),
            update: Arc::new(UpdatePlayerEndpoint::new(Arc::clone(&service))),
            delete: Arc::new(DeletePlayerEndpoint::new(Arc::clone(&service))),
            list: Arc::new(ListPlayersEndpoint::new(service)),
        }
    }

    /// Install `endpoint` in the slot for `operation`, replacing the default.
    ///
    /// The slot is chosen by the caller, not by `endpoint.operation()`, so a
    /// mis-wired endpoint can be installed and surfaces as an
    /// [`EndpointError`] on first use.
    #[must_use]
    pub fn with_endpoint(mut self, operation: Operation, endpoint: Arc<dyn Endpoint>) -> Self {
        let slot = match operation {
            Operation::CreatePlayer => &mut self.create,
            Operation::GetPlayer => &mut self.get,
            Operation::UpdatePlayer => &mut self.update,
            Operation::DeletePlayer => &mut self.delete,
            Operation::ListPlayers => &mut self.list,
        };
        *slot = endpoint;
        self
    }

    async fn invoke<Req, Resp>(
        endpoint: &dyn Endpoint,
        ctx: RequestContext,
        request: Req,
    ) -> Result<Resp, EndpointError>
    where
        Req: Into<EndpointRequest>,
        Resp: TryFrom<EndpointResponse, Error = EndpointResponse>,
    {
        let request = request.into();
        let expected = request.operation();
        let response = endpoint.call(ctx, request).await?;
        Resp::try_from(response).map_err(|other| EndpointError::UnexpectedResponse {
            expected,
            received: other.operation(),
        })
    }

    /// Route a create request through the create endpoint.
    ///
    /// # Errors
    /// [`EndpointError`] when the installed endpoint is mis-wired.
    pub async fn create_player(
        &self,
        ctx: RequestContext,
        request: CreatePlayerRequest,
    ) -> Result<CreatePlayerResponse, EndpointError> {
        Self::invoke(self.create.as_ref(), ctx, request).await
    }

    /// Route a lookup through the get endpoint.
    ///
    /// # Errors
    /// [`EndpointError`] when the installed endpoint is mis-wired.
    pub async fn get_player(
        &self,
        ctx: RequestContext,
        request: GetPlayerRequest,
    ) -> Result<GetPlayerResponse, EndpointError> {
        Self::invoke(self.get.as_ref(), ctx, request).await
    }

    /// Route a full update through the update endpoint.
    ///
    /// # Errors
    /// [`EndpointError`] when the installed endpoint is mis-wired.
    pub async fn update_player(
        &self,
        ctx: RequestContext,
        request: UpdatePlayerRequest,
    ) -> Result<UpdatePlayerResponse, EndpointError> {
        Self::invoke(self.update.as_ref(), ctx, request).await
    }

    /// Route a delete through the delete endpoint.
    ///
    /// # Errors
    /// [`EndpointError`] when the installed endpoint is mis-wired.
    pub async fn delete_player(
        &self,
        ctx: RequestContext,
        request: DeletePlayerRequest,
    ) -> Result<DeletePlayerResponse, EndpointError> {
        Self::invoke(self.delete.as_ref(), ctx, request).await
    }

    /// Route a listing through the list endpoint.
    ///
    /// # Errors
    /// [`EndpointError`] when the installed endpoint is mis-wired.
    pub async fn list_players(
        &self,
        ctx: RequestContext,
    ) -> Result<ListPlayersResponse, EndpointError> {
        Self::invoke(self.list.as_ref(), ctx, ListPlayersRequest).await
    }
}
