//! Server bootstrap: both transports plus a signal watcher, fail-fast.
//!
//! [`serve`] spawns three long-lived tasks (the HTTP listener, the gRPC
//! listener and the signal watcher). Each pushes its terminal event onto one
//! shared channel. The first event wins; the remaining tasks are abandoned
//! in place, without draining in-flight requests.

mod config;
mod signals;
mod startup;

pub use config::ServerConfig;
pub use signals::wait_for_termination;
pub use startup::{StartupError, build_players_service, connect_store};

use std::fmt;
use std::io;
use std::net::SocketAddr;

use actix_web::{HttpServer, web};
use tokio::sync::mpsc;
use tonic::transport::Server;
use tonic::transport::server::TcpIncoming;
use tracing::{Span, debug, info};

use crate::endpoints::Endpoints;
use crate::inbound::grpc::PlayersGrpcTransport;
use crate::inbound::http::{HealthState, build_app};

/// Lifecycle phases, logged on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Loading configuration and wiring the service chain.
    Starting,
    /// Listeners spawned; waiting for the first terminal event.
    Running,
    /// A terminal event arrived; the process is about to exit.
    Terminating,
}

impl ServerState {
    /// Lowercase name used in log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Running => "running",
            Self::Terminating => "terminating",
        }
    }

    /// Record the transition into this state against `log`.
    pub fn enter(self, log: &Span) {
        info!(parent: log, state = self.as_str(), "server state changed");
    }
}

impl fmt::Display for ServerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The event that ended the server.
#[derive(Debug, thiserror::Error)]
pub enum Termination {
    /// The HTTP listener could not bind or stopped with an error.
    #[error("http listener failed: {0}")]
    Http(#[source] io::Error),
    /// The HTTP listener stopped without an error.
    #[error("http listener closed")]
    HttpClosed,
    /// The gRPC listener could not bind its address.
    #[error("grpc listener could not bind: {0}")]
    GrpcBind(#[source] io::Error),
    /// The gRPC server stopped with a transport error.
    #[error("grpc listener failed: {0}")]
    Grpc(#[source] tonic::transport::Error),
    /// The gRPC server stopped without an error.
    #[error("grpc listener closed")]
    GrpcClosed,
    /// A termination signal, by name (`interrupt` or `terminated`).
    #[error("{0}")]
    Signal(&'static str),
    /// The signal handlers could not be installed.
    #[error("signal handler failed: {0}")]
    SignalHandler(#[source] io::Error),
    /// Every sender dropped without reporting.
    #[error("every termination source went away")]
    Abandoned,
}

impl Termination {
    /// Log the terminal `terminated` event against `log`.
    pub fn report(&self, log: &Span) {
        info!(parent: log, terminated = %self, "terminated");
    }
}

/// Capacity of the termination channel: one slot per source.
const TERMINATION_SOURCES: usize = 3;

async fn send_terminal(tx: mpsc::Sender<Termination>, termination: Termination) {
    if let Err(mpsc::error::SendError(lost)) = tx.send(termination).await {
        debug!(termination = %lost, "termination already decided");
    }
}

async fn run_http(
    endpoints: web::Data<Endpoints>,
    config: ServerConfig,
    health: web::Data<HealthState>,
    log: &Span,
) -> io::Result<()> {
    let server_health = health.clone();
    let server = HttpServer::new(move || build_app(endpoints.clone(), server_health.clone()))
        .disable_signals();
    let server = match config.http_workers() {
        Some(workers) => server.workers(workers),
        None => server,
    };
    info!(parent: log, "created http transport");
    let addr = config.http_addr();
    let server = server.bind(addr)?;
    info!(parent: log, transport = "http", address = %addr, "listening");
    health.mark_ready();
    server.run().await
}

async fn run_grpc(endpoints: Endpoints, addr: SocketAddr, log: &Span) -> Termination {
    let transport = PlayersGrpcTransport::new(endpoints).into_server();
    info!(parent: log, "created grpc transport");
    let incoming = match TcpIncoming::new(addr, true, None) {
        Ok(incoming) => incoming,
        Err(err) => return Termination::GrpcBind(io::Error::other(err)),
    };
    info!(parent: log, address = %addr, "started grpc listener");
    info!(parent: log, transport = "grpc", address = %addr, "listening");
    match Server::builder()
        .add_service(transport)
        .serve_with_incoming(incoming)
        .await
    {
        Ok(()) => Termination::GrpcClosed,
        Err(err) => Termination::Grpc(err),
    }
}

/// Run both transports until the first terminal event and return it.
///
/// Must be called inside an actix system (`#[actix_web::main]` or
/// `#[actix_web::test]`) because the HTTP listener runs on it. Bind failures
/// surface as the terminal event of the affected listener.
pub async fn serve(endpoints: Endpoints, config: ServerConfig, log: Span) -> Termination {
    let (tx, mut rx) = mpsc::channel(TERMINATION_SOURCES);
    let health = web::Data::new(HealthState::new());

    {
        let tx = tx.clone();
        let endpoints = web::Data::new(endpoints.clone());
        let health = health.clone();
        let log = log.clone();
        actix_web::rt::spawn(async move {
            let termination = match run_http(endpoints, config, health, &log).await {
                Ok(()) => Termination::HttpClosed,
                Err(err) => Termination::Http(err),
            };
            send_terminal(tx, termination).await;
        });
    }

    {
        let tx = tx.clone();
        let log = log.clone();
        tokio::spawn(async move {
            let termination = run_grpc(endpoints, config.grpc_addr(), &log).await;
            send_terminal(tx, termination).await;
        });
    }

    tokio::spawn(async move {
        let termination = match wait_for_termination().await {
            Ok(signal) => Termination::Signal(signal),
            Err(err) => Termination::SignalHandler(err),
        };
        send_terminal(tx, termination).await;
    });

    ServerState::Running.enter(&log);
    let termination = rx.recv().await.unwrap_or(Termination::Abandoned);
    health.mark_unhealthy();
    ServerState::Terminating.enter(&log);
    termination
}
