//! Roster entry point: connects the store, wires the players service and
//! serves it over HTTP and gRPC until the first terminal event.
//!
//! The process never exits successfully: a startup failure, a listener
//! failure or a termination signal all end with status 1.

use std::process::ExitCode;
use std::sync::Arc;

use color_eyre::eyre::{Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{Span, error, info, info_span, warn};

use roster::config::RosterConfig;
use roster::endpoints::Endpoints;
use roster::outbound::persistence::DieselPlayerRepository;
use roster::server::{ServerState, Termination, build_players_service, connect_store, serve};

/// Connect, wire and serve. Returns the terminal event.
async fn run(start: &Span) -> Result<Termination> {
    let config = RosterConfig::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let server_config = config.server_config()?;

    let pool = connect_store(config.database_url(), config.pool_size()).await?;
    info!(parent: start, "connected to database");

    let service = build_players_service(
        Arc::new(DieselPlayerRepository::new(pool)),
        info_span!("players", tag = "players"),
    );
    info!(parent: start, "created players service");

    let endpoints = Endpoints::new(service);
    info!(parent: start, "created endpoints");

    Ok(serve(endpoints, server_config, start.clone()).await)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> ExitCode {
    if let Err(e) = roster::logging::init() {
        warn!(error = %e, "tracing init failed");
    }
    if let Err(e) = color_eyre::install() {
        warn!(error = %e, "error report hook install failed");
    }

    let start = info_span!("roster", tag = "start");
    ServerState::Starting.enter(&start);
    info!(parent: &start, "created logger");

    match run(&start).await {
        Ok(termination) => termination.report(&start),
        Err(report) => {
            error!(parent: &start, error = ?report, "startup failed");
        }
    }
    ExitCode::FAILURE
}
