//! Shared helpers for the end-to-end suites.
//!
//! Integration tests compile as separate crates, so each suite pulls this in
//! with `mod support;`. Not every suite uses every helper.
#![allow(dead_code)]

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::time::Duration;

use roster::domain::ports::InMemoryPlayerRepository;
use roster::endpoints::Endpoints;
use roster::inbound::grpc::proto::players_client::PlayersClient;
use roster::server::{ServerConfig, build_players_service, serve};
use tonic::transport::Channel;
use tracing::Span;

const READY_ATTEMPTS: usize = 100;
const READY_DELAY: Duration = Duration::from_millis(50);

/// Reserve an ephemeral loopback port and release it for the server.
pub fn free_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr")
}

/// A running server backed by the in-memory store.
pub struct RunningServer {
    pub http: SocketAddr,
    pub grpc: SocketAddr,
}

impl RunningServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.http)
    }

    /// Connect a gRPC client, retrying until the listener accepts.
    pub async fn grpc_client(&self) -> PlayersClient<Channel> {
        let endpoint = format!("http://{}", self.grpc);
        for _ in 0..READY_ATTEMPTS {
            match PlayersClient::connect(endpoint.clone()).await {
                Ok(client) => return client,
                Err(_) => tokio::time::sleep(READY_DELAY).await,
            }
        }
        panic!("gRPC listener on {} never became reachable", self.grpc);
    }

    async fn wait_for_http(&self) {
        let client = awc::Client::default();
        for _ in 0..READY_ATTEMPTS {
            if let Ok(res) = client.get(self.url("/health/ready")).send().await {
                if res.status().is_success() {
                    return;
                }
            }
            tokio::time::sleep(READY_DELAY).await;
        }
        panic!("HTTP listener on {} never became ready", self.http);
    }
}

/// Spawn the full bootstrap on the current actix system.
///
/// The service is the production chain (store-backed service plus logging
/// decorator) over the in-memory store.
pub async fn spawn_server() -> RunningServer {
    let http = free_addr();
    let grpc = free_addr();
    let service = build_players_service(
        Arc::new(InMemoryPlayerRepository::new()),
        tracing::info_span!("players", tag = "players"),
    );
    let config = ServerConfig::new(http, grpc).with_http_workers(2);
    actix_web::rt::spawn(serve(Endpoints::new(service), config, Span::none()));

    let server = RunningServer { http, grpc };
    server.wait_for_http().await;
    server
}
