//! Listener settings for the HTTP and gRPC transports.

use std::net::SocketAddr;

/// Where each transport listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    http_addr: SocketAddr,
    grpc_addr: SocketAddr,
    http_workers: Option<usize>,
}

impl ServerConfig {
    /// Listen on `http_addr` and `grpc_addr` with actix's default workers.
    #[must_use]
    pub fn new(http_addr: SocketAddr, grpc_addr: SocketAddr) -> Self {
        Self {
            http_addr,
            grpc_addr,
            http_workers: None,
        }
    }

    /// Fix the number of actix worker threads.
    #[must_use]
    pub fn with_http_workers(mut self, workers: usize) -> Self {
        self.http_workers = Some(workers.max(1));
        self
    }

    /// Address of the JSON/HTTP listener.
    pub fn http_addr(&self) -> SocketAddr {
        self.http_addr
    }

    /// Address of the gRPC listener.
    pub fn grpc_addr(&self) -> SocketAddr {
        self.grpc_addr
    }

    /// Fixed actix worker count, if any.
    pub fn http_workers(&self) -> Option<usize> {
        self.http_workers
    }
}
