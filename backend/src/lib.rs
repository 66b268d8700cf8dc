//! Players records service reachable over JSON/HTTP and gRPC.
//!
//! One service implementation, wrapped in a logging decorator, is shared by
//! both transports through the [`endpoints`] layer. [`server::serve`] runs
//! the listeners and stops at the first terminal event.

pub mod config;
pub mod doc;
pub mod domain;
pub mod endpoints;
pub mod inbound;
pub mod logging;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
