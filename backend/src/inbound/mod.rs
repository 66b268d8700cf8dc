//! Inbound adapters (driving side).
//!
//! Both transports reach the players service only through
//! [`crate::endpoints::Endpoints`], which keeps their behaviour identical.

pub mod grpc;
pub mod http;
