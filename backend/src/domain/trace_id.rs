//! Correlation identifier carried by every players request.
//!
//! A transport mints one [`TraceId`] per request, echoes it to the caller
//! under [`TRACE_ID_HEADER`] and runs the endpoint inside [`TraceId::scope`].
//! The service decorators read it back with [`TraceId::current`], so call
//! records and responses share one identifier without it appearing in any
//! service signature.
//!
//! Task-locals do not follow `tokio::spawn`; re-enter the scope in spawned
//! work.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use uuid::Uuid;

/// Header (HTTP) and metadata key (gRPC) echoing the request's trace id.
pub const TRACE_ID_HEADER: &str = "trace-id";

tokio::task_local! {
    static CURRENT: TraceId;
}

/// Random UUID correlating one request across transports and log events.
///
/// # Examples
/// ```
/// use roster::TraceId;
///
/// let id: TraceId = "6f1c2a9e-0d4b-4a57-9a51-3c1d0e6b7f20".parse().expect("uuid");
/// assert_eq!(id.to_string(), "6f1c2a9e-0d4b-4a57-9a51-3c1d0e6b7f20");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Mint a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The identifier of the request being handled, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// The identifier in scope, or a fresh one outside any request.
    #[must_use]
    pub fn current_or_generate() -> Self {
        Self::current().unwrap_or_else(Self::generate)
    }

    /// Run `fut` with `self` as the current identifier.
    ///
    /// # Examples
    /// ```
    /// use roster::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let id = TraceId::generate();
    /// assert_eq!(id.scope(async { TraceId::current() }).await, Some(id));
    /// assert_eq!(TraceId::current(), None);
    /// # });
    /// ```
    pub async fn scope<F: Future>(self, fut: F) -> F::Output {
        CURRENT.scope(self, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn renders_as_hyphenated_uuid() {
        let rendered = TraceId::generate().to_string();
        assert_eq!(rendered.len(), 36);
        assert_eq!(rendered.parse::<TraceId>().map(|id| id.to_string()), Ok(rendered));
    }

    #[rstest]
    #[case("")]
    #[case("trace-1")]
    fn rejects_non_uuid_text(#[case] text: &str) {
        assert!(text.parse::<TraceId>().is_err());
    }

    #[tokio::test]
    async fn scope_is_visible_to_nested_futures_only() {
        let id = TraceId::generate();
        let nested = id.scope(async { async { TraceId::current() }.await }).await;
        assert_eq!(nested, Some(id));
        assert_eq!(TraceId::current(), None);
    }

    #[tokio::test]
    async fn current_or_generate_prefers_the_scope() {
        let id = TraceId::generate();
        assert_eq!(id.scope(async { TraceId::current_or_generate() }).await, id);
        assert_ne!(TraceId::current_or_generate(), id);
    }

    #[tokio::test]
    async fn spawned_tasks_start_outside_the_scope() {
        let id = TraceId::generate();
        let spawned = id
            .scope(async { tokio::spawn(async { TraceId::current() }).await })
            .await
            .expect("task joins");
        assert_eq!(spawned, None);
    }
}
