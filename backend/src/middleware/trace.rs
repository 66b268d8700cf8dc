//! Request correlation for the HTTP transport.
//!
//! [`Trace`] mints a [`TraceId`] per request, runs the rest of the chain
//! inside its scope, stamps it on the response under [`TRACE_ID_HEADER`] and
//! records one `request served` event.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, error};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Middleware giving every request a trace identifier.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use roster::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Per-worker service built by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

fn stamp<B>(response: &mut ServiceResponse<B>, trace_id: TraceId) {
    match HeaderValue::try_from(trace_id.to_string()) {
        Ok(value) => {
            response
                .headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(err) => error!(error = %err, %trace_id, "trace id is not a valid header value"),
    }
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::generate();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let started = Instant::now();
        let inner = self.service.call(req);
        Box::pin(trace_id.scope(async move {
            let mut response = inner.await?;
            stamp(&mut response, trace_id);
            debug!(
                %method,
                %path,
                status = response.status().as_u16(),
                took = ?started.elapsed(),
                %trace_id,
                "request served"
            );
            Ok(response)
        }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    use super::*;
    use crate::domain::Error as DomainError;

    async fn echo_trace_id() -> HttpResponse {
        match TraceId::current() {
            Some(id) => HttpResponse::Ok().body(id.to_string()),
            None => HttpResponse::InternalServerError().finish(),
        }
    }

    async fn missing_player() -> Result<HttpResponse, DomainError> {
        Err(DomainError::not_found("player 1 not found"))
    }

    fn header(response: &ServiceResponse) -> String {
        response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .expect("trace-id header")
            .to_owned()
    }

    #[rstest]
    #[actix_web::test]
    async fn handler_sees_the_id_echoed_in_the_header() {
        let app = test::init_service(
            App::new().wrap(Trace).route("/", web::get().to(echo_trace_id)),
        )
        .await;

        let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let stamped = header(&response);
        let body = test::read_body(response).await;

        assert_eq!(body, stamped.as_bytes());
        assert!(stamped.parse::<TraceId>().is_ok());
    }

    #[rstest]
    #[actix_web::test]
    async fn failed_requests_are_stamped_too() {
        let app = test::init_service(
            App::new().wrap(Trace).route("/", web::get().to(missing_player)),
        )
        .await;

        let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(header(&response).parse::<TraceId>().is_ok());
    }

    #[rstest]
    #[actix_web::test]
    async fn requests_do_not_share_ids() {
        let app = test::init_service(
            App::new().wrap(Trace).route("/", web::get().to(echo_trace_id)),
        )
        .await;

        let first = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let second = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_ne!(header(&first), header(&second));
    }
}
