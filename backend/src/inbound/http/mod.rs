//! HTTP inbound adapter exposing the players routes as JSON.

pub mod error;
pub mod health;
pub mod players;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::endpoints::Endpoints;
use crate::middleware::Trace;

pub use error::{ApiResult, ErrorBody};
pub use health::HealthState;

/// Build the actix application serving players routes and health probes.
///
/// Every route runs inside the [`Trace`] middleware, so the endpoint layer
/// sees the request's trace identifier.
pub fn build_app(
    endpoints: web::Data<Endpoints>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(endpoints)
        .app_data(health_state)
        .wrap(Trace)
        .service(players::create_player)
        .service(players::list_players)
        .service(players::get_player)
        .service(players::update_player)
        .service(players::delete_player)
        .service(health::ready)
        .service(health::live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}
