use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::assignments::router::init_assignments_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::courses::router::init_courses_router;
use crate::modules::instructors::router::init_instructors_router;
use crate::modules::payments::router::init_payments_router;
use crate::modules::quotes::router::init_quotes_router;
use crate::modules::reviews::router::init_reviews_router;
use crate::modules::sponsors::router::init_sponsors_router;
use crate::modules::stats::router::init_stats_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

/// Plain-text liveness banner.
async fn root() -> &'static str {
    "edumart server is running"
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/", get(root))
        .merge(init_auth_router())
        .merge(init_users_router())
        .merge(init_instructors_router())
        .merge(init_courses_router())
        .merge(init_assignments_router())
        .merge(init_payments_router())
        .merge(init_reviews_router())
        .merge(init_sponsors_router())
        .merge(init_quotes_router())
        .merge(init_stats_router())
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
