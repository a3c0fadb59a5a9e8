use axum::Router;
use rhub::kernel::server::ApiState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    info(title = "Reward Hub", description = "Sheet backend receiving mirrored partner submissions"),
    tags(
        (name = "Sheet", description = "Append-only submission rows and their search"),
        (name = "System", description = "Liveness"),
    )
)]
struct ApiDoc;

pub(crate) fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Split the documented routes from the OpenAPI document
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(rhub::server::router::system_router())
        .merge(rhub::server::router::sheet_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);

    // The landing page posts cross-origin
    Router::new().merge(openapi_routes).merge(scalar_routes).layer(CorsLayer::permissive())
}
