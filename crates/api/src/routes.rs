use crate::handlers;
use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Creates the gateway router with state.
///
/// Every request goes through a single fallback handler: routing depends on
/// the `Host` header as much as on the path.
pub fn create_gateway_routes(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::handle_gateway)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
