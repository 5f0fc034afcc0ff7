use super::{query_record, serve_content, serve_home};
use crate::routing::{classify_host, parse_well_known, HostClass};
use crate::state::AppState;
use crate::utils::json_error;
use axum::extract::State;
use axum::http::{header::HOST, HeaderMap, StatusCode, Uri};
use axum::response::Response;
use tracing::{debug, instrument};

/// Single entry point: well-known record paths first, then host classification.
#[instrument(skip_all, name = "gateway_request", fields(host = tracing::field::Empty, path = %uri.path()))]
pub async fn handle_gateway(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let host = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.host());
    tracing::Span::current().record("host", host.unwrap_or_default());

    if let Some(query) = parse_well_known(uri.path()) {
        return match query {
            Ok(query) => query_record(&state, query).await,
            Err(e) => {
                debug!(error = %e, "Rejected well-known path");
                json_error(StatusCode::NOT_FOUND, e.to_string(), state.http.not_found_max_age)
            }
        };
    }

    match classify_host(host) {
        HostClass::Content(domain) => serve_content(&state, domain, &uri).await,
        HostClass::Home => serve_home(&state, &uri).await,
        HostClass::Unsupported => json_error(
            StatusCode::NOT_FOUND,
            "Not Implemented",
            state.http.not_implemented_max_age,
        ),
    }
}
