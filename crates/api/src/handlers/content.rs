use crate::state::AppState;
use crate::utils::{json_error, with_cache_headers, with_security_headers};
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use solcasa_application::ports::FetchedContent;
use solcasa_application::services::GatewayAction;
use solcasa_domain::DomainName;
use tracing::{info, warn};

pub async fn serve_content(state: &AppState, domain: DomainName, uri: &Uri) -> Response {
    let locator = state.locate_content.execute(&domain).await;
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    match state.dispatcher.plan(&domain, &locator, path_and_query) {
        GatewayAction::Redirect { url } => {
            info!(domain = %domain, location = %url, "Redirecting");
            match HeaderValue::from_str(&url) {
                Ok(location) => with_cache_headers(
                    (StatusCode::FOUND, [(LOCATION, location)]).into_response(),
                    state.http.page_max_age,
                ),
                Err(_) => {
                    warn!(domain = %domain, location = %url, "Redirect target is not a valid header");
                    bad_gateway(state)
                }
            }
        }
        GatewayAction::Proxy { url } => match state.fetcher.fetch(&url).await {
            Ok(content) => with_security_headers(with_cache_headers(
                relay(content),
                state.http.page_max_age,
            )),
            Err(e) => {
                warn!(domain = %domain, url = %url, error = %e, "Gateway fetch failed");
                bad_gateway(state)
            }
        },
    }
}

/// Upstream status and `Content-Type` are kept; other upstream headers are dropped.
pub(crate) fn relay(content: FetchedContent) -> Response {
    let status = StatusCode::from_u16(content.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = (status, Body::from(content.body)).into_response();
    if let Some(value) = content
        .content_type
        .and_then(|ct| HeaderValue::from_str(&ct).ok())
    {
        response.headers_mut().insert(CONTENT_TYPE, value);
    }
    response
}

pub(crate) fn bad_gateway(state: &AppState) -> Response {
    json_error(
        StatusCode::BAD_GATEWAY,
        "Bad Gateway",
        state.http.not_found_max_age,
    )
}
