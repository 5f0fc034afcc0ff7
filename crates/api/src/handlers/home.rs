use super::content::{bad_gateway, relay};
use crate::state::AppState;
use crate::utils::with_cache_headers;
use axum::http::Uri;
use axum::response::Response;
use tracing::{debug, warn};

const FAVICON_PATH: &str = "/favicon.ico";
const FAVICON_ASSET: &str = "avatar.png";

/// Relays the home-page origin for bare gateway hosts.
pub async fn serve_home(state: &AppState, uri: &Uri) -> Response {
    let url = home_url(&state.home_page, uri);
    debug!(url = %url, "Serving home page");

    match state.fetcher.fetch(&url).await {
        Ok(content) => with_cache_headers(relay(content), state.http.home_max_age),
        Err(e) => {
            warn!(url = %url, error = %e, "Home page fetch failed");
            bad_gateway(state)
        }
    }
}

pub fn home_url(home_page: &str, uri: &Uri) -> String {
    let base = home_page.trim_end_matches('/');
    if uri.path() == FAVICON_PATH {
        return format!("{}/{}", base, FAVICON_ASSET);
    }
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    format!("{}{}", base, path_and_query)
}
