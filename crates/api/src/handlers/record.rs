use crate::dto::RecordResponse;
use crate::routing::RecordQuery;
use crate::state::AppState;
use crate::utils::{json_error, with_cache_headers};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use solcasa_domain::Resolution;
use tracing::debug;

pub async fn query_record(state: &AppState, query: RecordQuery) -> Response {
    match state
        .get_record
        .execute(&query.domain, query.record_type)
        .await
    {
        Resolution::Value(data) => with_cache_headers(
            Json(RecordResponse { data }).into_response(),
            state.http.record_max_age,
        ),
        Resolution::Absent => {
            debug!(domain = %query.domain, record = %query.record_type, "Record not set");
            json_error(
                StatusCode::NOT_FOUND,
                format!("Record \"{}\" Not Set", query.pair()),
                state.http.not_found_max_age,
            )
        }
    }
}
