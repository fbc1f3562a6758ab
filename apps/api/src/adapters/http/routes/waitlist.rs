//! Public signup routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use waitlist_types::{CountResponse, SubmitEntryResponse};

use crate::{
    adapters::http::app_state::AppState, app_error::AppResult,
    use_cases::waitlist::SubmitEntryInput,
};

/// Every field is optional here so that a missing field is reported as 400
/// by validation rather than rejected by the extractor.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitPayload {
    assistant_name: Option<String>,
    personality: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/waitlist", post(submit))
        .route("/waitlist/count", get(count))
}

/// GET /api/waitlist/count
async fn count(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = app_state.waitlist_use_cases.count().await?;
    Ok(Json(CountResponse { count }))
}

/// POST /api/waitlist
async fn submit(
    State(app_state): State<AppState>,
    payload: Result<Json<SubmitPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let outcome = app_state
        .waitlist_use_cases
        .submit(SubmitEntryInput {
            assistant_name: payload.assistant_name,
            personality: payload.personality,
            email: payload.email,
            phone: payload.phone,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitEntryResponse {
            success: true,
            count: outcome.count,
            message: "Successfully added to waitlist".to_string(),
        }),
    ))
}
