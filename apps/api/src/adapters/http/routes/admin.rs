//! Admin dashboard routes.
//!
//! `POST /admin/login` only checks the shared secret; it issues no session.
//! `GET /admin/waitlist` is therefore reachable without logging in.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use waitlist_types::{AdminLoginResponse, WaitlistEntriesResponse};

use crate::{adapters::http::app_state::AppState, app_error::AppResult};

#[derive(Deserialize)]
struct LoginPayload {
    password: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(login))
        .route("/admin/waitlist", get(list_entries))
}

/// POST /api/admin/login
async fn login(
    State(app_state): State<AppState>,
    payload: Result<Json<LoginPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    // An unreadable body carries no password.
    let password = payload.ok().and_then(|Json(payload)| payload.password);

    app_state
        .admin_use_cases
        .login(password.as_deref())
        .await?;

    Ok(Json(AdminLoginResponse {
        success: true,
        message: "Authentication successful".to_string(),
    }))
}

/// GET /api/admin/waitlist
async fn list_entries(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = app_state.waitlist_use_cases.list().await?;
    let count = entries.len();
    Ok(Json(WaitlistEntriesResponse { entries, count }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::test_utils::{TEST_ADMIN_PASSWORD, TestAppStateBuilder, create_test_entry};

    fn build_test_router(app_state: AppState) -> Router<()> {
        router().with_state(app_state)
    }

    // =========================================================================
    // POST /admin/login
    // =========================================================================

    #[tokio::test]
    async fn login_correct_password_returns_200() {
        let server = TestServer::new(build_test_router(TestAppStateBuilder::new().build())).unwrap();

        let response = server
            .post("/admin/login")
            .json(&json!({ "password": TEST_ADMIN_PASSWORD }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "success": true,
            "message": "Authentication successful",
        }));
    }

    #[tokio::test]
    async fn login_wrong_password_returns_401() {
        let server = TestServer::new(build_test_router(TestAppStateBuilder::new().build())).unwrap();

        let response = server
            .post("/admin/login")
            .json(&json!({ "password": "guess" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn login_missing_password_returns_401() {
        let server = TestServer::new(build_test_router(TestAppStateBuilder::new().build())).unwrap();

        let response = server.post("/admin/login").json(&json!({})).await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn login_non_json_body_returns_401() {
        let server = TestServer::new(build_test_router(TestAppStateBuilder::new().build())).unwrap();

        let response = server.post("/admin/login").text(TEST_ADMIN_PASSWORD).await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn login_non_string_password_returns_401() {
        let server = TestServer::new(build_test_router(TestAppStateBuilder::new().build())).unwrap();

        let response = server
            .post("/admin/login")
            .json(&json!({ "password": 12345 }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn login_uses_configured_secret() {
        let app_state = TestAppStateBuilder::new()
            .with_admin_password("another-secret")
            .build();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        server
            .post("/admin/login")
            .json(&json!({ "password": TEST_ADMIN_PASSWORD }))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
        server
            .post("/admin/login")
            .json(&json!({ "password": "another-secret" }))
            .await
            .assert_status_ok();
    }

    // =========================================================================
    // GET /admin/waitlist
    // =========================================================================

    #[tokio::test]
    async fn list_returns_entries_and_count() {
        let app_state = TestAppStateBuilder::new()
            .with_entry(create_test_entry(|e| {
                e.email = "a@x.com".to_string();
                e.assistant_name = "Ada".to_string();
            }))
            .with_entry(create_test_entry(|e| e.email = "b@x.com".to_string()))
            .build();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        let response = server.get("/admin/waitlist").await;

        response.assert_status_ok();
        let body: WaitlistEntriesResponse = response.json();
        assert_eq!(body.count, 2);
        assert_eq!(body.entries.len(), 2);
        assert_eq!(body.entries[0].assistant_name, "Ada");
        assert_eq!(body.entries[1].email, "b@x.com");
    }

    #[tokio::test]
    async fn list_is_not_guarded_by_login() {
        // Known gap: no session exists, so the listing is served to anyone.
        let app_state = TestAppStateBuilder::new()
            .with_entry(create_test_entry(|_| {}))
            .build();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        let response = server.get("/admin/waitlist").await;

        response.assert_status_ok();
        let body: WaitlistEntriesResponse = response.json();
        assert_eq!(body.count, 1);
    }
}
