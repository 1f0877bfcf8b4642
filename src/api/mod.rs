//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All resource endpoints are mounted under `/api/v1`; the health check
//! lives at the root.

pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::util::ServiceExt;

    use crate::app_state::AppState;
    use crate::store::{DonationStore, UserStore};

    use super::build_router;

    fn make_app(dir: &std::path::Path, seed_demo: bool) -> Router {
        let Ok(user_store) = UserStore::open(dir, seed_demo) else {
            panic!("user store open failed");
        };
        let state = AppState {
            user_store: Arc::new(user_store),
            donation_store: Arc::new(DonationStore::open(dir)),
            default_currency: "USD".to_string(),
        };
        build_router().with_state(state)
    }

    async fn send_json(
        app: &Router,
        method: &str,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let Ok(request) = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
        else {
            panic!("request build failed");
        };
        let Ok(response) = app.clone().oneshot(request).await else {
            panic!("router call failed");
        };
        let status = response.status();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), 1 << 20).await else {
            panic!("body read failed");
        };
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
            panic!("request build failed");
        };
        let Ok(response) = app.clone().oneshot(request).await else {
            panic!("router call failed");
        };
        let status = response.status();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), 1 << 20).await else {
            panic!("body read failed");
        };
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn health_reports_version() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let app = make_app(dir.path(), false);
        let (status, json) = get(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.get("status").and_then(|s| s.as_str()), Some("healthy"));
    }

    #[tokio::test]
    async fn register_returns_sanitized_account() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let app = make_app(dir.path(), false);

        let (status, json) = send_json(
            &app,
            "POST",
            "/api/v1/users",
            serde_json::json!({
                "name": "Test",
                "email": "t@example.com",
                "username": "t",
                "password": "x"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.get("success"), Some(&serde_json::Value::Bool(true)));

        let Some(data) = json.get("data") else {
            panic!("no data in envelope");
        };
        assert!(data.get("id").is_some());
        assert!(data.get("password").is_none());
        assert!(data.get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn register_missing_field_is_enveloped_400() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let app = make_app(dir.path(), false);

        let (status, json) = send_json(
            &app,
            "POST",
            "/api/v1/users",
            serde_json::json!({"name": "No Email", "username": "x", "password": "x"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.get("success"), Some(&serde_json::Value::Bool(false)));
    }

    #[tokio::test]
    async fn duplicate_registration_is_400() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let app = make_app(dir.path(), false);
        let body = serde_json::json!({
            "name": "Test",
            "email": "dup@example.com",
            "username": "t",
            "password": "x"
        });

        let (status, _) = send_json(&app, "POST", "/api/v1/users", body.clone()).await;
        assert_eq!(status, StatusCode::OK);
        let (status, json) = send_json(&app, "POST", "/api/v1/users", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.get("success"), Some(&serde_json::Value::Bool(false)));
    }

    #[tokio::test]
    async fn login_round_trip_and_rejection() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let app = make_app(dir.path(), false);

        let (_, _) = send_json(
            &app,
            "POST",
            "/api/v1/users",
            serde_json::json!({
                "name": "Login Test",
                "email": "login@example.com",
                "username": "login",
                "password": "secret-pass"
            }),
        )
        .await;

        // Correct credentials; email lookup is case-insensitive.
        let (status, json) = send_json(
            &app,
            "POST",
            "/api/v1/auth/login",
            serde_json::json!({"email": "Login@Example.com", "password": "secret-pass"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let Some(data) = json.get("data") else {
            panic!("no data in envelope");
        };
        assert!(data.get("passwordHash").is_none());

        // Wrong password.
        let (status, json) = send_json(
            &app,
            "POST",
            "/api/v1/auth/login",
            serde_json::json!({"email": "login@example.com", "password": "nope"}),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json.get("success"), Some(&serde_json::Value::Bool(false)));

        // Missing fields.
        let (status, _) = send_json(
            &app,
            "POST",
            "/api/v1/auth/login",
            serde_json::json!({"email": "login@example.com"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn donation_lifecycle_submit_verify() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let app = make_app(dir.path(), false);

        // Empty collection is a real empty list, not demo data.
        let (status, json) = get(&app, "/api/v1/donations").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json.get("data").and_then(|d| d.as_array()).map(Vec::len),
            Some(0)
        );

        // Amount as a numeric string is accepted.
        let (status, json) = send_json(
            &app,
            "POST",
            "/api/v1/donations",
            serde_json::json!({
                "donorName": "A",
                "donorEmail": "a@x.com",
                "amount": "50",
                "receiptUrl": "/r.pdf"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let Some(data) = json.get("data") else {
            panic!("no data in envelope");
        };
        assert_eq!(data.get("status").and_then(|s| s.as_str()), Some("pending"));
        let Some(id) = data.get("id").and_then(|i| i.as_str()).map(str::to_string) else {
            panic!("no id on created donation");
        };

        let (status, json) = send_json(
            &app,
            "PUT",
            "/api/v1/donations",
            serde_json::json!({"id": id, "status": "verified", "verifiedBy": "admin"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let Some(data) = json.get("data") else {
            panic!("no data in envelope");
        };
        assert_eq!(data.get("status").and_then(|s| s.as_str()), Some("verified"));
        assert!(data.get("verifiedAt").is_some());
        assert_eq!(data.get("verifiedBy").and_then(|v| v.as_str()), Some("admin"));
    }

    #[tokio::test]
    async fn invalid_amount_is_400() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let app = make_app(dir.path(), false);

        let (status, json) = send_json(
            &app,
            "POST",
            "/api/v1/donations",
            serde_json::json!({
                "donorName": "A",
                "donorEmail": "a@x.com",
                "amount": "fifty",
                "receiptUrl": "/r.pdf"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.get("success"), Some(&serde_json::Value::Bool(false)));
    }

    #[tokio::test]
    async fn review_unknown_donation_is_404() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let app = make_app(dir.path(), false);

        let (status, json) = send_json(
            &app,
            "PUT",
            "/api/v1/donations",
            serde_json::json!({"id": "does-not-exist", "status": "verified"}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.get("success"), Some(&serde_json::Value::Bool(false)));
        assert!(json.get("error").is_some());
    }

    #[tokio::test]
    async fn seeded_users_are_listed_without_hashes() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let app = make_app(dir.path(), true);

        let (status, json) = get(&app, "/api/v1/users").await;
        assert_eq!(status, StatusCode::OK);
        let Some(users) = json.get("data").and_then(|d| d.as_array()) else {
            panic!("no data array");
        };
        assert_eq!(users.len(), 5);
        assert!(users.iter().all(|u| u.get("passwordHash").is_none()));
    }

    #[tokio::test]
    async fn update_user_by_body_id() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let app = make_app(dir.path(), false);

        let (_, json) = send_json(
            &app,
            "POST",
            "/api/v1/users",
            serde_json::json!({
                "name": "Before",
                "email": "u@example.com",
                "username": "u",
                "password": "x"
            }),
        )
        .await;
        let Some(id) = json
            .get("data")
            .and_then(|d| d.get("id"))
            .and_then(|i| i.as_str())
            .map(str::to_string)
        else {
            panic!("no id on created user");
        };

        let (status, json) = send_json(
            &app,
            "PUT",
            "/api/v1/users",
            serde_json::json!({"id": id, "name": "After"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json.get("data")
                .and_then(|d| d.get("name"))
                .and_then(|n| n.as_str()),
            Some("After")
        );

        // Unknown id is a 404.
        let (status, _) = send_json(
            &app,
            "PUT",
            "/api/v1/users",
            serde_json::json!({"id": "missing", "name": "Nobody"}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
