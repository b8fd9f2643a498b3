pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Room for the 5 MiB file limit plus multipart framing overhead.
const BODY_LIMIT_BYTES: usize = 6 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/skills/suggestions/:role",
            get(handlers::handle_skill_suggestions),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState { narrative: None }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok_with_timestamp() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "vitae-api");
        assert!(json["timestamp"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_skill_suggestions_known_role() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::get("/api/v1/skills/suggestions/software-engineer")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let skills = json["skills"].as_array().unwrap();
        assert!(skills.iter().any(|s| s == "JavaScript"));
    }

    #[tokio::test]
    async fn test_skill_suggestions_unknown_role_gets_default() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::get("/api/v1/skills/suggestions/astronaut")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        let skills = json["skills"].as_array().unwrap();
        assert!(skills.iter().any(|s| s == "Communication"));
    }

    #[tokio::test]
    async fn test_analyze_without_multipart_is_rejected() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::post("/api/v1/resumes/analyze")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }
}
