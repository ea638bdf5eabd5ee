pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/session", get(handlers::handle_get_session))
        .route(
            "/api/v1/session/inputs",
            put(handlers::handle_update_inputs),
        )
        .route("/api/v1/session/view", put(handlers::handle_set_view))
        .route("/api/v1/session/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/session/cover-letter",
            post(handlers::handle_cover_letter),
        )
        .route(
            "/api/v1/session/questions",
            post(handlers::handle_questions),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use super::*;
    use crate::generation::generator::CoachGenerator;
    use crate::llm_client::mock::MockModel;
    use crate::session::Session;

    #[tokio::test]
    async fn test_health_endpoint() {
        let session = Session::new(CoachGenerator::new(Arc::new(MockModel::new())));
        let app = build_router(AppState {
            session: Arc::new(session),
        });

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "coach-api");
        assert_eq!(body["model"], "gemini-2.5-flash");
    }
}
