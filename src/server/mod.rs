// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP surface
//!
//! A single audit endpoint plus a health probe. The wire contract is
//! deliberate: every response is HTTP 200, success and failure are
//! distinguished only by the presence of an `error` field in the body.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};

use crate::audit::Auditor;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub auditor: Arc<Auditor>,
}

/// Query parameters of the audit endpoint
#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    host: Option<String>,
    clear: Option<String>,
}

/// Build the service router
pub fn build_router(auditor: Arc<Auditor>) -> Router {
    Router::new()
        .route("/sri-audit", get(sri_audit_handler))
        .route("/health", get(health_handler))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .with_state(AppState { auditor })
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn sri_audit_handler(
    State(state): State<AppState>,
    Query(query): Query<AuditQuery>,
) -> Json<Value> {
    let Some(host) = query.host else {
        return Json(json!({ "error": "`host` query parameter is required" }));
    };
    // Any non-empty value clears the cached entry for the host.
    let clear = query.clear.is_some_and(|c| !c.is_empty());

    info!("auditing {host}");
    match state.auditor.audit(&host, clear).await {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(body) => Json(body),
            Err(e) => Json(json!({ "error": e.to_string() })),
        },
        Err(e) => {
            warn!("audit of {host} failed: {e}");
            Json(json!({ "error": e.to_string() }))
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::audit::AuditCache;
    use crate::config::AuditConfig;
    use crate::engine::stub::{resource, StubLauncher, StubState};
    use crate::session::BrowserSession;

    async fn router_with(state: Arc<StubState>) -> Router {
        let session = Arc::new(BrowserSession::new(Box::new(StubLauncher::new(state))));
        session.init().await.unwrap();
        let config = AuditConfig::new().settle_delay(std::time::Duration::ZERO);
        let auditor = Arc::new(Auditor::new(session, Arc::new(AuditCache::new()), config));
        build_router(auditor)
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_host_parameter() {
        let router = router_with(Arc::new(StubState::default())).await;

        let (status, body) = get_json(router, "/sri-audit").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"], "`host` query parameter is required");
    }

    #[tokio::test]
    async fn test_audit_success_body_shape() {
        let state = Arc::new(StubState::default());
        *state.scripts.write() = vec![resource("https://cdn.example.com/a.js")];
        let router = router_with(state).await;

        let (status, body) = get_json(router, "/sri-audit?host=https://mysite.com").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("error").is_none());
        assert_eq!(body["scripts"][0]["url"], "https://cdn.example.com/a.js");
        assert!(body["links"].as_array().unwrap().is_empty());
        assert!(body["timestamp"].is_i64());
    }

    #[tokio::test]
    async fn test_errors_still_answer_200() {
        let router = router_with(Arc::new(StubState::default())).await;

        let (status, body) = get_json(router, "/sri-audit?host=mysite.com").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"], "no protocol on host: mysite.com");
    }

    #[tokio::test]
    async fn test_clear_query_parameter_forces_reload() {
        let state = Arc::new(StubState::default());
        let router = router_with(state.clone()).await;

        let (_, first) = get_json(router.clone(), "/sri-audit?host=https://mysite.com").await;
        let (_, second) =
            get_json(router, "/sri-audit?host=https://mysite.com&clear=true").await;

        assert_eq!(state.navigations(), 2);
        assert!(second["timestamp"].as_i64() >= first["timestamp"].as_i64());
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let router = router_with(Arc::new(StubState::default())).await;

        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
        assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
    }
}
