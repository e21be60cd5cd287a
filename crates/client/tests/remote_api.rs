//! Integration tests for the remote store against a local stub backend.
//!
//! The unit under test is a real HTTP client, so these tests serve a
//! small axum app on an ephemeral port instead of calling a router
//! in-process.

mod common;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use common::test_session;

use orgdesk_client::context::AuthContext;
use orgdesk_client::error::ClientError;
use orgdesk_client::fixture::FixtureStore;
use orgdesk_client::remote::RemoteStore;
use orgdesk_client::request::ApiRequest;
use orgdesk_client::source::DataSource;
use orgdesk_core::auth::Credentials;
use orgdesk_core::member::{MemberQuery, MemberStatus};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Serve `app` on an ephemeral local port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind should succeed");
    let addr = listener.local_addr().expect("listener has a local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server should run");
    });
    format!("http://{addr}")
}

/// Echo the request's auth/tenant headers and query pairs back as JSON.
async fn echo(
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<serde_json::Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    Json(serde_json::json!({
        "auth": header("authorization"),
        "tenant": header("x-tenant-id"),
        "query": query,
    }))
}

// ---------------------------------------------------------------------------
// Response handling
// ---------------------------------------------------------------------------

/// A 204 response resolves with no value rather than raising.
#[tokio::test]
async fn test_no_content_resolves_with_no_value() {
    let base = serve(Router::new().route("/ping", get(|| async { StatusCode::NO_CONTENT }))).await;
    let store = RemoteStore::new(base, test_session());

    let value = store
        .request(ApiRequest::get("/ping"))
        .await
        .expect("request should succeed");

    assert_eq!(value, None);
}

/// A typed operation that requires a body maps a 204 to MissingBody.
#[tokio::test]
async fn test_typed_operation_on_no_content_is_missing_body() {
    let base =
        serve(Router::new().route("/members", get(|| async { StatusCode::NO_CONTENT }))).await;
    let store = RemoteStore::new(base, test_session());

    let result = store.list_members(&MemberQuery::default()).await;
    assert_matches!(result, Err(ClientError::MissingBody));
}

/// Error statuses surface the numeric code and the response body.
#[tokio::test]
async fn test_error_status_preserves_code_and_body() {
    let base = serve(Router::new().route(
        "/members",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;
    let store = RemoteStore::new(base, test_session());

    let result = store.list_members(&MemberQuery::default()).await;
    match result {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("boom"), "message should carry the body, got: {message}");
        }
        other => panic!("expected ClientError::Api, got {other:?}"),
    }
}

/// A successful list response deserializes through the typed operation.
#[tokio::test]
async fn test_list_members_deserializes_envelope() {
    let base = serve(Router::new().route(
        "/members",
        get(|| async {
            Json(serde_json::json!({
                "data": [{
                    "id": 1,
                    "username": "avasquez",
                    "fullName": "Ana Vasquez",
                    "email": "ana@example.com",
                    "status": "active",
                    "isVirtual": false,
                    "createdAt": "2024-05-02T09:30:00Z",
                    "updatedAt": "2024-05-02T09:30:00Z",
                }],
                "meta": { "page": 1, "page_size": 20, "total": 1, "total_pages": 1 },
            }))
        }),
    ))
    .await;
    let store = RemoteStore::new(base, test_session());

    let page = store
        .list_members(&MemberQuery::default())
        .await
        .expect("list_members should succeed");

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.data[0].username, "avasquez");
    assert_eq!(page.data[0].full_name.as_deref(), Some("Ana Vasquez"));
    assert_eq!(page.data[0].status, MemberStatus::Active);
}

// ---------------------------------------------------------------------------
// Headers and query serialization
// ---------------------------------------------------------------------------

/// Bearer token and tenant header ride along when session state is set.
#[tokio::test]
async fn test_session_headers_attached() {
    let base = serve(Router::new().route("/echo", get(echo))).await;
    let session = test_session();
    session.set_token("tok-123").expect("set_token should succeed");
    session.set_tenant_id(7).expect("set_tenant_id should succeed");
    let store = RemoteStore::new(base, session);

    let value = store
        .request(ApiRequest::get("/echo"))
        .await
        .expect("request should succeed")
        .expect("echo returns a body");

    assert_eq!(value["auth"], "Bearer tok-123");
    assert_eq!(value["tenant"], "7");
}

/// No session state means no auth headers at all.
#[tokio::test]
async fn test_headers_omitted_without_session_state() {
    let base = serve(Router::new().route("/echo", get(echo))).await;
    let store = RemoteStore::new(base, test_session());

    let value = store
        .request(ApiRequest::get("/echo"))
        .await
        .expect("request should succeed")
        .expect("echo returns a body");

    assert_eq!(value["auth"], serde_json::Value::Null);
    assert_eq!(value["tenant"], serde_json::Value::Null);
}

/// Absent filters never reach the wire; present ones serialize as-is.
#[tokio::test]
async fn test_query_excludes_absent_filters() {
    let base = serve(Router::new().route("/echo", get(echo))).await;
    let store = RemoteStore::new(base, test_session());

    let query = MemberQuery {
        status: Some(MemberStatus::Suspended),
        keyword: None,
    };
    let value = store
        .request(ApiRequest::get("/echo").with_query(query.to_query()))
        .await
        .expect("request should succeed")
        .expect("echo returns a body");

    assert_eq!(value["query"]["status"], "suspended");
    assert!(
        value["query"].get("keyword").is_none(),
        "absent keyword must not be serialized"
    );
}

// ---------------------------------------------------------------------------
// Live login flow
// ---------------------------------------------------------------------------

/// Logging in against a live backend records the returned token and
/// tenant id in the session store.
#[tokio::test]
async fn test_live_login_records_session() {
    let base = serve(Router::new().route(
        "/auth/login",
        post(|| async {
            Json(serde_json::json!({
                "access_token": "live-tok",
                "username": "root",
                "full_name": "Root Operator",
                "tenant_id": 9,
            }))
        }),
    ))
    .await;

    let session = test_session();
    let remote = Arc::new(RemoteStore::new(base, Arc::clone(&session)));
    let fixture = Arc::new(FixtureStore::with_delay(Duration::ZERO));
    let context = AuthContext::with_stores(Arc::clone(&session), remote, fixture, false);

    let user = context
        .login(&Credentials {
            username: "root".to_string(),
            password: "secret".to_string(),
        })
        .await
        .expect("login should succeed");

    assert_eq!(user.username, "root");
    assert_eq!(session.token().as_deref(), Some("live-tok"));
    assert_eq!(session.tenant_id(), Some(9));
    assert!(context.is_authenticated());
}
