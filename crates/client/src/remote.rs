//! REST-backed data source.
//!
//! Wraps the live backend HTTP API using [`reqwest`]. Every request
//! attaches the bearer token and tenant header from the shared
//! [`SessionStore`]. Failures are logged and re-raised unmodified; there
//! is no retry or backoff -- the UI surfaces errors for manual retry.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{ClientError, ClientResult};
use crate::request::ApiRequest;
use crate::session::SessionStore;
use crate::source::DataSource;

/// Custom header carrying the active tenant id.
pub const TENANT_HEADER: &str = "X-Tenant-ID";

/// HTTP client for the live backend.
pub struct RemoteStore {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl RemoteStore {
    /// Create a new store for the given API base URL, e.g.
    /// `http://host:8080/api`.
    pub fn new(base_url: impl Into<String>, session: Arc<SessionStore>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, session)
    }

    /// Create a store reusing an existing [`reqwest::Client`] (useful
    /// for connection pooling across stores).
    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        session: Arc<SessionStore>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            session,
        }
    }

    /// API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl DataSource for RemoteStore {
    async fn request(&self, req: ApiRequest) -> ClientResult<Option<serde_json::Value>> {
        let url = format!("{}{}", self.base_url, req.path);

        let mut builder = self.http.request(req.method.clone(), url.as_str());
        if !req.query.is_empty() {
            builder = builder.query(&req.query);
        }
        if let Some(body) = &req.body {
            // Also sets Content-Type: application/json.
            builder = builder.json(body);
        }
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(tenant) = self.session.tenant_id() {
            builder = builder.header(TENANT_HEADER, tenant.to_string());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "HTTP request failed");
            e
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unknown status");
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = if body.is_empty() {
                reason.to_string()
            } else {
                format!("{reason}: {body}")
            };
            tracing::error!(status = status.as_u16(), url = %url, "Backend returned error status");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let value = response.json::<serde_json::Value>().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Failed to parse response body");
            e
        })?;
        Ok(Some(value))
    }
}
