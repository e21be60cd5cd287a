//! Request descriptor shared by both backing stores.
//!
//! The remote store turns an [`ApiRequest`] into an HTTP request; the
//! fixture store dispatches on its method and path.

pub use reqwest::Method;

/// One backend request: method, path, query pairs, optional JSON body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base URL, e.g. `/members`.
    pub path: String,
    /// Query pairs. Absent filters are excluded by the caller rather
    /// than sent as empty values.
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// A GET request with no query or body.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// A POST request carrying a JSON body.
    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Attach query pairs.
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }
}
