//! API Client
//!
//! Thin wrapper around reqwest for the club API: base-URL joining, bearer
//! auth, and JSON decoding with status checking.

use reqwest::Response;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, Result};

// == Api Client ==
/// HTTP client for the club API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    // == Constructor ==
    /// Creates a client for the given base URL (e.g. `http://host:8002/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attaches a bearer token sent with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    // == Get ==
    /// Performs a GET request and decodes the JSON body.
    pub async fn get_json<Q>(&self, path: &str, query: Option<&Q>) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        debug!(%path, "GET");
        let mut request = self.http.get(self.url(path));
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        Self::decode(path, request.send().await?).await
    }

    // == Post ==
    /// Performs a POST request with a JSON body and decodes the response.
    pub async fn post_json<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        debug!(%path, "POST");
        let mut request = self.http.post(self.url(path)).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        Self::decode(path, request.send().await?).await
    }

    // == Internals ==
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn decode(path: &str, response: Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                path: path.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}
