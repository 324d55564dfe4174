// ABOUTME: Gateway client wrapping every CMS API call
// ABOUTME: Injects JSON and bearer headers and normalizes error bodies into ApiError

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use cms_auth::SharedSession;
use cms_config::ApiConfig;
use cms_core::{ApiError, ApiResult, ListParams};

/// HTTP client for the CMS API.
///
/// The session token is read from the store on every request, so a token
/// written after the client was built is used by the next call. No timeout
/// or retry is applied; `ApiConfig::timeout` and `retry_attempts` are
/// informational.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    session: SharedSession,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: SharedSession) -> Self {
        Self {
            http: Client::new(),
            config,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> ApiResult<T> {
        debug!("{} {}", method, path);

        let response = builder.send().await.map_err(|e| {
            error!("API request failed: {} {}: {}", method, path, e);
            ApiError::network(e.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("API request failed: {} {}: {}", method, path, e);
            ApiError::network(e.to_string())
        })?;

        if !status.is_success() {
            let message = error_message(status, &body);
            error!("API request failed: {} {}: {}", method, path, message);
            return Err(ApiError::http(status.as_u16(), message));
        }

        // Delete endpoints may acknowledge with an empty body
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };

        serde_json::from_str(body).map_err(|e| {
            error!("Unexpected response body from {} {}: {}", method, path, e);
            ApiError::invalid_response(e.to_string())
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&ListParams>,
    ) -> ApiResult<T> {
        let mut builder = self.builder(Method::GET, path);
        if let Some(params) = params {
            let pairs = params.to_query_pairs();
            if !pairs.is_empty() {
                builder = builder.query(&pairs);
            }
        }
        self.execute(Method::GET, path, builder).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let builder = self.builder(Method::POST, path).json(body);
        self.execute(Method::POST, path, builder).await
    }

    pub(crate) async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let builder = self.builder(Method::PATCH, path).json(body);
        self.execute(Method::PATCH, path, builder).await
    }

    /// Delete ignores whatever acknowledgement body the server sends
    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let builder = self.builder(Method::DELETE, path);
        let _: Value = self.execute(Method::DELETE, path, builder).await?;
        Ok(())
    }
}

/// Server-supplied `message` (array entries joined with ", "), else a status fallback
fn error_message(status: StatusCode, body: &str) -> String {
    let fallback = || format!("HTTP error! status: {}", status.as_u16());

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return fallback();
    };

    match value.get("message") {
        Some(Value::Array(items)) if !items.is_empty() => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        _ => fallback(),
    }
}
