//! HTTP client adapter for the marketplace APIs.
//!
//! One attempt per call, no retries. Non-2xx statuses and network failures come back
//! as [`Error::Transport`]; callers decide what a failure means for them.

use crate::errors::{Error, Result};
use reqwest::{Client, header::CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};

/// Longest slice of an error body kept in a transport error message.
const ERROR_BODY_PREVIEW: usize = 200;

/// A fetched response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedBody {
    /// Structured JSON payload
    Json(Value),
    /// Anything that is not JSON (e.g. newline-delimited address lists)
    Text(String),
}

/// Per-request headers and query parameters.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

impl FetchOptions {
    /// Headers that make the request look like it came from a desktop browser.
    /// Doggy Market rejects requests without them.
    #[must_use]
    pub fn browser(user_agent: &str) -> Self {
        Self::default()
            .header("User-Agent", user_agent)
            .header("Accept", "application/json")
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Thin wrapper over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Builds a client with the given overall request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest::Client`.
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Issues a GET and returns the parsed body.
    ///
    /// Bodies served as JSON are parsed strictly. Other content types are parsed as
    /// JSON only when they hold an array or object, and kept as text otherwise.
    pub async fn fetch(&self, url: &str, options: &FetchOptions) -> Result<ParsedBody> {
        let mut request = self.client.get(url);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }

        debug!(url, query = ?options.query, "GET");
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
            return Err(Error::Transport {
                status: Some(status.as_u16()),
                message: format!("GET {url} returned {status}: {preview}"),
            });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| content_type.contains("json"));
        let text = response.text().await?;
        trace!(url, bytes = text.len(), "response body received");

        parse_body(text, is_json)
    }

    /// Lightweight existence check: a HEAD request that reports success for any
    /// 2xx answer. Network errors count as "does not exist".
    pub async fn probe(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => {
                let ok = response.status().is_success();
                debug!(url, status = %response.status(), ok, "probe");
                ok
            }
            Err(e) => {
                debug!(url, error = %e, "probe failed");
                false
            }
        }
    }
}

/// Turns a raw response body into a [`ParsedBody`].
pub fn parse_body(text: String, is_json: bool) -> Result<ParsedBody> {
    if is_json {
        return Ok(ParsedBody::Json(serde_json::from_str(&text)?));
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(value @ (Value::Array(_) | Value::Object(_))) => Ok(ParsedBody::Json(value)),
        _ => Ok(ParsedBody::Text(text)),
    }
}
