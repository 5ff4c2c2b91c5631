//! Shared test utilities.
//!
//! Marketplace calls are exercised against a `wiremock` server so no test touches the
//! network. A scripted URL probe stands in for HEAD requests in image verifier tests.

use crate::{
    config::settings::Settings,
    core::{http::HttpClient, image::UrlProbe, market::MarketClient},
};
use serde_json::Value;
use std::{future::Future, sync::Mutex};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Answers `GET route` with a JSON body.
pub async fn mount_json(server: &MockServer, route: &str, body: &Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Answers `GET route?page={page}` with a JSON body.
pub async fn mount_page(server: &MockServer, route: &str, page: u32, body: &Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Answers `GET route` with a plain-text body.
pub async fn mount_text(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Answers `HEAD route` with 200, for image checks.
pub async fn mount_head(server: &MockServer, route: &str) {
    Mock::given(method("HEAD"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/png"))
        .mount(server)
        .await;
}

/// Requests received so far whose path equals `route`.
pub async fn hits(server: &MockServer, route: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == route)
        .count()
}

/// HTTP client that never goes through a system proxy, so the local mock server is
/// reached directly.
pub fn test_http_client() -> HttpClient {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap_or_default();
    HttpClient::from_client(client)
}

/// Market client pointed at `server`: Ordinals Wallet under `/ow`, Doggy Market under
/// `/dm`.
pub fn test_market_client(server: &MockServer) -> MarketClient {
    let mut settings = Settings::default();
    settings.api.ordinals_wallet_base_url = format!("{}/ow", server.uri());
    settings.api.doggy_market_base_url = format!("{}/dm", server.uri());
    settings.pagination.max_pages = 20;
    MarketClient::new(test_http_client(), &settings)
}

/// URL probe answering from a fixed set of reachable URLs and recording every call.
pub struct StubProbe {
    reachable: Vec<String>,
    probed: Mutex<Vec<String>>,
}

impl StubProbe {
    pub fn reachable(urls: &[&str]) -> Self {
        Self {
            reachable: urls.iter().map(|u| (*u).to_string()).collect(),
            probed: Mutex::new(Vec::new()),
        }
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

impl UrlProbe for StubProbe {
    fn exists(&self, url: &str) -> impl Future<Output = bool> + Send {
        if let Ok(mut seen) = self.probed.lock() {
            seen.push(url.to_string());
        }
        let hit = self.reachable.iter().any(|u| u == url);
        async move { hit }
    }
}
