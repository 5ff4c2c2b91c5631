//! Marketplace client for Ordinals Wallet and Doggy Market.
//!
//! [`MarketClient`] owns the HTTP client and the endpoint settings; commands receive
//! it through the bot data instead of reaching for any global. Each upstream has its
//! own response shapes, so the [`MarketApi`] choice is resolved once per call here and
//! callers only ever see the unified records from [`crate::core::models`].

use crate::{
    config::settings::{ImageSettings, Settings},
    core::{
        aggregate::{count_by_key, holders_from_counts, sum_by_key},
        http::{FetchOptions, HttpClient, ParsedBody},
        image,
        models::{
            CollectionStats, HolderRecord, InscriptionRecord, TrendingCard, TrendingCollection,
            TrendingEntry, TrendingKind, TrendingToken,
        },
        paginate,
        validate::{
            Shape, array_field, expect_array, expect_object, int_field, num_field, str_field,
        },
    },
    errors::{Error, Result},
};
use reqwest::Url;
use serde_json::{Map, Value};
use std::{fmt, time::Duration};
use tracing::{debug, info, instrument};

/// Upstream marketplace selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketApi {
    /// Ordinals Wallet (`OW`)
    OrdinalsWallet,
    /// Doggy Market (`DM`)
    DoggyMarket,
}

impl MarketApi {
    /// Short code used in command options.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::OrdinalsWallet => "OW",
            Self::DoggyMarket => "DM",
        }
    }
}

impl fmt::Display for MarketApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrdinalsWallet => f.write_str("Ordinals Wallet"),
            Self::DoggyMarket => f.write_str("Doggy Market"),
        }
    }
}

/// Client for every marketplace endpoint the bot uses.
#[derive(Debug, Clone)]
pub struct MarketClient {
    http: HttpClient,
    ordinals_wallet_base: String,
    doggy_market_base: String,
    user_agent: String,
    max_pages: Option<u32>,
}

impl MarketClient {
    /// Creates a client over an existing HTTP client.
    #[must_use]
    pub fn new(http: HttpClient, settings: &Settings) -> Self {
        Self {
            http,
            ordinals_wallet_base: settings
                .api
                .ordinals_wallet_base_url
                .trim_end_matches('/')
                .to_string(),
            doggy_market_base: settings
                .api
                .doggy_market_base_url
                .trim_end_matches('/')
                .to_string(),
            user_agent: settings.api.user_agent.clone(),
            max_pages: settings.pagination.page_limit(),
        }
    }

    /// Builds the HTTP client from settings and wraps it.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let http = HttpClient::new(Duration::from_secs(settings.api.request_timeout_secs))?;
        Ok(Self::new(http, settings))
    }

    fn ow_url(&self, segments: &[&str]) -> Result<String> {
        endpoint(&self.ordinals_wallet_base, segments)
    }

    fn dm_url(&self, segments: &[&str]) -> Result<String> {
        endpoint(&self.doggy_market_base, segments)
    }

    fn dm_options(&self) -> FetchOptions {
        FetchOptions::browser(&self.user_agent)
    }

    /// All inscriptions of a collection.
    ///
    /// Ordinals Wallet returns the full list in one response. Doggy Market is paged
    /// and read until an empty page; a page that cannot be fetched ends the listing
    /// early, while a page in an unexpected format fails the whole call.
    #[instrument(skip(self))]
    pub async fn inscriptions(
        &self,
        slug: &str,
        api: MarketApi,
    ) -> Result<Vec<InscriptionRecord>> {
        let records = match api {
            MarketApi::OrdinalsWallet => self.ow_inscriptions(slug).await?,
            MarketApi::DoggyMarket => self.dm_inscriptions(slug).await?,
        };

        info!(count = records.len(), "Fetched inscriptions");
        if records.is_empty() {
            return Err(Error::EmptyResult {
                what: "inscriptions".to_string(),
            });
        }
        Ok(records)
    }

    async fn ow_inscriptions(&self, slug: &str) -> Result<Vec<InscriptionRecord>> {
        let url = self.ow_url(&["collection", slug, "inscriptions"])?;
        let body = self.http.fetch(&url, &FetchOptions::default()).await?;
        parse_ow_inscriptions(body)
    }

    async fn dm_inscriptions(&self, slug: &str) -> Result<Vec<InscriptionRecord>> {
        let url = self.dm_url(&["nfts", slug])?;
        let url = url.as_str();
        let http = &self.http;
        let options = self.dm_options();

        paginate::fetch_all(
            slug,
            move |page| {
                let options = options.clone().query("page", page.to_string());
                async move {
                    let body = http.fetch(url, &options).await?;
                    parse_dm_listing_page(body)
                }
            },
            self.max_pages,
        )
        .await
    }

    /// Holders of a collection with how many items each holds.
    ///
    /// Ordinals Wallet serves a snapshot of one address per held inscription, which
    /// is counted here. Doggy Market serves per-owner totals that are merged in case an
    /// owner appears twice.
    #[instrument(skip(self))]
    pub async fn holders(&self, slug: &str, api: MarketApi) -> Result<Vec<HolderRecord>> {
        let counts = match api {
            MarketApi::OrdinalsWallet => {
                let url = self.ow_url(&["collection", slug, "snapshot"])?;
                let body = self.http.fetch(&url, &FetchOptions::default()).await?;
                let addresses = snapshot_addresses(body)?;
                count_by_key(addresses, Clone::clone)
            }
            MarketApi::DoggyMarket => {
                let url = self.dm_url(&["nfts", slug, "holders"])?;
                let body = self.http.fetch(&url, &self.dm_options()).await?;
                sum_by_key(parse_dm_holdings(body)?)
            }
        };

        let holders = holders_from_counts(counts);
        info!(count = holders.len(), "Aggregated holders");
        if holders.is_empty() {
            return Err(Error::EmptyResult {
                what: "holders".to_string(),
            });
        }
        Ok(holders)
    }

    /// Market statistics of a collection (Ordinals Wallet).
    #[instrument(skip(self))]
    pub async fn stats(&self, slug: &str) -> Result<CollectionStats> {
        let url = self.ow_url(&["collection", slug, "stats"])?;
        let body = self.http.fetch(&url, &FetchOptions::default()).await?;
        debug!(?body, "Stats response");
        parse_stats(body)
    }

    /// Top entries of a Doggy Market trending board, at most `limit` of them.
    #[instrument(skip(self))]
    pub async fn trending(&self, kind: TrendingKind, limit: u32) -> Result<Vec<TrendingEntry>> {
        let url = self.dm_url(&[kind.path_segment(), "trending"])?;
        let options = self
            .dm_options()
            .query("limit", limit.to_string())
            .query("offset", "0");
        let body = self.http.fetch(&url, &options).await?;

        let mut entries = parse_trending(body, kind, &self.doggy_market_base)?;
        entries.truncate(limit as usize);
        info!(count = entries.len(), "Fetched trending entries");
        Ok(entries)
    }

    /// Trending entries with verified image URLs, probed with bounded concurrency.
    pub async fn trending_cards(
        &self,
        kind: TrendingKind,
        limit: u32,
        images: &ImageSettings,
    ) -> Result<Vec<TrendingCard>> {
        let entries = self.trending(kind, limit).await?;
        let urls = entries
            .iter()
            .map(|entry| entry.image_url().map(str::to_string))
            .collect();
        let resolved = image::resolve_images(
            &self.http,
            urls,
            &images.placeholder_url,
            images.probe_concurrency,
        )
        .await;

        Ok(entries
            .into_iter()
            .zip(resolved)
            .enumerate()
            .map(|(index, (entry, image_url))| TrendingCard {
                rank: index + 1,
                entry,
                image_url,
            })
            .collect())
    }
}

fn parse_ow_inscriptions(body: ParsedBody) -> Result<Vec<InscriptionRecord>> {
    let mut records = Vec::new();
    for item in expect_array(body)? {
        let map = item_object(item)?;
        match str_field(&map, &["id"]) {
            Some(inscription_id) => records.push(InscriptionRecord {
                inscription_id,
                inscription_number: int_field(&map, &["number"]),
            }),
            None => debug!("Skipping inscription without id"),
        }
    }
    Ok(records)
}

/// One page of `/nfts/{slug}`. A missing `recentlyListed` means the page is empty.
fn parse_dm_listing_page(body: ParsedBody) -> Result<Vec<InscriptionRecord>> {
    let page = expect_object(body)?;
    let mut records = Vec::new();
    for item in array_field(&page, "recentlyListed")? {
        let map = item_object(item)?;
        if let Some(inscription_id) = str_field(&map, &["inscriptionId"]) {
            records.push(InscriptionRecord {
                inscription_id,
                inscription_number: int_field(&map, &["inscriptionNumber"]),
            });
        }
    }
    Ok(records)
}

/// Addresses from a snapshot: newline-delimited text, or a JSON array of strings.
fn snapshot_addresses(body: ParsedBody) -> Result<Vec<String>> {
    match body {
        ParsedBody::Text(text) | ParsedBody::Json(Value::String(text)) => Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()),
        ParsedBody::Json(Value::Array(items)) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(address) if !address.trim().is_empty() => {
                    Some(address.trim().to_string())
                }
                _ => None,
            })
            .collect()),
        ParsedBody::Json(other) => Err(Error::Shape {
            expected: Shape::String,
            actual: Shape::of(&other),
        }),
    }
}

/// `(owner, items)` pairs from `/nfts/{slug}/holders`. `items` is either a count or
/// the list of held items; when absent the owner counts as holding one.
fn parse_dm_holdings(body: ParsedBody) -> Result<Vec<(String, usize)>> {
    let mut holdings = Vec::new();
    for item in expect_array(body)? {
        let map = item_object(item)?;
        let Some(owner) = str_field(&map, &["owner", "address"]) else {
            debug!("Skipping holder entry without owner");
            continue;
        };
        let count = match map.get("items") {
            Some(Value::Array(held)) => held.len(),
            Some(_) => int_field(&map, &["items"])
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(0),
            None => 1,
        };
        holdings.push((owner, count));
    }
    Ok(holdings)
}

fn parse_stats(body: ParsedBody) -> Result<CollectionStats> {
    let map = expect_object(body)?;
    Ok(CollectionStats {
        total_supply: num_field(&map, &["total_supply"]),
        floor_price: num_field(&map, &["floor_price"]),
        listed: num_field(&map, &["listed"]),
        sales: num_field(&map, &["sales"]),
        volume_day: num_field(&map, &["volume_day"]),
        volume_total: num_field(&map, &["volume_total"]),
        owners: num_field(&map, &["owners"]),
    })
}

fn parse_trending(
    body: ParsedBody,
    kind: TrendingKind,
    doggy_market_base: &str,
) -> Result<Vec<TrendingEntry>> {
    let mut entries = Vec::new();
    for item in expect_array(body)? {
        let map = item_object(item)?;
        let entry = match kind {
            TrendingKind::Collections => parse_trending_collection(&map),
            TrendingKind::Tokens => parse_trending_token(&map, doggy_market_base),
        };
        if let Some(entry) = entry {
            entries.push(entry);
        }
    }
    Ok(entries)
}

fn parse_trending_collection(map: &Map<String, Value>) -> Option<TrendingEntry> {
    let name = str_field(map, &["name", "slug"])?;
    Some(TrendingEntry::Collection(TrendingCollection {
        name,
        volume_24h: num_field(map, &["volume24h", "volume"]),
        trades_24h: unsigned_field(map, &["trades24h", "sales24h", "trades"]),
        listed: unsigned_field(map, &["listed", "listedCount"]),
        image_url: str_field(map, &["image", "imageUrl", "icon"]),
        description: str_field(map, &["description"]),
    }))
}

/// Tokens without an explicit image use the marketplace's DRC-20 icon path, which the
/// image verifier knows how to fall back from.
fn parse_trending_token(
    map: &Map<String, Value>,
    doggy_market_base: &str,
) -> Option<TrendingEntry> {
    let tick = str_field(map, &["tick", "name"])?;
    let image_url = str_field(map, &["image", "imageUrl", "icon"]).or_else(|| {
        let icon = format!("{}.png", tick.to_lowercase());
        endpoint(doggy_market_base, &["drc-20", &icon]).ok()
    });
    Some(TrendingEntry::Token(TrendingToken {
        volume_24h: num_field(map, &["volume24h", "volume"]),
        trades_24h: unsigned_field(map, &["trades24h", "sales24h", "trades"]),
        market_cap: num_field(map, &["marketCap", "marketcap"]),
        description: str_field(map, &["description"]),
        tick,
        image_url,
    }))
}

/// Appends `segments` to `base` as percent-encoded path segments, so a slug can never
/// add path levels or a query string of its own.
fn endpoint(base: &str, segments: &[&str]) -> Result<String> {
    let mut url = Url::parse(base).map_err(|e| Error::Config {
        message: format!("invalid marketplace base URL '{base}': {e}"),
    })?;
    url.path_segments_mut()
        .map_err(|()| Error::Config {
            message: format!("marketplace base URL '{base}' cannot take a path"),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url.into())
}

fn unsigned_field(map: &Map<String, Value>, keys: &[&str]) -> Option<u64> {
    int_field(map, keys).and_then(|n| u64::try_from(n).ok())
}

fn item_object(item: Value) -> Result<Map<String, Value>> {
    expect_object(ParsedBody::Json(item))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{
        hits, mount_head, mount_json, mount_page, mount_text, test_market_client,
    };
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    #[test]
    fn test_market_api_codes() {
        assert_eq!(MarketApi::OrdinalsWallet.code(), "OW");
        assert_eq!(MarketApi::DoggyMarket.code(), "DM");
        assert_eq!(MarketApi::DoggyMarket.to_string(), "Doggy Market");
    }

    #[test]
    fn test_endpoint_encodes_slug_as_one_segment() -> Result<()> {
        assert_eq!(
            endpoint("https://api.doggy.market", &["nfts", "a/../b", "holders"])?,
            "https://api.doggy.market/nfts/a%2F..%2Fb/holders"
        );
        assert_eq!(
            endpoint("https://api.doggy.market/", &["nfts", "x?page=9"])?,
            "https://api.doggy.market/nfts/x%3Fpage=9"
        );
        assert_eq!(
            endpoint("http://127.0.0.1:8080/dm", &["token", "trending"])?,
            "http://127.0.0.1:8080/dm/token/trending"
        );
        assert!(matches!(
            endpoint("not a url", &["nfts"]),
            Err(Error::Config { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_ow_inscriptions_single_shot() -> Result<()> {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/ow/collection/dogepunks/inscriptions",
            &json!([
                {"id": "aaai0", "number": 101},
                {"id": "bbbi0"},
                {"number": 5}
            ]),
        )
        .await;
        let market = test_market_client(&server);

        let records = market
            .inscriptions("dogepunks", MarketApi::OrdinalsWallet)
            .await?;

        assert_eq!(
            records,
            vec![
                InscriptionRecord {
                    inscription_id: "aaai0".to_string(),
                    inscription_number: Some(101),
                },
                InscriptionRecord {
                    inscription_id: "bbbi0".to_string(),
                    inscription_number: None,
                },
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_ow_inscriptions_rejects_object_payload() -> Result<()> {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/ow/collection/dogepunks/inscriptions",
            &json!({"error": "collection not indexed"}),
        )
        .await;
        let market = test_market_client(&server);

        let result = market
            .inscriptions("dogepunks", MarketApi::OrdinalsWallet)
            .await;

        assert!(matches!(
            result,
            Err(Error::Shape {
                expected: Shape::Array,
                actual: Shape::Object
            })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_dm_inscriptions_walk_pages_until_empty() -> Result<()> {
        let server = MockServer::start().await;
        mount_page(
            &server,
            "/dm/nfts/dogepunks",
            1,
            &json!({"recentlyListed": [
                {"inscriptionId": "p1a", "inscriptionNumber": 1},
                {"inscriptionId": "p1b", "inscriptionNumber": 2}
            ]}),
        )
        .await;
        mount_page(
            &server,
            "/dm/nfts/dogepunks",
            2,
            &json!({"recentlyListed": [{"inscriptionId": "p2a", "inscriptionNumber": "3"}]}),
        )
        .await;
        mount_page(&server, "/dm/nfts/dogepunks", 3, &json!({"recentlyListed": []})).await;
        let market = test_market_client(&server);

        let records = market.inscriptions("dogepunks", MarketApi::DoggyMarket).await?;

        let ids: Vec<&str> = records.iter().map(|r| r.inscription_id.as_str()).collect();
        assert_eq!(ids, vec!["p1a", "p1b", "p2a"]);
        assert_eq!(records[2].inscription_number, Some(3));
        assert_eq!(hits(&server, "/dm/nfts/dogepunks").await, 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_dm_inscriptions_keep_pages_before_failure() -> Result<()> {
        let server = MockServer::start().await;
        mount_page(
            &server,
            "/dm/nfts/dogepunks",
            1,
            &json!({"recentlyListed": [{"inscriptionId": "only", "inscriptionNumber": 9}]}),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/dm/nfts/dogepunks"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let market = test_market_client(&server);

        let records = market.inscriptions("dogepunks", MarketApi::DoggyMarket).await?;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].inscription_id, "only");
        Ok(())
    }

    #[tokio::test]
    async fn test_dm_inscriptions_reject_malformed_listing() -> Result<()> {
        let server = MockServer::start().await;
        mount_page(
            &server,
            "/dm/nfts/dogepunks",
            1,
            &json!({"recentlyListed": "maintenance"}),
        )
        .await;
        mount_page(
            &server,
            "/dm/nfts/arraypunks",
            1,
            &json!([{"inscriptionId": "x"}]),
        )
        .await;
        let market = test_market_client(&server);

        let drifted_field = market.inscriptions("dogepunks", MarketApi::DoggyMarket).await;
        let drifted_page = market.inscriptions("arraypunks", MarketApi::DoggyMarket).await;

        assert!(matches!(
            drifted_field,
            Err(Error::Shape {
                expected: Shape::Array,
                actual: Shape::String
            })
        ));
        assert!(matches!(
            drifted_page,
            Err(Error::Shape {
                expected: Shape::Object,
                actual: Shape::Array
            })
        ));
        if let Err(e) = drifted_field {
            assert_eq!(e.user_message(), "Unexpected API response format.");
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_dm_inscriptions_fail_when_a_later_page_drifts() -> Result<()> {
        let server = MockServer::start().await;
        mount_page(
            &server,
            "/dm/nfts/dogepunks",
            1,
            &json!({"recentlyListed": [{"inscriptionId": "p1a", "inscriptionNumber": 1}]}),
        )
        .await;
        mount_page(&server, "/dm/nfts/dogepunks", 2, &json!({"recentlyListed": 42})).await;
        let market = test_market_client(&server);

        let result = market.inscriptions("dogepunks", MarketApi::DoggyMarket).await;

        assert!(matches!(
            result,
            Err(Error::Shape {
                expected: Shape::Array,
                actual: Shape::Number
            })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_dm_inscriptions_empty_is_reported() -> Result<()> {
        let server = MockServer::start().await;
        mount_page(&server, "/dm/nfts/ghosts", 1, &json!({"recentlyListed": []})).await;
        let market = test_market_client(&server);

        let result = market.inscriptions("ghosts", MarketApi::DoggyMarket).await;

        assert!(matches!(result, Err(Error::EmptyResult { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_slug_cannot_inject_query_or_path() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "recentlyListed": [{"inscriptionId": "q1", "inscriptionNumber": 1}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recentlyListed": []})))
            .mount(&server)
            .await;
        let market = test_market_client(&server);

        market.inscriptions("x?page=9", MarketApi::DoggyMarket).await?;

        let requests = server.received_requests().await.unwrap_or_default();
        assert_eq!(requests.len(), 2);
        for request in &requests {
            assert_eq!(request.url.path(), "/dm/nfts/x%3Fpage=9");
            assert_eq!(request.url.query_pairs().count(), 1);
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_ow_snapshot_is_counted_per_address() -> Result<()> {
        let server = MockServer::start().await;
        mount_text(
            &server,
            "/ow/collection/dogepunks/snapshot",
            "Dwallet1\nDwallet2\n\nDwallet1\n Dwallet3 \nDwallet1\n",
        )
        .await;
        let market = test_market_client(&server);

        let holders = market
            .holders("dogepunks", MarketApi::OrdinalsWallet)
            .await?;

        assert_eq!(
            holders,
            vec![
                HolderRecord {
                    address: "Dwallet1".to_string(),
                    item_count: 3
                },
                HolderRecord {
                    address: "Dwallet2".to_string(),
                    item_count: 1
                },
                HolderRecord {
                    address: "Dwallet3".to_string(),
                    item_count: 1
                },
            ]
        );
        let total: usize = holders.iter().map(|h| h.item_count).sum();
        assert_eq!(total, 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_dm_holders_accept_counts_and_lists() -> Result<()> {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/dm/nfts/dogepunks/holders",
            &json!([
                {"owner": "Dalice", "items": 2},
                {"owner": "Dbob", "items": [{"inscriptionId": "x"}, {"inscriptionId": "y"}, {"inscriptionId": "z"}]},
                {"owner": "Dalice", "items": "1"},
                {"owner": "Dcarol", "items": 0}
            ]),
        )
        .await;
        let market = test_market_client(&server);

        let holders = market.holders("dogepunks", MarketApi::DoggyMarket).await?;

        let rows: Vec<(&str, usize)> = holders
            .iter()
            .map(|h| (h.address.as_str(), h.item_count))
            .collect();
        assert_eq!(rows, vec![("Dalice", 3), ("Dbob", 3)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_stats_parses_numbers_and_gaps() -> Result<()> {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/ow/collection/dogepunks/stats",
            &json!({
                "total_supply": 10000,
                "floor_price": "4.2",
                "listed": 120,
                "sales": null,
                "volume_day": 1530.5,
                "owners": 2874
            }),
        )
        .await;
        let market = test_market_client(&server);

        let stats = market.stats("dogepunks").await?;

        assert_eq!(stats.total_supply, Some(10000.0));
        assert_eq!(stats.floor_price, Some(4.2));
        assert_eq!(stats.sales, None);
        assert_eq!(stats.volume_total, None);
        assert_eq!(stats.owners, Some(2874.0));
        Ok(())
    }

    #[tokio::test]
    async fn test_stats_rejects_text_payload() -> Result<()> {
        let server = MockServer::start().await;
        mount_text(&server, "/ow/collection/dogepunks/stats", "maintenance").await;
        let market = test_market_client(&server);

        let result = market.stats("dogepunks").await;

        assert!(matches!(
            result,
            Err(Error::Shape {
                expected: Shape::Object,
                actual: Shape::String
            })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_trending_tokens_with_image_fallback() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dm/token/trending"))
            .and(query_param("limit", "2"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"tick": "DOGI", "volume24h": 5000, "trades24h": 40, "marketCap": "1200000"},
                {"tick": "wow", "volume24h": 10, "trades24h": 1, "image": ""},
                {"tick": "extra"}
            ])))
            .mount(&server)
            .await;
        mount_head(&server, "/dm/static/drc-20/dogi.png").await;
        let market = test_market_client(&server);
        let images = ImageSettings {
            placeholder_url: "https://example.test/none.png".to_string(),
            probe_concurrency: 2,
        };

        let cards = market
            .trending_cards(TrendingKind::Tokens, 2, &images)
            .await?;

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].rank, 1);
        assert_eq!(cards[0].entry.name(), "DOGI");
        assert_eq!(
            cards[0].image_url,
            format!("{}/dm/static/drc-20/dogi.png", server.uri())
        );
        match &cards[0].entry {
            TrendingEntry::Token(token) => assert_eq!(token.market_cap, Some(1_200_000.0)),
            TrendingEntry::Collection(_) => panic!("expected a token entry"),
        }
        assert_eq!(cards[1].entry.trades_24h(), Some(1));
        assert_eq!(cards[1].image_url, "https://example.test/none.png");
        Ok(())
    }

    #[tokio::test]
    async fn test_trending_collections_skip_unnamed_entries() -> Result<()> {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/dm/nfts/trending",
            &json!([
                {"name": "Doge Punks", "volume24h": 900.5, "listed": 33, "description": "Punks on Doge"},
                {"volume24h": 1}
            ]),
        )
        .await;
        let market = test_market_client(&server);

        let entries = market.trending(TrendingKind::Collections, 5).await?;

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "Doge Punks");
        assert_eq!(entries[0].volume_24h(), Some(900.5));
        assert_eq!(entries[0].description(), Some("Punks on Doge"));
        assert_eq!(entries[0].image_url(), None);
        Ok(())
    }
}
