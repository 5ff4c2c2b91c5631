//! Image URL verification with a static-path fallback and a placeholder.

use crate::core::http::HttpClient;
use futures::{StreamExt, stream};
use std::future::Future;
use tracing::debug;

/// Path segment used by the primary DRC-20 image location.
pub const DRC20_SEGMENT: &str = "/drc-20/";
/// Path segment the same images are also served from.
pub const STATIC_DRC20_SEGMENT: &str = "/static/drc-20/";

/// Something that can tell whether a URL currently resolves.
pub trait UrlProbe {
    fn exists(&self, url: &str) -> impl Future<Output = bool> + Send;
}

impl UrlProbe for HttpClient {
    fn exists(&self, url: &str) -> impl Future<Output = bool> + Send {
        self.probe(url)
    }
}

/// The alternate location for `primary`, if it follows the DRC-20 path pattern and
/// has not already been rewritten.
#[must_use]
pub fn fallback_url(primary: &str) -> Option<String> {
    if primary.contains(STATIC_DRC20_SEGMENT) || !primary.contains(DRC20_SEGMENT) {
        return None;
    }
    Some(primary.replacen(DRC20_SEGMENT, STATIC_DRC20_SEGMENT, 1))
}

/// Returns a URL that is safe to show: the primary one if it resolves, its static
/// fallback if that resolves, the placeholder otherwise. Empty input returns the
/// placeholder without probing. Nothing is cached between calls.
pub async fn resolve_image<P: UrlProbe>(
    probe: &P,
    primary: Option<&str>,
    placeholder: &str,
) -> String {
    let Some(primary) = primary.map(str::trim).filter(|url| !url.is_empty()) else {
        return placeholder.to_string();
    };

    if probe.exists(primary).await {
        return primary.to_string();
    }

    if let Some(alternate) = fallback_url(primary) {
        if probe.exists(&alternate).await {
            debug!(primary, alternate, "using static image fallback");
            return alternate;
        }
    }

    debug!(primary, "image unreachable, using placeholder");
    placeholder.to_string()
}

/// Resolves a batch of image URLs with at most `concurrency` probes in flight.
/// Output order matches input order.
pub async fn resolve_images<P: UrlProbe + Sync>(
    probe: &P,
    urls: Vec<Option<String>>,
    placeholder: &str,
    concurrency: usize,
) -> Vec<String> {
    stream::iter(urls)
        .map(|url| async move { resolve_image(probe, url.as_deref(), placeholder).await })
        .buffered(concurrency.max(1))
        .collect()
        .await
}
