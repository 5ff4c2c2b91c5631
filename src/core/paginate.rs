//! Paginated collection fetching.
//!
//! Marketplace listing endpoints expose no total count or cursor: the only way to know
//! the last page was reached is an empty page. [`fetch_all`] walks pages sequentially
//! from page 1 and degrades gracefully on the network side: a page that cannot be
//! fetched ends the walk with whatever was collected so far. A page that arrives in an
//! unexpected format is an error for the caller, never a short listing.

use crate::errors::{Error, Result};
use std::future::Future;
use tracing::{debug, info, warn};

/// Upstream page numbering starts at 1.
pub const FIRST_PAGE: u32 = 1;

/// One page as seen by the loop.
struct PageResult<T> {
    items: Vec<T>,
    is_last: bool,
}

impl<T> PageResult<T> {
    fn from_items(items: Vec<T>) -> Self {
        let is_last = items.is_empty();
        Self { items, is_last }
    }
}

/// Fetches every page through `page_fetcher` and concatenates the items.
///
/// Stops on the first empty page, on the first page that fails with
/// [`Error::Transport`], or after `max_pages` pages when a bound is given. Transport
/// failures are logged and the partial listing is returned. Any other error, such as
/// [`Error::Shape`], is returned as is.
pub async fn fetch_all<T, F, Fut>(
    label: &str,
    mut page_fetcher: F,
    max_pages: Option<u32>,
) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let mut collected = Vec::new();
    let mut page = FIRST_PAGE;

    loop {
        if max_pages.is_some_and(|limit| page > limit) {
            warn!(
                label,
                pages = page - 1,
                items = collected.len(),
                "page limit reached before an empty page, stopping"
            );
            break;
        }

        let result = match page_fetcher(page).await {
            Ok(items) => PageResult::from_items(items),
            Err(e @ Error::Transport { .. }) => {
                warn!(
                    label,
                    page,
                    items = collected.len(),
                    error = %e,
                    "page fetch failed, returning partial results"
                );
                break;
            }
            Err(e) => {
                warn!(label, page, error = %e, "page rejected, aborting pagination");
                return Err(e);
            }
        };

        if result.is_last {
            debug!(label, page, "empty page, pagination complete");
            break;
        }

        debug!(label, page, count = result.items.len(), "page fetched");
        collected.extend(result.items);
        page += 1;
    }

    info!(label, items = collected.len(), "pagination finished");
    Ok(collected)
}
