//! Records produced from marketplace payloads.
//!
//! All records are built once from a validated payload and never mutated; they live
//! for a single command invocation.

use std::fmt;

/// One inscription of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InscriptionRecord {
    pub inscription_id: String,
    pub inscription_number: Option<i64>,
}

/// A wallet and how many items of the collection it holds (always at least 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolderRecord {
    pub address: String,
    pub item_count: usize,
}

/// Snapshot of a collection's market statistics. Any field may be missing upstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionStats {
    pub total_supply: Option<f64>,
    pub floor_price: Option<f64>,
    pub listed: Option<f64>,
    pub sales: Option<f64>,
    pub volume_day: Option<f64>,
    pub volume_total: Option<f64>,
    pub owners: Option<f64>,
}

/// Which trending board to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingKind {
    /// NFT / inscription collections
    Collections,
    /// DRC-20 fungible tokens
    Tokens,
}

impl TrendingKind {
    /// Path segment of the trending endpoint for this board.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Collections => "nfts",
            Self::Tokens => "token",
        }
    }
}

impl fmt::Display for TrendingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collections => f.write_str("collections"),
            Self::Tokens => f.write_str("tokens"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendingCollection {
    pub name: String,
    pub volume_24h: Option<f64>,
    pub trades_24h: Option<u64>,
    pub listed: Option<u64>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendingToken {
    pub tick: String,
    pub volume_24h: Option<f64>,
    pub trades_24h: Option<u64>,
    pub market_cap: Option<f64>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// A ranked trending item. A single listing only ever holds one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum TrendingEntry {
    Collection(TrendingCollection),
    Token(TrendingToken),
}

impl TrendingEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Collection(c) => &c.name,
            Self::Token(t) => &t.tick,
        }
    }

    #[must_use]
    pub const fn volume_24h(&self) -> Option<f64> {
        match self {
            Self::Collection(c) => c.volume_24h,
            Self::Token(t) => t.volume_24h,
        }
    }

    #[must_use]
    pub const fn trades_24h(&self) -> Option<u64> {
        match self {
            Self::Collection(c) => c.trades_24h,
            Self::Token(t) => t.trades_24h,
        }
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        match self {
            Self::Collection(c) => c.image_url.as_deref(),
            Self::Token(t) => t.image_url.as_deref(),
        }
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Collection(c) => c.description.as_deref(),
            Self::Token(t) => t.description.as_deref(),
        }
    }
}

/// A trending entry paired with its verified image URL, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingCard {
    /// 1-based position in the upstream ranking
    pub rank: usize,
    pub entry: TrendingEntry,
    pub image_url: String,
}
