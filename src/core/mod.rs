//! Core marketplace logic - framework-agnostic fetching, validation, aggregation and
//! export. Nothing in here knows about Discord.

/// Holder counting
pub mod aggregate;
/// Table projection and CSV encoding
pub mod export;
/// HTTP client adapter
pub mod http;
/// Image URL verification
pub mod image;
/// Marketplace client (Ordinals Wallet / Doggy Market)
pub mod market;
/// Records built from marketplace payloads
pub mod models;
/// Sequential page walking
pub mod paginate;
/// Reply text formatting
pub mod report;
/// Payload shape checks
pub mod validate;
