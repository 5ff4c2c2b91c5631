//! `InscriptionBuddy` - A Discord bot for Dogecoin inscription collections
//!
//! This crate proxies collection data from the Ordinals Wallet and Doggy Market APIs
//! into Discord: holder snapshots and inscription lists as CSV attachments, collection
//! statistics as text, and trending boards as embed cards.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    // Public items are documented; `poise::command` expansions opt out locally
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_types_passed_by_value,
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Complexity and readability
    clippy::cognitive_complexity,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::too_many_lines,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Fallible calls all return `errors::Error`; no `# Errors` / `# Panics` doc sections
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

/// Discord bot interface - commands, handlers, and bot context
pub mod bot;
/// Configuration management for API endpoints and Discord settings
pub mod config;
/// Core marketplace logic - framework-agnostic fetching, validation, aggregation and export
pub mod core;
/// Unified error types and result handling
pub mod errors;

#[cfg(test)]
pub mod test_utils;
