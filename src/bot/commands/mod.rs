//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Collection exports and statistics
pub mod collection;

/// General utility commands
pub mod general;

/// Marketplace trending boards
pub mod trending;

// Export commands
pub use collection::*;
pub use general::*;
pub use trending::*;

use crate::{bot::BotData, errors::Error};

/// Every slash command the bot registers.
#[must_use]
pub fn all() -> Vec<poise::Command<BotData, Error>> {
    vec![
        snapshot(),
        scrape(),
        stats(),
        trending(),
        ping(),
        help(),
    ]
}
