//! Discord credentials from the environment.
//!
//! The token is read right before the client starts and is never stored in
//! [`Settings`](crate::config::settings::Settings).

use crate::errors::{Error, Result};
use std::env;

/// Reads the bot token from `DISCORD_TOKEN`, falling back to `DISCORD_BOT_TOKEN`.
pub fn get_bot_token() -> Result<String> {
    env::var("DISCORD_TOKEN")
        .or_else(|_| env::var("DISCORD_BOT_TOKEN"))
        .map_err(Error::from)
}

/// Guild that should receive commands during development, from `DEV_GUILD_ID`.
#[must_use]
pub fn get_dev_guild_id() -> Option<u64> {
    parse_guild_id(env::var("DEV_GUILD_ID").ok().as_deref())
}

/// Parses a guild snowflake, ignoring blanks and zero.
#[must_use]
pub fn parse_guild_id(raw: Option<&str>) -> Option<u64> {
    raw.map(str::trim)
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|id| *id != 0)
}
