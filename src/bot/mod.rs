//! Bot layer - Discord-specific interface and command handlers
//!
//! This module wires the marketplace core into poise slash commands. Commands receive
//! the shared [`BotData`] and never touch upstream APIs except through its
//! [`MarketClient`].

/// Discord command implementations (collection exports, stats, trending, general)
pub mod commands;
/// Framework construction, command registration and client start-up
pub mod framework;
/// Error and gateway event handlers
pub mod handlers;

use crate::{
    config::settings::Settings,
    core::market::MarketClient,
    errors::Error,
};
use std::sync::Arc;

/// Where slash commands get registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// Application-wide; Discord may take a while to propagate changes
    Global,
    /// A single development guild only
    DevGuild(u64),
    /// Every guild the bot is in, plus each guild it joins later
    PerGuild,
}

impl Registration {
    /// A development guild wins over global registration.
    #[must_use]
    pub const fn from_config(dev_guild: Option<u64>, register_globally: bool) -> Self {
        match (dev_guild, register_globally) {
            (Some(id), _) => Self::DevGuild(id),
            (None, true) => Self::Global,
            (None, false) => Self::PerGuild,
        }
    }
}

/// Shared data available to all bot commands.
pub struct BotData {
    /// Client for Ordinals Wallet and Doggy Market
    pub market: MarketClient,
    /// Settings loaded at start-up
    pub settings: Arc<Settings>,
    /// Registration mode, consulted again when the bot joins a guild
    pub registration: Registration,
}

impl BotData {
    #[must_use]
    pub const fn new(
        market: MarketClient,
        settings: Arc<Settings>,
        registration: Registration,
    ) -> Self {
        Self {
            market,
            settings,
            registration,
        }
    }
}

/// Poise context for this bot.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

pub use framework::run_bot;
