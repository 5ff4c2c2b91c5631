//! Gateway event handling.

use crate::{
    bot::{BotData, Registration, framework::register_in_guild},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;

/// Registers commands in guilds the bot joins after start-up when running in
/// per-guild mode. Guilds that were already joined are covered at start-up.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    framework: poise::FrameworkContext<'_, BotData, Error>,
    data: &BotData,
) -> Result<()> {
    if let serenity::FullEvent::GuildCreate { guild, is_new } = event {
        if *is_new == Some(true) && data.registration == Registration::PerGuild {
            register_in_guild(ctx, &framework.options.commands, guild.id).await;
        }
    }
    Ok(())
}
