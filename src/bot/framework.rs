//! Poise framework set-up and the client run loop.

use crate::{
    bot::{BotData, Registration, commands, handlers},
    config::{self, settings::Settings},
    core::market::MarketClient,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Registers `commands` according to `registration`.
///
/// Per-guild registration logs and skips guilds that fail, so one guild with missing
/// permissions does not keep the bot from starting.
pub async fn register_commands(
    ctx: &serenity::Context,
    ready: &serenity::Ready,
    commands: &[poise::Command<BotData, Error>],
    registration: Registration,
) -> Result<()> {
    match registration {
        Registration::Global => {
            info!("Registering commands globally...");
            poise::builtins::register_globally(ctx, commands).await?;
        }
        Registration::DevGuild(id) => {
            let guild_id = serenity::GuildId::new(id);
            poise::builtins::register_in_guild(ctx, commands, guild_id).await?;
            info!("Registered commands in development guild {}", guild_id);
        }
        Registration::PerGuild => {
            info!(
                "Started refreshing application (/) commands in {} guilds.",
                ready.guilds.len()
            );
            for guild in &ready.guilds {
                register_in_guild(ctx, commands, guild.id).await;
            }
        }
    }
    Ok(())
}

/// Registers `commands` in one guild, logging the outcome.
pub async fn register_in_guild(
    ctx: &serenity::Context,
    commands: &[poise::Command<BotData, Error>],
    guild_id: serenity::GuildId,
) {
    match poise::builtins::register_in_guild(ctx, commands, guild_id).await {
        Ok(()) => info!("Successfully registered commands for guild: {}", guild_id),
        Err(e) => error!("Failed to register commands for guild {}: {}", guild_id, e),
    }
}

/// Builds the poise framework and runs the Discord client until it stops.
#[instrument(skip_all)]
pub async fn run_bot(
    token: String,
    settings: Arc<Settings>,
    market: MarketClient,
) -> Result<()> {
    let registration = Registration::from_config(
        config::discord::get_dev_guild_id(),
        settings.discord.register_globally,
    );

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            on_error: |error| Box::pin(handlers::on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(handlers::event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                register_commands(ctx, ready, &framework.options().commands, registration)
                    .await?;
                Ok(BotData::new(market, settings, registration))
            })
        })
        .build();

    // Slash commands only need guild events
    let intents = serenity::GatewayIntents::GUILDS;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}
