//! General Discord commands - ping and help.
//! These commands don't call any marketplace API.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**InscriptionBuddy Help**\n\
        Collection data from Ordinals Wallet (OW) and Doggy Market (DM).\n\n\
        **Collection Commands**\n\
        • `/snapshot <slug> <api>` - CSV of every wallet holding the collection, with counts.\n\
        • `/scrape <slug> [api]` - CSV of every inscription ID in the collection.\n\
        • `/stats <slug>` - Floor price, volume, listings and owners.\n\n\
        **Market Commands**\n\
        • `/trending <board> [limit]` - Top collections or DRC-20 tokens by 24h volume.\n\n\
        **Utility Commands**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
