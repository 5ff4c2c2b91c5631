//! Trending Discord command - Doggy Market's top collections and DRC-20 tokens.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::{
            models::{TrendingCard, TrendingEntry, TrendingKind},
            report,
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use tracing::info;

    /// Discord accepts at most 10 embeds per message.
    const EMBEDS_PER_MESSAGE: usize = 10;
    /// Longest description shown on a card.
    const DESCRIPTION_CHARS: usize = 300;
    const EMBED_COLOR: u32 = 0x00C2_A633;

    /// Board choice shown in the slash command UI.
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum BoardChoice {
        #[name = "NFT collections"]
        Collections,
        #[name = "DRC-20 tokens"]
        Tokens,
    }

    impl From<BoardChoice> for TrendingKind {
        fn from(choice: BoardChoice) -> Self {
            match choice {
                BoardChoice::Collections => Self::Collections,
                BoardChoice::Tokens => Self::Tokens,
            }
        }
    }

    /// Show the top trending collections or tokens on Doggy Market by 24h volume
    #[poise::command(slash_command)]
    pub async fn trending(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Collections or DRC-20 tokens"] board: BoardChoice,
        #[description = "How many entries to show (1-100)"]
        #[min = 1]
        #[max = 100]
        limit: Option<u32>,
    ) -> Result<()> {
        ctx.defer().await?;
        let data = ctx.data();
        let kind = TrendingKind::from(board);
        let limit = data.settings.trending.effective_limit(limit);
        info!("Fetching trending {} (limit {})", kind, limit);

        let cards = data
            .market
            .trending_cards(kind, limit, &data.settings.images)
            .await?;

        if cards.is_empty() {
            ctx.say(format!("No trending {kind} right now.")).await?;
            return Ok(());
        }

        let header = format!(
            "🔥 **Top {} trending {kind} on Doggy Market** (as of {})",
            cards.len(),
            chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
        );

        for (index, batch) in cards.chunks(EMBEDS_PER_MESSAGE).enumerate() {
            let mut reply = poise::CreateReply::default();
            if index == 0 {
                reply = reply.content(header.clone());
            }
            for card in batch {
                reply = reply.embed(card_embed(card));
            }
            ctx.send(reply).await?;
        }

        Ok(())
    }

    fn card_embed(card: &TrendingCard) -> serenity::CreateEmbed {
        let entry = &card.entry;
        let (label, value) = match entry {
            TrendingEntry::Collection(collection) => {
                ("Listed", report::format_count(collection.listed))
            }
            TrendingEntry::Token(token) => ("Market Cap", report::format_amount(token.market_cap)),
        };

        let mut embed = serenity::CreateEmbed::default()
            .title(format!("#{} {}", card.rank, entry.name()))
            .thumbnail(card.image_url.clone())
            .color(EMBED_COLOR)
            .field("Volume (24h)", report::format_amount(entry.volume_24h()), true)
            .field("Trades (24h)", report::format_count(entry.trades_24h()), true)
            .field(label, value, true);

        if let Some(description) = entry.description() {
            embed = embed.description(report::truncate_text(description, DESCRIPTION_CHARS));
        }
        embed
    }
}

// Re-export all commands
pub use inner::*;
