//! Collection Discord commands - holder snapshots, inscription scrapes and stats.
//!
//! Every command defers first because paginated listings can take a while, then
//! answers with either a CSV attachment or a formatted message. Failures are turned
//! into replies by the framework error handler.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::{
            export::{self, CsvExport},
            market::MarketApi,
            report,
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use tracing::info;

    /// Marketplace choice shown in the slash command UI.
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum ApiChoice {
        #[name = "Ordinals Wallet"]
        OrdinalsWallet,
        #[name = "Doggy Market"]
        DoggyMarket,
    }

    impl From<ApiChoice> for MarketApi {
        fn from(choice: ApiChoice) -> Self {
            match choice {
                ApiChoice::OrdinalsWallet => Self::OrdinalsWallet,
                ApiChoice::DoggyMarket => Self::DoggyMarket,
            }
        }
    }

    /// Get a list of all wallets that hold inscriptions in the collection
    #[poise::command(slash_command)]
    pub async fn snapshot(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "The slug of the collection"] slug: String,
        #[description = "The API to use (OW or DM)"] api: ApiChoice,
    ) -> Result<()> {
        ctx.defer().await?;
        let slug = slug.trim();
        let api = MarketApi::from(api);
        info!("Fetching snapshot for slug: {} using {} API", slug, api.code());

        let holders = ctx.data().market.holders(slug, api).await?;
        let table = export::to_table(&holders, &export::holder_columns());
        let csv = CsvExport::new("holders", slug, &table)?;

        send_csv(ctx, report::format_holder_summary(&holders), csv).await
    }

    /// Scrape all inscription IDs from a collection
    #[poise::command(slash_command)]
    pub async fn scrape(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "The slug of the collection"] slug: String,
        #[description = "The API to use (defaults to Ordinals Wallet)"] api: Option<ApiChoice>,
    ) -> Result<()> {
        ctx.defer().await?;
        let slug = slug.trim();
        let api = api.map_or(MarketApi::OrdinalsWallet, MarketApi::from);
        info!("Fetching inscriptions for slug: {} using {} API", slug, api.code());

        let records = ctx.data().market.inscriptions(slug, api).await?;
        let table = export::to_table(&records, &export::inscription_columns());
        let csv = CsvExport::new("inscriptions", slug, &table)?;

        send_csv(
            ctx,
            format!("Inscriptions in the collection ({} total):", csv.row_count),
            csv,
        )
        .await
    }

    /// Get statistics of the collection
    #[poise::command(slash_command)]
    pub async fn stats(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "The slug of the collection"] slug: String,
    ) -> Result<()> {
        ctx.defer().await?;
        let slug = slug.trim();
        info!("Fetching stats for slug: {}", slug);

        let stats = ctx.data().market.stats(slug).await?;
        ctx.say(report::format_stats_message(slug, &stats)?).await?;
        Ok(())
    }

    async fn send_csv(
        ctx: poise::Context<'_, BotData, Error>,
        content: String,
        csv: CsvExport,
    ) -> Result<()> {
        info!("Sending {} ({} rows)", csv.file_name, csv.row_count);
        let attachment = serenity::CreateAttachment::bytes(csv.bytes, csv.file_name);
        ctx.send(
            poise::CreateReply::default()
                .content(content)
                .attachment(attachment),
        )
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
