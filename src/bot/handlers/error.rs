//! Turns command failures into user-facing replies.

use crate::{bot::BotData, errors::Error};
use tracing::error;

/// Poise error hook.
///
/// Command errors are logged with their full cause and answered with the short
/// message from [`Error::user_message`], so upstream failures never crash the bot.
#[allow(clippy::panic)] // Without bot data there is nothing to serve
pub async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            panic!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(error.user_message()).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}
