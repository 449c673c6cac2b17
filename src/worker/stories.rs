use tracing::error;

use super::deliver::{deliver_error, deliver_message};
use crate::bot::NewsBot;
use crate::core::models::ResponseTarget;
use crate::core::router::Command;
use crate::slack::ResponseMessage;
use crate::slack::blocks::{HELP_HEADER, error_message, render_help, render_top_stories};

pub async fn run_command(bot: &NewsBot, target: &ResponseTarget, command: &Command) {
    match command {
        Command::TopStories { section } => handle_top_request(bot, target, section).await,
        Command::Help => handle_help_request(bot, target).await,
    }
}

/// Fetch the top stories for `section` and deliver them, or an error message
/// if the fetch fails.
pub async fn handle_top_request(bot: &NewsBot, target: &ResponseTarget, section: &str) {
    let articles = match bot.news().top_stories(section, bot.top_stories_count()).await {
        Ok(articles) => articles,
        Err(e) => {
            error!(section = %section, error = %e, "Error requesting top stories");
            deliver_error(bot.delivery(), target, error_message(&e)).await;
            return;
        }
    };

    let label = bot.news().user_friendly_section(section).unwrap_or(section);
    let message = ResponseMessage::ephemeral_blocks(
        format!("Top stories: {label}"),
        render_top_stories(&articles),
    );
    deliver_message(bot.delivery(), target, &message).await;
}

/// Deliver the interactive help menu.
pub async fn handle_help_request(bot: &NewsBot, target: &ResponseTarget) {
    let message = ResponseMessage::ephemeral_blocks(HELP_HEADER, render_help());
    deliver_message(bot.delivery(), target, &message).await;
}
