//! newsbot - A Slack bot that answers `/news` with the latest New York Times top stories.
//!
//! Slack slash commands and help-menu interactions arrive over HTTP. Each
//! request is verified and acknowledged right away; the actual work (routing
//! the command, fetching stories, rendering Block Kit, posting to the
//! request's `response_url`) happens in a detached tokio task.
//!
//! # Architecture
//!
//! The system uses:
//! - axum for the inbound webhook endpoints
//! - reqwest for the NYT Top Stories API and `response_url` delivery
//! - slack-morphism for the bot token check at startup
//! - Tokio for async runtime and task spawning
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use newsbot::api::{AppState, router};
//! use newsbot::bot::NewsBot;
//! use newsbot::core::config::AppConfig;
//! use newsbot::news::NyTimes;
//! use newsbot::slack::SlackClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     newsbot::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let news = Arc::new(NyTimes::new(config.nyt_api_key.clone(), config.news_fetch_timeout));
//!     let slack = Arc::new(SlackClient::new(config.slack_bot_token.clone()));
//!     let bot = Arc::new(NewsBot::new(news, slack).configured(&config));
//!
//!     let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
//!     axum::serve(listener, router(AppState::new(bot, &config))).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod bot;
pub mod core;
pub mod errors;
pub mod news;
pub mod slack;
pub mod worker;

/// Configure structured JSON logging.
///
/// The filter comes from `RUST_LOG`, defaulting to `info` (`debug` with the
/// `debug-logs` feature). Safe to call more than once; later calls are no-ops.
///
/// # Example
///
/// ```
/// newsbot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let default_level = if cfg!(feature = "debug-logs") {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
