use std::sync::Arc;

use anyhow::Context;
use newsbot::api::{AppState, router};
use newsbot::bot::NewsBot;
use newsbot::core::config::AppConfig;
use newsbot::news::NyTimes;
use newsbot::slack::SlackClient;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("ENV").is_ok_and(|env| env == "local") {
        dotenvy::dotenv().ok();
    }
    newsbot::setup_logging();

    let config = AppConfig::from_env().context("loading configuration")?;
    info!(config = ?config, "Configuration loaded");

    let slack = Arc::new(SlackClient::new(config.slack_bot_token.clone()));
    match slack.verify_bot_token().await {
        Ok(bot_user_id) => info!(bot_user_id = %bot_user_id, "Slack bot token verified"),
        Err(e) => warn!("Could not verify Slack bot token: {}", e),
    }

    let news = Arc::new(NyTimes::new(
        config.nyt_api_key.clone(),
        config.news_fetch_timeout,
    ));
    let bot = Arc::new(NewsBot::new(news, slack).configured(&config));
    let app = router(AppState::new(bot, &config));

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("binding {}", config.bind_address))?;
    info!("Serving at http://{}/", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("Gracefully shut down news bot service");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Caught SIGINT, shutting down"),
        () = terminate => info!("Caught SIGTERM, shutting down"),
    }
}
