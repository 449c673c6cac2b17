use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinHandle;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::core::config::{AppConfig, DEFAULT_TOP_STORIES_COUNT};
use crate::core::models::ResponseTarget;
use crate::core::router::{Command, route_command};
use crate::news::NewsSource;
use crate::slack::MessageDelivery;
use crate::worker;

/// The news bot: a news source, a way to deliver replies, and the settings
/// that shape each reply. Built once at startup and shared read-only by every
/// detached task.
pub struct NewsBot {
    news: Arc<dyn NewsSource>,
    delivery: Arc<dyn MessageDelivery>,
    top_stories_count: usize,
    task_permits: Option<Arc<Semaphore>>,
}

impl NewsBot {
    #[must_use]
    pub fn new(news: Arc<dyn NewsSource>, delivery: Arc<dyn MessageDelivery>) -> Self {
        Self {
            news,
            delivery,
            top_stories_count: DEFAULT_TOP_STORIES_COUNT,
            task_permits: None,
        }
    }

    /// Apply the reply-shaping settings from `config`.
    #[must_use]
    pub fn configured(self, config: &AppConfig) -> Self {
        let bot = self.with_top_stories_count(config.top_stories_count);
        match config.max_concurrent_tasks {
            Some(limit) => bot.with_max_concurrent_tasks(limit),
            None => bot,
        }
    }

    #[must_use]
    pub fn with_top_stories_count(mut self, count: usize) -> Self {
        self.top_stories_count = count.max(1);
        self
    }

    /// Bound how many detached tasks may fetch and deliver at once. Tasks over
    /// the limit wait for a permit instead of being dropped.
    #[must_use]
    pub fn with_max_concurrent_tasks(mut self, limit: usize) -> Self {
        self.task_permits = Some(Arc::new(Semaphore::new(limit.max(1))));
        self
    }

    #[must_use]
    pub fn news(&self) -> &dyn NewsSource {
        self.news.as_ref()
    }

    #[must_use]
    pub fn delivery(&self) -> &dyn MessageDelivery {
        self.delivery.as_ref()
    }

    #[must_use]
    pub fn top_stories_count(&self) -> usize {
        self.top_stories_count
    }

    /// Route slash command text and run it in a detached task.
    pub fn dispatch_text(self: &Arc<Self>, target: ResponseTarget, text: &str) -> JoinHandle<()> {
        self.dispatch(target, route_command(text))
    }

    /// Run `command` in a detached task.
    ///
    /// The task owns `target` and never touches the originating HTTP request,
    /// which is gone by the time the task runs. It has no cancellation hook and
    /// ends after its single delivery attempt.
    pub fn dispatch(self: &Arc<Self>, target: ResponseTarget, command: Command) -> JoinHandle<()> {
        let bot = Arc::clone(self);
        let span = info_span!(
            "news_task",
            correlation_id = %Uuid::new_v4(),
            channel_id = %target.channel_id,
        );

        tokio::spawn(
            async move {
                let _permit = bot.acquire_permit().await;
                info!(command = ?command, "Processing command");
                worker::run_command(&bot, &target, &command).await;
            }
            .instrument(span),
        )
    }

    async fn acquire_permit(&self) -> Option<OwnedSemaphorePermit> {
        match &self.task_permits {
            Some(permits) => Arc::clone(permits).acquire_owned().await.ok(),
            None => None,
        }
    }
}
