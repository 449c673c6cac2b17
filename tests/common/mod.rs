//! Test doubles shared by the integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use newsbot::core::models::{Article, ResponseTarget};
use newsbot::errors::{NewsError, SlackError};
use newsbot::news::{NewsSource, retain_well_formed};
use newsbot::slack::{MessageDelivery, ResponseMessage};
use tokio::sync::{Mutex, Notify, mpsc};

pub fn article(title: &str, url: &str) -> Article {
    Article {
        title: title.to_string(),
        abstract_text: format!("About {title}"),
        url: url.to_string(),
        published_at: Some("January 02, 2024".to_string()),
    }
}

pub fn target() -> ResponseTarget {
    ResponseTarget {
        channel_id: "C123".to_string(),
        response_url: "https://hooks.slack.com/commands/T1/42".to_string(),
    }
}

/// News source that returns canned articles (or a canned error) and records calls.
pub struct FakeNews {
    result: Result<Vec<Article>, NewsError>,
    calls: Mutex<Vec<(String, usize)>>,
    call_count: AtomicUsize,
}

impl FakeNews {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            result: Ok(articles),
            calls: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: NewsError) -> Self {
        Self {
            result: Err(error),
            calls: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    pub async fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().await.clone()
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NewsSource for FakeNews {
    async fn top_stories(&self, section: &str, top_n: usize) -> Result<Vec<Article>, NewsError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().await.push((section.to_string(), top_n));
        self.result
            .clone()
            .map(|articles| retain_well_formed(articles, top_n))
    }

    fn supported_sections(&self) -> &[&'static str] {
        &["home", "arts", "politics"]
    }

    fn user_friendly_section(&self, section: &str) -> Option<&str> {
        match section {
            "home" => Some("Home"),
            "arts" => Some("Arts"),
            "politics" => Some("Politics"),
            _ => None,
        }
    }
}

/// News source whose fetches announce themselves and then park until released.
pub struct GatedNews {
    started: mpsc::UnboundedSender<String>,
    release: Notify,
}

impl GatedNews {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (started, rx) = mpsc::unbounded_channel();
        (
            Self {
                started,
                release: Notify::new(),
            },
            rx,
        )
    }

    /// Let one parked (or the next) fetch finish.
    pub fn release_one(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl NewsSource for GatedNews {
    async fn top_stories(&self, section: &str, _top_n: usize) -> Result<Vec<Article>, NewsError> {
        let _ = self.started.send(section.to_string());
        self.release.notified().await;
        Ok(Vec::new())
    }

    fn supported_sections(&self) -> &[&'static str] {
        &["home", "arts", "politics"]
    }

    fn user_friendly_section(&self, _section: &str) -> Option<&str> {
        None
    }
}

/// Delivery that forwards every message to a channel the test can await.
pub struct RecordingDelivery {
    tx: mpsc::UnboundedSender<(String, ResponseMessage)>,
    fail: bool,
    attempts: AtomicUsize,
}

impl RecordingDelivery {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(String, ResponseMessage)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                fail: false,
                attempts: AtomicUsize::new(0),
            },
            rx,
        )
    }

    pub fn failing() -> (Self, mpsc::UnboundedReceiver<(String, ResponseMessage)>) {
        let (mut delivery, rx) = Self::new();
        delivery.fail = true;
        (delivery, rx)
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageDelivery for RecordingDelivery {
    async fn deliver(
        &self,
        response_url: &str,
        message: &ResponseMessage,
    ) -> Result<(), SlackError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let _ = self.tx.send((response_url.to_string(), message.clone()));
        if self.fail {
            return Err(SlackError::ApiError("response_url expired".to_string()));
        }
        Ok(())
    }
}

/// Wait for the next delivered message, failing the test after two seconds.
pub async fn next_delivery(
    rx: &mut mpsc::UnboundedReceiver<(String, ResponseMessage)>,
) -> (String, ResponseMessage) {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for delivery")
        .expect("delivery channel closed")
}
