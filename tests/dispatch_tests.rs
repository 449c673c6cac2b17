mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{FakeNews, GatedNews, RecordingDelivery, article, next_delivery, target};
use newsbot::bot::NewsBot;
use newsbot::core::router::Command;
use newsbot::errors::NewsError;
use newsbot::slack::ResponseType;
use newsbot::slack::blocks::{GENERIC_FAILURE_MESSAGE, INVALID_SECTION_MESSAGE};
use newsbot::worker;

#[tokio::test]
async fn stories_text_fetches_three_and_delivers_ephemeral_blocks() {
    let news = Arc::new(FakeNews::with_articles(vec![
        article("One", "https://nyti.ms/1"),
        article("Two", "https://nyti.ms/2"),
        article("Three", "https://nyti.ms/3"),
        article("Four", "https://nyti.ms/4"),
    ]));
    let (delivery, mut rx) = RecordingDelivery::new();
    let bot = Arc::new(NewsBot::new(news.clone(), Arc::new(delivery)));

    bot.dispatch_text(target(), "stories arts").await.unwrap();

    assert_eq!(news.calls().await, vec![("arts".to_string(), 3)]);

    let (url, message) = next_delivery(&mut rx).await;
    assert_eq!(url, target().response_url);
    assert_eq!(message.response_type, ResponseType::Ephemeral);
    assert_eq!(message.text, "Top stories: Arts");
    assert_eq!(message.blocks.len(), 1 + 3 * 2);
    assert_eq!(message.blocks[0]["type"], "header");
    assert_eq!(message.blocks[1]["text"]["text"], "<https://nyti.ms/1|One>\nAbout One");
}

#[tokio::test]
async fn malformed_articles_never_reach_the_rendered_message() {
    let news = Arc::new(FakeNews::with_articles(vec![
        article("", "https://nyti.ms/untitled"),
        article("Kept", "https://nyti.ms/kept"),
        article("No link", ""),
    ]));
    let (delivery, mut rx) = RecordingDelivery::new();
    let bot = NewsBot::new(news, Arc::new(delivery));

    worker::handle_top_request(&bot, &target(), "home").await;

    let (_, message) = next_delivery(&mut rx).await;
    assert_eq!(message.blocks.len(), 3);
    let rendered = serde_json::to_string(&message.blocks).unwrap();
    assert!(rendered.contains("Kept"));
    assert!(!rendered.contains("untitled"));
    assert!(!rendered.contains("No link"));
}

#[tokio::test]
async fn empty_text_delivers_help_menu() {
    let news = Arc::new(FakeNews::with_articles(Vec::new()));
    let (delivery, mut rx) = RecordingDelivery::new();
    let bot = Arc::new(NewsBot::new(news.clone(), Arc::new(delivery)));

    bot.dispatch_text(target(), "").await.unwrap();

    let (_, message) = next_delivery(&mut rx).await;
    assert_eq!(message.response_type, ResponseType::Ephemeral);
    assert_eq!(message.blocks.len(), 3);

    let options = message.blocks[2]["accessory"]["options"]
        .as_array()
        .expect("options array");
    let values: Vec<&str> = options.iter().filter_map(|o| o["value"].as_str()).collect();
    assert_eq!(values, vec!["home", "arts", "politics"]);
    assert_eq!(news.call_count(), 0, "help must not touch the news source");
}

#[tokio::test]
async fn invalid_section_delivers_help_pointer() {
    let news = Arc::new(FakeNews::failing(NewsError::InvalidSection(
        "gossip".into(),
    )));
    let (delivery, mut rx) = RecordingDelivery::new();
    let bot = NewsBot::new(news, Arc::new(delivery));

    worker::run_command(
        &bot,
        &target(),
        &Command::TopStories {
            section: "gossip".into(),
        },
    )
    .await;

    let (_, message) = next_delivery(&mut rx).await;
    assert_eq!(message.text, INVALID_SECTION_MESSAGE);
    assert!(message.blocks.is_empty());
    assert_eq!(message.response_type, ResponseType::Ephemeral);
}

#[tokio::test]
async fn upstream_failure_delivers_generic_message_without_details() {
    let news = Arc::new(FakeNews::failing(NewsError::Upstream(
        "status=500 body=secret internals".into(),
    )));
    let (delivery, mut rx) = RecordingDelivery::new();
    let bot = NewsBot::new(news, Arc::new(delivery));

    worker::handle_top_request(&bot, &target(), "home").await;

    let (_, message) = next_delivery(&mut rx).await;
    assert_eq!(message.text, GENERIC_FAILURE_MESSAGE);
    assert!(!message.text.contains("secret internals"));
}

#[tokio::test]
async fn failed_delivery_is_attempted_once() {
    let news = Arc::new(FakeNews::with_articles(vec![article("One", "https://nyti.ms/1")]));
    let (delivery, mut rx) = RecordingDelivery::failing();
    let delivery = Arc::new(delivery);
    let bot = NewsBot::new(news, delivery.clone());

    worker::handle_top_request(&bot, &target(), "arts").await;

    let _ = next_delivery(&mut rx).await;
    assert_eq!(delivery.attempts(), 1);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn top_stories_count_is_configurable() {
    let news = Arc::new(FakeNews::with_articles(vec![
        article("One", "https://nyti.ms/1"),
        article("Two", "https://nyti.ms/2"),
    ]));
    let (delivery, mut rx) = RecordingDelivery::new();
    let bot = Arc::new(
        NewsBot::new(news.clone(), Arc::new(delivery))
            .with_top_stories_count(1)
            .with_max_concurrent_tasks(1),
    );

    let first = bot.dispatch_text(target(), "stories");
    let second = bot.dispatch(
        target(),
        Command::TopStories {
            section: "politics".into(),
        },
    );
    first.await.unwrap();
    second.await.unwrap();

    let mut calls = news.calls().await;
    calls.sort();
    assert_eq!(
        calls,
        vec![("home".to_string(), 1), ("politics".to_string(), 1)]
    );

    for _ in 0..2 {
        let (_, message) = next_delivery(&mut rx).await;
        assert_eq!(message.blocks.len(), 3);
    }
}

async fn next_start(rx: &mut tokio::sync::mpsc::UnboundedReceiver<String>) -> String {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for a fetch to start")
        .expect("start channel closed")
}

fn stories(section: &str) -> Command {
    Command::TopStories {
        section: section.into(),
    }
}

#[tokio::test]
async fn task_limit_holds_back_extra_fetches() {
    let (news, mut started) = GatedNews::new();
    let news = Arc::new(news);
    let (delivery, mut rx) = RecordingDelivery::new();
    let bot = Arc::new(NewsBot::new(news.clone(), Arc::new(delivery)).with_max_concurrent_tasks(1));

    let first = bot.dispatch(target(), stories("arts"));
    let second = bot.dispatch(target(), stories("politics"));

    let _ = next_start(&mut started).await;
    assert!(
        tokio::time::timeout(Duration::from_millis(200), started.recv())
            .await
            .is_err(),
        "second fetch started while the first still held the only permit"
    );

    news.release_one();
    let _ = next_delivery(&mut rx).await;
    let _ = next_start(&mut started).await;

    news.release_one();
    let _ = next_delivery(&mut rx).await;

    first.await.unwrap();
    second.await.unwrap();
}

#[tokio::test]
async fn without_task_limit_fetches_overlap() {
    let (news, mut started) = GatedNews::new();
    let news = Arc::new(news);
    let (delivery, mut rx) = RecordingDelivery::new();
    let bot = Arc::new(NewsBot::new(news.clone(), Arc::new(delivery)));

    let first = bot.dispatch(target(), stories("arts"));
    let second = bot.dispatch(target(), stories("politics"));

    let mut sections = vec![next_start(&mut started).await, next_start(&mut started).await];
    sections.sort();
    assert_eq!(sections, vec!["arts".to_string(), "politics".to_string()]);

    for _ in 0..2 {
        news.release_one();
        let _ = next_delivery(&mut rx).await;
    }

    first.await.unwrap();
    second.await.unwrap();
}
