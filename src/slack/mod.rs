//! All Slack-specific functionality

pub mod blocks;
pub mod client;
pub mod command_parser;
pub mod interaction;
pub mod response_builder;

// Re-export main types for convenience
pub use client::{MessageDelivery, SlackClient};
pub use response_builder::{ResponseMessage, ResponseType};
