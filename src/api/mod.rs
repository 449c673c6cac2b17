//! Inbound webhook handling

pub mod handler;
pub mod interactive_handler;
pub mod slash_handler;
pub mod verify;

pub use handler::{AppState, router};
