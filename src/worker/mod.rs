//! Work done after the inbound request has been acknowledged

pub mod deliver;
pub mod stories;

pub use stories::{handle_help_request, handle_top_request, run_command};
