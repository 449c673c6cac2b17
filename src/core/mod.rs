//! Domain types, command routing and configuration

pub mod config;
pub mod models;
pub mod router;
