use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::ConfigError;

pub const DEFAULT_SLASH_COMMAND: &str = "/news";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:80";
pub const DEFAULT_TOP_STORIES_COUNT: usize = 3;

/// Process-wide settings, read once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppConfig {
    pub nyt_api_key: String,
    pub slack_bot_token: String,
    pub slack_verification_token: String,
    pub slash_command: String,
    pub bind_address: String,
    pub top_stories_count: usize,
    pub news_fetch_timeout: Option<Duration>,
    pub max_concurrent_tasks: Option<usize>,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or an optional one does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or an optional one does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let top_stories_count =
            parse_optional::<usize>(&lookup, "NEWS_TOP_STORIES")?.unwrap_or(DEFAULT_TOP_STORIES_COUNT);
        if top_stories_count == 0 {
            return Err(ConfigError::Invalid {
                name: "NEWS_TOP_STORIES",
                value: "0".to_string(),
            });
        }

        let max_concurrent_tasks = parse_optional::<usize>(&lookup, "MAX_CONCURRENT_TASKS")?;
        if max_concurrent_tasks == Some(0) {
            return Err(ConfigError::Invalid {
                name: "MAX_CONCURRENT_TASKS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            nyt_api_key: required("NYT_API_KEY")?,
            slack_bot_token: required("SLACK_BOT_TOKEN")?,
            slack_verification_token: required("SLACK_VERIFICATION_TOKEN")?,
            slash_command: lookup("SLACK_SLASH_COMMAND")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SLASH_COMMAND.to_string()),
            bind_address: lookup("BIND_ADDRESS")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            top_stories_count,
            news_fetch_timeout: parse_optional::<u64>(&lookup, "NEWS_FETCH_TIMEOUT_SECS")?
                .map(Duration::from_secs),
            max_concurrent_tasks,
        })
    }
}

fn parse_optional<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("nyt_api_key", &"[redacted]")
            .field("slack_bot_token", &"[redacted]")
            .field("slack_verification_token", &"[redacted]")
            .field("slash_command", &self.slash_command)
            .field("bind_address", &self.bind_address)
            .field("top_stories_count", &self.top_stories_count)
            .field("news_fetch_timeout", &self.news_fetch_timeout)
            .field("max_concurrent_tasks", &self.max_concurrent_tasks)
            .finish()
    }
}
