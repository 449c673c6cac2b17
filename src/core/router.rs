/// Prefix that selects the top-stories command.
pub const STORIES_PREFIX: &str = "stories";

/// Section requested when `stories` is sent without one.
pub const DEFAULT_SECTION: &str = "home";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    TopStories { section: String },
    Help,
}

/// Classify slash command text.
///
/// A plain prefix match on the lowercased text: `stories` followed by anything
/// becomes a top-stories request for the trimmed remainder, everything else
/// (including empty text) is a help request.
#[must_use]
pub fn route_command(text: &str) -> Command {
    let normalized = text.to_lowercase();
    match normalized.strip_prefix(STORIES_PREFIX) {
        Some(rest) => Command::TopStories {
            section: normalize_section(rest),
        },
        None => Command::Help,
    }
}

/// Trim a requested section, falling back to [`DEFAULT_SECTION`] when nothing is left.
#[must_use]
pub fn normalize_section(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_SECTION.to_string()
    } else {
        trimmed.to_string()
    }
}
