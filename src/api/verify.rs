use tracing::warn;

/// Compare the token Slack presented with the configured verification token.
///
/// An empty presented token never matches, even if the configured one is empty.
#[must_use]
pub fn verify_token(presented: &str, expected: &str) -> bool {
    if presented.is_empty() {
        warn!("Request carried no verification token");
        return false;
    }
    if presented != expected {
        warn!("Invalid verification token");
        return false;
    }
    true
}
