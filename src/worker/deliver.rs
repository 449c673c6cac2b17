use tracing::{error, info};

use crate::core::models::ResponseTarget;
use crate::slack::{MessageDelivery, ResponseMessage};

/// Make the single delivery attempt for a reply.
///
/// A failure is logged and swallowed: the response URL is the only channel
/// back to the user, so there is nowhere else to report it.
pub async fn deliver_message(
    delivery: &dyn MessageDelivery,
    target: &ResponseTarget,
    message: &ResponseMessage,
) {
    match delivery.deliver(&target.response_url, message).await {
        Ok(()) => {
            info!(
                "Delivered reply with {} blocks to channel {}",
                message.blocks.len(),
                target.channel_id
            );
        }
        Err(e) => {
            error!(
                "Failed to deliver reply to channel {}: {}",
                target.channel_id, e
            );
        }
    }
}

/// Deliver a plain ephemeral error message.
pub async fn deliver_error(
    delivery: &dyn MessageDelivery,
    target: &ResponseTarget,
    text: &str,
) {
    deliver_message(delivery, target, &ResponseMessage::ephemeral_text(text)).await
}
