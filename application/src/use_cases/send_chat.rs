//! Send Chat use case
//!
//! Runs one turn of the recommender conversation against a [`ChatStore`].

use crate::ports::storefront_gateway::{GatewayError, StorefrontGateway};
use std::sync::Arc;
use storefront_domain::{ChatMessage, ChatStore, Recommendation};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while sending a chat message
#[derive(Error, Debug)]
pub enum SendChatError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Use case for sending a message to the shopping assistant
pub struct SendChatUseCase<G: StorefrontGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: StorefrontGateway + 'static> SendChatUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Append the user message, wait for the assistant, append its reply.
    ///
    /// Blank input is rejected; anything else is stored exactly as typed.
    ///
    /// The typing flag is set for the duration of the gateway call and
    /// cleared whether or not the call succeeds. There is no cancellation:
    /// once awaited, the reply is always applied to `chat`.
    pub async fn execute(
        &self,
        chat: &mut ChatStore,
        text: &str,
    ) -> Result<Recommendation, SendChatError> {
        if text.trim().is_empty() {
            return Err(SendChatError::EmptyMessage);
        }

        chat.add_message(ChatMessage::user(text));
        chat.set_typing(true);
        debug!("Sending chat message ({} chars)", text.len());

        let result = self.gateway.send_chat_message(text).await;
        chat.set_typing(false);

        let recommendation = match result {
            Ok(recommendation) => recommendation,
            Err(e) => {
                warn!("Chat request failed: {}", e);
                return Err(e.into());
            }
        };

        info!(
            "Assistant suggested {} product(s) (rule: {})",
            recommendation.products.len(),
            recommendation.matched_rule.as_deref().unwrap_or("fallback")
        );

        chat.add_message(ChatMessage::assistant(
            recommendation.reply.clone(),
            recommendation.products.clone(),
        ));

        Ok(recommendation)
    }
}
