//! Artificial gateway latency.
//!
//! [`LatencyConfig`] holds the fixed delay a mock gateway waits before
//! answering each kind of request, so a UI has a loading state to show.
//! Delays carry no timeout or retry meaning.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed delay per gateway operation group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Product lists, category filters, featured products, search.
    pub catalog: Duration,
    /// Single product lookup.
    pub product: Duration,
    /// Reviews and average rating.
    pub reviews: Duration,
    /// Login, sign-up, password reset.
    pub auth: Duration,
    /// Chat assistant reply.
    pub chat: Duration,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            catalog: Duration::from_millis(500),
            product: Duration::from_millis(300),
            reviews: Duration::from_millis(300),
            auth: Duration::from_millis(1000),
            chat: Duration::from_millis(1500),
        }
    }
}

impl LatencyConfig {
    /// No delays at all.
    pub fn none() -> Self {
        Self {
            catalog: Duration::ZERO,
            product: Duration::ZERO,
            reviews: Duration::ZERO,
            auth: Duration::ZERO,
            chat: Duration::ZERO,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_catalog(mut self, delay: Duration) -> Self {
        self.catalog = delay;
        self
    }

    pub fn with_product(mut self, delay: Duration) -> Self {
        self.product = delay;
        self
    }

    pub fn with_reviews(mut self, delay: Duration) -> Self {
        self.reviews = delay;
        self
    }

    pub fn with_auth(mut self, delay: Duration) -> Self {
        self.auth = delay;
        self
    }

    pub fn with_chat(mut self, delay: Duration) -> Self {
        self.chat = delay;
        self
    }

    pub fn is_instant(&self) -> bool {
        *self == Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let latency = LatencyConfig::default();
        assert_eq!(latency.catalog, Duration::from_millis(500));
        assert_eq!(latency.chat, Duration::from_millis(1500));
        assert!(!latency.is_instant());
    }

    #[test]
    fn test_none_is_instant() {
        assert!(LatencyConfig::none().is_instant());
    }

    #[test]
    fn test_builder() {
        let latency = LatencyConfig::none()
            .with_chat(Duration::from_millis(20))
            .with_auth(Duration::from_millis(10));

        assert_eq!(latency.chat, Duration::from_millis(20));
        assert_eq!(latency.auth, Duration::from_millis(10));
        assert_eq!(latency.catalog, Duration::ZERO);
    }
}
