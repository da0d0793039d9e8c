//! In-memory storefront gateway with artificial latency

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use storefront_application::{AuthSession, GatewayError, LatencyConfig, StorefrontGateway};
use storefront_domain::{AuthToken, Catalog, Product, Recommendation, Recommender, Review, User};
use tracing::debug;
use uuid::Uuid;

use crate::catalog::seed_catalog;

/// Gateway that answers from a [`Catalog`] after a fixed delay
///
/// Never fails. Any credentials are accepted.
pub struct MockStorefrontGateway {
    catalog: Arc<Catalog>,
    recommender: Recommender,
    latency: LatencyConfig,
}

impl MockStorefrontGateway {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            recommender: Recommender::default(),
            latency: LatencyConfig::default(),
        }
    }

    /// Gateway over the built-in catalog
    pub fn seeded() -> Self {
        Self::new(Arc::new(seed_catalog()))
    }

    pub fn with_latency(mut self, latency: LatencyConfig) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_recommender(mut self, recommender: Recommender) -> Self {
        self.recommender = recommender;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn latency(&self) -> &LatencyConfig {
        &self.latency
    }

    async fn wait(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn owned(products: Vec<&Product>) -> Vec<Product> {
        products.into_iter().cloned().collect()
    }

    fn mock_token() -> AuthToken {
        AuthToken::new(format!("mock-token-{}", Uuid::new_v4()))
    }
}

/// Display name from the local part of an email address
fn name_from_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, _)) if !local.is_empty() => local.to_string(),
        _ => email.to_string(),
    }
}

#[async_trait]
impl StorefrontGateway for MockStorefrontGateway {
    async fn get_products(&self) -> Result<Vec<Product>, GatewayError> {
        debug!("get_products");
        Self::wait(self.latency.catalog).await;
        Ok(self.catalog.products().to_vec())
    }

    async fn get_product_by_id(&self, id: &str) -> Result<Option<Product>, GatewayError> {
        debug!("get_product_by_id {}", id);
        Self::wait(self.latency.product).await;
        Ok(self.catalog.product_by_id(id).cloned())
    }

    async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, GatewayError> {
        debug!("get_products_by_category {}", category);
        Self::wait(self.latency.catalog).await;
        Ok(Self::owned(self.catalog.products_by_category(category)))
    }

    async fn get_featured_products(&self) -> Result<Vec<Product>, GatewayError> {
        debug!("get_featured_products");
        Self::wait(self.latency.catalog).await;
        Ok(Self::owned(self.catalog.featured()))
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, GatewayError> {
        debug!("search_products {:?}", query);
        Self::wait(self.latency.catalog).await;
        Ok(Self::owned(self.catalog.search(query)))
    }

    async fn get_product_reviews(&self, product_id: &str) -> Result<Vec<Review>, GatewayError> {
        debug!("get_product_reviews {}", product_id);
        Self::wait(self.latency.reviews).await;
        Ok(self
            .catalog
            .reviews_for(product_id)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn get_average_rating(&self, product_id: &str) -> Result<f64, GatewayError> {
        debug!("get_average_rating {}", product_id);
        Self::wait(self.latency.reviews).await;
        Ok(self.catalog.average_rating(product_id))
    }

    async fn login(&self, email: &str, _password: &str) -> Result<AuthSession, GatewayError> {
        debug!("login {}", email);
        Self::wait(self.latency.auth).await;
        Ok(AuthSession {
            user: User::new("1", name_from_email(email), email),
            token: Self::mock_token(),
        })
    }

    async fn create_account(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<AuthSession, GatewayError> {
        debug!("create_account {}", email);
        Self::wait(self.latency.auth).await;
        let name = if name.is_empty() {
            name_from_email(email)
        } else {
            name.to_string()
        };
        Ok(AuthSession {
            user: User::new(Uuid::new_v4().to_string(), name, email),
            token: Self::mock_token(),
        })
    }

    async fn reset_password(&self, email: &str) -> Result<(), GatewayError> {
        debug!("reset_password {}", email);
        Self::wait(self.latency.auth).await;
        Ok(())
    }

    async fn send_chat_message(&self, message: &str) -> Result<Recommendation, GatewayError> {
        debug!("send_chat_message ({} chars)", message.len());
        Self::wait(self.latency.chat).await;
        Ok(self.recommender.recommend(&self.catalog, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_application::{SendChatUseCase, StorefrontSession};
    use storefront_domain::{FALLBACK_REPLY, MATCHED_REPLY};
    use tokio::time::Instant;

    fn instant_gateway() -> MockStorefrontGateway {
        MockStorefrontGateway::seeded().with_latency(LatencyConfig::none())
    }

    #[tokio::test]
    async fn test_catalog_pass_throughs() {
        let gateway = instant_gateway();

        assert_eq!(gateway.get_products().await.unwrap().len(), 12);
        assert_eq!(
            gateway.get_product_by_id("6").await.unwrap().unwrap().title,
            "Apple Watch Series 9"
        );
        assert!(gateway.get_product_by_id("404").await.unwrap().is_none());
        assert_eq!(
            gateway
                .get_products_by_category("HOME")
                .await
                .unwrap()
                .len(),
            2
        );
        assert_eq!(gateway.get_featured_products().await.unwrap().len(), 4);
        assert_eq!(gateway.search_products("laptop").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_reviews_and_rating() {
        let gateway = instant_gateway();
        assert_eq!(gateway.get_product_reviews("1").await.unwrap().len(), 3);
        assert_eq!(gateway.get_average_rating("1").await.unwrap(), 4.7);
        assert_eq!(gateway.get_average_rating("12").await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_any_credentials_are_accepted() {
        let gateway = instant_gateway();

        let session = gateway.login("ada@example.com", "").await.unwrap();
        assert_eq!(session.user.name, "ada");
        assert!(session.token.as_str().starts_with("mock-token-"));

        let created = gateway
            .create_account("Ada Lovelace", "ada@example.com", "pw")
            .await
            .unwrap();
        assert_eq!(created.user.name, "Ada Lovelace");
        assert_ne!(created.token, session.token);

        assert!(gateway.reset_password("ada@example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_chat_reply_variants() {
        let gateway = instant_gateway();

        let rec = gateway
            .send_chat_message("I need a laptop for work")
            .await
            .unwrap();
        assert_eq!(rec.reply, MATCHED_REPLY);
        assert_eq!(rec.products.len(), 3);

        let rec = gateway.send_chat_message("xyzzy").await.unwrap();
        assert_eq!(rec.reply, FALLBACK_REPLY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_waits_for_configured_delay() {
        let gateway = MockStorefrontGateway::seeded()
            .with_latency(LatencyConfig::none().with_chat(Duration::from_millis(1500)));

        let started = Instant::now();
        gateway.send_chat_message("shoes").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1500));

        let started = Instant::now();
        gateway.get_products().await.unwrap();
        assert!(started.elapsed() < Duration::from_millis(1));
    }

    #[tokio::test]
    async fn test_send_chat_use_case_end_to_end() {
        let use_case = SendChatUseCase::new(Arc::new(instant_gateway()));
        let mut session = StorefrontSession::with_greeting();

        use_case
            .execute(&mut session.chat, "Something for my kitchen")
            .await
            .unwrap();

        assert_eq!(session.chat.len(), 3);
        let reply = session.chat.last().unwrap();
        let ids: Vec<_> = reply.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["11", "12"]);

        session.cart.add_item(reply.products[0].clone());
        assert_eq!(session.cart.subtotal(), 48.0);
    }

    #[test]
    fn test_name_from_email() {
        assert_eq!(name_from_email("sam@shop.test"), "sam");
        assert_eq!(name_from_email("no-at-sign"), "no-at-sign");
        assert_eq!(name_from_email("@shop.test"), "@shop.test");
    }
}
