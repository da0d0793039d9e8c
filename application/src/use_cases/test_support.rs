//! Scripted gateway shared by use case tests

use crate::ports::storefront_gateway::{AuthSession, GatewayError, StorefrontGateway};
use async_trait::async_trait;
use std::sync::Mutex;
use storefront_domain::{
    AuthToken, Catalog, Category, Product, Recommendation, Recommender, Review, User,
};

/// Answers from a tiny in-memory catalog and records every call.
pub(crate) struct ScriptedGateway {
    catalog: Catalog,
    recommender: Recommender,
    fail: bool,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self {
            catalog: Catalog::new(
                vec![
                    Product::new("1", "Work Laptop", 999.0, Category::Electronics),
                    Product::new("2", "Travel Laptop", 1099.0, Category::Electronics),
                    Product::new("3", "Studio Laptop", 1999.0, Category::Electronics),
                    Product::new("4", "Cotton Shirt", 25.0, Category::Fashion).featured(),
                ],
                vec![],
            ),
            recommender: Recommender::default(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call returns `GatewayError::ConnectionError`.
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    fn record(&self, call: String) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(GatewayError::ConnectionError("offline".to_string()));
        }
        Ok(())
    }

    fn session(id: &str, name: &str, email: &str) -> AuthSession {
        AuthSession {
            user: User::new(id, name, email),
            token: AuthToken::new("scripted-token"),
        }
    }
}

#[async_trait]
impl StorefrontGateway for ScriptedGateway {
    async fn get_products(&self) -> Result<Vec<Product>, GatewayError> {
        self.record("get_products".to_string())?;
        Ok(self.catalog.products().to_vec())
    }

    async fn get_product_by_id(&self, id: &str) -> Result<Option<Product>, GatewayError> {
        self.record(format!("get_product_by_id:{id}"))?;
        Ok(self.catalog.product_by_id(id).cloned())
    }

    async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, GatewayError> {
        self.record(format!("get_products_by_category:{category}"))?;
        Ok(self
            .catalog
            .products_by_category(category)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn get_featured_products(&self) -> Result<Vec<Product>, GatewayError> {
        self.record("get_featured_products".to_string())?;
        Ok(self.catalog.featured().into_iter().cloned().collect())
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, GatewayError> {
        self.record(format!("search_products:{query}"))?;
        Ok(self.catalog.search(query).into_iter().cloned().collect())
    }

    async fn get_product_reviews(&self, product_id: &str) -> Result<Vec<Review>, GatewayError> {
        self.record(format!("get_product_reviews:{product_id}"))?;
        Ok(Vec::new())
    }

    async fn get_average_rating(&self, product_id: &str) -> Result<f64, GatewayError> {
        self.record(format!("get_average_rating:{product_id}"))?;
        Ok(0.0)
    }

    async fn login(&self, email: &str, _password: &str) -> Result<AuthSession, GatewayError> {
        self.record(format!("login:{email}"))?;
        Ok(Self::session("1", "Scripted", email))
    }

    async fn create_account(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<AuthSession, GatewayError> {
        self.record(format!("create_account:{email}"))?;
        Ok(Self::session("2", name, email))
    }

    async fn reset_password(&self, email: &str) -> Result<(), GatewayError> {
        self.record(format!("reset_password:{email}"))
    }

    async fn send_chat_message(&self, message: &str) -> Result<Recommendation, GatewayError> {
        self.record(format!("send_chat_message:{message}"))?;
        Ok(self.recommender.recommend(&self.catalog, message))
    }
}
