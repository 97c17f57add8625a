use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::config::BrowserConfig;
use crate::model::{MealRecord, MealsResponse};
use crate::BrowserError;

/// Read-only access to the recipe service
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Recipes that use the ingredient. `None` when nothing matches.
    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Option<Vec<MealRecord>>, BrowserError>;

    /// Full record for the identifier. `None` when it is unknown.
    async fn lookup(&self, id: &str) -> Result<Option<MealRecord>, BrowserError>;
}

/// HTTP client for TheMealDB
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, BrowserError> {
        let mut builder = Client::builder().user_agent("Mozilla/5.0 (compatible; MealDbBrowser/0.1)");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &BrowserConfig) -> Result<Self, BrowserError> {
        Self::new(config.api_base_url.clone(), config.timeout())
    }

    async fn get_meals(&self, endpoint: &str, value: &str) -> Result<MealsResponse, BrowserError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {}?i={}", url, value);

        let response = self.client.get(&url).query(&[("i", value)]).send().await?;
        if !response.status().is_success() {
            return Err(BrowserError::StatusError {
                status: response.status().as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Option<Vec<MealRecord>>, BrowserError> {
        Ok(self.get_meals("filter.php", ingredient).await?.meals)
    }

    async fn lookup(&self, id: &str) -> Result<Option<MealRecord>, BrowserError> {
        let meals = self.get_meals("lookup.php", id).await?.meals;
        Ok(meals.and_then(|meals| meals.into_iter().next()))
    }
}
