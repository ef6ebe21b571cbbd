use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use std::time::Duration;

use crate::config::MealDbConfig;
use crate::error::RecipeError;
use crate::model::{MealsEnvelope, RecipeRecord};
use crate::source::RecipeSource;

/// Client for TheMealDB lookup API
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client from configuration
    pub fn new(config: &MealDbConfig, timeout: Option<Duration>) -> Result<Self, RecipeError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(MealDbClient {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        MealDbClient {
            client: Client::new(),
            base_url,
        }
    }

    async fn get_meals(&self, path: &str, query: &[(&str, &str)]) -> Result<MealsEnvelope, RecipeError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<MealsEnvelope>().await?)
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn fetch_random(&self) -> Result<RecipeRecord, RecipeError> {
        let envelope = self.get_meals("random.php", &[]).await?;
        let record = envelope.into_first().ok_or_else(|| {
            RecipeError::MalformedResponse("random lookup returned no meals".to_string())
        })?;

        info!("Loaded random recipe '{}'", record.name);
        Ok(record)
    }

    async fn fetch_by_name(&self, name: &str) -> Result<RecipeRecord, RecipeError> {
        let envelope = self.get_meals("search.php", &[("s", name)]).await?;
        let record = envelope
            .into_first()
            .ok_or_else(|| RecipeError::NotFound(name.to_string()))?;

        info!("Loaded recipe '{}' for query '{}'", record.name, name);
        Ok(record)
    }
}
