mod mealdb;

pub use mealdb::MealDbClient;

use async_trait::async_trait;

use crate::error::RecipeError;
use crate::model::RecipeRecord;

/// A service that hands out single recipes
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Any one recipe; repeated calls may differ
    ///
    /// Fails with `Network` or `MalformedResponse`.
    async fn fetch_random(&self) -> Result<RecipeRecord, RecipeError>;

    /// The first recipe whose name matches `name`
    ///
    /// Fails with `NotFound` when the service has no match, which callers
    /// must tell apart from `Network`/`MalformedResponse`.
    async fn fetch_by_name(&self, name: &str) -> Result<RecipeRecord, RecipeError>;
}
