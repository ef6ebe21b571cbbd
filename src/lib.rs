pub mod config;
pub mod error;
pub mod favorites;
pub mod model;
pub mod projection;
pub mod providers;
pub mod recipe_box;
pub mod remix;
pub mod session;
pub mod source;

pub use config::AppConfig;
pub use error::RecipeError;
pub use favorites::{AddOutcome, DeleteOutcome, FavoritesStore, FileStore, KeyValueStore, MemoryStore};
pub use model::{Ingredient, RecipeRecord};
pub use projection::{project_ingredients, project_ingredients_text, RecipeView};
pub use recipe_box::{RecipeBox, RecipeBoxBuilder};
pub use remix::{RemixClient, RemixView};
pub use session::SessionState;
pub use source::{MealDbClient, RecipeSource};

use std::path::Path;

/// Build a recipe box from `recipe-remix.toml` (or `path`) and the environment
pub fn open_recipe_box(path: Option<&Path>) -> Result<RecipeBox, RecipeError> {
    let config = config::load_config(path)?;
    RecipeBox::builder().config(config).build()
}

/// Fetch one random recipe with the default configuration
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_remix::RecipeError> {
/// let view = recipe_remix::random_recipe().await?;
/// println!("{}", view.name);
/// # Ok(())
/// # }
/// ```
pub async fn random_recipe() -> Result<RecipeView, RecipeError> {
    let config = AppConfig::load()?;
    let client = MealDbClient::new(&config.mealdb, config.request_timeout())?;
    let record = client.fetch_random().await?;
    Ok(RecipeView::from(&record))
}
