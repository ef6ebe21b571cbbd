use log::{info, warn};

use crate::config::AppConfig;
use crate::error::RecipeError;
use crate::favorites::{AddOutcome, DeleteOutcome, FavoritesStore, FileStore, KeyValueStore};
use crate::projection::RecipeView;
use crate::providers::{LlmProvider, OpenAIProvider};
use crate::remix::{RemixClient, RemixView};
use crate::session::SessionState;
use crate::source::{MealDbClient, RecipeSource};

/// The actions a recipe page offers, wired to their services.
///
/// Each action either yields render-ready data or a [`RecipeError`] whose
/// `user_message()` the view shows. No failure is fatal; every action can
/// simply be triggered again. Actions take `&mut self` or `&self`, so loads
/// never overlap and each successful load replaces the current recipe
/// directly; embedders dispatching loads concurrently should hold their own
/// [`SessionState`] and go through `begin`/`settle`.
pub struct RecipeBox {
    source: Box<dyn RecipeSource>,
    remixer: Option<RemixClient>,
    favorites: FavoritesStore,
    session: SessionState,
}

impl RecipeBox {
    /// Creates a new builder for a recipe box
    ///
    /// # Example
    /// ```
    /// use recipe_remix::RecipeBox;
    ///
    /// let builder = RecipeBox::builder();
    /// ```
    pub fn builder() -> RecipeBoxBuilder {
        RecipeBoxBuilder::default()
    }

    /// Load a random recipe and make it the current one
    pub async fn load_random(&mut self) -> Result<RecipeView, RecipeError> {
        let record = self.source.fetch_random().await?;
        let view = RecipeView::from(&record);
        self.session.set(record);
        Ok(view)
    }

    /// Load a recipe by name and make it the current one
    ///
    /// `name` goes to the service exactly as given.
    pub async fn load_saved(&mut self, name: &str) -> Result<RecipeView, RecipeError> {
        if name.trim().is_empty() {
            return Err(RecipeError::InvalidInput(
                "Recipe name cannot be empty".to_string(),
            ));
        }

        let record = self.source.fetch_by_name(name).await?;
        let view = RecipeView::from(&record);
        self.session.set(record);
        Ok(view)
    }

    /// Remix the current recipe with `theme`
    pub async fn remix_current(&self, theme: &str) -> Result<RemixView, RecipeError> {
        let record = self.session.get().ok_or(RecipeError::EmptySession)?;
        let remixer = self.remixer.as_ref().ok_or(RecipeError::MissingApiKey)?;
        remixer.remix(record, theme).await
    }

    /// Add the current recipe's name to the favorites
    pub fn save_current(&self) -> Result<AddOutcome, RecipeError> {
        let record = self.session.get().ok_or(RecipeError::EmptySession)?;
        self.favorites.add(&record.name)
    }

    pub fn delete_saved(&self, name: &str) -> Result<DeleteOutcome, RecipeError> {
        self.favorites.delete(name)
    }

    pub fn saved(&self) -> Result<Vec<String>, RecipeError> {
        self.favorites.list()
    }

    /// The recipe on display, if one was loaded
    pub fn current(&self) -> Option<RecipeView> {
        self.session.get().map(RecipeView::from)
    }

    /// Forget the current recipe
    pub fn reset(&mut self) {
        self.session.clear();
    }

    pub fn can_remix(&self) -> bool {
        self.remixer.is_some()
    }
}

/// Builder for assembling a [`RecipeBox`]
///
/// Anything not supplied is created from the configuration: the TheMealDB
/// client, the OpenAI provider (skipped when no API key is available) and
/// a file-backed favorites store.
#[derive(Default)]
pub struct RecipeBoxBuilder {
    config: Option<AppConfig>,
    source: Option<Box<dyn RecipeSource>>,
    provider: Option<Box<dyn LlmProvider>>,
    store: Option<Box<dyn KeyValueStore>>,
}

impl RecipeBoxBuilder {
    /// Use this configuration instead of the defaults
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set a custom recipe source
    pub fn source(mut self, source: Box<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Set a custom completion provider
    pub fn provider(mut self, provider: Box<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set a custom key-value store for favorites
    pub fn store(mut self, store: Box<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the recipe box
    ///
    /// # Errors
    /// Returns `RecipeError` if an HTTP client cannot be created. A missing
    /// API key is not an error here; remixing then fails with
    /// `MissingApiKey`.
    pub fn build(self) -> Result<RecipeBox, RecipeError> {
        let config = self.config.unwrap_or_default();
        let timeout = config.request_timeout();

        let source = match self.source {
            Some(source) => source,
            None => Box::new(MealDbClient::new(&config.mealdb, timeout)?),
        };

        let provider = match self.provider {
            Some(provider) => Some(provider),
            None => match OpenAIProvider::new(&config.llm, timeout) {
                Ok(provider) => Some(Box::new(provider) as Box<dyn LlmProvider>),
                Err(RecipeError::MissingApiKey) => {
                    warn!("No API key configured; remixing is disabled");
                    None
                }
                Err(e) => return Err(e),
            },
        };

        let store = match self.store {
            Some(store) => store,
            None => {
                info!("Favorites stored in {}", config.favorites.path.display());
                Box::new(FileStore::new(config.favorites.path.clone()))
            }
        };

        Ok(RecipeBox {
            source,
            remixer: provider.map(RemixClient::new),
            favorites: FavoritesStore::new(store),
            session: SessionState::new(),
        })
    }
}
