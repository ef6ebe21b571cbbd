use thiserror::Error;

/// Errors that can occur while loading, remixing or saving recipes
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Transport failure or non-success status from the lookup service
    #[error("Failed to reach recipe service: {0}")]
    Network(#[from] reqwest::Error),

    /// The lookup service answered with a body we could not use
    #[error("Malformed response from recipe service: {0}")]
    MalformedResponse(String),

    /// The lookup service was reachable but had no match
    #[error("No recipe found named '{0}'")]
    NotFound(String),

    /// Remix failed; the cause is only kept for logging
    #[error("Something went wrong while creating your remix")]
    RemixFailed(String),

    /// The action needs a loaded recipe but none is held
    #[error("No recipe loaded")]
    EmptySession,

    /// A trigger was called with unusable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The durable store could not be read or written
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The durable store holds something we cannot decode
    #[error("Storage format error: {0}")]
    StorageFormat(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// No API key for the completion service in config or environment
    #[error("OPENAI_API_KEY not found in config or environment")]
    MissingApiKey,
}

impl From<serde_json::Error> for RecipeError {
    fn from(err: serde_json::Error) -> Self {
        RecipeError::StorageFormat(err.to_string())
    }
}

impl RecipeError {
    /// True for failures the user should answer with "try again"
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            RecipeError::Network(_) | RecipeError::MalformedResponse(_)
        )
    }

    /// Short text for the view layer
    pub fn user_message(&self) -> String {
        match self {
            RecipeError::Network(_) | RecipeError::MalformedResponse(_) => {
                "Sorry, couldn't load a recipe. Please try again.".to_string()
            }
            RecipeError::NotFound(name) => format!("No recipe called \"{}\" was found.", name),
            RecipeError::RemixFailed(_) => {
                "Oops! Something went wrong while creating your remix. Please try again!"
                    .to_string()
            }
            RecipeError::EmptySession => "Please load a recipe first!".to_string(),
            RecipeError::InvalidInput(msg) => msg.clone(),
            RecipeError::Storage(_) | RecipeError::StorageFormat(_) => {
                "Couldn't access your saved recipes.".to_string()
            }
            RecipeError::Config(e) => format!("Configuration problem: {}", e),
            RecipeError::MissingApiKey => {
                "Remixing needs an API key. Set OPENAI_API_KEY or llm.api_key.".to_string()
            }
        }
    }
}
