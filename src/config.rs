use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Recipe lookup service settings
    #[serde(default)]
    pub mealdb: MealDbConfig,
    /// Completion service settings
    #[serde(default)]
    pub llm: LlmConfig,
    /// Favorites storage settings
    #[serde(default)]
    pub favorites: FavoritesConfig,
    /// Request timeout in seconds; the transport default applies when unset
    #[serde(default)]
    pub timeout: Option<u64>,
}

/// Configuration for the recipe lookup service
#[derive(Debug, Deserialize, Clone)]
pub struct MealDbConfig {
    /// Base URL; `/random.php` and `/search.php` are appended
    #[serde(default = "default_mealdb_base_url")]
    pub base_url: String,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            base_url: default_mealdb_base_url(),
        }
    }
}

/// Configuration for the completion service
#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    /// Model identifier (e.g., "gpt-4.1")
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation (0.0-2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: default_llm_base_url(),
        }
    }
}

/// Configuration for the favorites store
#[derive(Debug, Deserialize, Clone)]
pub struct FavoritesConfig {
    /// Path of the durable key-value file
    #[serde(default = "default_favorites_path")]
    pub path: PathBuf,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            path: default_favorites_path(),
        }
    }
}

// Default value functions
fn default_mealdb_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_model() -> String {
    "gpt-4.1".to_string()
}

fn default_temperature() -> f32 {
    0.8
}

fn default_max_tokens() -> u32 {
    500
}

fn default_llm_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_favorites_path() -> PathBuf {
    PathBuf::from("favorites.json")
}

impl AppConfig {
    /// Load configuration from `recipe-remix.toml` and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    /// Timeout as a `Duration`, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_REMIX__ prefix
/// 2. The given file, or recipe-remix.toml in the current directory
/// 3. Default values
///
/// Environment variable format: RECIPE_REMIX__LLM__MODEL
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let file = match path {
        // An explicitly named file must exist
        Some(path) => File::from(path).required(true),
        None => File::with_name("recipe-remix").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("RECIPE_REMIX")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
