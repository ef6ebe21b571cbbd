use log::{debug, warn};
use serde::Serialize;

use crate::error::RecipeError;
use crate::model::RecipeRecord;
use crate::providers::{build_remix_prompt, LlmProvider};

/// A generated remix, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemixView {
    pub recipe_name: String,
    pub theme: String,
    pub text: String,
}

/// Produces themed variations of a recipe through a completion service.
///
/// One attempt per call. Every failure, whatever its cause, comes back as
/// [`RecipeError::RemixFailed`].
pub struct RemixClient {
    provider: Box<dyn LlmProvider>,
}

impl RemixClient {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    pub async fn remix(&self, record: &RecipeRecord, theme: &str) -> Result<RemixView, RecipeError> {
        let theme = theme.trim();
        if theme.is_empty() {
            return Err(RecipeError::InvalidInput(
                "Remix theme cannot be empty".to_string(),
            ));
        }

        let prompt = build_remix_prompt(record, theme);
        debug!(
            "Requesting {} remix of '{}' from {}",
            theme,
            record.name,
            self.provider.provider_name()
        );

        match self.provider.complete(&prompt).await {
            Ok(text) => Ok(RemixView {
                recipe_name: record.name.clone(),
                theme: theme.to_string(),
                text,
            }),
            Err(e) => {
                let cause = e.to_string();
                warn!(
                    "Remix of '{}' via {} failed: {}",
                    record.name,
                    self.provider.provider_name(),
                    cause
                );
                Err(RecipeError::RemixFailed(cause))
            }
        }
    }
}
