use std::time::Duration;

use crate::client::{HttpRecipeService, RecipeService};
use crate::config::AnalyzerConfig;
use crate::{normalizer, AnalyzerError, Recipe};

/// Result of a one-shot analysis
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Ingredients as sent to the service
    pub ingredients: Vec<String>,
    /// Suggestions returned by the service, possibly empty
    pub recipes: Vec<Recipe>,
}

/// Builder for configuring and executing an ingredient analysis
#[derive(Debug, Default)]
pub struct RecipeAnalyzerBuilder {
    input: Option<String>,
    config: Option<AnalyzerConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl RecipeAnalyzerBuilder {
    /// Set the free-text ingredient list, as a user would type it
    ///
    /// # Example
    /// ```
    /// use recipe_analyzer::RecipeAnalyzer;
    ///
    /// let builder = RecipeAnalyzer::builder()
    ///     .ingredients("chicken, rice; and tomatoes");
    /// ```
    pub fn ingredients(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Use an explicit configuration instead of loading one
    ///
    /// Without this, [`AnalyzerConfig::load`] is used.
    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the service base URL
    ///
    /// # Example
    /// ```
    /// use recipe_analyzer::RecipeAnalyzer;
    ///
    /// let builder = RecipeAnalyzer::builder()
    ///     .ingredients("eggs, cheese")
    ///     .base_url("http://localhost:5000");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for the HTTP request
    ///
    /// # Example
    /// ```
    /// use recipe_analyzer::RecipeAnalyzer;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeAnalyzer::builder()
    ///     .ingredients("eggs, cheese")
    ///     .timeout(Duration::from_secs(30));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Normalize the input and ask the service for suggestions
    ///
    /// # Errors
    /// Returns `AnalyzerError` if:
    /// - No ingredients were given to the builder
    /// - The input normalizes to nothing (no request is made)
    /// - Configuration cannot be loaded
    /// - The service fails or cannot be reached
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_analyzer::RecipeAnalyzer;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let analysis = RecipeAnalyzer::builder()
    ///     .ingredients("chicken, rice, tomatoes")
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Analysis, AnalyzerError> {
        let input = self.input.ok_or_else(|| {
            AnalyzerError::BuilderError(
                "No ingredients specified. Use .ingredients()".to_string(),
            )
        })?;

        // Validate before any configuration or network work
        let ingredients = normalizer::normalize(&input)?;

        let mut config = match self.config {
            Some(config) => config,
            None => AnalyzerConfig::load()?,
        };
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        let timeout = self.timeout.or_else(|| config.timeout());

        let service = HttpRecipeService::with_timeout(&config, timeout)?;
        let recipes = service.analyze(&ingredients).await?;

        Ok(Analysis {
            ingredients,
            recipes,
        })
    }
}

/// Main entry point for the builder API
pub struct RecipeAnalyzer;

impl RecipeAnalyzer {
    /// Creates a new builder for analyzing ingredients
    ///
    /// # Example
    /// ```
    /// use recipe_analyzer::RecipeAnalyzer;
    ///
    /// let builder = RecipeAnalyzer::builder();
    /// ```
    pub fn builder() -> RecipeAnalyzerBuilder {
        RecipeAnalyzerBuilder::default()
    }
}
