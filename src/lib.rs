pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod submission;

// Re-export commonly used types
pub use builder::{Analysis, RecipeAnalyzer, RecipeAnalyzerBuilder};
pub use client::{HttpRecipeService, RecipeService};
pub use config::AnalyzerConfig;
pub use error::{AnalyzerError, ValidationError, GENERIC_SERVICE_ERROR};
pub use model::{Difficulty, HealthStatus, Recipe};
pub use normalizer::{normalize, parse_ingredients};
pub use submission::{Outcome, SubmissionController, SubmissionState};

/// Analyze a free-text ingredient list against the configured service.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let analysis = recipe_analyzer::analyze_ingredients("chicken, rice; tomatoes").await?;
/// for recipe in analysis.recipes {
///     println!("{}", recipe.name);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn analyze_ingredients(input: &str) -> Result<Analysis, AnalyzerError> {
    RecipeAnalyzer::builder().ingredients(input).build().await
}

/// Query the configured service's health endpoint.
pub async fn check_health() -> Result<HealthStatus, AnalyzerError> {
    let config = AnalyzerConfig::load()?;
    HttpRecipeService::new(&config)?.health().await
}
