use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Response};
use std::time::Duration;

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, GENERIC_SERVICE_ERROR};
use crate::model::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, HealthStatus, Recipe};

/// The remote recipe-analysis service
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Ask for recipe suggestions for an already-normalized ingredient list
    async fn analyze(&self, ingredients: &[String]) -> Result<Vec<Recipe>, AnalyzerError>;

    /// Check whether the service is up
    async fn health(&self) -> Result<HealthStatus, AnalyzerError>;
}

/// [`RecipeService`] over HTTP + JSON
pub struct HttpRecipeService {
    client: Client,
    analyze_url: String,
    health_url: String,
}

impl HttpRecipeService {
    /// Create a client from configuration
    pub fn new(config: &AnalyzerConfig) -> Result<Self, AnalyzerError> {
        Self::with_timeout(config, config.timeout())
    }

    /// Like [`HttpRecipeService::new`], with `timeout` replacing the configured one
    pub fn with_timeout(
        config: &AnalyzerConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, AnalyzerError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(HttpRecipeService {
            client: builder.build()?,
            analyze_url: config.analyze_url(),
            health_url: config.health_url(),
        })
    }

    /// Create a client for a service at `base_url` using the default paths
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, AnalyzerError> {
        Self::new(&AnalyzerConfig {
            base_url: base_url.into(),
            ..Default::default()
        })
    }
}

#[async_trait]
impl RecipeService for HttpRecipeService {
    async fn analyze(&self, ingredients: &[String]) -> Result<Vec<Recipe>, AnalyzerError> {
        debug!(
            "Processing {} ingredients: {}",
            ingredients.len(),
            ingredients.join(", ")
        );

        let response = self
            .client
            .post(&self.analyze_url)
            .json(&AnalyzeRequest {
                ingredients: ingredients.to_vec(),
            })
            .send()
            .await?;

        let response = check_status(response).await?;
        let body = response.text().await?;
        let recipes = AnalyzeResponse::from_body(&body).into_recipes();
        debug!("Received {} recipe suggestions", recipes.len());

        Ok(recipes)
    }

    async fn health(&self) -> Result<HealthStatus, AnalyzerError> {
        let response = self.client.get(&self.health_url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Pass successful responses through; turn anything else into
/// [`AnalyzerError::Service`] carrying the service's `error` text if it sent one.
async fn check_status(response: Response) -> Result<Response, AnalyzerError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = service_error_message(&body);
    warn!("Recipe service returned {}: {}", status, message);

    Err(AnalyzerError::Service {
        status: status.as_u16(),
        message,
    })
}

fn service_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|payload| payload.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| GENERIC_SERVICE_ERROR.to_string())
}
