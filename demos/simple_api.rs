//! Simple API usage with the builder and the submission controller
//!
//! Expects a recipe-analysis service at the configured base URL
//! (default `http://localhost:5000`). Pass the ingredient list as the first
//! argument:
//!
//! ```text
//! cargo run --example simple_api -- "chicken, rice; and tomatoes"
//! ```

use recipe_analyzer::{
    check_health, AnalyzerConfig, HttpRecipeService, RecipeAnalyzer, SubmissionController,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "chicken, rice, tomatoes, onions".to_string());

    println!("=== Health ===");
    match check_health().await {
        Ok(health) => println!("{}: {}", health.status, health.message),
        Err(e) => println!("Service unavailable: {}", e.user_message()),
    }

    // One-shot: text → recipes
    println!("\n=== Builder ===");
    match RecipeAnalyzer::builder().ingredients(input.as_str()).build().await {
        Ok(analysis) => {
            println!("Parsed ingredients: {}", analysis.ingredients.join(", "));
            for recipe in &analysis.recipes {
                println!(
                    "\n({}) {}",
                    recipe.difficulty_level().badge_color(),
                    recipe.to_text()
                );
            }
        }
        Err(e) => println!("{}", e.user_message()),
    }

    // Form-style: the controller tracks pending/settled state between submits
    println!("\n=== Controller ===");
    let service = HttpRecipeService::new(&AnalyzerConfig::load()?)?;
    let controller = SubmissionController::new(service);
    if let Err(e) = controller.submit(&input).await {
        println!("{}", e.user_message());
    }
    println!("State: {:?}", controller.state());
    println!("Recipes shown: {}", controller.recipes().len());

    Ok(())
}
