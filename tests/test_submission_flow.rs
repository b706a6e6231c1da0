use mockito::{Matcher, Server};
use recipe_analyzer::{
    HttpRecipeService, Outcome, RecipeService, SubmissionController, SubmissionState,
    GENERIC_SERVICE_ERROR,
};
use serde_json::json;

async fn controller_for(server: &Server) -> SubmissionController<HttpRecipeService> {
    let service = HttpRecipeService::with_base_url(server.url()).unwrap();
    SubmissionController::new(service)
}

#[tokio::test]
async fn test_submission_displays_recipes() {
    let _ = env_logger::try_init();

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze-recipe")
        .match_body(Matcher::Json(json!({ "ingredients": ["Andrew", "beans"] })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"recipes": [{
                "name": "Andrew's Beans",
                "description": "Named after the cook",
                "ingredients": ["beans"],
                "instructions": ["Heat beans"],
                "cooking_time": "10 minutes",
                "difficulty": "easy"
            }]}"#,
        )
        .create_async()
        .await;

    let controller = controller_for(&server).await;
    let recipes = controller.submit("Andrew, plus beans").await.unwrap();

    assert_eq!(recipes.len(), 1);
    assert_eq!(controller.parsed_ingredients(), vec!["Andrew", "beans"]);
    match controller.state() {
        SubmissionState::Settled(Outcome::Recipes(shown)) => assert_eq!(shown, recipes),
        other => panic!("Expected settled recipes, got {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submission_without_recipes_field_renders_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze-recipe")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let controller = controller_for(&server).await;
    let recipes = controller.submit("flour").await.unwrap();

    assert!(recipes.is_empty());
    assert!(controller.error_message().is_none());
    assert_eq!(
        controller.state(),
        SubmissionState::Settled(Outcome::Recipes(Vec::new()))
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submission_shows_service_message() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze-recipe")
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "rate limited"}"#)
        .create_async()
        .await;

    let controller = controller_for(&server).await;
    assert!(controller.submit("flour").await.is_err());

    assert_eq!(controller.error_message().as_deref(), Some("rate limited"));
    assert!(!controller.is_pending());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submission_shows_fallback_message() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze-recipe")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let controller = controller_for(&server).await;
    assert!(controller.submit("flour").await.is_err());

    assert_eq!(
        controller.error_message().as_deref(),
        Some(GENERIC_SERVICE_ERROR)
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submission_validation_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze-recipe")
        .expect(0)
        .create_async()
        .await;

    let controller = controller_for(&server).await;
    let err = controller.submit("  ;  ; ").await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(
        controller.error_message().as_deref(),
        Some("Please enter valid ingredients separated by commas or semicolons")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_health_check() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "healthy", "message": "Recipe Analyzer API is running"}"#)
        .create_async()
        .await;

    let service = HttpRecipeService::with_base_url(server.url()).unwrap();
    assert!(service.health().await.unwrap().is_healthy());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submission_tolerates_null_recipe_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze-recipe")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"recipes": [{
                "name": "Soup",
                "description": "Just water",
                "ingredients": ["water"],
                "instructions": ["Boil"],
                "cooking_time": null,
                "difficulty": null
            }]}"#,
        )
        .create_async()
        .await;

    let controller = controller_for(&server).await;
    let recipes = controller.submit("water").await.unwrap();

    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].difficulty, "");
    assert_eq!(recipes[0].difficulty_level().badge_color(), "#6c757d");
    assert!(controller.error_message().is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submission_plain_text_success_renders_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze-recipe")
        .with_status(200)
        .with_body("OK")
        .create_async()
        .await;

    let controller = controller_for(&server).await;
    let recipes = controller.submit("water").await.unwrap();

    assert!(recipes.is_empty());
    assert!(controller.error_message().is_none());
    assert_eq!(
        controller.state(),
        SubmissionState::Settled(Outcome::Recipes(Vec::new()))
    );
    mock.assert_async().await;
}
