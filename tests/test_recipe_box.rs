use mockito::{Matcher, Server, ServerGuard};
use recipe_remix::{AddOutcome, AppConfig, DeleteOutcome, RecipeBox, RecipeError};
use serde_json::json;
use std::path::Path;

const STEW: &str = r#"{
    "meals": [{
        "idMeal": "1",
        "strMeal": "Stew",
        "strMealThumb": "https://example.com/stew.jpg",
        "strInstructions": "Cook.\nServe.",
        "strIngredient1": "Beef",
        "strMeasure1": "2 lb",
        "strIngredient2": "  ",
        "strMeasure2": "1 cup",
        "strIngredient3": "",
        "strMeasure3": null
    }]
}"#;

fn config_for(server: &ServerGuard, favorites: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.mealdb.base_url = server.url();
    config.llm.base_url = server.url();
    config.llm.api_key = Some("test-key".to_string());
    config.favorites.path = favorites.to_path_buf();
    config
}

fn open(server: &ServerGuard, favorites: &Path) -> RecipeBox {
    RecipeBox::builder()
        .config(config_for(server, favorites))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_random_remix_save_flow() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();
    let favorites = dir.path().join("favorites.json");

    let random = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(STEW)
        .create();
    let completion = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({"model": "gpt-4.1", "max_tokens": 500})),
            Matcher::Regex("pirate theme".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": [{"message": {"content": "Arr, Stew!"}}]}"#)
        .create();

    let mut recipe_box = open(&server, &favorites);

    let view = recipe_box.load_random().await.unwrap();
    assert_eq!(view.name, "Stew");
    assert_eq!(view.ingredients, vec!["2 lb Beef"]);
    assert_eq!(view.instructions, vec!["Cook.", "Serve."]);

    let remix = recipe_box.remix_current("pirate").await.unwrap();
    assert_eq!(remix.text, "Arr, Stew!");
    assert_eq!(remix.theme, "pirate");

    assert_eq!(recipe_box.save_current().unwrap(), AddOutcome::Added);
    assert_eq!(recipe_box.save_current().unwrap(), AddOutcome::AlreadyExists);

    random.assert();
    completion.assert();

    // Favorites survive a restart
    let reopened = open(&server, &favorites);
    assert_eq!(reopened.saved().unwrap(), vec!["Stew"]);
}

#[tokio::test]
async fn test_remix_failure_reports_uniform_error() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();

    let _random = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_body(STEW)
        .create();
    let completion = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices": []}"#)
        .expect(1)
        .create();

    let mut recipe_box = open(&server, &dir.path().join("favorites.json"));
    recipe_box.load_random().await.unwrap();

    let err = recipe_box.remix_current("space").await.unwrap_err();
    assert!(matches!(err, RecipeError::RemixFailed(_)));
    assert_eq!(
        err.user_message(),
        "Oops! Something went wrong while creating your remix. Please try again!"
    );
    completion.assert();
}

#[tokio::test]
async fn test_remix_on_empty_session_hits_no_server() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();

    let completion = server
        .mock("POST", "/v1/chat/completions")
        .expect(0)
        .create();

    let recipe_box = open(&server, &dir.path().join("favorites.json"));
    let err = recipe_box.remix_current("space").await.unwrap_err();
    assert!(matches!(err, RecipeError::EmptySession));
    completion.assert();
}

#[tokio::test]
async fn test_load_saved_distinguishes_not_found_from_network() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();

    let _missing = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "Nothing".into()))
        .with_status(200)
        .with_body(r#"{"meals": null}"#)
        .create();
    let _broken = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "Broken".into()))
        .with_status(502)
        .create();

    let mut recipe_box = open(&server, &dir.path().join("favorites.json"));

    let not_found = recipe_box.load_saved("Nothing").await.unwrap_err();
    assert!(matches!(not_found, RecipeError::NotFound(_)));
    assert!(!not_found.is_network());

    let network = recipe_box.load_saved("Broken").await.unwrap_err();
    assert!(network.is_network());

    assert!(recipe_box.current().is_none());
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    // Nothing listens on port 9 locally
    config.mealdb.base_url = "http://127.0.0.1:9".to_string();
    config.llm.api_key = Some("test-key".to_string());
    config.favorites.path = dir.path().join("favorites.json");

    let mut recipe_box = RecipeBox::builder().config(config).build().unwrap();
    let err = recipe_box.load_random().await.unwrap_err();
    assert!(matches!(err, RecipeError::Network(_)));
}

#[tokio::test]
async fn test_open_saved_recipe_then_forget_it() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();

    let search = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "Stew".into()))
        .with_status(200)
        .with_body(STEW)
        .create();

    let mut recipe_box = open(&server, &dir.path().join("favorites.json"));
    let view = recipe_box.load_saved("Stew").await.unwrap();
    assert_eq!(view.image_url, "https://example.com/stew.jpg");
    recipe_box.save_current().unwrap();

    assert_eq!(recipe_box.delete_saved("Pie").unwrap(), DeleteOutcome::NotPresent);
    assert_eq!(recipe_box.saved().unwrap(), vec!["Stew"]);
    assert_eq!(recipe_box.delete_saved("Stew").unwrap(), DeleteOutcome::Deleted);
    assert!(recipe_box.saved().unwrap().is_empty());
    search.assert();
}

#[tokio::test]
async fn test_load_saved_sends_name_verbatim() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();

    let literal = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), " Stew ".into()))
        .with_status(200)
        .with_body(STEW)
        .expect(1)
        .create();
    let trimmed = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "Stew".into()))
        .with_status(200)
        .with_body(STEW)
        .expect(0)
        .create();

    let mut recipe_box = open(&server, &dir.path().join("favorites.json"));
    let view = recipe_box.load_saved(" Stew ").await.unwrap();
    assert_eq!(view.name, "Stew");

    literal.assert();
    trimmed.assert();
}
