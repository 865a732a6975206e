use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_context::test_context;

fn category<'a>(preferences: &'a Value, id: &str) -> &'a Value {
    preferences["categories"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == id)
        .unwrap_or_else(|| panic!("Category '{}' missing", id))
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_default_preferences(ctx: &TestContext) {
    let response = ctx.client.get("/api/preferences").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();

    assert_eq!(body["categories"].as_array().unwrap().len(), 6);
    assert_eq!(body["theme"], "light");
    assert_eq!(body["language"], "en");
    assert_eq!(body["notifications"], json!({ "mode": "disabled" }));

    assert_eq!(category(body, "technology")["enabled"], true);
    assert_eq!(category(body, "technology")["weight"], 1);
    assert_eq!(category(body, "entertainment")["weight"], 4);
    assert_eq!(category(body, "health")["enabled"], false);
    assert_eq!(category(body, "science")["enabled"], false);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_replace_and_sanitize_preferences(ctx: &TestContext) {
    let response = ctx
        .client
        .put(
            "/api/preferences",
            &json!({
                "categories": [
                    { "id": " Science ", "name": " Science ", "enabled": true, "weight": 5 },
                    { "id": "sports", "name": "Sports", "enabled": false, "priority": 2 }
                ],
                "theme": "dark",
                "language": "es",
                "notifications": { "mode": "enabled", "rules": [] }
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["preferences"]["categories"][0]["id"], "science");
    assert_eq!(body["preferences"]["categories"][0]["name"], "Science");

    let warnings: Vec<&str> = body["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w.as_str().unwrap())
        .collect();
    assert!(warnings.contains(&"Category sports: Low weight may result in less content from this category"));
    assert!(warnings.contains(&"No notification preferences configured"));

    let stored = ctx.client.get("/api/preferences").await.unwrap();
    let stored = stored.body();
    assert_eq!(stored["theme"], "dark");
    assert_eq!(stored["language"], "es");
    assert_eq!(category(stored, "science")["enabled"], true);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_invalid_preferences(ctx: &TestContext) {
    let response = ctx
        .client
        .put(
            "/api/preferences",
            &json!({
                "categories": [
                    { "id": "tech", "name": "Tech", "enabled": false, "weight": 15 }
                ]
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Category 1 (tech): Category weight must be between 1 and 10")
        .assert_error_message("At least one category must be enabled");

    // Nothing was stored
    let stored = ctx.client.get("/api/preferences").await.unwrap();
    assert_eq!(stored.body()["categories"].as_array().unwrap().len(), 6);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_bodies(ctx: &TestContext) {
    let response = ctx
        .client
        .put_raw("/api/preferences", "{\"categories\": [")
        .await
        .unwrap();
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let response = ctx
        .client
        .put(
            "/api/preferences",
            &json!({
                "categories": [{ "id": "tech", "name": "Tech", "enabled": true }],
                "theme": "neon"
            }),
        )
        .await
        .unwrap();
    response
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_error_message("neon");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_validate_without_saving(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/preferences/validate",
            &json!({
                "categories": [
                    { "id": "tech", "name": "Tech", "enabled": true, "weight": 5 },
                    { "id": "tech", "name": "Tech again", "enabled": true, "weight": 5 }
                ]
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["is_valid"], false);
    assert_eq!(body["errors"], json!(["Duplicate category IDs found: tech"]));

    let stored = ctx.client.get("/api/preferences").await.unwrap();
    assert!(category(stored.body(), "technology")["enabled"] == true);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_preference_stats(ctx: &TestContext) {
    let response = ctx.client.get("/api/preferences/stats").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["total_categories"], 6);
    assert_eq!(body["enabled_categories"], 4);
    assert_eq!(body["disabled_categories"], 2);
    assert_eq!(body["total_notifications"], 0);
    assert_eq!(body["total_weight"], 10);
    assert_eq!(body["average_weight"], 2.5);
    assert_eq!(body["weight_distribution"]["entertainment"], 40.0);
    assert_eq!(body["weight_distribution"]["technology"], 10.0);
    assert!(body["weight_distribution"].get("health").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_toggle_and_reweight_a_category(ctx: &TestContext) {
    let response = ctx
        .client
        .patch(
            "/api/preferences/categories/science",
            &json!({ "enabled": true, "weight": 42 }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let science = category(response.body(), "science");
    assert_eq!(science["enabled"], true);
    assert_eq!(science["weight"], 10);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_category_updates_that_make_no_sense(ctx: &TestContext) {
    let response = ctx
        .client
        .patch("/api/preferences/categories/gardening", &json!({ "enabled": true }))
        .await
        .unwrap();
    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Category gardening not found");

    let response = ctx
        .client
        .patch("/api/preferences/categories/sports", &json!({}))
        .await
        .unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Either enabled or weight must be provided");

    for id in ["technology", "sports", "finance"] {
        ctx.client
            .patch(
                &format!("/api/preferences/categories/{}", id),
                &json!({ "enabled": false }),
            )
            .await
            .unwrap()
            .assert_status(StatusCode::OK);
    }
    let response = ctx
        .client
        .patch(
            "/api/preferences/categories/entertainment",
            &json!({ "enabled": false }),
        )
        .await
        .unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("At least one category must be enabled");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reset_to_defaults(ctx: &TestContext) {
    ctx.client
        .patch("/api/preferences/categories/health", &json!({ "enabled": true }))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let response = ctx.client.post_empty("/api/preferences/reset").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(category(response.body(), "health")["enabled"], false);

    let stored = ctx.client.get("/api/preferences").await.unwrap();
    assert_eq!(category(stored.body(), "health")["enabled"], false);
}
