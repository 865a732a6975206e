use crate::e2e::helpers;

use helpers::assertions::{assert_content_item, item_ids};
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_personalized_feed_in_priority_order(ctx: &TestContext) {
    let response = ctx.client.get("/api/feed").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();

    // Health is disabled by default so the vaccine story is gated out.
    // Entertainment (4) outranks sports (2), technology (1) and the
    // unweighted "business" headline; equal weights go newest first.
    assert_eq!(
        item_ids(body),
        vec!["rec-42", "news-final", "social-1", "news-chip", "news-rally"]
    );
    assert_eq!(body["page"], 1);
    assert_eq!(body["page_size"], helpers::ITEMS_PER_PAGE);
    assert_eq!(body["has_more"], true);
    assert_eq!(body["fallback"], false);

    for item in body["items"].as_array().unwrap() {
        assert_content_item(item);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_filter_by_content_type(ctx: &TestContext) {
    let response = ctx.client.get("/api/feed?types=news").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        item_ids(response.body()),
        vec!["news-final", "news-chip", "news-rally"]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_filter_by_date_range(ctx: &TestContext) {
    let response = ctx.client.get("/api/feed?date_range=today").await.unwrap();

    response.assert_status(StatusCode::OK);
    let ids = item_ids(response.body());
    assert!(!ids.contains(&"rec-42".to_string()));
    assert_eq!(ids.len(), 4);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fall_back_to_catalog_when_gating_empties_the_feed(ctx: &TestContext) {
    // Only the health story survives the explicit filter, and health is disabled
    let response = ctx.client.get("/api/feed?categories=health").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["fallback"], true);

    let ids = item_ids(body);
    assert!(!ids.is_empty());
    assert!(ids.iter().all(|id| id.starts_with("mock-")), "{:?}", ids);

    let categories: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["category"].as_str().unwrap())
        .collect();
    assert!(categories
        .iter()
        .all(|c| ["technology", "sports", "finance", "entertainment"].contains(c)));
    assert_eq!(categories[0], "entertainment");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_follow_preference_changes(ctx: &TestContext) {
    ctx.client
        .patch("/api/preferences/categories/health", &json!({ "enabled": true }))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let response = ctx.client.get("/api/feed").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert!(item_ids(response.body()).contains(&"news-vaccine".to_string()));
}

#[tokio::test]
async fn it_should_serve_catalog_content_when_all_sources_are_offline() {
    let ctx = TestContext::offline().await.unwrap();

    let response = ctx.client.get("/api/feed").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["fallback"], true);
    assert!(item_ids(body).iter().all(|id| id.starts_with("mock-")));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_clamp_page_size(ctx: &TestContext) {
    let response = ctx.client.get("/api/feed?page_size=1000").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body()["page_size"], 100);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_invalid_query_parameters(ctx: &TestContext) {
    let response = ctx.client.get("/api/feed?page=abc").await.unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Invalid page: abc");

    let response = ctx.client.get("/api/feed?types=podcast").await.unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Invalid content type: podcast");

    let response = ctx.client.get("/api/feed?date_range=forever").await.unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);
}
