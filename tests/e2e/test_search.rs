use crate::e2e::helpers;

use helpers::assertions::{assert_content_item, find_item, item_ids};
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use test_context::test_context;

fn result_ids(body: &serde_json::Value) -> Vec<String> {
    let results = serde_json::json!({ "items": body["results"] });
    item_ids(&results)
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_find_a_movie_by_title(ctx: &TestContext) {
    let response = ctx.client.get("/api/search?q=ocean").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["query"], "ocean");
    assert_eq!(body["total_results"], 1);
    assert_eq!(result_ids(body), vec!["rec-42"]);
    assert_content_item(&body["results"][0]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_match_case_insensitively(ctx: &TestContext) {
    let response = ctx.client.get("/api/search?q=GAME").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(result_ids(response.body()), vec!["social-1"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_merge_sources_newest_first_without_preference_gating(ctx: &TestContext) {
    let response = ctx.client.get("/api/search?q=on").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        result_ids(response.body()),
        vec!["news-final", "news-rally", "news-vaccine"]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_queries_shorter_than_two_characters(ctx: &TestContext) {
    for path in ["/api/search", "/api/search?q=", "/api/search?q=a", "/api/search?q=%20x%20"] {
        let response = ctx.client.get(path).await.unwrap();

        response
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error_message("Search query must be at least 2 characters");
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_invalid_page_size(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/api/search?q=ocean&page_size=lots")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Invalid page_size: lots");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_mark_favorites_in_search_results(ctx: &TestContext) {
    ctx.client
        .put_empty("/api/favorites/news-final")
        .await
        .unwrap()
        .assert_status(StatusCode::NO_CONTENT);

    let response = ctx.client.get("/api/search?q=championship").await.unwrap();

    response.assert_status(StatusCode::OK);
    let results = serde_json::json!({ "items": response.body()["results"] });
    assert_eq!(find_item(&results, "news-final")["is_favorite"], true);
}

#[tokio::test]
async fn it_should_return_no_results_when_sources_are_offline() {
    let ctx = TestContext::offline().await.unwrap();

    let response = ctx.client.get("/api/search?q=ocean").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body()["total_results"], 0);
    assert!(result_ids(response.body()).is_empty());
}
