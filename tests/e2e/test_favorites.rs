use crate::e2e::helpers;

use helpers::assertions::find_item;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_start_without_favorites(ctx: &TestContext) {
    let response = ctx.client.get("/api/favorites").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body(), &json!({ "ids": [] }));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_add_and_list_favorites(ctx: &TestContext) {
    for id in ["news-rally", "news-chip", "news-rally"] {
        ctx.client
            .put_empty(&format!("/api/favorites/{}", id))
            .await
            .unwrap()
            .assert_status(StatusCode::NO_CONTENT);
    }

    let response = ctx.client.get("/api/favorites").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body(),
        &json!({ "ids": ["news-chip", "news-rally"] })
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_mark_feed_items_as_favorite_and_read(ctx: &TestContext) {
    ctx.client
        .put_empty("/api/favorites/news-chip")
        .await
        .unwrap()
        .assert_status(StatusCode::NO_CONTENT);
    ctx.client
        .post_empty("/api/content/social-1/read")
        .await
        .unwrap()
        .assert_status(StatusCode::NO_CONTENT);

    let response = ctx.client.get("/api/feed").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(find_item(body, "news-chip")["is_favorite"], true);
    assert_eq!(find_item(body, "news-chip")["is_read"], false);
    assert_eq!(find_item(body, "social-1")["is_read"], true);
    assert_eq!(find_item(body, "news-final")["is_favorite"], false);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_remove_favorites(ctx: &TestContext) {
    ctx.client
        .put_empty("/api/favorites/news-chip")
        .await
        .unwrap()
        .assert_status(StatusCode::NO_CONTENT);

    let response = ctx.client.delete("/api/favorites/news-chip").await.unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    let response = ctx.client.get("/api/favorites").await.unwrap();
    assert_eq!(response.body(), &json!({ "ids": [] }));

    let response = ctx.client.delete("/api/favorites/news-chip").await.unwrap();
    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Favorite news-chip not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_blank_content_ids(ctx: &TestContext) {
    let response = ctx.client.put_empty("/api/favorites/%20").await.unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Content id is required");
}
