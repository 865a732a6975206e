use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_configured_sources_when_ready(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body();
    assert_eq!(body["status"], "ready");
    for source in ["newsapi", "tmdb", "social"] {
        assert_eq!(
            body["sources"][source], "configured",
            "Unexpected status for source '{}'",
            source
        );
    }
}

#[tokio::test]
async fn it_should_report_degraded_without_configured_sources() {
    let ctx = TestContext::offline().await.unwrap();

    let response = ctx.client.get("/health/ready").await.unwrap();

    // Still 200: the dashboard keeps working from the fallback catalog
    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["sources"]["newsapi"], "not_configured");
    assert_eq!(body["sources"]["tmdb"], "not_configured");
    assert_eq!(body["sources"]["social"], "not_configured");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/health/ready").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_caller_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers("/health", &[("x-request-id", "dashboard-42")])
        .await
        .unwrap();

    assert_eq!(
        response.header("x-request-id").map(String::as_str),
        Some("dashboard-42")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/health").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_unknown_routes(ctx: &TestContext) {
    let response = ctx.client.get("/api/unknown").await.unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
}
