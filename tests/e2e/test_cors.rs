use crate::e2e::helpers;

use helpers::assertions::assert_cors_headers;
use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_short_circuit_options_with_no_content(ctx: &TestContext) {
    let response = ctx.client.options("/api/trending").await.unwrap();

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.body_bytes.is_empty());
    assert_cors_headers(&response);

    // Preflight never reaches the handler
    assert_eq!(ctx.upstream.request_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_options_on_any_path(ctx: &TestContext) {
    for path in ["/", "/api/meta", "/does-not-exist"] {
        let response = ctx.client.options(path).await.unwrap();
        response.assert_status(StatusCode::NO_CONTENT);
        assert_cors_headers(&response);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_add_cors_headers_to_every_response(ctx: &TestContext) {
    for path in ["/", "/api/meta", "/api/trending", "/health", "/nope"] {
        let response = ctx.client.get(path).await.unwrap();
        assert_cors_headers(&response);
    }
}
