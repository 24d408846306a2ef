//! Test-support endpoint tests
//!
//! Kept in their own binary: wiping the database would race the
//! parallel tests in `api_tests`.
//!
//! Run with: cargo test -p integration-tests --test testing_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, create_blog, login, register_confirmed, str_field,
    TestServer,
};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_clear_all_data() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_confirmed(&server).await.unwrap();
    let blog = create_blog(&server).await.unwrap();

    let response = server
        .client
        .delete(format!("{}/api/v1/testing/all-data", server.base_url()))
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/blogs/{}", str_field(&blog, "id")))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/blogs").await.unwrap();
    let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page["totalCount"], 0);

    // Accounts and sessions are gone as well
    assert!(login(&server, &user.input).await.is_err());
    let response = server
        .post_with_refresh("/auth/refresh-token", &user.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
