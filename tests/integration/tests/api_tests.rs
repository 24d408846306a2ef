//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, create_blog, create_post, fixtures::*, login,
    refresh_cookie, register_confirmed, str_field, TestServer,
};
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_root("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_root("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_registration_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let input = RegisterInput::unique();

    let response = server.post("/auth/registration", &input).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Unconfirmed accounts cannot log in
    let response = server
        .post("/auth/login", &LoginInput::from_register(&input))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let code = server.confirmation_code(&input.email).await.unwrap();
    let body = json!({ "code": code.to_string() });
    let response = server
        .post("/auth/registration-confirmation", &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // A code is single-use
    let response = server
        .post("/auth/registration-confirmation", &body)
        .await
        .unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["error"]["details"]["field"], "code");

    let (access, _) = login(&server, &input).await.unwrap();
    let response = server.get_auth("/auth/me", &access).await.unwrap();
    let me: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me["login"], input.login.as_str());
    assert_eq!(me["email"], input.email.as_str());
}

#[tokio::test]
async fn test_registration_duplicate_login_and_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let input = RegisterInput::unique();
    server.post("/auth/registration", &input).await.unwrap();

    let same_login = RegisterInput {
        email: format!("other{}", input.email),
        ..input.clone()
    };
    let response = server.post("/auth/registration", &same_login).await.unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["error"]["details"]["field"], "login");

    let same_email = RegisterInput {
        login: format!("x{}", &input.login[1..]),
        ..input.clone()
    };
    let response = server.post("/auth/registration", &same_email).await.unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["error"]["details"]["field"], "email");
}

#[tokio::test]
async fn test_resend_confirmation_replaces_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let input = RegisterInput::unique();
    server.post("/auth/registration", &input).await.unwrap();
    let first = server.confirmation_code(&input.email).await.unwrap();

    let body = json!({ "email": input.email });
    let response = server
        .post("/auth/registration-email-resending", &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let second = server.confirmation_code(&input.email).await.unwrap();
    assert_ne!(first, second);

    // The replaced code no longer confirms
    let response = server
        .post(
            "/auth/registration-confirmation",
            &json!({ "code": first.to_string() }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_confirmed(&server).await.unwrap();

    let login_req = LoginInput {
        login_or_email: user.input.email.clone(),
        password: "wrongpass".to_string(),
    };
    let response = server.post("/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_rotates_tokens() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_confirmed(&server).await.unwrap();

    let response = server
        .post_with_refresh("/auth/refresh-token", &user.refresh_token)
        .await
        .unwrap();
    let rotated = refresh_cookie(&response).expect("refresh cookie");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!str_field(&body, "accessToken").is_empty());
    assert_ne!(rotated, user.refresh_token);

    // The previous refresh token is spent
    let response = server
        .post_with_refresh("/auth/refresh-token", &user.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post_with_refresh("/auth/refresh-token", &rotated)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_logout_ends_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_confirmed(&server).await.unwrap();

    let response = server
        .post_with_refresh("/auth/logout", &user.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post_with_refresh("/auth/refresh-token", &user.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post_with_refresh("/auth/logout", &user.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Device Tests
// ============================================================================

#[tokio::test]
async fn test_devices_listing_and_termination() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_confirmed(&server).await.unwrap();
    let (_, second_refresh) = login(&server, &user.input).await.unwrap();

    let response = server
        .get_with_refresh("/security/devices", &user.refresh_token)
        .await
        .unwrap();
    let devices: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(devices.len(), 2);

    // Listing works with a rotated token as well
    let response = server
        .post_with_refresh("/auth/refresh-token", &second_refresh)
        .await
        .unwrap();
    let second_refresh = refresh_cookie(&response).expect("refresh cookie");
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_with_refresh("/security/devices", &second_refresh)
        .await
        .unwrap();
    let devices: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    let device_ids: Vec<String> = devices.iter().map(|d| str_field(d, "deviceId")).collect();

    // Unknown device
    let response = server
        .delete_with_refresh(
            "/security/devices/00000000-0000-4000-8000-000000000000",
            &user.refresh_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Someone else's device
    let stranger = register_confirmed(&server).await.unwrap();
    let response = server
        .delete_with_refresh(
            &format!("/security/devices/{}", device_ids[0]),
            &stranger.refresh_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Terminating every device ends the caller's own session too
    let response = server
        .delete_with_refresh("/security/devices", &user.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    for token in [&user.refresh_token, &second_refresh] {
        let response = server
            .get_with_refresh("/security/devices", token)
            .await
            .unwrap();
        assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
    }
}

#[tokio::test]
async fn test_terminate_single_device() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_confirmed(&server).await.unwrap();
    let (_, other_refresh) = login(&server, &user.input).await.unwrap();

    let response = server
        .get_with_refresh("/security/devices", &user.refresh_token)
        .await
        .unwrap();
    let devices: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();

    // The second login is the most recently active device
    let newest = devices
        .iter()
        .max_by_key(|d| {
            str_field(d, "lastActiveDate")
                .parse::<DateTime<Utc>>()
                .expect("lastActiveDate is RFC 3339")
        })
        .map(|d| str_field(d, "deviceId"))
        .expect("two devices");

    let response = server
        .delete_with_refresh(&format!("/security/devices/{newest}"), &user.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post_with_refresh("/auth/refresh-token", &other_refresh)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_with_refresh("/security/devices", &user.refresh_token)
        .await
        .unwrap();
    let devices: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(devices.len(), 1);
}

// ============================================================================
// Password Recovery Tests
// ============================================================================

#[tokio::test]
async fn test_password_recovery_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_confirmed(&server).await.unwrap();

    // Unknown emails are not revealed
    let response = server
        .post(
            "/auth/password-recovery",
            &json!({ "email": "nobody-here@example.com" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post(
            "/auth/password-recovery",
            &json!({ "email": user.input.email }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let code = server
        .recovery_code(&user.input.email)
        .await
        .unwrap()
        .expect("recovery code issued");

    let response = server
        .post(
            "/auth/new-password",
            &json!({ "newPassword": "changed99", "recoveryCode": code.to_string() }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Old password and old sessions are gone
    let response = server
        .post("/auth/login", &LoginInput::from_register(&user.input))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post_with_refresh("/auth/refresh-token", &user.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let changed = RegisterInput {
        password: "changed99".to_string(),
        ..user.input.clone()
    };
    login(&server, &changed).await.unwrap();

    // The recovery code is single-use
    let response = server
        .post(
            "/auth/new-password",
            &json!({ "newPassword": "again12345", "recoveryCode": code.to_string() }),
        )
        .await
        .unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["error"]["details"]["field"], "recoveryCode");
}

// ============================================================================
// Blog Tests
// ============================================================================

#[tokio::test]
async fn test_blog_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Writes need admin credentials
    let response = server.post("/blogs", &BlogInput::unique()).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let blog = create_blog(&server).await.unwrap();
    let blog_id = str_field(&blog, "id");
    assert_eq!(blog["isMembership"], false);

    let update = BlogInput::unique();
    let response = server
        .admin_put(&format!("/blogs/{blog_id}"), &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/blogs/{blog_id}")).await.unwrap();
    let fetched: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched["name"], update.name.as_str());
    assert_eq!(fetched["websiteUrl"], update.website_url.as_str());

    let response = server
        .admin_delete(&format!("/blogs/{blog_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/blogs/{blog_id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_blog_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let invalid = BlogInput {
        website_url: "http://not-secure.example.com".to_string(),
        ..BlogInput::unique()
    };

    let response = server.admin_post("/blogs", &invalid).await.unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["error"]["details"]["field"], "websiteUrl");
}

#[tokio::test]
async fn test_blog_search_by_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let blog = create_blog(&server).await.unwrap();
    let name = str_field(&blog, "name");
    let term = name.trim_start_matches("blog ").to_uppercase();

    let response = server
        .get(&format!("/blogs?searchNameTerm={term}"))
        .await
        .unwrap();
    let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page["totalCount"], 1);
    assert_eq!(page["items"][0]["id"], blog["id"]);
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_posts_in_blog_paginate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let blog = create_blog(&server).await.unwrap();
    let blog_id = str_field(&blog, "id");

    for _ in 0..3 {
        create_post(&server, &blog_id).await.unwrap();
    }

    let response = server
        .get(&format!("/blogs/{blog_id}/posts?pageSize=2&pageNumber=2"))
        .await
        .unwrap();
    let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page["totalCount"], 3);
    assert_eq!(page["pagesCount"], 2);
    assert_eq!(page["page"], 2);
    assert_eq!(page["pageSize"], 2);
    assert_eq!(page["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(page["items"][0]["blogName"], blog["name"]);
}

#[tokio::test]
async fn test_post_crud_via_posts_route() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let blog = create_blog(&server).await.unwrap();
    let blog_id = str_field(&blog, "id");

    let response = server
        .admin_post("/posts", &PostInput::for_blog("12345"))
        .await
        .unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["error"]["details"]["field"], "blogId");

    let response = server
        .admin_post("/posts", &PostInput::for_blog(&blog_id))
        .await
        .unwrap();
    let post: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let post_id = str_field(&post, "id");
    assert_eq!(post["extendedLikesInfo"]["myStatus"], "None");

    let update = PostInput {
        title: "renamed".to_string(),
        ..PostInput::for_blog(&blog_id)
    };
    let response = server
        .admin_put(&format!("/posts/{post_id}"), &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/posts/{post_id}")).await.unwrap();
    let fetched: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched["title"], "renamed");

    let response = server
        .admin_delete(&format!("/posts/{post_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/posts/{post_id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_padded_post_title_at_max_length() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let blog = create_blog(&server).await.unwrap();
    let blog_id = str_field(&blog, "id");
    let title = "t".repeat(30);

    let create = PostInput {
        title: format!("  {title}  "),
        ..PostInput::for_blog(&blog_id)
    };
    let response = server.admin_post("/posts", &create).await.unwrap();
    let post: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(post["title"], title.as_str());

    let update = PostInput {
        title: format!(" {title} "),
        ..PostInput::for_blog(&blog_id)
    };
    let response = server
        .admin_put(&format!("/posts/{}", str_field(&post, "id")), &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_post_likes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let blog = create_blog(&server).await.unwrap();
    let post = create_post(&server, &str_field(&blog, "id")).await.unwrap();
    let path = format!("/posts/{}", str_field(&post, "id"));

    let fan = register_confirmed(&server).await.unwrap();
    let critic = register_confirmed(&server).await.unwrap();

    let response = server
        .put_auth(&format!("{path}/like-status"), &fan.access_token, &LikeInput::new("Like"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .put_auth(
            &format!("{path}/like-status"),
            &critic.access_token,
            &LikeInput::new("Dislike"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .put_auth(
            &format!("{path}/like-status"),
            &critic.access_token,
            &LikeInput::new("Meh"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.get_auth(&path, &fan.access_token).await.unwrap();
    let viewed: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let likes = &viewed["extendedLikesInfo"];
    assert_eq!(likes["likesCount"], 1);
    assert_eq!(likes["dislikesCount"], 1);
    assert_eq!(likes["myStatus"], "Like");
    assert_eq!(likes["newestLikes"][0]["login"], fan.input.login.as_str());

    // Anonymous viewers have no status
    let response = server.get(&path).await.unwrap();
    let viewed: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(viewed["extendedLikesInfo"]["myStatus"], "None");

    // Removing the like clears it from the counts
    let response = server
        .put_auth(&format!("{path}/like-status"), &fan.access_token, &LikeInput::new("None"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    let viewed: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(viewed["extendedLikesInfo"]["likesCount"], 0);
    assert_eq!(viewed["extendedLikesInfo"]["newestLikes"], json!([]));
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let blog = create_blog(&server).await.unwrap();
    let post = create_post(&server, &str_field(&blog, "id")).await.unwrap();
    let post_id = str_field(&post, "id");
    let author = register_confirmed(&server).await.unwrap();
    let other = register_confirmed(&server).await.unwrap();

    // Anonymous comments are rejected
    let response = server
        .post(&format!("/posts/{post_id}/comments"), &CommentInput::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/posts/{post_id}/comments"),
            &author.access_token,
            &CommentInput::new("too short"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_auth(
            &format!("/posts/{post_id}/comments"),
            &author.access_token,
            &CommentInput::unique(),
        )
        .await
        .unwrap();
    let comment: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let comment_id = str_field(&comment, "id");
    assert_eq!(comment["commentatorInfo"]["userId"], author.id.as_str());
    assert_eq!(
        comment["commentatorInfo"]["userLogin"],
        author.input.login.as_str()
    );

    let response = server
        .get(&format!("/posts/{post_id}/comments"))
        .await
        .unwrap();
    let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page["totalCount"], 1);

    let edit = CommentInput::new("an edited comment of enough length");
    let response = server
        .put_auth(&format!("/comments/{comment_id}"), &other.access_token, &edit)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .put_auth(&format!("/comments/{comment_id}"), &author.access_token, &edit)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .put_auth(
            &format!("/comments/{comment_id}/like-status"),
            &other.access_token,
            &LikeInput::new("Dislike"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/comments/{comment_id}"), &other.access_token)
        .await
        .unwrap();
    let fetched: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched["content"], edit.content.as_str());
    assert_eq!(fetched["likesInfo"]["dislikesCount"], 1);
    assert_eq!(fetched["likesInfo"]["myStatus"], "Dislike");

    let response = server
        .delete_auth(&format!("/comments/{comment_id}"), &other.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&format!("/comments/{comment_id}"), &author.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/comments/{comment_id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_comment_on_missing_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = register_confirmed(&server).await.unwrap();

    let response = server
        .post_auth("/posts/1/comments", &user.access_token, &CommentInput::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Admin User Tests
// ============================================================================

#[tokio::test]
async fn test_admin_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/users").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let input = RegisterInput::unique();
    let response = server.admin_post("/users", &input).await.unwrap();
    let created: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let user_id = str_field(&created, "id");
    assert_eq!(created["login"], input.login.as_str());

    // Admin-created accounts are confirmed
    login(&server, &input).await.unwrap();

    let response = server
        .admin_get(&format!("/users?searchLoginTerm={}", input.login))
        .await
        .unwrap();
    let page: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page["totalCount"], 1);
    assert_eq!(page["items"][0]["email"], input.email.as_str());

    let response = server
        .admin_delete(&format!("/users/{user_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .admin_delete(&format!("/users/{user_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
