//! Test fixtures and data generators
//!
//! Provides reusable request bodies and account setup for integration tests.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::helpers::{assert_json, assert_status, refresh_cookie, TestServer};

/// Short random tag, unique across runs against the same database
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterInput {
    pub login: String,
    pub password: String,
    pub email: String,
}

impl RegisterInput {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            login: format!("u{suffix}"),
            password: "secret123".to_string(),
            email: format!("{suffix}@example.com"),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    pub login_or_email: String,
    pub password: String,
}

impl LoginInput {
    pub fn from_register(reg: &RegisterInput) -> Self {
        Self {
            login_or_email: reg.login.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Blog create/update body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogInput {
    pub name: String,
    pub description: String,
    pub website_url: String,
}

impl BlogInput {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("blog {suffix}"),
            description: "A blog used by integration tests".to_string(),
            website_url: format!("https://{suffix}.example.com"),
        }
    }
}

/// Post body for `/blogs/:id/posts`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostInput {
    pub title: String,
    pub short_description: String,
    pub content: String,
}

impl BlogPostInput {
    pub fn unique() -> Self {
        Self {
            title: format!("post {}", unique_suffix()),
            short_description: "short".to_string(),
            content: "post body".to_string(),
        }
    }
}

/// Post body for `/posts`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    pub title: String,
    pub short_description: String,
    pub content: String,
    pub blog_id: String,
}

impl PostInput {
    pub fn for_blog(blog_id: &str) -> Self {
        Self {
            title: format!("post {}", unique_suffix()),
            short_description: "short".to_string(),
            content: "post body".to_string(),
            blog_id: blog_id.to_string(),
        }
    }
}

/// Comment body
#[derive(Debug, Serialize)]
pub struct CommentInput {
    pub content: String,
}

impl CommentInput {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    pub fn unique() -> Self {
        Self::new(&format!("a comment long enough {}", unique_suffix()))
    }
}

/// Like status body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeInput {
    pub like_status: String,
}

impl LikeInput {
    pub fn new(status: &str) -> Self {
        Self {
            like_status: status.to_string(),
        }
    }
}

/// Confirmed account with one live session
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: String,
    pub input: RegisterInput,
    pub access_token: String,
    pub refresh_token: String,
}

/// Log in and return `(access token, refresh token)`
pub async fn login(server: &TestServer, input: &RegisterInput) -> Result<(String, String)> {
    let response = server
        .post("/auth/login", &LoginInput::from_register(input))
        .await?;
    let refresh = refresh_cookie(&response).context("login set no refresh cookie")?;
    let body: Value = assert_json(response, StatusCode::OK).await?;
    let access = body["accessToken"]
        .as_str()
        .context("missing accessToken")?
        .to_string();
    Ok((access, refresh))
}

/// Register through the API, confirm with the stored code and log in
pub async fn register_confirmed(server: &TestServer) -> Result<TestUser> {
    let input = RegisterInput::unique();
    let response = server.post("/auth/registration", &input).await?;
    assert_status(response, StatusCode::NO_CONTENT).await?;

    let code = server.confirmation_code(&input.email).await?;
    let response = server
        .post(
            "/auth/registration-confirmation",
            &serde_json::json!({ "code": code.to_string() }),
        )
        .await?;
    assert_status(response, StatusCode::NO_CONTENT).await?;

    let (access_token, refresh_token) = login(server, &input).await?;
    let me: Value = assert_json(
        server.get_auth("/auth/me", &access_token).await?,
        StatusCode::OK,
    )
    .await?;
    let id = me["userId"].as_str().context("missing userId")?.to_string();

    Ok(TestUser {
        id,
        input,
        access_token,
        refresh_token,
    })
}

/// Create a blog as admin and return its JSON view
pub async fn create_blog(server: &TestServer) -> Result<Value> {
    let response = server.admin_post("/blogs", &BlogInput::unique()).await?;
    assert_json(response, StatusCode::CREATED).await
}

/// Create a post inside `blog_id` as admin and return its JSON view
pub async fn create_post(server: &TestServer, blog_id: &str) -> Result<Value> {
    let response = server
        .admin_post(&format!("/blogs/{blog_id}/posts"), &BlogPostInput::unique())
        .await?;
    assert_json(response, StatusCode::CREATED).await
}

/// String field of a JSON object
pub fn str_field(value: &Value, field: &str) -> String {
    value[field].as_str().unwrap_or_default().to_string()
}
