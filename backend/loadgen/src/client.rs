//! Typed HTTP client for the social API.
//!
//! Thin wrapper over `reqwest` that knows the wire shapes and reports
//! duplicate-action rejections (400) as `false` instead of an error, the
//! way the benchmark scenarios count them.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct Created {
    id: i64,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Poll /health until the target answers, for servers still starting up.
    pub async fn wait_until_healthy(&self) -> Result<()> {
        for _ in 0..20 {
            if let Ok(resp) = self.http.get(self.url("/health")).send().await {
                if resp.status().is_success() {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(500)).await;
        }
        bail!("target {} never became healthy", self.base_url)
    }

    pub async fn create_user(&self, username: &str, display_name: &str) -> Result<i64> {
        let resp = self
            .http
            .post(self.url("/api/users"))
            .json(&json!({
                "username": username,
                "email": format!("{username}@example.com"),
                "displayName": display_name,
            }))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<Created>().await?.id)
    }

    pub async fn create_post(&self, user_id: i64, content: &str) -> Result<i64> {
        let resp = self
            .http
            .post(self.url("/api/posts"))
            .json(&json!({ "userId": user_id, "content": content }))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<Created>().await?.id)
    }

    pub async fn add_comment(&self, post_id: i64, user_id: i64, text: &str) -> Result<i64> {
        let resp = self
            .http
            .post(self.url("/api/comments"))
            .json(&json!({ "postId": post_id, "userId": user_id, "text": text }))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<Created>().await?.id)
    }

    /// Returns whether the like was recorded (false on duplicate).
    pub async fn like_post(&self, post_id: i64, user_id: i64) -> Result<bool> {
        let status = self
            .http
            .post(self.url("/api/likes"))
            .json(&json!({ "postId": post_id, "userId": user_id }))
            .send()
            .await?
            .status();
        accepted_or_rejected(status)
    }

    /// Returns whether the edge was created (false on duplicate/self-follow).
    pub async fn follow(&self, follower_id: i64, following_id: i64) -> Result<bool> {
        let status = self
            .http
            .post(self.url("/api/follow"))
            .json(&json!({ "followerId": follower_id, "followingId": following_id }))
            .send()
            .await?
            .status();
        accepted_or_rejected(status)
    }

    pub async fn get_user(&self, id: i64) -> Result<()> {
        self.http
            .get(self.url(&format!("/api/users/{id}")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn get_post(&self, id: i64) -> Result<()> {
        self.http
            .get(self.url(&format!("/api/posts/{id}")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn get_comments(&self, post_id: i64) -> Result<()> {
        self.http
            .get(self.url(&format!("/api/posts/{post_id}/comments")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn get_feed(&self, user_id: i64) -> Result<usize> {
        let posts: Vec<serde_json::Value> = self
            .http
            .get(self.url(&format!("/api/users/{user_id}/feed")))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(posts.len())
    }
}

fn accepted_or_rejected(status: StatusCode) -> Result<bool> {
    match status {
        StatusCode::CREATED => Ok(true),
        StatusCode::BAD_REQUEST => Ok(false),
        other => bail!("unexpected status {other}"),
    }
}
