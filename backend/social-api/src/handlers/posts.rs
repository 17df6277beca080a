use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::store::SocialStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_id: i64,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub limit: Option<usize>,
}

/// POST /api/posts
pub async fn create_post(
    store: web::Data<SocialStore>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    if req.content.is_empty() {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    }

    let post = store.create_post(req.user_id, req.content);
    Ok(HttpResponse::Created().json(post))
}

/// GET /api/posts/{id}
pub async fn get_post(
    store: web::Data<SocialStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let post = store.get_post(path.into_inner())?;
    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/users/{id}/posts
pub async fn get_user_posts(
    store: web::Data<SocialStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(store.posts_by_user(path.into_inner())))
}

/// GET /api/users/{id}/feed
pub async fn get_feed(
    store: web::Data<SocialStore>,
    config: web::Data<Config>,
    path: web::Path<i64>,
    query: web::Query<FeedQuery>,
) -> Result<HttpResponse> {
    let limit = query.limit.unwrap_or(config.feed.default_limit);
    Ok(HttpResponse::Ok().json(store.feed(path.into_inner(), limit)))
}
