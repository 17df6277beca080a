use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::Result;
use crate::handlers::likes::AckResponse;
use crate::store::SocialStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    pub follower_id: i64,
    pub following_id: i64,
}

/// POST /api/follow
pub async fn follow_user(
    store: web::Data<SocialStore>,
    req: web::Json<FollowRequest>,
) -> Result<HttpResponse> {
    store.follow(req.follower_id, req.following_id)?;
    Ok(HttpResponse::Created().json(AckResponse { success: true }))
}

/// DELETE /api/follow
pub async fn unfollow_user(
    store: web::Data<SocialStore>,
    req: web::Json<FollowRequest>,
) -> Result<HttpResponse> {
    store.unfollow(req.follower_id, req.following_id)?;
    Ok(HttpResponse::Ok().json(AckResponse { success: true }))
}

/// GET /api/users/{id}/followers
pub async fn get_followers(
    store: web::Data<SocialStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(store.followers(path.into_inner())))
}
