use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::SocialStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub post_id: i64,
    pub user_id: i64,
}

#[derive(Serialize)]
pub struct AckResponse {
    pub success: bool,
}

#[derive(Serialize)]
pub struct LikeStatusResponse {
    pub liked: bool,
}

/// POST /api/likes
pub async fn like_post(
    store: web::Data<SocialStore>,
    req: web::Json<LikeRequest>,
) -> Result<HttpResponse> {
    store.like_post(req.post_id, req.user_id)?;
    Ok(HttpResponse::Created().json(AckResponse { success: true }))
}

/// DELETE /api/likes
pub async fn unlike_post(
    store: web::Data<SocialStore>,
    req: web::Json<LikeRequest>,
) -> Result<HttpResponse> {
    store.unlike_post(req.post_id, req.user_id)?;
    Ok(HttpResponse::Ok().json(AckResponse { success: true }))
}

/// GET /api/posts/{id}/likes/user/{user_id}
pub async fn get_like_status(
    store: web::Data<SocialStore>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    let (post_id, user_id) = path.into_inner();
    Ok(HttpResponse::Ok().json(LikeStatusResponse {
        liked: store.is_liked(post_id, user_id),
    }))
}
