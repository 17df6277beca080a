use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::store::SocialStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub post_id: i64,
    pub user_id: i64,
    pub text: String,
}

/// POST /api/comments
pub async fn add_comment(
    store: web::Data<SocialStore>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    if req.text.is_empty() {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    }

    let comment = store.add_comment(req.post_id, req.user_id, req.text);
    Ok(HttpResponse::Created().json(comment))
}

/// GET /api/posts/{id}/comments
pub async fn get_post_comments(
    store: web::Data<SocialStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(store.comments_for_post(path.into_inner())))
}
