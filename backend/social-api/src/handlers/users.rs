use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::models::UserUpdate;
use crate::error::{AppError, Result};
use crate::store::SocialStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub display_name: String,
}

/// POST /api/users
pub async fn create_user(
    store: web::Data<SocialStore>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    if req.username.is_empty() || req.email.is_empty() || req.display_name.is_empty() {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    }

    let user = store.create_user(req.username, req.email, req.display_name);
    Ok(HttpResponse::Created().json(user))
}

/// GET /api/users
pub async fn list_users(store: web::Data<SocialStore>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(store.list_users()))
}

/// GET /api/users/{id}
pub async fn get_user(
    store: web::Data<SocialStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user = store.get_user(path.into_inner())?;
    Ok(HttpResponse::Ok().json(user))
}

/// PUT /api/users/{id}
pub async fn update_user(
    store: web::Data<SocialStore>,
    path: web::Path<i64>,
    req: web::Json<UserUpdate>,
) -> Result<HttpResponse> {
    let user = store.update_user(path.into_inner(), req.into_inner())?;
    Ok(HttpResponse::Ok().json(user))
}
