//! Route configuration
//!
//! Centralized route setup; each domain (users, posts, comments, likes,
//! follow) manages its own routes.

use actix_web::{web, HttpResponse};

use crate::handlers;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health_check))
        .service(
            web::scope("/api")
                .configure(routes::users::configure)
                .configure(routes::posts::configure)
                .configure(routes::comments::configure)
                .configure(routes::likes::configure)
                .configure(routes::follows::configure),
        )
        .default_service(web::route().to(not_found));
}

/// Fallback for unmatched routes
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Not found" }))
}

// Sub-modules for each domain
mod routes {
    use super::*;

    pub mod users {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/users")
                    .route("", web::post().to(handlers::create_user))
                    .route("", web::get().to(handlers::list_users))
                    .route("/{id}", web::get().to(handlers::get_user))
                    .route("/{id}", web::put().to(handlers::update_user))
                    .route("/{id}/posts", web::get().to(handlers::get_user_posts))
                    .route("/{id}/feed", web::get().to(handlers::get_feed))
                    .route("/{id}/followers", web::get().to(handlers::get_followers)),
            );
        }
    }

    pub mod posts {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/posts")
                    .route("", web::post().to(handlers::create_post))
                    .route("/{id}", web::get().to(handlers::get_post))
                    .route("/{id}/comments", web::get().to(handlers::get_post_comments))
                    .route(
                        "/{id}/likes/user/{user_id}",
                        web::get().to(handlers::get_like_status),
                    ),
            );
        }
    }

    pub mod comments {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/comments").route("", web::post().to(handlers::add_comment)),
            );
        }
    }

    pub mod likes {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/likes")
                    .route("", web::post().to(handlers::like_post))
                    .route("", web::delete().to(handlers::unlike_post)),
            );
        }
    }

    pub mod follows {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/follow")
                    .route("", web::post().to(handlers::follow_user))
                    .route("", web::delete().to(handlers::unfollow_user)),
            );
        }
    }
}
