/// Social API - HTTP server
///
/// Serves the benchmark social graph over REST, backed by a volatile
/// in-memory store constructed once per process.
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::io;

use social_api::config::Config;
use social_api::routes::configure_routes;
use social_api::store::SocialStore;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env().expect("Failed to load configuration");
    let bind_address = format!("{}:{}", config.app.host, config.app.port);

    let store = SocialStore::new();

    tracing::info!("Social API starting HTTP server on {}", bind_address);

    let config_data = web::Data::new(config);
    let store_data = web::Data::new(store);

    HttpServer::new(move || {
        App::new()
            .app_data(config_data.clone())
            .app_data(store_data.clone())
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .configure(configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
