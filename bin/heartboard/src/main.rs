//! # Heartboard Binary
//!
//! The entry point that assembles the forum backend based on compile-time
//! features.

use actix_web::{web, App, HttpServer};
use hb_api::handlers::AppState;
use hb_api::middleware::{cors_policy, standard_middleware};

// Feature-gated imports: store plugins are selected at compile time
#[cfg(feature = "store-memory")]
use hb_store_memory::MemoryForumStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // 1. Initialize the store implementation (seeded with the example thread)
    #[cfg(feature = "store-memory")]
    let store = MemoryForumStore::new();

    // 2. Wrap in AppState (dynamic dispatch keeps the API crate plugin-agnostic)
    let state = web::Data::new(AppState {
        store: Box::new(store),
    });

    let bind = std::env::var("HEARTBOARD_BIND").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
    log::info!("Heartboard starting on http://{bind}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(standard_middleware())
            .wrap(cors_policy())
            .configure(hb_api::configure_routes)
    })
    .bind(bind)?
    .run()
    .await
}
