//! # hb-api
//!
//! The web routing and orchestration layer for Heartboard.

pub mod error;
pub mod handlers;
pub mod middleware;

use actix_web::web;

pub use error::ApiError;

/// Configures the routes for the forum.
///
/// # Developer Note
/// The reference frontend talks to `/api/...`, so the scope carries the
/// prefix here. A binary that wants the API at the root (or under
/// `/api/v1/`) changes one string.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/threads", web::get().to(handlers::list_threads))
            .route("/threads", web::post().to(handlers::create_thread))
            .route("/threads/{thread_id}", web::get().to(handlers::get_thread))
            .route(
                "/threads/{thread_id}/replies",
                web::post().to(handlers::create_reply),
            )
            .route(
                "/threads/{thread_id}/hearts",
                web::post().to(handlers::heart_thread),
            )
            .route(
                "/replies/{reply_id}/hearts",
                web::post().to(handlers::heart_reply),
            ),
    );
}
