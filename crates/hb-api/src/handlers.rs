//! # hb-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the
//! `ForumStore` port. Handlers stay thin: extract, delegate, shape the
//! response.

use actix_web::{web, HttpResponse};
use hb_core::models::{NewReply, NewThread};
use hb_core::traits::ForumStore;
use serde::Serialize;

use crate::error::ApiError;

/// State shared across all actix workers.
pub struct AppState {
    pub store: Box<dyn ForumStore>,
}

/// Scalar response body for the heart endpoints, `{"hearts": 6}`.
#[derive(Serialize)]
struct HeartsBody {
    hearts: u32,
}

/// `GET /api/threads` — every thread, newest first, replies included.
pub async fn list_threads(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let threads = data.store.list_threads().await?;
    Ok(HttpResponse::Ok().json(threads))
}

/// `POST /api/threads` — create a thread. The server assigns id and date;
/// a malformed body never reaches the store (400 from the JSON extractor).
pub async fn create_thread(
    data: web::Data<AppState>,
    payload: web::Json<NewThread>,
) -> Result<HttpResponse, ApiError> {
    let thread = data.store.create_thread(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(thread))
}

/// `GET /api/threads/{thread_id}`
pub async fn get_thread(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let thread_id = path.into_inner();
    let thread = data.store.get_thread(&thread_id).await?;
    Ok(HttpResponse::Ok().json(thread))
}

/// `POST /api/threads/{thread_id}/replies`
pub async fn create_reply(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<NewReply>,
) -> Result<HttpResponse, ApiError> {
    let thread_id = path.into_inner();
    let reply = data.store.create_reply(&thread_id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reply))
}

/// `POST /api/threads/{thread_id}/hearts`
pub async fn heart_thread(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let thread_id = path.into_inner();
    let hearts = data.store.heart_thread(&thread_id).await?;
    Ok(HttpResponse::Ok().json(HeartsBody { hearts }))
}

/// `POST /api/replies/{reply_id}/hearts`
pub async fn heart_reply(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let reply_id = path.into_inner();
    let hearts = data.store.heart_reply(&reply_id).await?;
    Ok(HttpResponse::Ok().json(HeartsBody { hearts }))
}
