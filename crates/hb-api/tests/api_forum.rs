//! End-to-end handler tests against a seeded in-memory store.
//!
//! Each test assembles its own `App` the way the binary does, so the wiring
//! under test is the wiring that ships.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use hb_api::handlers::AppState;
use hb_api::{configure_routes, middleware};
use hb_core::models::{Reply, Thread};
use hb_store_memory::MemoryForumStore;
use serde_json::{json, Value};

fn seeded_state() -> web::Data<AppState> {
    web::Data::new(AppState {
        store: Box::new(MemoryForumStore::new()),
    })
}

#[actix_web::test]
async fn list_threads_returns_the_seeded_forum() {
    let app =
        test::init_service(App::new().app_data(seeded_state()).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/api/threads").to_request();
    let threads: Vec<Thread> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].id, "1");
    assert_eq!(threads[0].hearts, 5);
    assert_eq!(threads[0].replies.len(), 1);
    assert_eq!(threads[0].replies[0].id, "1-1");
}

#[actix_web::test]
async fn create_thread_discards_client_supplied_fields() {
    let app =
        test::init_service(App::new().app_data(seeded_state()).configure(configure_routes)).await;

    // A full Thread shape, as the reference frontend submits it.
    let req = test::TestRequest::post()
        .uri("/api/threads")
        .set_json(json!({
            "id": "x",
            "title": "Weekend watchlist",
            "author": "Rin",
            "content": "What is everyone watching?",
            "date": "2000-01-01",
            "hearts": 99,
            "replies": [{"id": "spoofed", "author": "Rin", "content": "hi", "date": "2000-01-01"}]
        }))
        .to_request();
    let created: Thread = test::call_and_read_body_json(&app, req).await;

    assert!(!created.id.is_empty());
    assert_ne!(created.id, "x");
    assert_ne!(created.date, "2000-01-01");
    assert_eq!(created.hearts, 0);
    assert!(created.replies.is_empty());

    // The new thread lists first.
    let req = test::TestRequest::get().uri("/api/threads").to_request();
    let threads: Vec<Thread> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(threads.len(), 2);
    assert_eq!(threads[0].id, created.id);
}

#[actix_web::test]
async fn get_thread_round_trips_the_created_thread() {
    let app =
        test::init_service(App::new().app_data(seeded_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/threads")
        .set_json(json!({"title": "t", "author": "a", "content": "c"}))
        .to_request();
    let created: Thread = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/threads/{}", created.id))
        .to_request();
    let fetched: Thread = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn unknown_thread_is_404_with_detail() {
    let app =
        test::init_service(App::new().app_data(seeded_state()).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/api/threads/missing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Thread not found");
}

#[actix_web::test]
async fn create_reply_appends_to_the_thread() {
    let app =
        test::init_service(App::new().app_data(seeded_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/threads/1/replies")
        .set_json(json!({"author": "Yui", "content": "Totoro forever"}))
        .to_request();
    let reply: Reply = test::call_and_read_body_json(&app, req).await;
    assert!(!reply.id.is_empty());
    assert_eq!(reply.hearts, 0);

    let req = test::TestRequest::get().uri("/api/threads/1").to_request();
    let thread: Thread = test::call_and_read_body_json(&app, req).await;
    assert_eq!(thread.replies.len(), 2);
    assert_eq!(thread.replies.last().unwrap().id, reply.id);

    // Replying into a missing thread is the thread's 404, not the reply's.
    let req = test::TestRequest::post()
        .uri("/api/threads/missing/replies")
        .set_json(json!({"author": "Yui", "content": "hello?"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Thread not found");
}

#[actix_web::test]
async fn heart_endpoints_return_the_new_count() {
    let app =
        test::init_service(App::new().app_data(seeded_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post().uri("/api/threads/1/hearts").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"hearts": 6}));

    let req = test::TestRequest::post().uri("/api/threads/1/hearts").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"hearts": 7}));

    let req = test::TestRequest::post().uri("/api/replies/1-1/hearts").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"hearts": 3}));

    let req = test::TestRequest::post().uri("/api/replies/missing/hearts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Reply not found");
}

#[actix_web::test]
async fn malformed_create_payload_is_a_bad_request() {
    let app =
        test::init_service(App::new().app_data(seeded_state()).configure(configure_routes)).await;

    // Missing the required `content` field.
    let req = test::TestRequest::post()
        .uri("/api/threads")
        .set_json(json!({"title": "only a title", "author": "a"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn cors_allows_any_origin_with_credentials() {
    let app = test::init_service(
        App::new()
            .app_data(seeded_state())
            .wrap(middleware::cors_policy())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::with_uri("/api/threads")
        .method(actix_web::http::Method::OPTIONS)
        .insert_header(("Origin", "http://localhost:5173"))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let headers = resp.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
    assert_eq!(
        headers
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}
