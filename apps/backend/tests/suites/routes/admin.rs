use actix_web::http::header::CONTENT_TYPE;
use actix_web::test;
use serde_json::Value;
use spingolf_backend::AppError;

use crate::support::factory::pending_game;
use crate::support::{build_test_state, create_test_app, shared_txn};

#[actix_web::test]
async fn stats_reflect_registered_rows() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = shared_txn::open(&state).await;
    pending_game(shared.transaction(), 1).await?;
    let app = create_test_app(state)
        .with_shared_txn(shared.clone())
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/admin/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert!(body["players"].as_u64().unwrap_or(0) >= 1);
    assert!(body["devices"].as_u64().unwrap_or(0) >= 1);
    assert!(body["games"].as_u64().unwrap_or(0) >= 1);
    assert_eq!(body["message"], "Server is running");
    Ok(())
}

#[actix_web::test]
async fn dashboard_is_served_at_root() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).build().await?;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).expect("utf-8 dashboard");
    assert!(html.contains("/admin/stats"));
    Ok(())
}
