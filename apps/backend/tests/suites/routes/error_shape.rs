use actix_web::test;
use serde_json::json;
use spingolf_backend::build_state;
use spingolf_backend::AppError;

use crate::common::assert_problem_details_structure;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn missing_game_code_is_400() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).build().await?;

    let req = test::TestRequest::get().uri("/api/get_game").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 400, "MISSING_GAME_CODE", "No game code").await;

    let req = test::TestRequest::get()
        .uri("/api/get_game?code=")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 400, "MISSING_GAME_CODE", "No game code").await;
    Ok(())
}

#[actix_web::test]
async fn unknown_game_code_is_404() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).build().await?;

    let req = test::TestRequest::get()
        .uri("/api/get_game?code=ZZZZZZZZZZ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(
        resp,
        404,
        "GAME_NOT_FOUND",
        "Game not found or already started",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn submit_shot_with_missing_fields_is_400() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).build().await?;

    let req = test::TestRequest::post()
        .uri("/api/submit_shot")
        .set_json(json!({ "game_id": 1, "hole": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(
        resp,
        400,
        "VALIDATION_ERROR",
        "Missing parameters: game_id, hole and revolutions are required",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn submit_shot_with_bad_game_id_is_422() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).build().await?;

    let req = test::TestRequest::post()
        .uri("/api/submit_shot")
        .set_json(json!({ "game_id": 0, "hole": 1, "revolutions": 140.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 422, "INVALID_GAME_ID", "game_id must be positive")
        .await;
    Ok(())
}

#[actix_web::test]
async fn malformed_json_is_400() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).build().await?;

    let req = test::TestRequest::post()
        .uri("/api/submit_shot")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"game_id": 1, "hole": }"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 400, "BAD_REQUEST", "Invalid JSON at line 1").await;
    Ok(())
}

#[actix_web::test]
async fn routes_without_database_are_503() -> Result<(), AppError> {
    let app = create_test_app(build_state().build().await?).build().await?;

    let req = test::TestRequest::get().uri("/admin/stats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 503, "DB_UNAVAILABLE", "Database unavailable").await;

    let req = test::TestRequest::get()
        .uri("/api/get_leaderboard")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 503, "DB_UNAVAILABLE", "Database unavailable").await;
    Ok(())
}
