//! Device-facing routes: heartbeat and game registration.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::extractors::ValidatedJson;
use crate::services::registration::{self, RegisterGame};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct PingRequest {
    device_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct PingResponse {
    status: &'static str,
    message: &'static str,
}

/// POST /api/ping
async fn ping(
    http_req: HttpRequest,
    body: ValidatedJson<PingRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let device_id = body
        .into_inner()
        .device_id
        .ok_or_else(|| DomainError::validation(ValidationKind::MissingDeviceId, "No device_id"))?;

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { registration::ping(txn, &device_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(PingResponse {
        status: "ok",
        message: "pong",
    }))
}

#[derive(Debug, Deserialize)]
struct RegisterGameRequest {
    device_id: Option<String>,
    player_id: i64,
    #[serde(default = "default_difficulty")]
    difficulty: i16,
    username: Option<String>,
    full_name: Option<String>,
}

fn default_difficulty() -> i16 {
    1
}

#[derive(Debug, Serialize)]
struct RegisterGameResponse {
    game_id: i64,
    code: String,
    difficulty: i16,
    message: String,
}

/// POST /api/register_game
async fn register_game(
    http_req: HttpRequest,
    body: ValidatedJson<RegisterGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let request = RegisterGame {
        device_id: body.device_id.unwrap_or_default(),
        player_id: body.player_id,
        difficulty: body.difficulty,
        username: body.username,
        full_name: body.full_name,
    };

    let game = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { registration::register_game(txn, request).await })
    })
    .await?;

    let message = format!("Enter code {} on the device to start", game.code);
    Ok(HttpResponse::Ok().json(RegisterGameResponse {
        game_id: game.id,
        code: game.code,
        difficulty: game.difficulty,
        message,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/ping", web::post().to(ping))
        .route("/register_game", web::post().to(register_game));
}
