//! Game session routes: claiming a game by code and submitting shots.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::domain::scoring::ShotOutcome;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::extractors::ValidatedJson;
use crate::services::sessions::SessionService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct GetGameQuery {
    code: Option<String>,
}

#[derive(Debug, Serialize)]
struct GameStartedResponse {
    success: bool,
    game_id: i64,
    device_id: String,
    player_id: i64,
    difficulty: i16,
    tolerance: f64,
    holes: Vec<f64>,
    total_holes: i16,
    current_hole: i16,
    par: u8,
    target: f64,
    message: String,
}

/// GET /api/get_game?code=
///
/// Moves the pending game with this code to started and returns the course
/// and the first hole. A code works once.
async fn get_game(
    http_req: HttpRequest,
    query: web::Query<GetGameQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let code = query
        .into_inner()
        .code
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| DomainError::validation(ValidationKind::MissingGameCode, "No game code"))?;

    let course = app_state.course.clone();
    let started = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { SessionService::new(course).start_game(txn, &code).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(GameStartedResponse {
        success: true,
        game_id: started.game.id,
        device_id: started.game.device_id,
        player_id: started.game.player_id,
        difficulty: started.game.difficulty,
        tolerance: started.tolerance,
        holes: started.targets,
        total_holes: started.total_holes,
        current_hole: started.game.current_hole,
        par: started.par,
        target: started.target,
        message: "Game started".to_string(),
    }))
}

#[derive(Debug, Deserialize)]
struct SubmitShotRequest {
    game_id: Option<i64>,
    hole: Option<i32>,
    revolutions: Option<f64>,
}

#[derive(Debug, Serialize)]
struct SubmitShotResponse {
    #[serde(flatten)]
    outcome: ShotOutcome,
    message: String,
}

/// POST /api/submit_shot
async fn submit_shot(
    http_req: HttpRequest,
    body: ValidatedJson<SubmitShotRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let SubmitShotRequest {
        game_id,
        hole,
        revolutions,
    } = body.into_inner();
    let (Some(game_id), Some(hole), Some(revolutions)) = (game_id, hole, revolutions) else {
        return Err(AppError::bad_request(
            crate::errors::ErrorCode::ValidationError,
            "Missing parameters: game_id, hole and revolutions are required",
        ));
    };
    if game_id <= 0 {
        return Err(
            DomainError::validation(ValidationKind::InvalidGameId, "game_id must be positive")
                .into(),
        );
    }

    let course = app_state.course.clone();
    let report = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            SessionService::new(course)
                .submit_shot(txn, game_id, hole, revolutions)
                .await
        })
    })
    .await?;

    let message = report.decision.outcome.message(report.decision.hole);
    Ok(HttpResponse::Ok().json(SubmitShotResponse {
        outcome: report.decision.outcome,
        message,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/get_game", web::get().to(get_game))
        .route("/submit_shot", web::post().to(submit_shot));
}
