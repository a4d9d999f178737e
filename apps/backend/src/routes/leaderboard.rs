use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::domain::leaderboard::{RankedScore, DEFAULT_LIMIT, DEFAULT_WINDOW_DAYS};
use crate::error::AppError;
use crate::services::leaderboard::top_scores;
use crate::state::app_state::AppState;

/// Both parameters are optional and fall back on anything unparsable.
#[derive(Debug, Deserialize)]
struct LeaderboardQuery {
    difficulty: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Serialize)]
struct LeaderboardResponse {
    difficulty: i16,
    leaderboard: Vec<RankedScore>,
    message: String,
}

/// GET /api/get_leaderboard?difficulty=&limit=
async fn get_leaderboard(
    http_req: HttpRequest,
    query: web::Query<LeaderboardQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let difficulty = query
        .difficulty
        .and_then(|d| d.trim().parse::<i16>().ok())
        .unwrap_or(1);
    let limit = query
        .limit
        .and_then(|l| l.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_LIMIT);

    let leaderboard = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { top_scores(txn, difficulty, DEFAULT_WINDOW_DAYS, limit).await })
    })
    .await?;

    let message = format!(
        "Best scores for difficulty {difficulty} over the last {DEFAULT_WINDOW_DAYS} days"
    );
    Ok(HttpResponse::Ok().json(LeaderboardResponse {
        difficulty,
        leaderboard,
        message,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/get_leaderboard", web::get().to(get_leaderboard));
}
