use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::admin::{self, Stats};
use crate::state::app_state::AppState;

const DASHBOARD_HTML: &str = include_str!("dashboard.html");

#[derive(Debug, Serialize)]
struct StatsResponse {
    #[serde(flatten)]
    stats: Stats,
    message: &'static str,
}

/// GET /admin/stats
async fn stats(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let stats = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { admin::stats(txn).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(StatsResponse {
        stats,
        message: "Server is running",
    }))
}

/// GET /
pub async fn dashboard() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(DASHBOARD_HTML)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/stats", web::get().to(stats));
}
