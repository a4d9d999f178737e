use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::{OffsetDateTime, Time};

use crate::error::AppError;
use crate::repos::{devices, games, players};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub players: u64,
    pub devices: u64,
    /// Games created since midnight UTC
    pub games: u64,
}

pub async fn stats<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Stats, AppError> {
    let midnight = OffsetDateTime::now_utc().replace_time(Time::MIDNIGHT);
    Ok(Stats {
        players: players::count(conn).await?,
        devices: devices::count(conn).await?,
        games: games::count_created_since(conn, midnight).await?,
    })
}
