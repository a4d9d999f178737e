//! SeaORM adapter for players.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, Set};
use time::OffsetDateTime;

use crate::entities::players;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(id).one(conn).await
}

/// Insert the player, or refresh whichever names were supplied.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    username: Option<String>,
    full_name: Option<String>,
) -> Result<players::Model, sea_orm::DbErr> {
    match find_by_id(conn, id).await? {
        Some(existing) => {
            if username.is_none() && full_name.is_none() {
                return Ok(existing);
            }
            let mut active: players::ActiveModel = existing.into();
            if username.is_some() {
                active.username = Set(username);
            }
            if full_name.is_some() {
                active.full_name = Set(full_name);
            }
            active.update(conn).await
        }
        None => {
            players::ActiveModel {
                id: Set(id),
                username: Set(username),
                full_name: Set(full_name),
                registered_at: Set(OffsetDateTime::now_utc()),
            }
            .insert(conn)
            .await
        }
    }
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    players::Entity::find().count(conn).await
}
