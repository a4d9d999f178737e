//! SeaORM adapter for devices.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
};
use time::OffsetDateTime;

use crate::entities::devices;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Option<devices::Model>, sea_orm::DbErr> {
    devices::Entity::find_by_id(id.to_string()).one(conn).await
}

/// Register the device if unknown; an existing row only gains an owner.
pub async fn ensure<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    owner_id: Option<i64>,
) -> Result<devices::Model, sea_orm::DbErr> {
    match find_by_id(conn, id).await? {
        Some(existing) if existing.owner_id.is_some() || owner_id.is_none() => Ok(existing),
        Some(existing) => {
            let mut active: devices::ActiveModel = existing.into();
            active.owner_id = Set(owner_id);
            active.update(conn).await
        }
        None => {
            let now = OffsetDateTime::now_utc();
            devices::ActiveModel {
                id: Set(id.to_string()),
                owner_id: Set(owner_id),
                name: Set(None),
                registered_at: Set(now),
                last_seen: Set(Some(now)),
            }
            .insert(conn)
            .await
        }
    }
}

/// Returns rows touched; zero means the device is unknown.
pub async fn touch_last_seen<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    at: OffsetDateTime,
) -> Result<u64, sea_orm::DbErr> {
    let res = devices::Entity::update_many()
        .col_expr(devices::Column::LastSeen, Expr::val(Some(at)).into())
        .filter(devices::Column::Id.eq(id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    devices::Entity::find().count(conn).await
}
