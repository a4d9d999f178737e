use sea_orm::ConnectionTrait;

use crate::adapters::players_sea;
use crate::entities::players;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i64,
    pub username: Option<String>,
    pub full_name: Option<String>,
}

impl From<players::Model> for Player {
    fn from(m: players::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            full_name: m.full_name,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Player>, DomainError> {
    Ok(players_sea::find_by_id(conn, id).await?.map(Player::from))
}

pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    username: Option<String>,
    full_name: Option<String>,
) -> Result<Player, DomainError> {
    Ok(players_sea::upsert(conn, id, username, full_name).await?.into())
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(players_sea::count(conn).await?)
}
