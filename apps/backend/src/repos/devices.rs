use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::devices_sea;
use crate::errors::domain::{DomainError, NotFoundKind};

pub async fn ensure<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    device_id: &str,
    owner_id: Option<i64>,
) -> Result<(), DomainError> {
    devices_sea::ensure(conn, device_id, owner_id).await?;
    Ok(())
}

/// Record a heartbeat; unknown devices are `NotFound`.
pub async fn touch<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    device_id: &str,
    at: OffsetDateTime,
) -> Result<(), DomainError> {
    let touched = devices_sea::touch_last_seen(conn, device_id, at).await?;
    if touched == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Device,
            format!("Device {device_id} is not registered"),
        ));
    }
    Ok(())
}

pub async fn last_seen<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    device_id: &str,
) -> Result<Option<OffsetDateTime>, DomainError> {
    Ok(devices_sea::find_by_id(conn, device_id)
        .await?
        .and_then(|d| d.last_seen))
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(devices_sea::count(conn).await?)
}
