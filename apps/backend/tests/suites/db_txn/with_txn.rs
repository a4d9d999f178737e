use backend_test_support::unique_helpers::unique_player_id;
use spingolf_backend::db::require_db;
use spingolf_backend::db::txn::with_txn;
use spingolf_backend::db::txn_policy::{self, TxnPolicy};
use spingolf_backend::errors::ErrorCode;
use spingolf_backend::repos::players;
use spingolf_backend::AppError;

use crate::support::build_test_state;

#[tokio::test]
async fn error_rolls_back_writes() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let player_id = unique_player_id();

    let result: Result<(), AppError> = with_txn(None, &state, |txn| {
        Box::pin(async move {
            players::upsert(txn, player_id, Some("ghost".into()), None).await?;
            Err(AppError::internal("boom"))
        })
    })
    .await;

    let err = result.expect_err("closure failed");
    assert_eq!(err.code(), ErrorCode::Internal);

    let db = require_db(&state)?;
    assert!(players::find_by_id(db, player_id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn ok_follows_process_policy() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let player_id = unique_player_id();

    let echoed = with_txn(None, &state, |txn| {
        Box::pin(async move {
            players::upsert(txn, player_id, Some("kept".into()), None).await?;
            Ok::<_, AppError>(player_id)
        })
    })
    .await?;
    assert_eq!(echoed, player_id);

    let db = require_db(&state)?;
    let persisted = players::find_by_id(db, player_id).await?.is_some();
    match txn_policy::current() {
        TxnPolicy::CommitOnOk => assert!(persisted, "commit policy keeps writes"),
        TxnPolicy::RollbackOnOk => assert!(!persisted, "rollback policy discards writes"),
    }
    Ok(())
}

#[tokio::test]
async fn without_database_is_unavailable() -> Result<(), AppError> {
    let state = spingolf_backend::build_state().build().await?;

    let err = with_txn(None, &state, |_txn| Box::pin(async move { Ok::<_, AppError>(()) }))
        .await
        .expect_err("no database configured");
    assert_eq!(err.code(), ErrorCode::DbUnavailable);
    assert_eq!(err.status().as_u16(), 503);
    Ok(())
}
