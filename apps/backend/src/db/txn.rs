use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use futures_util::future::BoxFuture;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::debug;

use super::{require_db, txn_policy};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// A transaction placed in request extensions so a test can observe a
/// handler's writes before deciding what to do with them.
#[derive(Clone)]
pub struct SharedTxn(pub Arc<DatabaseTransaction>);

impl SharedTxn {
    pub async fn open(db: &DatabaseConnection) -> Result<Self, AppError> {
        let txn = db.begin().await?;
        Ok(Self(Arc::new(txn)))
    }

    pub fn transaction(&self) -> &DatabaseTransaction {
        &self.0
    }

    pub fn from_req(req: &HttpRequest) -> Option<Self> {
        req.extensions().get::<SharedTxn>().cloned()
    }

    pub fn inject(&self, req: &mut HttpRequest) {
        req.extensions_mut().insert(self.clone());
    }

    /// Rolls back if this is the last handle; otherwise the drop of the
    /// remaining `Arc` rolls back implicitly.
    pub async fn rollback(self) -> Result<(), AppError> {
        match Arc::try_unwrap(self.0) {
            Ok(txn) => {
                txn.rollback().await?;
                Ok(())
            }
            Err(_) => Err(AppError::internal(
                "shared transaction still referenced at rollback",
            )),
        }
    }
}

/// Run `f` inside a database transaction.
///
/// 1) A `SharedTxn` in the request extensions is used as-is; no commit or rollback here.
/// 2) Otherwise a transaction is opened, `f` runs, and the process `TxnPolicy`
///    decides what happens on `Ok`. Errors always roll back.
pub async fn with_txn<R, F>(
    req: Option<&HttpRequest>,
    state: &AppState,
    f: F,
) -> Result<R, AppError>
where
    F: for<'t> FnOnce(&'t DatabaseTransaction) -> BoxFuture<'t, Result<R, AppError>>,
{
    // Clone out of the extensions before awaiting so no RefCell borrow is held.
    let shared = req.and_then(SharedTxn::from_req);

    if let Some(shared) = shared {
        return f(shared.transaction()).await;
    }

    let db = require_db(state)?;
    let txn = db.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => match txn_policy::current() {
            txn_policy::TxnPolicy::CommitOnOk => {
                txn.commit().await?;
                Ok(val)
            }
            txn_policy::TxnPolicy::RollbackOnOk => {
                txn.rollback().await?;
                Ok(val)
            }
        },
        Err(err) => {
            debug!(error = %err, "rolling back transaction");
            // Best effort; the original error is what the caller needs.
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
