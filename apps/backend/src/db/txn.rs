use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use futures::future::BoxFuture;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// A shared transaction wrapper that can be injected into request extensions
#[derive(Clone)]
pub struct SharedTxn(pub Arc<DatabaseTransaction>);

impl SharedTxn {
    /// Begin a transaction that callers share through request extensions.
    pub async fn open(db: &DatabaseConnection) -> Result<Self, AppError> {
        Ok(Self(Arc::new(db.begin().await?)))
    }

    pub fn transaction(&self) -> &DatabaseTransaction {
        &self.0
    }

    /// Roll back the shared transaction. Fails if another clone is still alive.
    pub async fn rollback(self) -> Result<(), AppError> {
        let txn = Arc::try_unwrap(self.0)
            .map_err(|_| AppError::internal("shared transaction is still borrowed"))?;
        txn.rollback().await?;
        Ok(())
    }
}

/// Execute a function within a database transaction
///
/// 1) If a SharedTxn is in request extensions → use it (no commit/rollback here)
/// 2) Otherwise → begin txn, run closure, commit on Ok / rollback on Err
pub async fn with_txn<R, F>(
    req: Option<&HttpRequest>,
    state: &AppState,
    f: F,
) -> Result<R, AppError>
where
    F: for<'t> FnOnce(&'t DatabaseTransaction) -> BoxFuture<'t, Result<R, AppError>>,
{
    // Clone out of the extensions before awaiting so no RefCell borrow is held.
    let shared_txn: Option<SharedTxn> = req.and_then(|r| r.extensions().get::<SharedTxn>().cloned());

    if let Some(shared) = shared_txn {
        return f(shared.transaction()).await;
    }

    let txn = require_db(state)?.begin().await?;
    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
