//! Transaction runner.
//!
//! Reads go straight to the pool through [`Persistence::connection`].
//! Composite writes go through [`Persistence::transaction`], which hands the
//! closure a borrowed [`DatabaseTransaction`] and finishes it according to
//! the closure's result.

use std::future::Future;
use std::pin::Pin;

use common::{AppError, AppResult};
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};

/// Boxed future returned by a transaction body.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Owns the pooled connection and opens transactions on it.
#[derive(Clone)]
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// The pooled executor, for statements outside any transaction.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Run `f` inside a ReadCommitted read-write transaction.
    ///
    /// Commits when `f` returns `Ok`. On `Err` the transaction is rolled back
    /// and the closure's error is returned unchanged; a failed rollback is
    /// only logged.
    pub async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        match f(&txn).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rolling back transaction");
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}
