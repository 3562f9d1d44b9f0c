//! Explicit units of work.
//!
//! A unit of work is an owned Postgres transaction. Callers that span several repository calls
//! begin one, pass `&mut *tx` to each `_in` operation and commit it themselves. Dropping an
//! uncommitted unit of work rolls it back, so every early return aborts the transaction.

use sqlx::{PgPool, Postgres, Transaction};

use crate::error::{Error, Result};

pub type UnitOfWork = Transaction<'static, Postgres>;

#[tracing::instrument(name = "Begin unit of work", skip(pool))]
pub async fn begin(pool: &PgPool) -> Result<UnitOfWork> {
    pool.begin().await.map_err(|source| Error::Transaction {
        action: "begin",
        source,
    })
}

#[tracing::instrument(name = "Commit unit of work", skip(tx))]
pub async fn commit(tx: UnitOfWork) -> Result<()> {
    tx.commit().await.map_err(|source| Error::Transaction {
        action: "commit",
        source,
    })
}

#[tracing::instrument(name = "Roll back unit of work", skip(tx))]
pub async fn rollback(tx: UnitOfWork) -> Result<()> {
    tx.rollback().await.map_err(|source| Error::Transaction {
        action: "roll back",
        source,
    })
}

/// Close a unit of work according to the final outcome of the work done inside it.
/// Commits on `Ok`; on `Err` rolls back and hands the original error back to the caller.
pub async fn finish<T>(tx: UnitOfWork, outcome: Result<T>) -> Result<T> {
    match outcome {
        Ok(value) => {
            commit(tx).await?;
            Ok(value)
        }
        Err(error) => {
            if let Err(rollback_error) = rollback(tx).await {
                tracing::warn!(
                    error.cause_chain = ?rollback_error,
                    "Failed to roll back unit of work"
                );
            }
            Err(error)
        }
    }
}
