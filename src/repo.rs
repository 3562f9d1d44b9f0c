mod facilities;
mod query;
mod subscription_tokens;
mod subscriptions;
pub mod transaction;

use std::sync::Arc;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};

pub use facilities::{FacilityStore, PgFacilityRepo};
pub use query::{DEFAULT_RADIUS_METERS, PER_PAGE_MAX};
pub use subscription_tokens::{PgSubscriptionTokenRepo, SubscriptionTokenStore};
pub use subscriptions::{PgSubscriptionRepo, SubscriptionStore};
pub use transaction::UnitOfWork;

use crate::error::{QueryContext, Result};

/// The set of stores the HTTP layer talks to
#[derive(Clone)]
pub struct Stores {
    pub facilities: Arc<dyn FacilityStore>,
    pub subscriptions: Arc<dyn SubscriptionStore>,
    pub subscription_tokens: Arc<dyn SubscriptionTokenStore>,
}

impl Stores {
    /// Postgres-backed stores sharing a single connection pool
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            facilities: Arc::new(PgFacilityRepo::new(pool.clone())),
            subscriptions: Arc::new(PgSubscriptionRepo::new(pool.clone())),
            subscription_tokens: Arc::new(PgSubscriptionTokenRepo::new(pool.clone())),
        }
    }
}

async fn fetch_all<T>(
    conn: &mut PgConnection,
    mut query: QueryBuilder<'_, Postgres>,
    operation: &'static str,
) -> Result<Vec<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    tracing::debug!(sql = query.sql(), "Executing {}", operation);
    let rows = query.build_query_as::<T>().fetch_all(&mut *conn).await;
    rows.query_context(operation, query.sql())
}

async fn fetch_optional<T>(
    conn: &mut PgConnection,
    mut query: QueryBuilder<'_, Postgres>,
    operation: &'static str,
) -> Result<Option<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    tracing::debug!(sql = query.sql(), "Executing {}", operation);
    let row = query.build_query_as::<T>().fetch_optional(&mut *conn).await;
    row.query_context(operation, query.sql())
}

/// Run a `COUNT(*)` statement
async fn fetch_count(
    conn: &mut PgConnection,
    query: QueryBuilder<'_, Postgres>,
    operation: &'static str,
) -> Result<i64> {
    let rows = fetch_all::<(i64,)>(conn, query, operation).await?;
    Ok(rows.first().map(|(count,)| *count).unwrap_or(0))
}

/// Run an `INSERT ... RETURNING id` statement
async fn fetch_id(
    conn: &mut PgConnection,
    mut query: QueryBuilder<'_, Postgres>,
    operation: &'static str,
) -> Result<i32> {
    tracing::debug!(sql = query.sql(), "Executing {}", operation);
    let row = query.build_query_as::<(i32,)>().fetch_one(&mut *conn).await;
    row.map(|(id,)| id).query_context(operation, query.sql())
}
