use sqlx::{PgConnection, PgPool};

use crate::error::Result;
use crate::model::{Listing, Metadata, NewSubscription, Subscription, SubscriptionFilter};

use super::{fetch_all, fetch_count, fetch_id, query, transaction};

/// Read access to subscriptions
#[async_trait::async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// List a page of subscriptions in a unit of work of its own
    async fn list_subscriptions(&self, filter: &SubscriptionFilter) -> Result<Listing<Subscription>>;
}

/// Postgres Subscription Repository
#[derive(Debug, Clone)]
pub struct PgSubscriptionRepo {
    pool: PgPool,
}

impl PgSubscriptionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(name = "List subscriptions", skip(conn))]
    pub async fn list_in(
        conn: &mut PgConnection,
        filter: &SubscriptionFilter,
    ) -> Result<Listing<Subscription>> {
        let total =
            fetch_count(conn, query::count_subscriptions(filter), "count subscriptions").await?;
        let subscriptions =
            fetch_all(conn, query::select_subscriptions(filter), "list subscriptions").await?;

        Ok(Listing {
            data: subscriptions,
            metadata: Metadata {
                page: filter.page.number(),
                total,
            },
        })
    }

    /// Insert a new subscription inside the caller's unit of work, returning its generated id
    #[tracing::instrument(name = "Insert subscription", skip(conn))]
    pub async fn insert_in(
        conn: &mut PgConnection,
        new_subscription: &NewSubscription,
    ) -> Result<i32> {
        fetch_id(
            conn,
            query::insert_subscription(new_subscription),
            "insert subscription",
        )
        .await
    }
}

#[async_trait::async_trait]
impl SubscriptionStore for PgSubscriptionRepo {
    async fn list_subscriptions(&self, filter: &SubscriptionFilter) -> Result<Listing<Subscription>> {
        let mut tx = transaction::begin(&self.pool).await?;
        let outcome = Self::list_in(&mut *tx, filter).await;
        transaction::finish(tx, outcome).await
    }
}
