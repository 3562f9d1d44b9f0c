use sqlx::{PgConnection, PgPool};

use crate::crypto::Token;
use crate::error::Result;
use crate::model::{
    CreatedSubscriptionToken, Listing, Metadata, NewSubscriptionToken, SubscriptionToken,
    SubscriptionTokenFilter,
};

use super::{fetch_all, fetch_count, fetch_id, query, transaction};

/// Read access to subscription tokens
#[async_trait::async_trait]
pub trait SubscriptionTokenStore: Send + Sync {
    /// Look up tokens in a unit of work of its own
    async fn list_subscription_tokens(
        &self,
        filter: &SubscriptionTokenFilter,
    ) -> Result<Listing<SubscriptionToken>>;
}

/// Postgres Subscription Token Repository
#[derive(Debug, Clone)]
pub struct PgSubscriptionTokenRepo {
    pool: PgPool,
}

impl PgSubscriptionTokenRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Tokens matching the filter. The listing is not paginated so it always reports page 0
    #[tracing::instrument(name = "List subscription tokens", skip(conn))]
    pub async fn list_in(
        conn: &mut PgConnection,
        filter: &SubscriptionTokenFilter,
    ) -> Result<Listing<SubscriptionToken>> {
        let total = fetch_count(
            conn,
            query::count_subscription_tokens(filter),
            "count subscription tokens",
        )
        .await?;
        let tokens = fetch_all(
            conn,
            query::select_subscription_tokens(filter),
            "list subscription tokens",
        )
        .await?;

        Ok(Listing {
            data: tokens,
            metadata: Metadata { page: 0, total },
        })
    }

    /// Generate and store a token for a subscription inside the caller's unit of work
    #[tracing::instrument(name = "Insert subscription token", skip(conn))]
    pub async fn insert_in(
        conn: &mut PgConnection,
        new_token: &NewSubscriptionToken,
    ) -> Result<CreatedSubscriptionToken> {
        let token = Token::generate();
        let id = fetch_id(
            conn,
            query::insert_subscription_token(new_token.subscription_id, &token),
            "insert subscription token",
        )
        .await?;

        Ok(CreatedSubscriptionToken { id, token })
    }
}

#[async_trait::async_trait]
impl SubscriptionTokenStore for PgSubscriptionTokenRepo {
    async fn list_subscription_tokens(
        &self,
        filter: &SubscriptionTokenFilter,
    ) -> Result<Listing<SubscriptionToken>> {
        let mut tx = transaction::begin(&self.pool).await?;
        let outcome = Self::list_in(&mut *tx, filter).await;
        transaction::finish(tx, outcome).await
    }
}
