use actix_web::dev::HttpServiceFactory;
use actix_web::{get, post, web, HttpResponse, Responder};

use serde::Deserialize;

use sqlx::PgPool;

use crate::model::{NewSubscriptionToken, SubscriptionTokenFilter};
use crate::repo::{transaction, PgSubscriptionTokenRepo, SubscriptionTokenStore};

use super::{non_blank, RestError, RestResult};

#[derive(Debug, Deserialize)]
pub struct SubscriptionTokensQuery {
    token: Option<String>,
}

impl From<SubscriptionTokensQuery> for SubscriptionTokenFilter {
    fn from(query: SubscriptionTokensQuery) -> Self {
        Self {
            token: non_blank(query.token),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscriptionTokenBody {
    subscription_id: i32,
}

impl From<NewSubscriptionTokenBody> for NewSubscriptionToken {
    fn from(body: NewSubscriptionTokenBody) -> Self {
        Self {
            subscription_id: body.subscription_id,
        }
    }
}

/// Look up subscription tokens
#[tracing::instrument(name = "List subscription tokens", skip(store, query))]
#[get("")]
async fn list(
    store: web::Data<dyn SubscriptionTokenStore>,
    query: web::Query<SubscriptionTokensQuery>,
) -> RestResult<impl Responder> {
    let filter: SubscriptionTokenFilter = query.into_inner().into();

    let tokens = store.list_subscription_tokens(&filter).await?;
    if tokens.is_empty() {
        tracing::info!("No subscription tokens found");
        return Err(RestError::NotFound("No subscription tokens found".into()));
    }

    Ok(HttpResponse::Ok().json(tokens))
}

/// Issue a new token for a subscription
#[tracing::instrument(name = "Create a subscription token", skip(pool))]
#[post("")]
async fn create(
    pool: web::Data<PgPool>,
    body: web::Json<NewSubscriptionTokenBody>,
) -> RestResult<impl Responder> {
    let new_token: NewSubscriptionToken = body.into_inner().into();

    let mut tx = transaction::begin(pool.get_ref()).await?;
    let created = PgSubscriptionTokenRepo::insert_in(&mut *tx, &new_token).await?;
    transaction::commit(tx).await?;

    Ok(HttpResponse::Ok().json(created))
}

/// Subscription token API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/subscription_tokens")
        .service(list)
        .service(create)
}
