use actix_web::dev::HttpServiceFactory;
use actix_web::{get, post, web, HttpResponse, Responder};

use chrono::NaiveDate;

use serde::Deserialize;

use sqlx::PgPool;

use crate::domain::{EmailAddress, FacilityIds};
use crate::error::Error;
use crate::model::{Created, NewSubscription, SubscriptionFilter};
use crate::repo::{transaction, PgSubscriptionRepo, SubscriptionStore};

use super::{non_blank, parse_page, RestError, RestResult};

const TARGET_DATE_FORMAT: &str = "%Y-%m-%d";

/// Query string accepted by the subscription listing
#[derive(Debug, Deserialize)]
pub struct SubscriptionsQuery {
    facility_ids: Option<String>,
    status: Option<String>,
    page: Option<String>,
}

impl TryFrom<SubscriptionsQuery> for SubscriptionFilter {
    type Error = Error;

    fn try_from(query: SubscriptionsQuery) -> Result<Self, Self::Error> {
        let facility_ids = non_blank(query.facility_ids)
            .map(|ids| ids.parse::<FacilityIds>())
            .transpose()?;
        let status = non_blank(query.status);
        let page = parse_page(query.page)?;

        Ok(Self {
            facility_ids,
            status,
            page,
        })
    }
}

/// JSON deserialization wrapper for parsing new subscriptions
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscriptionBody {
    email: String,
    target_date: String,
    facility_id: i32,
    status: Option<String>,
}

impl TryFrom<NewSubscriptionBody> for NewSubscription {
    type Error = Error;

    fn try_from(body: NewSubscriptionBody) -> Result<Self, Self::Error> {
        let email = body.email.parse::<EmailAddress>()?;
        let target_date = NaiveDate::parse_from_str(body.target_date.trim(), TARGET_DATE_FORMAT)
            .map_err(|_| {
                Error::ParsingError(format!("Invalid target date \"{}\"", body.target_date))
            })?;

        Ok(Self {
            email,
            target_date,
            facility_id: body.facility_id,
            status: non_blank(body.status),
        })
    }
}

/// List subscriptions
#[tracing::instrument(name = "List subscriptions", skip(store))]
#[get("")]
async fn list(
    store: web::Data<dyn SubscriptionStore>,
    query: web::Query<SubscriptionsQuery>,
) -> RestResult<impl Responder> {
    let filter: SubscriptionFilter = query.into_inner().try_into()?;

    let subscriptions = store.list_subscriptions(&filter).await?;
    if subscriptions.is_empty() {
        tracing::info!("No subscriptions found");
        return Err(RestError::NotFound("No subscriptions found".into()));
    }

    Ok(HttpResponse::Ok().json(subscriptions))
}

/// Create endpoint for new subscriptions
#[tracing::instrument(name = "Create a new subscription", skip(pool))]
#[post("")]
async fn create(
    pool: web::Data<PgPool>,
    body: web::Json<NewSubscriptionBody>,
) -> RestResult<impl Responder> {
    let new_subscription: NewSubscription = body.into_inner().try_into()?;

    // Rolled back on drop if anything below fails
    let mut tx = transaction::begin(pool.get_ref()).await?;
    let id = PgSubscriptionRepo::insert_in(&mut *tx, &new_subscription).await?;
    transaction::commit(tx).await?;

    Ok(HttpResponse::Ok().json(Created { id }))
}

/// Subscriptions API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/subscriptions").service(list).service(create)
}
