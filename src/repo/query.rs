//! Statement construction for every repository operation.
//!
//! Builders here never touch a connection, they only produce SQL text plus bound arguments,
//! so filters can be checked without a database.

use sqlx::{Postgres, QueryBuilder};

use crate::crypto::Token;
use crate::domain::Page;
use crate::model::{FacilityFilter, NewSubscription, SubscriptionFilter, SubscriptionTokenFilter};

/// Maximum rows returned by a single listing call
pub const PER_PAGE_MAX: i64 = 25;
/// Search radius used for proximity filters, inclusive
pub const DEFAULT_RADIUS_METERS: f64 = 80_000.0;

pub type Query = QueryBuilder<'static, Postgres>;

const FACILITY_COLUMNS: &str = "id, name, description, latitude, longitude, facility_id";
const FACILITY_MEDIA_COLUMNS: &str = "id, title, url, is_primary, facility_id";
const SUBSCRIPTION_COLUMNS: &str = "id, email, target_date, facility_id, status";
const SUBSCRIPTION_TOKEN_COLUMNS: &str = "id, subscription_id, token";

/// Joins successive predicates with `WHERE` and then `AND`
#[derive(Default)]
struct Predicates {
    started: bool,
}

impl Predicates {
    fn next<'q>(&mut self, query: &'q mut Query) -> &'q mut Query {
        query.push(if self.started { " AND " } else { " WHERE " });
        self.started = true;
        query
    }
}

fn select(columns: &str, table: &str) -> Query {
    QueryBuilder::new(format!(r#"SELECT {} FROM "{}""#, columns, table))
}

fn count(table: &str) -> Query {
    QueryBuilder::new(format!(r#"SELECT COUNT(*) FROM "{}""#, table))
}

fn push_page(query: &mut Query, page: Page) {
    query
        .push(" LIMIT ")
        .push_bind(PER_PAGE_MAX)
        .push(" OFFSET ")
        .push_bind(page.offset(PER_PAGE_MAX));
}

pub fn count_facilities(filter: &FacilityFilter) -> Query {
    let mut query = count("facility");
    push_facility_predicates(&mut query, filter);
    query
}

pub fn select_facilities(filter: &FacilityFilter) -> Query {
    let mut query = select(FACILITY_COLUMNS, "facility");
    push_facility_predicates(&mut query, filter);
    query.push(" ORDER BY ").push(filter.sort.order_by());
    push_page(&mut query, filter.page);
    query
}

fn push_facility_predicates(query: &mut Query, filter: &FacilityFilter) {
    let mut predicates = Predicates::default();

    if let Some(point) = filter.near {
        predicates
            .next(query)
            .push("ST_DWithin(geom, ST_SetSRID(ST_MakePoint(")
            .push_bind(point.lng())
            .push(", ")
            .push_bind(point.lat())
            .push("), 4326)::geography, ")
            .push_bind(DEFAULT_RADIUS_METERS)
            .push(")");
    }
}

pub fn select_facility(id: i32) -> Query {
    let mut query = select(FACILITY_COLUMNS, "facility");
    query.push(" WHERE id = ").push_bind(id);
    query
}

/// Primary media rows for a set of external facility ids, oldest first
pub fn select_primary_media(facility_ids: Vec<String>) -> Query {
    let mut query = select(FACILITY_MEDIA_COLUMNS, "facility_media");
    query
        .push(" WHERE is_primary = true AND facility_id = ANY(")
        .push_bind(facility_ids)
        .push(") ORDER BY id");
    query
}

pub fn count_subscriptions(filter: &SubscriptionFilter) -> Query {
    let mut query = count("subscription");
    push_subscription_predicates(&mut query, filter);
    query
}

pub fn select_subscriptions(filter: &SubscriptionFilter) -> Query {
    let mut query = select(SUBSCRIPTION_COLUMNS, "subscription");
    push_subscription_predicates(&mut query, filter);
    query.push(" ORDER BY id");
    push_page(&mut query, filter.page);
    query
}

fn push_subscription_predicates(query: &mut Query, filter: &SubscriptionFilter) {
    let mut predicates = Predicates::default();

    if let Some(status) = &filter.status {
        predicates
            .next(query)
            .push("status = ")
            .push_bind(status.clone());
    }
    if let Some(ids) = filter.facility_ids.as_ref().filter(|ids| !ids.is_empty()) {
        predicates
            .next(query)
            .push("facility_id = ANY(")
            .push_bind(ids.as_ref().to_vec())
            .push(")");
    }
}

pub fn insert_subscription(new_subscription: &NewSubscription) -> Query {
    let mut query = QueryBuilder::new(
        r#"INSERT INTO "subscription" (email, target_date, facility_id, status) VALUES ("#,
    );
    let mut values = query.separated(", ");
    values.push_bind(new_subscription.email.as_ref().to_string());
    values.push_bind(new_subscription.target_date);
    values.push_bind(new_subscription.facility_id);
    values.push_bind(new_subscription.status.clone());
    values.push_unseparated(") RETURNING id");
    query
}

pub fn count_subscription_tokens(filter: &SubscriptionTokenFilter) -> Query {
    let mut query = count("subscription_token");
    push_subscription_token_predicates(&mut query, filter);
    query
}

pub fn select_subscription_tokens(filter: &SubscriptionTokenFilter) -> Query {
    let mut query = select(SUBSCRIPTION_TOKEN_COLUMNS, "subscription_token");
    push_subscription_token_predicates(&mut query, filter);
    query.push(" ORDER BY id LIMIT ").push_bind(PER_PAGE_MAX);
    query
}

fn push_subscription_token_predicates(query: &mut Query, filter: &SubscriptionTokenFilter) {
    let mut predicates = Predicates::default();

    if let Some(token) = &filter.token {
        predicates
            .next(query)
            .push("token = ")
            .push_bind(token.clone());
    }
}

pub fn insert_subscription_token(subscription_id: i32, token: &Token) -> Query {
    let mut query =
        QueryBuilder::new(r#"INSERT INTO "subscription_token" (subscription_id, token) VALUES ("#);
    let mut values = query.separated(", ");
    values.push_bind(subscription_id);
    values.push_bind(token.as_ref().to_string());
    values.push_unseparated(") RETURNING id");
    query
}
