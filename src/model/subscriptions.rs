use chrono::NaiveDate;

use serde::Serialize;

use crate::domain::{EmailAddress, FacilityIds, Page};

/// Stored subscription record
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: i32,
    pub email: String,
    pub target_date: NaiveDate,
    pub facility_id: i32,
    pub status: Option<String>,
}

/// New Subscription request
#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub email: EmailAddress,
    pub target_date: NaiveDate,
    pub facility_id: i32,
    pub status: Option<String>,
}

/// Filter for listing subscriptions
#[derive(Debug, Clone, Default)]
pub struct SubscriptionFilter {
    pub facility_ids: Option<FacilityIds>,
    pub status: Option<String>,
    pub page: Page,
}
