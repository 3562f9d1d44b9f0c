use serde::Serialize;

use crate::crypto::Token;

/// Stored subscription token record
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionToken {
    pub id: i32,
    pub subscription_id: i32,
    pub token: String,
}

/// New subscription token request
#[derive(Debug, Clone, Copy)]
pub struct NewSubscriptionToken {
    pub subscription_id: i32,
}

/// A freshly inserted token, echoed back so the caller can hand it out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedSubscriptionToken {
    pub id: i32,
    pub token: Token,
}

/// Filter for listing subscription tokens
#[derive(Debug, Clone, Default)]
pub struct SubscriptionTokenFilter {
    /// Exact token value to match
    pub token: Option<String>,
}
