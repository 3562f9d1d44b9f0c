mod facilities;
mod subscription_tokens;
mod subscriptions;

pub use facilities::*;
pub use subscription_tokens::*;
pub use subscriptions::*;

use serde::Serialize;

/// Pagination details reported alongside a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub page: u32,
    pub total: i64,
}

/// A page of records plus pagination metadata
#[derive(Debug, Serialize)]
pub struct Listing<T> {
    pub data: Vec<T>,
    pub metadata: Metadata,
}

impl<T> Listing<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Response body for insert endpoints, only the generated key is echoed back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Created {
    pub id: i32,
}
