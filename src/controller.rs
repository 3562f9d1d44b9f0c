mod error;
pub mod facilities;
pub mod subscription_tokens;
pub mod subscriptions;

pub use error::{RestError, RestResult};

use crate::domain::Page;
use crate::error::Result;

/// Treat missing and blank query values the same way
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Parse an optional `page` query value, defaulting to the first page
fn parse_page(value: Option<String>) -> Result<Page> {
    non_blank(value)
        .map(|value| value.parse::<Page>())
        .transpose()
        .map(Option::unwrap_or_default)
}
