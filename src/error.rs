pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Parsing errors
    #[error("{0}")]
    ParsingError(String),
    // Lookup errors
    #[error("{0} not found")]
    NotFound(String),
    // Database errors
    #[error("Failed to {operation}: {sql}")]
    Query {
        operation: &'static str,
        sql: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("Failed to {action} transaction")]
    Transaction {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Attach the failing operation and its SQL text to a database result
pub trait QueryContext<T> {
    fn query_context(self, operation: &'static str, sql: &str) -> Result<T>;
}

impl<T> QueryContext<T> for sqlx::Result<T> {
    fn query_context(self, operation: &'static str, sql: &str) -> Result<T> {
        self.map_err(|source| Error::Query {
            operation,
            sql: sql.to_string(),
            source,
        })
    }
}
