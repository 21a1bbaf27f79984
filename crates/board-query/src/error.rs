use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("{kind} cannot be filtered by '{dimension}' (expected one of: {expected})")]
    UnknownDimension {
        kind: &'static str,
        dimension: String,
        expected: String,
    },
    #[error("{kind} cannot be sorted by '{field}' (expected one of: {expected})")]
    UnknownSortField {
        kind: &'static str,
        field: String,
        expected: String,
    },
    #[error("invalid filter '{0}', expected DIMENSION=VALUE")]
    MalformedFilter(String),
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("page numbers start at 1")]
    ZeroPage,
}

pub type Result<T> = std::result::Result<T, QueryError>;
