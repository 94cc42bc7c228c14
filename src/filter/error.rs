use crate::schema::SchemaError;

/// Errors raised while scoping a schema down to a filter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// A filter pattern could not be compiled
    #[error("invalid filter pattern: {0}")]
    Pattern(#[source] SchemaError),

    /// The bounded closure around an included table could not be computed
    #[error("failed to collect tables related to '{table}': {source}")]
    Closure { table: String, source: SchemaError },

    /// Included and excluded tables do not add up to the schema's tables
    #[error("failed to separate tables. expected: {expected}, actual: {actual}")]
    PartitionInvariant { expected: usize, actual: usize },

    /// Removing an excluded table from the schema failed
    #[error("failed to filter table '{table}': {source}")]
    Surgery { table: String, source: SchemaError },
}

pub type FilterResult<T> = Result<T, FilterError>;
