use crate::config::ConfigError;
use crate::filter::FilterError;
use crate::schema::SchemaError;
use std::fmt;

/// Unified error type for the crate.
///
/// Each variant wraps the error of one subsystem so callers that drive the
/// whole load-config-then-filter flow can handle a single type.
#[derive(Debug)]
pub enum ScopeError {
    /// Errors related to the schema graph itself
    Schema(SchemaError),

    /// Errors raised while classifying or removing tables
    Filter(FilterError),

    /// Errors related to configuration
    Config(ConfigError),
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema(err) => write!(f, "Schema error: {}", err),
            Self::Filter(err) => write!(f, "Filter error: {}", err),
            Self::Config(err) => write!(f, "Configuration error: {}", err),
        }
    }
}

impl std::error::Error for ScopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Schema(err) => Some(err),
            Self::Filter(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

/// Conversion from SchemaError to ScopeError
impl From<SchemaError> for ScopeError {
    fn from(error: SchemaError) -> Self {
        ScopeError::Schema(error)
    }
}

/// Conversion from FilterError to ScopeError
impl From<FilterError> for ScopeError {
    fn from(error: FilterError) -> Self {
        ScopeError::Filter(error)
    }
}

/// Conversion from ConfigError to ScopeError
impl From<ConfigError> for ScopeError {
    fn from(error: ConfigError) -> Self {
        ScopeError::Config(error)
    }
}

/// Result type alias for operations that can produce a ScopeError
pub type ScopeResult<T> = Result<T, ScopeError>;
