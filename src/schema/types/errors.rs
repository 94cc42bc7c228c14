use super::relation::RelationId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Table not found: {0}")]
    TableNotFound(String),
    #[error("Relation not found: {0}")]
    RelationNotFound(RelationId),
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
