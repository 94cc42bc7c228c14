pub mod builder;
pub mod traversal;
pub mod types;
pub mod wildcard;

pub use builder::SchemaBuilder;
pub use traversal::Direction;

// Re-export all types at the schema module level
pub use types::{
    Column,
    Driver,
    Label,
    Labels,
    Relation,
    RelationId,
    Schema,
    SchemaError,
    Table,
};
