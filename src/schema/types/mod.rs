pub mod errors;
pub mod label;
pub mod relation;
pub mod schema;
pub mod table;

pub use errors::SchemaError;
pub use label::{Label, Labels};
pub use relation::{Relation, RelationId};
pub use schema::{Driver, Schema};
pub use table::{Column, Table};
