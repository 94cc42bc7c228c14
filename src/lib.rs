//! schemascope - scope a relational schema graph down to a subset of tables
//!
//! A [`FilterOption`] selects tables by name wildcard and by label, excludes
//! others by name wildcard, and pulls in the foreign-key neighbours of every
//! selected table up to a bounded number of hops. [`Schema::filter`] then
//! removes the rest of the graph without leaving dangling relations.
//!
//! # Example
//!
//! ```
//! use schemascope::{Column, FilterOption, SchemaBuilder, Table};
//!
//! let mut schema = SchemaBuilder::new("shop")
//!     .table(Table::new("users").with_column(Column::new("id", "int")))
//!     .table(Table::new("orders").with_column(Column::new("user_id", "int")))
//!     .table(Table::new("settings"))
//!     .relation("orders", &["user_id"], "users", &["id"])
//!     .build()?;
//!
//! schema.filter(&FilterOption::new().with_include(&["orders"]).with_distance(1))?;
//! assert_eq!(schema.table_names(), vec!["users", "orders"]);
//! # Ok::<(), schemascope::ScopeError>(())
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod schema;

// Re-export commonly used types
pub use config::{filter_schema_with_config, ConfigError, FilterConfig};
pub use error::{ScopeError, ScopeResult};
pub use filter::{FilterError, FilterOption};
pub use schema::{
    Column, Direction, Driver, Label, Labels, Relation, RelationId, Schema, SchemaBuilder,
    SchemaError, Table,
};
