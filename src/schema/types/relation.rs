use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a [`Relation`] inside its owning [`Schema`](super::Schema).
///
/// Columns hold these instead of the relation itself; the schema's relation
/// list is the only owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationId(pub usize);

impl fmt::Display for RelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Foreign-key style edge from a referencing (child) table to a referenced
/// (parent) table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub id: RelationId,
    pub table: String,
    pub columns: Vec<String>,
    pub parent_table: String,
    pub parent_columns: Vec<String>,
    #[serde(default)]
    pub def: String,
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
}

impl Relation {
    /// True when either endpoint is the table called `name`.
    pub fn touches(&self, name: &str) -> bool {
        self.table == name || self.parent_table == name
    }
}
