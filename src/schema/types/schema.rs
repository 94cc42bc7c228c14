use super::errors::SchemaError;
use super::relation::{Relation, RelationId};
use super::table::Table;
use serde::{Deserialize, Serialize};

/// Database flavour the schema was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    /// Schema that unqualified table names resolve against (`public` on most
    /// PostgreSQL installs).
    #[serde(default)]
    pub current_schema: Option<String>,
}

/// The whole relational graph: the ordered table list plus the flat list of
/// relations that columns refer to by [`RelationId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,
    #[serde(default)]
    pub driver: Option<Driver>,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_driver(mut self, driver: Driver) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Result<&Table, SchemaError> {
        self.tables
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| SchemaError::TableNotFound(name.to_string()))
    }

    pub fn relation(&self, id: RelationId) -> Result<&Relation, SchemaError> {
        self.relations
            .iter()
            .find(|r| r.id == id)
            .ok_or(SchemaError::RelationNotFound(id))
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    /// Qualify an unqualified table name with the driver's current schema.
    ///
    /// Only PostgreSQL-like drivers namespace tables by schema; for everything
    /// else, and for names that already contain a `.`, the input is returned
    /// unchanged.
    pub fn normalize_table_name(&self, name: &str) -> String {
        match &self.driver {
            Some(Driver {
                name: driver,
                current_schema: Some(current),
            }) if is_schema_qualified_driver(driver)
                && !current.is_empty()
                && !name.contains('.') =>
            {
                format!("{}.{}", current, name)
            }
            _ => name.to_string(),
        }
    }

    /// [`normalize_table_name`](Self::normalize_table_name) over a list, order preserved.
    pub fn normalize_table_names(&self, names: &[String]) -> Vec<String> {
        names
            .iter()
            .map(|n| self.normalize_table_name(n))
            .collect()
    }
}

fn is_schema_qualified_driver(driver: &str) -> bool {
    matches!(driver, "postgres" | "redshift")
}
