use super::label::{Label, Labels};
use super::relation::RelationId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default, rename = "type")]
    pub data_type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub labels: Labels,
    /// Relations in which this column is on the referencing side.
    #[serde(default)]
    pub child_relations: Vec<RelationId>,
    /// Relations in which this column is the referenced key.
    #[serde(default)]
    pub parent_relations: Vec<RelationId>,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable: false,
            comment: String::new(),
            labels: Labels::new(),
            child_relations: Vec::new(),
            parent_relations: Vec::new(),
        }
    }

    pub fn with_label(mut self, name: &str) -> Self {
        self.labels.push(Label::new(name));
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// A table (or view) node of the schema graph. Two tables are the same
/// entity iff their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(default = "default_table_type", rename = "type")]
    pub table_type: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub labels: Labels,
    /// Tables a view reads from.
    #[serde(default)]
    pub referenced_tables: Vec<String>,
}

fn default_table_type() -> String {
    "BASE TABLE".to_string()
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_type: default_table_type(),
            comment: String::new(),
            columns: Vec::new(),
            labels: Labels::new(),
            referenced_tables: Vec::new(),
        }
    }

    pub fn with_type(mut self, table_type: &str) -> Self {
        self.table_type = table_type.to_string();
        self
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_label(mut self, name: &str) -> Self {
        self.labels.push(Label::new(name));
        self
    }

    /// Record that this view reads from `table`.
    pub fn with_referenced_table(mut self, table: &str) -> Self {
        self.referenced_tables.push(table.to_string());
        self
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }
}
