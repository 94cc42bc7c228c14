//! Assembles a consistent [`Schema`] graph.
//!
//! Relations are declared by table and column name; `build` assigns their
//! [`RelationId`]s and wires the back-references on both the referencing and
//! the referenced columns.

use crate::schema::types::{Column, Driver, Relation, RelationId, Schema, SchemaError, Table};
use std::collections::HashSet;

struct PendingRelation {
    table: String,
    columns: Vec<String>,
    parent_table: String,
    parent_columns: Vec<String>,
    is_virtual: bool,
}

pub struct SchemaBuilder {
    name: String,
    driver: Option<Driver>,
    tables: Vec<Table>,
    relations: Vec<PendingRelation>,
}

impl SchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            driver: None,
            tables: Vec::new(),
            relations: Vec::new(),
        }
    }

    pub fn driver(mut self, name: &str, current_schema: Option<&str>) -> Self {
        self.driver = Some(Driver {
            name: name.to_string(),
            current_schema: current_schema.map(str::to_string),
        });
        self
    }

    pub fn table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Declare `table(columns) REFERENCES parent_table(parent_columns)`.
    pub fn relation(
        mut self,
        table: &str,
        columns: &[&str],
        parent_table: &str,
        parent_columns: &[&str],
    ) -> Self {
        self.relations.push(PendingRelation {
            table: table.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            parent_table: parent_table.to_string(),
            parent_columns: parent_columns.iter().map(|c| c.to_string()).collect(),
            is_virtual: false,
        });
        self
    }

    /// Like [`relation`](Self::relation), for an edge the database does not enforce.
    pub fn virtual_relation(
        self,
        table: &str,
        columns: &[&str],
        parent_table: &str,
        parent_columns: &[&str],
    ) -> Self {
        let mut builder = self.relation(table, columns, parent_table, parent_columns);
        if let Some(last) = builder.relations.last_mut() {
            last.is_virtual = true;
        }
        builder
    }

    pub fn build(self) -> Result<Schema, SchemaError> {
        let mut seen = HashSet::new();
        for table in &self.tables {
            if !seen.insert(table.name.as_str()) {
                return Err(SchemaError::InvalidData(format!(
                    "duplicate table '{}'",
                    table.name
                )));
            }
        }

        let mut schema = Schema {
            name: self.name,
            driver: self.driver,
            tables: self.tables,
            relations: Vec::with_capacity(self.relations.len()),
        };

        for (index, pending) in self.relations.into_iter().enumerate() {
            let id = RelationId(index);
            wire_columns(&mut schema, &pending.table, &pending.columns, |c| {
                c.child_relations.push(id)
            })?;
            wire_columns(
                &mut schema,
                &pending.parent_table,
                &pending.parent_columns,
                |c| c.parent_relations.push(id),
            )?;
            let def = format!(
                "FOREIGN KEY ({}) REFERENCES {} ({})",
                pending.columns.join(", "),
                pending.parent_table,
                pending.parent_columns.join(", ")
            );
            schema.relations.push(Relation {
                id,
                table: pending.table,
                columns: pending.columns,
                parent_table: pending.parent_table,
                parent_columns: pending.parent_columns,
                def,
                is_virtual: pending.is_virtual,
            });
        }

        Ok(schema)
    }
}

fn wire_columns<F>(
    schema: &mut Schema,
    table_name: &str,
    columns: &[String],
    mut wire: F,
) -> Result<(), SchemaError>
where
    F: FnMut(&mut Column),
{
    let table = schema
        .tables
        .iter_mut()
        .find(|t| t.name == table_name)
        .ok_or_else(|| SchemaError::TableNotFound(table_name.to_string()))?;
    for column_name in columns {
        let column = table.column_mut(column_name).ok_or_else(|| {
            SchemaError::InvalidData(format!(
                "column '{}.{}' does not exist",
                table_name, column_name
            ))
        })?;
        wire(column);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_wires_back_references() {
        let schema = SchemaBuilder::new("shop")
            .table(Table::new("users").with_column(Column::new("id", "int")))
            .table(
                Table::new("orders")
                    .with_column(Column::new("id", "int"))
                    .with_column(Column::new("user_id", "int")),
            )
            .relation("orders", &["user_id"], "users", &["id"])
            .build()
            .unwrap();

        assert_eq!(schema.relations.len(), 1);
        let relation = &schema.relations[0];
        assert_eq!(relation.id, RelationId(0));
        assert_eq!(relation.def, "FOREIGN KEY (user_id) REFERENCES users (id)");

        let orders = schema.table("orders").unwrap();
        assert_eq!(
            orders.column("user_id").unwrap().child_relations,
            vec![RelationId(0)]
        );
        let users = schema.table("users").unwrap();
        assert_eq!(
            users.column("id").unwrap().parent_relations,
            vec![RelationId(0)]
        );
    }

    #[test]
    fn test_build_rejects_unknown_endpoints() {
        let missing_table = SchemaBuilder::new("shop")
            .table(Table::new("orders").with_column(Column::new("user_id", "int")))
            .relation("orders", &["user_id"], "users", &["id"])
            .build();
        assert_eq!(
            missing_table,
            Err(SchemaError::TableNotFound("users".to_string()))
        );

        let missing_column = SchemaBuilder::new("shop")
            .table(Table::new("users").with_column(Column::new("id", "int")))
            .table(Table::new("orders"))
            .relation("orders", &["user_id"], "users", &["id"])
            .build();
        assert!(matches!(missing_column, Err(SchemaError::InvalidData(_))));
    }

    #[test]
    fn test_build_rejects_duplicate_tables() {
        let result = SchemaBuilder::new("shop")
            .table(Table::new("users"))
            .table(Table::new("users"))
            .build();
        assert!(matches!(result, Err(SchemaError::InvalidData(_))));
    }

    #[test]
    fn test_virtual_relation_flag() {
        let schema = SchemaBuilder::new("shop")
            .table(Table::new("a").with_column(Column::new("b_id", "int")))
            .table(Table::new("b").with_column(Column::new("id", "int")))
            .virtual_relation("a", &["b_id"], "b", &["id"])
            .build()
            .unwrap();
        assert!(schema.relations[0].is_virtual);
    }
}
