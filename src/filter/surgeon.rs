//! Removes tables from a schema without leaving dangling references.

use crate::schema::{RelationId, Schema, SchemaError};
use std::collections::HashSet;

/// Remove the table called `name` along with every relation touching it.
///
/// All tables are visited, not only the removed one: a surviving column may
/// still list a relation whose other end is `name`, and a surviving view may
/// still read from it.
pub(crate) fn exclude_table_from_schema(name: &str, schema: &mut Schema) -> Result<(), SchemaError> {
    let severed: HashSet<RelationId> = schema
        .relations
        .iter()
        .filter(|r| r.touches(name))
        .map(|r| r.id)
        .collect();

    let tables = std::mem::take(&mut schema.tables);
    schema.tables = tables
        .into_iter()
        .filter_map(|mut table| {
            for column in &mut table.columns {
                column.child_relations.retain(|id| !severed.contains(id));
                column.parent_relations.retain(|id| !severed.contains(id));
            }
            if table.name == name {
                return None;
            }
            table.referenced_tables.retain(|t| t != name);
            Some(table)
        })
        .collect();

    schema.relations.retain(|r| !r.touches(name));

    Ok(())
}
