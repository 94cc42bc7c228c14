//! Bounded closure over the relation graph.

use crate::schema::types::{Relation, RelationId, Schema, SchemaError, Table};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Which relation edges a closure walk follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Referenced and referencing tables alike.
    #[default]
    Both,
    /// Only tables this one references (towards parents).
    Parents,
    /// Only tables that reference this one (towards children).
    Children,
}

impl Direction {
    fn follows_parents(self) -> bool {
        matches!(self, Direction::Both | Direction::Parents)
    }

    fn follows_children(self) -> bool {
        matches!(self, Direction::Both | Direction::Children)
    }
}

impl Schema {
    /// Collect `table` and every table reachable from it within `distance`
    /// relation hops, together with the relations crossed on the way.
    ///
    /// The start table is always first in the returned list and both lists
    /// are free of duplicates. A distance of 0 returns the start table alone.
    pub fn collect_tables_and_relations(
        &self,
        table: &str,
        distance: usize,
        direction: Direction,
    ) -> Result<(Vec<&Table>, Vec<&Relation>), SchemaError> {
        let tables_by_name: HashMap<&str, &Table> =
            self.tables.iter().map(|t| (t.name.as_str(), t)).collect();
        let relations_by_id: HashMap<RelationId, &Relation> =
            self.relations.iter().map(|r| (r.id, r)).collect();

        let start = *tables_by_name
            .get(table)
            .ok_or_else(|| SchemaError::TableNotFound(table.to_string()))?;

        let mut visited: HashSet<&str> = HashSet::from([start.name.as_str()]);
        let mut crossed: HashSet<RelationId> = HashSet::new();
        let mut tables = vec![start];
        let mut relations = Vec::new();
        let mut frontier = vec![start];

        for _ in 0..distance {
            let mut next = Vec::new();
            for current in frontier {
                for column in &current.columns {
                    let edges = column
                        .child_relations
                        .iter()
                        .filter(|_| direction.follows_parents())
                        .map(|id| (id, true))
                        .chain(
                            column
                                .parent_relations
                                .iter()
                                .filter(|_| direction.follows_children())
                                .map(|id| (id, false)),
                        );
                    for (id, towards_parent) in edges {
                        let relation = *relations_by_id
                            .get(id)
                            .ok_or(SchemaError::RelationNotFound(*id))?;
                        if crossed.insert(relation.id) {
                            relations.push(relation);
                        }
                        let neighbour_name = if towards_parent {
                            relation.parent_table.as_str()
                        } else {
                            relation.table.as_str()
                        };
                        let neighbour = *tables_by_name.get(neighbour_name).ok_or_else(|| {
                            SchemaError::TableNotFound(neighbour_name.to_string())
                        })?;
                        if visited.insert(neighbour.name.as_str()) {
                            tables.push(neighbour);
                            next.push(neighbour);
                        }
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        Ok((tables, relations))
    }
}
