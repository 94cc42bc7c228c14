//! Decides which tables a [`FilterOption`] keeps.

use super::error::{FilterError, FilterResult};
use super::option::FilterOption;
use crate::schema::wildcard::PatternSet;
use crate::schema::{Labels, Schema, Table};
use log::debug;
use std::collections::HashMap;

impl Schema {
    /// Split the schema's tables into those a filter keeps and those it drops,
    /// without touching the schema.
    ///
    /// Each table first gets a tentative decision from the name patterns,
    /// the label patterns and the "no positive filter" default, in that
    /// order. Every tentatively kept table then pulls in its neighbours within
    /// `opt.distance` hops, and whatever is left over is excluded. Both lists
    /// are sorted by table name.
    pub fn separate_tables_that_are_included_or_not(
        &self,
        opt: &FilterOption,
    ) -> FilterResult<(Vec<&Table>, Vec<&Table>)> {
        let include = self.expand_patterns(&opt.include)?;
        let exclude = self.expand_patterns(&opt.exclude)?;
        let labels = PatternSet::new(&opt.include_labels).map_err(FilterError::Pattern)?;
        let no_positive_filter = opt.has_no_positive_filter();

        let mut tentative = Vec::new();
        for table in &self.tables {
            let li = match_length(&include, &table.name);
            let le = match_length(&exclude, &table.name);
            let included = match li {
                // A more specific exclude pattern beats the include pattern.
                Some(li) => !matches!(le, Some(le) if li < le),
                None if match_table_or_column_labels(&labels, table) => le.is_none(),
                None if no_positive_filter => le.is_none(),
                None => false,
            };
            debug!(
                "Table '{}': include={:?} exclude={:?} -> {}",
                table.name,
                li,
                le,
                if included { "included" } else { "excluded" }
            );
            if included {
                tentative.push(table);
            }
        }

        let mut included: HashMap<&str, &Table> = HashMap::new();
        for table in tentative {
            included.insert(table.name.as_str(), table);
            let (reachable, _) = self
                .collect_tables_and_relations(&table.name, opt.distance, opt.direction)
                .map_err(|source| FilterError::Closure {
                    table: table.name.clone(),
                    source,
                })?;
            for related in reachable {
                included.entry(related.name.as_str()).or_insert(related);
            }
        }

        let excluded: HashMap<&str, &Table> = self
            .tables
            .iter()
            .filter(|t| !included.contains_key(t.name.as_str()))
            .map(|t| (t.name.as_str(), t))
            .collect();

        let mut includes: Vec<&Table> = included.into_values().collect();
        let mut excludes: Vec<&Table> = excluded.into_values().collect();
        includes.sort_by(|a, b| a.name.cmp(&b.name));
        excludes.sort_by(|a, b| a.name.cmp(&b.name));

        if self.tables.len() != includes.len() + excludes.len() {
            return Err(FilterError::PartitionInvariant {
                expected: self.tables.len(),
                actual: includes.len() + excludes.len(),
            });
        }

        Ok((includes, excludes))
    }

    /// Raw patterns followed by their normalized spellings.
    fn expand_patterns(&self, patterns: &[String]) -> FilterResult<PatternSet> {
        let mut expanded = patterns.to_vec();
        expanded.extend(self.normalize_table_names(patterns));
        PatternSet::new(&expanded).map_err(FilterError::Pattern)
    }
}

/// Specificity of the first pattern matching `name`.
///
/// Only the first match in list order is scored, even if a later pattern
/// would be more specific.
pub(crate) fn match_length(patterns: &PatternSet, name: &str) -> Option<usize> {
    patterns.first_match(name).map(|p| p.specificity())
}

pub(crate) fn match_labels(patterns: &PatternSet, labels: &Labels) -> bool {
    labels.iter().any(|label| patterns.is_match(&label.name))
}

pub(crate) fn match_table_or_column_labels(patterns: &PatternSet, table: &Table) -> bool {
    match_labels(patterns, &table.labels)
        || table
            .columns
            .iter()
            .any(|column| match_labels(patterns, &column.labels))
}
