use crate::schema::Direction;
use serde::{Deserialize, Serialize};

/// What to keep when scoping a schema.
///
/// `include` and `exclude` hold table-name wildcards, `include_labels` holds
/// label-name wildcards. Every included table pulls in the tables within
/// `distance` relation hops, following `direction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub include_labels: Vec<String>,
    #[serde(default)]
    pub distance: usize,
    #[serde(default)]
    pub direction: Direction,
}

impl FilterOption {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include(mut self, patterns: &[&str]) -> Self {
        self.include = to_owned(patterns);
        self
    }

    pub fn with_exclude(mut self, patterns: &[&str]) -> Self {
        self.exclude = to_owned(patterns);
        self
    }

    pub fn with_include_labels(mut self, patterns: &[&str]) -> Self {
        self.include_labels = to_owned(patterns);
        self
    }

    pub fn with_distance(mut self, distance: usize) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// True when neither table-name nor label patterns select anything, so
    /// every table not explicitly excluded is kept.
    pub fn has_no_positive_filter(&self) -> bool {
        self.include.is_empty() && self.include_labels.is_empty()
    }
}

fn to_owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}
