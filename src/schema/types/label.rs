use serde::{Deserialize, Serialize};

/// A free-form tag attached to a table or a column, e.g. `pii` or `billing`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    /// Set when the label comes from user configuration rather than the database.
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_virtual: false,
        }
    }
}

pub type Labels = Vec<Label>;
