//! Scoping a schema down to the tables selected by a [`FilterOption`].
//!
//! [`Schema::separate_tables_that_are_included_or_not`] only classifies;
//! [`Schema::filter`] classifies and then removes every excluded table in
//! place.

pub mod classifier;
pub mod error;
pub mod option;
mod surgeon;

pub use error::{FilterError, FilterResult};
pub use option::FilterOption;

use crate::schema::Schema;
use log::{debug, info};
use surgeon::exclude_table_from_schema;

impl Schema {
    /// Remove every table the filter does not keep, together with the
    /// relations and back-references that touch it.
    ///
    /// Stops at the first table that cannot be removed; tables removed before
    /// that point stay removed.
    pub fn filter(&mut self, opt: &FilterOption) -> FilterResult<()> {
        let excludes: Vec<String> = {
            let (includes, excludes) = self.separate_tables_that_are_included_or_not(opt)?;
            info!(
                "Filtering schema '{}': keeping {} of {} tables",
                self.name,
                includes.len(),
                includes.len() + excludes.len()
            );
            excludes.iter().map(|t| t.name.clone()).collect()
        };

        for name in excludes {
            exclude_table_from_schema(&name, self).map_err(|source| FilterError::Surgery {
                table: name.clone(),
                source,
            })?;
            debug!("Excluded table '{}'", name);
        }

        Ok(())
    }
}
