//! Filter configuration files.
//!
//! A configuration file carries a single `[filter]` table:
//!
//! ```toml
//! [filter]
//! include = ["user_*"]
//! exclude = ["user_secret"]
//! include_labels = ["pii"]
//! distance = 1
//! direction = "both"
//! ```
//!
//! Files ending in `.json` are read as JSON with the same layout, anything
//! else as TOML.

pub mod error;

pub use error::{ConfigError, ConfigResult};

use crate::error::ScopeResult;
use crate::filter::FilterOption;
use crate::schema::{Direction, Schema};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub filter: FilterSection,
}

/// The `[filter]` table as written by users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSection {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub include_labels: Vec<String>,
    /// Signed so that a negative value can be read; it means no expansion.
    #[serde(default)]
    pub distance: i64,
    #[serde(default)]
    pub direction: Direction,
}

impl FilterConfig {
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load filter configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        info!("Loaded filter configuration from {}", path.display());
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> ConfigResult<()> {
        let lists = [
            ("include", &self.filter.include),
            ("exclude", &self.filter.exclude),
            ("include_labels", &self.filter.include_labels),
        ];
        for (key, patterns) in lists {
            if let Some(index) = patterns.iter().position(|p| p.trim().is_empty()) {
                return Err(ConfigError::validation(format!(
                    "{} pattern at index {} is empty",
                    key, index
                )));
            }
        }
        Ok(())
    }

    pub fn filter_option(&self) -> FilterOption {
        let section = &self.filter;
        let distance = usize::try_from(section.distance).unwrap_or_else(|_| {
            warn!(
                "Negative filter distance {} treated as 0",
                section.distance
            );
            0
        });
        FilterOption {
            include: section.include.clone(),
            exclude: section.exclude.clone(),
            include_labels: section.include_labels.clone(),
            distance,
            direction: section.direction,
        }
    }
}

/// Load the filter configuration at `path` and apply it to `schema`.
pub fn filter_schema_with_config<P: AsRef<Path>>(
    schema: &mut Schema,
    path: P,
) -> ScopeResult<()> {
    let config = FilterConfig::load_from_file(path)?;
    schema.filter(&config.filter_option())?;
    Ok(())
}
