use std::path::PathBuf;

use derive_builder::Builder;
use mailtally_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use crate::{
    analytics::SortOrder,
    options::{EmailShapePolicy, ExtractionMode},
};

/// Input file used when no path is given.
pub const DEFAULT_SOURCE: &str = "./data/customers.csv";
/// Third column: `first_name,last_name,email,...`.
pub const DEFAULT_COLUMN: usize = 2;

/// Everything one import run needs.
///
/// Defaults: `./data/customers.csv`, column 2, descending order, literal email
/// shape, buffered extraction.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), default, build_fn(validate = "Self::validate"))]
pub struct ImportConfig {
    pub source: PathBuf,
    /// Zero-based index of the email column.
    pub column: usize,
    pub order: SortOrder,
    pub policy: EmailShapePolicy,
    pub mode: ExtractionMode,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            column: DEFAULT_COLUMN,
            order: SortOrder::Descending,
            policy: EmailShapePolicy::Literal,
            mode: ExtractionMode::Buffered,
        }
    }
}

impl ImportConfig {
    pub fn builder() -> ImportConfigBuilder {
        ImportConfigBuilder::default()
    }

    /// Validate and build, mapping builder failures into the domain taxonomy.
    pub fn from_builder(builder: &ImportConfigBuilder) -> DomainResult<Self> {
        builder.build().map_err(|e| DomainError::InvalidConfiguration { reason: e.to_string() })
    }
}

impl ImportConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.source.as_ref().is_some_and(|s| s.as_os_str().is_empty()) {
            return Err("source path must not be empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default_impl() {
        let built = ImportConfig::from_builder(&ImportConfig::builder()).expect("defaults are valid");
        assert_eq!(built, ImportConfig::default());
        assert_eq!(built.source, PathBuf::from("./data/customers.csv"));
        assert_eq!(built.column, 2);
        assert_eq!(built.order, SortOrder::Descending);
    }

    #[test]
    fn builder_overrides_fields() {
        let mut builder = ImportConfig::builder();
        builder.source("people.csv").column(4usize).order(SortOrder::Ascending);
        let config = ImportConfig::from_builder(&builder).unwrap();
        assert_eq!(config.source, PathBuf::from("people.csv"));
        assert_eq!(config.column, 4);
        assert_eq!(config.order, SortOrder::Ascending);
    }

    #[test]
    fn rejects_empty_source() {
        let mut builder = ImportConfig::builder();
        builder.source("");
        let err = ImportConfig::from_builder(&builder).expect_err("empty path rejected");
        assert!(err.to_string().contains("source path must not be empty"));
    }
}
