// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

pub use mailtally_domain::{
    DomainCount, EmailShapePolicy, ExtractionMode, ImportConfig, ImportConfigBuilder, SkipReason, SkippedValue,
    SortOrder,
};
use mailtally_infra::{CsvColumnSource, LogObserver};
pub use mailtally_shared_kernel::{MailtallyError, Result};
use mailtally_usecase::ImportDomains;
pub use mailtally_usecase::DomainReport;

pub mod cli;
pub mod config;
pub mod options;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the import against a CSV file, logging through the `log` facade.
pub fn run_with_config(config: &ImportConfig) -> Result<DomainReport> {
    let source = CsvColumnSource::new();
    let observer = LogObserver::new();
    ImportDomains::new(&source, &observer).run(config)
}

/// Count email domains in `column` of `path`, sorted by `order`, other settings at their defaults.
pub fn count_domains(path: impl Into<PathBuf>, column: usize, order: SortOrder) -> Result<DomainReport> {
    let config = ImportConfig { source: path.into(), column, order, ..ImportConfig::default() };
    run_with_config(&config)
}
