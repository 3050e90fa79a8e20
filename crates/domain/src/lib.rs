#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod model;
pub mod options;

pub use analytics::{Aggregation, DomainAggregator, SortOrder, aggregate_domains, sort_domains, sorted};
pub use config::{DEFAULT_COLUMN, DEFAULT_SOURCE, ImportConfig, ImportConfigBuilder};
pub use model::{DomainCount, SkipReason, SkippedValue};
pub use options::{EmailShapePolicy, ExtractionMode};
