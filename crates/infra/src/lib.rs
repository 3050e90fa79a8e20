// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod csv_source;
pub mod log_observer;
pub mod quote_check;

pub use csv_source::CsvColumnSource;
pub use log_observer::LogObserver;
