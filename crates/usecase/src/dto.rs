use std::time::Duration;

use mailtally_domain::{DomainCount, SkippedValue};
use serde::Serialize;

/// Sorted result of one import run, plus the values that were skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainReport {
    pub domains: Vec<DomainCount>,
    pub skipped: Vec<SkippedValue>,
    /// Data rows read (header excluded).
    pub rows: usize,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl DomainReport {
    /// Number of emails that were counted.
    pub fn total(&self) -> u64 {
        self.domains.iter().map(|d| d.count).sum()
    }
}
