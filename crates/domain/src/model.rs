use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of valid email values observed for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: u64,
}

impl DomainCount {
    pub fn new(domain: impl Into<String>, count: u64) -> Self {
        Self { domain: domain.into(), count }
    }
}

/// Why a value was left out of the aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No `@` at all.
    MissingSeparator,
    /// More than one `@`.
    MultipleSeparators,
    /// Nothing before the `@`.
    EmptyLocalPart,
    /// Nothing after the `@`.
    EmptyDomain,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingSeparator => "missing '@'",
            Self::MultipleSeparators => "more than one '@'",
            Self::EmptyLocalPart => "empty local part",
            Self::EmptyDomain => "empty domain",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column value rejected by the aggregator.
///
/// `position` is the zero-based index among data rows (the header is not counted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedValue {
    pub position: usize,
    pub value: String,
    pub reason: SkipReason,
}
