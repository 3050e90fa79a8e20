use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    model::{DomainCount, SkipReason, SkippedValue},
    options::EmailShapePolicy,
};

const SEPARATOR: char = '@';

/// Finalised aggregation: domains in first-seen order plus every rejected value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregation {
    pub domains: Vec<DomainCount>,
    pub skipped: Vec<SkippedValue>,
    pub values_seen: usize,
}

impl Aggregation {
    /// Sum of all domain counts.
    pub fn total(&self) -> u64 {
        self.domains.iter().map(|d| d.count).sum()
    }
}

/// Incremental domain counter.
///
/// Values are fed one at a time with [`record`](Self::record); [`finish`](Self::finish)
/// flattens the running counts. Domains keep the order in which they were first seen,
/// so a stable sort afterwards yields the same tie order on every run.
#[derive(Debug, Default)]
pub struct DomainAggregator {
    policy: EmailShapePolicy,
    index: HashMap<String, usize>,
    domains: Vec<DomainCount>,
    skipped: Vec<SkippedValue>,
    seen: usize,
}

impl DomainAggregator {
    pub fn new(policy: EmailShapePolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    /// Count one column value. Returns the skip entry when the value is rejected.
    pub fn record(&mut self, value: &str) -> Option<&SkippedValue> {
        let position = self.seen;
        self.seen += 1;

        match split_domain(value, self.policy) {
            Ok(domain) => {
                self.bump(domain);
                None
            }
            Err(reason) => {
                self.skipped.push(SkippedValue { position, value: value.to_owned(), reason });
                self.skipped.last()
            }
        }
    }

    fn bump(&mut self, domain: &str) {
        if let Some(&slot) = self.index.get(domain) {
            self.domains[slot].count += 1;
        } else {
            self.index.insert(domain.to_owned(), self.domains.len());
            self.domains.push(DomainCount::new(domain, 1));
        }
    }

    pub fn finish(self) -> Aggregation {
        Aggregation { domains: self.domains, skipped: self.skipped, values_seen: self.seen }
    }
}

/// Aggregate a whole column at once.
pub fn aggregate_domains<I, S>(values: I, policy: EmailShapePolicy) -> Aggregation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregator = DomainAggregator::new(policy);
    for value in values {
        aggregator.record(value.as_ref());
    }
    aggregator.finish()
}

/// Extract the domain of `value`, which must contain exactly one `@`.
pub fn split_domain(value: &str, policy: EmailShapePolicy) -> Result<&str, SkipReason> {
    let mut parts = value.split(SEPARATOR);
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return Err(SkipReason::MissingSeparator);
    };
    if parts.next().is_some() {
        return Err(SkipReason::MultipleSeparators);
    }

    if policy == EmailShapePolicy::RequireNonEmptyParts {
        if local.is_empty() {
            return Err(SkipReason::EmptyLocalPart);
        }
        if domain.is_empty() {
            return Err(SkipReason::EmptyDomain);
        }
    }
    Ok(domain)
}
