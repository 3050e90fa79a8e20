use std::time::Instant;

use mailtally_domain::{
    Aggregation, DomainAggregator, ExtractionMode, ImportConfig, aggregate_domains, sort_domains,
};
use mailtally_ports::{
    observer::ImportObserver,
    source::{ColumnRequest, ColumnSource},
};
use mailtally_shared_kernel::Result;

use crate::dto::DomainReport;

/// Extract → aggregate → sort, single pass, single attempt.
pub struct ImportDomains<'a> {
    source: &'a dyn ColumnSource,
    observer: &'a dyn ImportObserver,
}

impl<'a> ImportDomains<'a> {
    pub fn new(source: &'a dyn ColumnSource, observer: &'a dyn ImportObserver) -> Self {
        Self { source, observer }
    }

    /// Run the pipeline. Extraction errors are returned as-is and no partial
    /// result is produced; invalid emails only end up in `DomainReport::skipped`.
    pub fn run(&self, config: &ImportConfig) -> Result<DomainReport> {
        let start = Instant::now();
        let request = ColumnRequest::new(config.source.clone(), config.column);

        let aggregation = match config.mode {
            ExtractionMode::Buffered => self.buffered(&request, config)?,
            ExtractionMode::Streaming => self.streaming(&request, config)?,
        };

        let Aggregation { mut domains, skipped, values_seen } = aggregation;
        sort_domains(&mut domains, config.order);

        let elapsed = start.elapsed();
        self.observer.on_complete(elapsed, domains.len());

        Ok(DomainReport { domains, skipped, rows: values_seen, elapsed })
    }

    fn buffered(&self, request: &ColumnRequest, config: &ImportConfig) -> Result<Aggregation> {
        let values = self.source.extract_column(request)?;
        let aggregation = aggregate_domains(&values, config.policy);
        for skipped in &aggregation.skipped {
            self.observer.on_invalid_value(skipped);
        }
        Ok(aggregation)
    }

    fn streaming(&self, request: &ColumnRequest, config: &ImportConfig) -> Result<Aggregation> {
        let mut aggregator = DomainAggregator::new(config.policy);
        self.source.for_each_value(request, &mut |value| {
            if let Some(skipped) = aggregator.record(value) {
                self.observer.on_invalid_value(skipped);
            }
        })?;
        Ok(aggregator.finish())
    }
}
