// crates/infra/src/log_observer.rs
use std::time::Duration;

use mailtally_domain::SkippedValue;
use mailtally_ports::observer::ImportObserver;

/// Observer writing to the `log` facade: `warn` per skipped value, `info` per run.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        Self
    }
}

impl ImportObserver for LogObserver {
    fn on_invalid_value(&self, skipped: &SkippedValue) {
        log::warn!("found invalid email in data row {}: {:?} ({})", skipped.position + 1, skipped.value, skipped.reason);
    }

    fn on_complete(&self, elapsed: Duration, domains: usize) {
        log::info!("process took {elapsed:?} ({domains} domains)");
    }
}
