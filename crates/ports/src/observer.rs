// crates/ports/src/observer.rs
use std::time::Duration;

use mailtally_domain::SkippedValue;

/// Port receiving diagnostics from an import run.
pub trait ImportObserver: Send + Sync {
    fn on_invalid_value(&self, skipped: &SkippedValue);
    fn on_complete(&self, elapsed: Duration, domains: usize);
}
